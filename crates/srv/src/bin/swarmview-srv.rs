//! The binary swarmview-srv.

use swarmview_srv::*;

#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct Args {
    /// By default swarmview-srv runs in "testing" configuration with a
    /// fast refresh interval and an ephemeral localhost port, which is
    /// enough for developer testing and continuous integration.
    ///
    /// Set this flag to run with the production defaults instead:
    /// port 8000 on all interfaces and the standard 10s refresh interval.
    #[arg(long)]
    pub production: bool,

    /// Override the listen address(es).
    #[arg(long)]
    pub listen: Vec<std::net::SocketAddr>,
}

fn main() {
    let args = <Args as clap::Parser>::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut config = if args.production {
        Config::production()
    } else {
        Config::testing()
    };
    if !args.listen.is_empty() {
        config.listen_address_list = args.listen.clone();
    }

    tracing::debug!(?args, ?config);

    let (send, recv) = std::sync::mpsc::channel();

    ctrlc::set_handler(move || {
        send.send(()).unwrap();
    })
    .unwrap();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap();

    // the memory-backed dht stands in until a real swarm client is
    // attached at the DhtClient seam
    let srv = runtime
        .block_on(SwarmviewSrv::new(
            config,
            swarmview_cache::MemDhtClient::create(),
        ))
        .unwrap();

    srv.print_addrs();

    let _ = recv.recv();

    println!("Terminating...");
    drop(srv);
    drop(runtime);
    println!("Done.");
    std::process::exit(0);
}
