//! swarmview http server types.

use crate::*;
use swarmview_api::*;
use swarmview_cache::{MemSnapshotStore, Poller};

/// An actual swarmview_srv server instance.
///
/// Owns the snapshot store, the single poller writing into it, and one
/// serving task per listen address. Dropping the instance aborts the
/// poller and shuts the listeners down; there is no state to flush.
pub struct SwarmviewSrv {
    store: DynSnapshotStore,
    _poller: Poller,
    kills: Vec<tokio::sync::oneshot::Sender<()>>,
    tasks: Vec<tokio::task::JoinHandle<std::io::Result<()>>>,
    addrs: Vec<std::net::SocketAddr>,
}

impl Drop for SwarmviewSrv {
    fn drop(&mut self) {
        tracing::debug!("begin server shutdown...");
        for kill in self.kills.drain(..) {
            let _ = kill.send(());
        }
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl SwarmviewSrv {
    /// Construct a new SwarmviewSrv instance serving the given DHT's
    /// swarm state.
    pub async fn new(
        config: Config,
        dht: DynDhtClient,
    ) -> std::io::Result<Self> {
        let store = MemSnapshotStore::create();

        // the one poller per server lifetime; everything below only
        // reads the store
        let poller = Poller::new(config.cache.clone(), dht, store.clone());

        let app = router(AppState {
            store: store.clone(),
        });

        let mut addrs = Vec::with_capacity(config.listen_address_list.len());
        let mut kills = Vec::with_capacity(config.listen_address_list.len());
        let mut tasks = Vec::with_capacity(config.listen_address_list.len());

        for addr in config.listen_address_list {
            tracing::info!("Binding to: {}", addr);

            let listener = tokio::net::TcpListener::bind(addr).await?;
            addrs.push(listener.local_addr()?);

            let (kill, kill_recv) = tokio::sync::oneshot::channel::<()>();
            kills.push(kill);

            let app = app.clone();
            tasks.push(tokio::task::spawn(
                std::future::IntoFuture::into_future(
                    axum::serve(listener, app).with_graceful_shutdown(
                        async move {
                            let _ = kill_recv.await;
                        },
                    ),
                ),
            ));
        }

        tracing::info!(?addrs, "Listening");

        Ok(Self {
            store,
            _poller: poller,
            kills,
            tasks,
            addrs,
        })
    }

    /// Get the bound listening addresses of this server.
    pub fn listen_addrs(&self) -> &[std::net::SocketAddr] {
        self.addrs.as_slice()
    }

    /// Get a read-only handle to the snapshot store this server serves.
    pub fn store(&self) -> DynSnapshotStore {
        self.store.clone()
    }

    /// Print the addresses the server started on.
    pub fn print_addrs(&self) {
        println!("#swarmview_srv#running#");
        for addr in self.addrs.iter() {
            // print these in case someone wants to parse for them
            println!("#swarmview_srv#listening#{addr:?}#");
        }
    }
}
