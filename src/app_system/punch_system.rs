use std::sync::Arc;
use tracing::{debug, error, info};
use crate::clients::PunchClient;
use crate::domain::{Employee, StatusRecord};
use crate::punch_actor::{uuid_id, LocalClock, PunchActor, PunchService};
use crate::store_framework::ReactiveStore;
use super::SystemConfig;

/// Wires the roster and status stores to a running punch actor.
///
/// Responsible for starting the actor and handling shutdown.
pub struct PunchSystem {
    pub punch_client: PunchClient,
    pub roster_store: Arc<ReactiveStore<Vec<Employee>>>,
    pub status_store: Arc<ReactiveStore<Vec<StatusRecord>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl PunchSystem {
    /// Starts the punch actor; must be called from within a tokio runtime.
    pub fn new(
        config: &SystemConfig,
        roster_store: Arc<ReactiveStore<Vec<Employee>>>,
        status_store: Arc<ReactiveStore<Vec<StatusRecord>>>,
    ) -> Self {
        info!(buffer_size = config.buffer_size, "Starting punch system");

        status_store.subscribe(|statuses: &Vec<StatusRecord>| {
            debug!(records = statuses.len(), "Status list published");
        });

        let service = PunchService::new(
            &roster_store,
            Arc::clone(&status_store),
            LocalClock,
            uuid_id,
        );
        let (actor, punch_client) = PunchActor::new(config.buffer_size, service);
        let handle = tokio::spawn(actor.run());

        Self {
            punch_client,
            roster_store,
            status_store,
            handle,
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        if let Err(e) = self.punch_client.shutdown().await {
            // Actor already gone; the join below reports why.
            debug!(error = %e, "Shutdown signal not delivered");
        }
        drop(self.punch_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
