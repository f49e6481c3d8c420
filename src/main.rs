mod domain;
mod clients;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod store_framework;
mod punch_actor;

use std::sync::Arc;
use tracing::{error, info, Instrument};
use crate::app_system::{setup_tracing, PunchSystem, SystemConfig};
use crate::domain::Employee;
use crate::store_framework::ReactiveStore;

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!("Starting application with punch system");

    let roster_store = Arc::new(ReactiveStore::new(vec![
        Employee::new("alice", "Alice Anders", "wonderland", "HQ", vec!["eng".to_string()]),
        Employee::new("bob", "Bob Barker", "p1", "Remote", vec!["ops".to_string(), "eng".to_string()]),
    ]));
    let status_store = Arc::new(ReactiveStore::new(Vec::new()));

    let system = PunchSystem::new(&config, roster_store, status_store);

    let punches = [
        ("Alice", "in", "wonderland"),
        ("bob", "in", "p1"),
        ("ALICE", "break", "wonderland"),
        ("bob", "out", "wrong"),
        ("carol", "in", "whatever"),
    ];

    for (display_name, status, password) in punches {
        let span = tracing::info_span!("punch", display_name, status);
        let result = async {
            info!("Posting punch");
            system.punch_client.post_punch(display_name, status, password).await
        }
        .instrument(span)
        .await;

        match result {
            Ok(statuses) => info!(records = statuses.len(), "Punch recorded"),
            Err(e) => error!(error = %e, "Punch rejected"),
        }
    }

    for record in system.status_store.get() {
        info!(
            display_name = %record.display_name,
            status = %record.status,
            date = %record.date,
            time = %record.time,
            "Current status"
        );
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
