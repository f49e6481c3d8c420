use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use crate::clients::PunchClient;
use crate::domain::{Employee, NewStatus, StatusRecord};
use crate::store_framework::{ReactiveStore, Snapshot};
use super::{format_date, format_time, Clock, PunchError, PunchRequest, Response};

/// Produces a fresh, unique status record id.
pub type IdGenerator = Box<dyn Fn() -> String + Send + Sync>;

pub fn uuid_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// PUNCH SERVICE
// =============================================================================

/// Authenticates punches against the roster and upserts the status list.
///
/// Both stores are read through cached snapshots kept current by store
/// subscriptions; the service is the only writer of the status store.
///
/// `post_punch` takes `&mut self`: callers on a multi-threaded runtime must
/// hold the service exclusively, as [`PunchActor`] does.
pub struct PunchService {
    roster: Snapshot<Vec<Employee>>,
    statuses: Snapshot<Vec<StatusRecord>>,
    status_store: Arc<ReactiveStore<Vec<StatusRecord>>>,
    clock: Box<dyn Clock>,
    next_id_fn: IdGenerator,
}

impl PunchService {
    pub fn new(
        roster_store: &ReactiveStore<Vec<Employee>>,
        status_store: Arc<ReactiveStore<Vec<StatusRecord>>>,
        clock: impl Clock + 'static,
        next_id_fn: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            roster: roster_store.snapshot(),
            statuses: status_store.snapshot(),
            status_store,
            clock: Box::new(clock),
            next_id_fn: Box::new(next_id_fn),
        }
    }

    /// Records a punch and returns the full, newest-first status list.
    ///
    /// # Errors
    /// - [`PunchError::EmployeeNotFound`] if no roster entry matches `display_name`
    ///   (case-insensitive).
    /// - [`PunchError::InvalidCredential`] if `password` is not an exact match.
    ///
    /// Nothing is written when either error is returned.
    #[instrument(skip(self, password))]
    pub fn post_punch(
        &mut self,
        display_name: &str,
        status: &str,
        password: &str,
    ) -> Result<Vec<StatusRecord>, PunchError> {
        let roster = self.roster.latest();
        let employee = match roster.iter().find(|e| e.matches(display_name)) {
            Some(employee) => employee,
            None => {
                warn!("Employee not found");
                return Err(PunchError::EmployeeNotFound(display_name.to_string()));
            }
        };
        if employee.password != password {
            warn!("Invalid password");
            return Err(PunchError::InvalidCredential(employee.display_name.clone()));
        }

        let now = self.clock.now();
        let stamp = NewStatus {
            status: status.to_string(),
            date: format_date(&now),
            time: format_time(&now),
        };

        let mut statuses = self.statuses.latest();
        let mut updated = false;
        for record in statuses.iter_mut().filter(|r| r.matches(&employee.display_name)) {
            record.apply(stamp.clone());
            info!(record_id = %record.id, time = %record.time, "Status updated");
            updated = true;
        }
        if !updated {
            let record = StatusRecord::from_punch((self.next_id_fn)(), employee, stamp);
            info!(record_id = %record.id, time = %record.time, "Status created");
            statuses.insert(0, record);
        }

        self.status_store.set(statuses.clone());
        Ok(statuses)
    }
}

// =============================================================================
// PUNCH ACTOR
// =============================================================================

/// Owns a [`PunchService`] and runs one request at a time, which keeps the
/// read-scan-mutate-publish sequence exclusive on a multi-threaded runtime.
pub struct PunchActor {
    receiver: mpsc::Receiver<PunchRequest>,
    service: PunchService,
}

impl PunchActor {
    pub fn new(buffer_size: usize, service: PunchService) -> (Self, PunchClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, service };
        (actor, PunchClient::new(sender))
    }

    #[instrument(name = "punch_service", skip(self))]
    pub async fn run(mut self) {
        info!("PunchService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                PunchRequest::PostPunch { display_name, status, password, respond_to } => {
                    self.handle_post_punch(display_name, status, password, respond_to);
                }
                PunchRequest::Shutdown => {
                    info!("PunchService shutting down");
                    break;
                }
            }
        }
        info!("PunchService stopped");
    }

    fn handle_post_punch(
        &mut self,
        display_name: String,
        status: String,
        password: String,
        respond_to: Response<Vec<StatusRecord>>,
    ) {
        debug!("Processing post_punch request");
        let result = self.service.post_punch(&display_name, &status, &password);
        if respond_to.send(result).is_err() {
            debug!("Caller dropped before punch response");
        }
    }
}
