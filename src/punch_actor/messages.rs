use std::fmt;
use tokio::sync::oneshot;
use crate::domain::StatusRecord;
use super::PunchError;

pub type Response<T> = oneshot::Sender<Result<T, PunchError>>;

/// Messages accepted by [`PunchActor`](super::PunchActor).
pub enum PunchRequest {
    PostPunch {
        display_name: String,
        status: String,
        password: String,
        respond_to: Response<Vec<StatusRecord>>,
    },
    Shutdown,
}

impl fmt::Debug for PunchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PunchRequest::PostPunch { display_name, status, .. } => f
                .debug_struct("PostPunch")
                .field("display_name", display_name)
                .field("status", status)
                .finish_non_exhaustive(),
            PunchRequest::Shutdown => f.write_str("Shutdown"),
        }
    }
}
