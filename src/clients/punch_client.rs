use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};
use crate::domain::StatusRecord;
use crate::punch_actor::{PunchError, PunchRequest};

/// Client for interacting with the punch actor.
#[derive(Clone)]
pub struct PunchClient {
    sender: mpsc::Sender<PunchRequest>,
}

impl PunchClient {
    pub fn new(sender: mpsc::Sender<PunchRequest>) -> Self {
        Self { sender }
    }

    /// Authenticates `display_name` and records `status` for them.
    ///
    /// Resolves to the full status list after the punch was applied.
    #[instrument(skip(self, password))]
    pub async fn post_punch(
        &self,
        display_name: &str,
        status: &str,
        password: &str,
    ) -> Result<Vec<StatusRecord>, PunchError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PunchRequest::PostPunch {
                display_name: display_name.to_string(),
                status: status.to_string(),
                password: password.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| PunchError::ActorCommunicationError("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| PunchError::ActorCommunicationError("Actor dropped".to_string()))?
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), PunchError> {
        debug!("Sending request");
        self.sender
            .send(PunchRequest::Shutdown)
            .await
            .map_err(|_| PunchError::ActorCommunicationError("Actor closed".to_string()))
    }
}
