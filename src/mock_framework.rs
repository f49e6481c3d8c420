//! # Mock Framework
//!
//! Utilities for testing code that talks to the punch actor without running it.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then
//! [`expect_post_punch`] to inspect the request and answer it.

use tokio::sync::mpsc;
use crate::clients::PunchClient;
use crate::punch_actor::{PunchRequest, Response};
use crate::domain::StatusRecord;

/// A `PostPunch` request as seen by the mock.
pub struct ExpectedPunch {
    pub display_name: String,
    pub status: String,
    pub password: String,
    pub respond_to: Response<Vec<StatusRecord>>,
}

/// Creates a client whose requests land on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (PunchClient, mpsc::Receiver<PunchRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (PunchClient::new(sender), receiver)
}

/// Returns the next request if it is a `PostPunch`.
pub async fn expect_post_punch(receiver: &mut mpsc::Receiver<PunchRequest>) -> Option<ExpectedPunch> {
    match receiver.recv().await {
        Some(PunchRequest::PostPunch { display_name, status, password, respond_to }) => {
            Some(ExpectedPunch { display_name, status, password, respond_to })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::punch_actor::PunchError;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let punch_task = tokio::spawn(async move { client.post_punch("bob", "in", "p1").await });

        let request = expect_post_punch(&mut receiver).await.expect("Expected PostPunch request");
        assert_eq!(request.display_name, "bob");
        assert_eq!(request.status, "in");
        assert_eq!(request.password, "p1");
        request
            .respond_to
            .send(Err(PunchError::InvalidCredential("bob".to_string())))
            .unwrap();

        let result = punch_task.await.unwrap();
        assert_eq!(result, Err(PunchError::InvalidCredential("bob".to_string())));
    }

    #[tokio::test]
    async fn test_dropped_responder_surfaces_as_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let punch_task = tokio::spawn(async move { client.post_punch("bob", "in", "p1").await });

        let request = expect_post_punch(&mut receiver).await.expect("Expected PostPunch request");
        drop(request);

        let result = punch_task.await.unwrap();
        assert_eq!(
            result,
            Err(PunchError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }

    #[tokio::test]
    async fn test_shutdown_is_not_a_punch() {
        let (client, mut receiver) = create_mock_client(10);
        client.shutdown().await.unwrap();
        assert!(expect_post_punch(&mut receiver).await.is_none());
    }
}
