//! Punch handling: authentication, status upsert, and the actor that serialises it.

pub mod clock;
pub mod error;
pub mod messages;
pub mod service;

pub use clock::*;
pub use error::*;
pub use messages::*;
pub use service::*;
