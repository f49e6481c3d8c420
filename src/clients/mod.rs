//! Cloneable handles for talking to actors.

mod punch_client;

pub use punch_client::*;
