//! Toast notifications.
//!
//! Operations push short, non-blocking messages into a queue; a worker
//! renders them for the user.

pub mod queue;
pub mod types;

pub use queue::Notifier;
pub use types::{Toast, ToastLevel};
