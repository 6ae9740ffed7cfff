//! Support dashboard application: configuration, shared store, toasts,
//! widget settings, signup and session handling.

pub mod app;
pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod notification;
pub mod signup;
pub mod store;
pub mod widget;

pub use app::AppContext;
pub use bootstrap::init_foundation;
