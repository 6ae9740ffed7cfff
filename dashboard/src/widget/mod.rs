//! Widget settings: load, edit, save, token rotation and install script.

pub mod backend;
pub mod draft;
pub mod input;
pub mod manager;
pub mod snippet;

pub use backend::WidgetBackend;
pub use draft::{SettingsDraft, WidgetField};
pub use manager::{SettingsTab, ViewPhase, WidgetSettingsManager};
pub use snippet::compose_install_snippet;

#[cfg(test)]
mod tests;
