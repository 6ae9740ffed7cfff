//! Dashboard-wide committed state.
//!
//! One store is created at startup and handed to every view that needs it.
//! Widget settings are written only after a successful load or save; any
//! view may read them.

use std::sync::{Arc, RwLock};

use dashboard_client::{User, WidgetSettings};

#[derive(Debug, Default)]
struct StoreInner {
    widget_settings: Option<WidgetSettings>,
    user: Option<User>,
}

/// Cloneable handle to the shared store.
///
/// Uses a blocking `std::sync::RwLock`: accessors are called from sync code
/// (CLI output, draft dirty checks) and never hold the guard across an await.
/// A panic while writing leaves plain data behind, so poisoning is ignored.
#[derive(Debug, Clone, Default)]
pub struct DashboardStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last widget configuration fetched or saved, `None` before the first success.
    pub fn widget_settings(&self) -> Option<WidgetSettings> {
        self.read(|s| s.widget_settings.clone())
    }

    /// Replace the committed widget settings wholesale.
    pub fn set_widget_settings(&self, settings: WidgetSettings) {
        self.write(|s| s.widget_settings = Some(settings));
    }

    pub fn user(&self) -> Option<User> {
        self.read(|s| s.user.clone())
    }

    pub fn set_user(&self, user: Option<User>) {
        self.write(|s| s.user = user);
    }

    fn read<R>(&self, f: impl FnOnce(&StoreInner) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&*guard),
            Err(poisoned) => f(&*poisoned.into_inner()),
        }
    }

    fn write(&self, f: impl FnOnce(&mut StoreInner)) {
        match self.inner.write() {
            Ok(mut guard) => f(&mut *guard),
            Err(poisoned) => f(&mut *poisoned.into_inner()),
        }
    }
}
