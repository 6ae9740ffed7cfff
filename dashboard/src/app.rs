use std::path::PathBuf;

use dashboard_client::DashboardClient;
use dashboard_db::Database;

use crate::config::AppConfig;
use crate::notification::Notifier;
use crate::store::DashboardStore;
use crate::widget::WidgetSettingsManager;

/// Application context handed to every view and flow.
///
/// Created once at startup. Cloning shares the same store, database,
/// cookie jar and toast queue.
#[derive(Clone)]
pub struct AppContext {
    db: Database,
    config: AppConfig,
    data_dir: PathBuf,
    store: DashboardStore,
    notifier: Notifier,
    client: DashboardClient,
}

impl AppContext {
    /// Build the context and restore any saved session cookie into the client.
    pub fn new(
        db: Database,
        config: AppConfig,
        data_dir: PathBuf,
        notifier: Notifier,
    ) -> Result<Self, anyhow::Error> {
        let client = DashboardClient::new(&config.api_base()?)?;
        match db.load_session_cookie() {
            Ok(Some(cookie)) => {
                client.restore_session_cookies(&cookie);
                tracing::debug!("Restored saved session cookie");
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Could not read saved session cookie: {e}"),
        }

        let ctx = Self {
            db,
            config,
            data_dir,
            store: DashboardStore::new(),
            notifier,
            client,
        };
        ctx.store.set_user(crate::auth::get_user(&ctx.db));
        Ok(ctx)
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn store(&self) -> &DashboardStore {
        &self.store
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn client(&self) -> &DashboardClient {
        &self.client
    }

    /// Open the widget settings view against the live backend.
    pub fn widget_settings(&self) -> Result<WidgetSettingsManager<DashboardClient>, anyhow::Error> {
        Ok(WidgetSettingsManager::new(
            self.client.clone(),
            self.store.clone(),
            self.notifier.clone(),
            self.config.widget_script_base()?,
        ))
    }
}
