//! Client-side auth state.
//!
//! The session token is an http-only cookie owned by the HTTP layer; the
//! application never reads it. What the application does keep is the
//! signed-in user, and the cookie header so a later run can resume.

use dashboard_client::{ClientError, User};
use dashboard_db::Database;

use crate::app::AppContext;

pub fn get_user(db: &Database) -> Option<User> {
    match db.load_user() {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Failed to read stored user: {e}");
            None
        }
    }
}

pub fn set_user(db: &Database, user: &User) {
    if let Err(e) = db.save_user(user) {
        tracing::warn!("Failed to store user: {e}");
    }
}

pub fn remove_user(db: &Database) {
    if let Err(e) = db.delete_user() {
        tracing::warn!("Failed to remove stored user: {e}");
    }
}

/// A stored user is taken as proof of a live cookie session.
pub fn is_authenticated(db: &Database) -> bool {
    get_user(db).is_some()
}

/// Log in and keep the returned user and the session cookie.
pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<Option<User>, ClientError> {
    let resp = ctx.client().login(email, password).await?;

    if let Some(cookie) = ctx.client().session_cookies() {
        if let Err(e) = ctx.db().save_session_cookie(&cookie) {
            tracing::warn!("Failed to persist session cookie: {e}");
        }
    }
    if let Some(user) = &resp.user {
        set_user(ctx.db(), user);
        tracing::info!(user_id = %user.id, "Logged in");
    }
    ctx.store().set_user(resp.user.clone());
    Ok(resp.user)
}

/// End the session. Local state is cleared even if the server call fails.
pub async fn logout(ctx: &AppContext) -> Result<(), ClientError> {
    let result = ctx.client().logout().await;
    if let Err(e) = &result {
        tracing::warn!("Logout request failed: {e}");
    }

    ctx.client().clear_session_cookies();
    if let Err(e) = ctx.db().clear_session() {
        tracing::warn!("Failed to clear stored session: {e}");
    }
    ctx.store().set_user(None);
    result
}
