//! Signed-in user and session cookie storage.
//!
//! A single row (`id = 1`) holds both. The user is stored as JSON so this
//! crate stays independent of the REST client's types.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Database, DbError, OptionalExt};

impl Database {
    pub fn save_user<T: Serialize>(&self, user: &T) -> Result<(), DbError> {
        let json = serde_json::to_string(user).map_err(|e| DbError::InvalidData(e.to_string()))?;
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO auth_session (id, user_json, updated_at) VALUES (1, ?1, CURRENT_TIMESTAMP)
                 ON CONFLICT(id) DO UPDATE SET user_json = ?1, updated_at = CURRENT_TIMESTAMP",
                [&json],
            )?;
            Ok(())
        })
    }

    /// Load the stored user. A row that no longer decodes is treated as absent.
    pub fn load_user<T: DeserializeOwned>(&self) -> Result<Option<T>, DbError> {
        let json = self.with_conn(|conn| {
            let json = conn
                .query_row("SELECT user_json FROM auth_session WHERE id = 1", [], |row| {
                    row.get::<_, Option<String>>(0)
                })
                .optional()?;
            Ok(json.flatten())
        })?;

        let Some(json) = json else {
            return Ok(None);
        };
        match serde_json::from_str(&json) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!("Discarding unreadable stored user: {e}");
                Ok(None)
            }
        }
    }

    pub fn delete_user(&self) -> Result<(), DbError> {
        self.with_conn(|conn| {
            conn.execute("UPDATE auth_session SET user_json = NULL WHERE id = 1", [])?;
            Ok(())
        })
    }

    pub fn save_session_cookie(&self, cookie: &str) -> Result<(), DbError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO auth_session (id, cookie, updated_at) VALUES (1, ?1, CURRENT_TIMESTAMP)
                 ON CONFLICT(id) DO UPDATE SET cookie = ?1, updated_at = CURRENT_TIMESTAMP",
                [cookie],
            )?;
            Ok(())
        })
    }

    pub fn load_session_cookie(&self) -> Result<Option<String>, DbError> {
        self.with_conn(|conn| {
            let cookie = conn
                .query_row("SELECT cookie FROM auth_session WHERE id = 1", [], |row| {
                    row.get::<_, Option<String>>(0)
                })
                .optional()?;
            Ok(cookie.flatten().filter(|c| !c.is_empty()))
        })
    }

    /// Forget both the user and the cookie.
    pub fn clear_session(&self) -> Result<(), DbError> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM auth_session", [])?;
            Ok(())
        })
    }
}
