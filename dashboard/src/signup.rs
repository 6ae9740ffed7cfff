//! Account signup flow.
//!
//! Validates the form locally, creates the account, and sends the user on
//! to the login page. Signup does not start a session.

use dashboard_client::User;

use crate::app::AppContext;
use crate::auth;

pub const SIGNUP_SUCCEEDED: &str = "Account created. Please log in.";
pub const SIGNUP_FAILED: &str = "Signup failed";
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Navigation target after a flow completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub full_name: String,
    pub company_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Client-side form problems, checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error(transparent)]
    Invalid(#[from] SignupValidationError),
    /// The backend refused; carries the message shown to the user.
    #[error("{0}")]
    Rejected(String),
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), SignupValidationError> {
        let fields = [
            &self.full_name,
            &self.company_name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(SignupValidationError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(SignupValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(SignupValidationError::PasswordTooShort);
        }
        Ok(())
    }
}

/// Signup page state.
#[derive(Debug, Default)]
pub struct SignupView {
    pub form: SignupForm,
    loading: bool,
}

impl SignupView {
    pub fn new(form: SignupForm) -> Self {
        Self {
            form,
            loading: false,
        }
    }

    /// True while the signup request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Validate and submit. Every outcome is also reported as a toast.
    pub async fn submit(&mut self, ctx: &AppContext) -> Result<Route, SignupError> {
        if let Err(e) = self.form.validate() {
            ctx.notifier().error(e.to_string());
            return Err(e.into());
        }

        self.loading = true;
        let result = self.create_account(ctx).await;
        self.loading = false;
        result
    }

    async fn create_account(&self, ctx: &AppContext) -> Result<Route, SignupError> {
        let form = &self.form;
        let resp = ctx
            .client()
            .signup(&form.full_name, &form.email, &form.company_name, &form.password)
            .await;

        match resp {
            Ok(resp) => {
                remember_user(ctx, resp.user);
                tracing::info!(email = %form.email, "Account created");
                ctx.notifier().success(SIGNUP_SUCCEEDED);
                Ok(Route::Login)
            }
            Err(e) => {
                tracing::warn!("Signup failed: {e}");
                let message = e.user_message(SIGNUP_FAILED);
                ctx.notifier().error(message.clone());
                Err(SignupError::Rejected(message))
            }
        }
    }
}

fn remember_user(ctx: &AppContext, user: Option<User>) {
    if let Some(user) = &user {
        auth::set_user(ctx.db(), user);
    }
    ctx.store().set_user(user);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        SignupForm {
            full_name: "Ada Lovelace".into(),
            company_name: "Engines Ltd".into(),
            email: "ada@example.com".into(),
            password: "hunter22".into(),
            confirm_password: "hunter22".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_missing_field_reported_first() {
        let form = SignupForm {
            company_name: String::new(),
            confirm_password: "different".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(SignupValidationError::MissingFields));
    }

    #[test]
    fn test_mismatch_before_length() {
        let form = SignupForm {
            password: "abc".into(),
            confirm_password: "abd".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(SignupValidationError::PasswordMismatch));
    }

    #[test]
    fn test_short_password() {
        let form = SignupForm {
            password: "abcde".into(),
            confirm_password: "abcde".into(),
            ..filled()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err, SignupValidationError::PasswordTooShort);
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }

    #[test]
    fn test_route_path() {
        assert_eq!(Route::Login.path(), "/login");
    }
}
