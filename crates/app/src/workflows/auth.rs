//! Login, registration, and profile editing.

use std::sync::Arc;

use barberbook_client::UserApi;
use barberbook_core::errors::BookingResult;
use barberbook_core::models::user::{
    LoginRequest, ProfileUpdateRequest, RegistrationRequest, User, UserRole,
};
use barberbook_core::session::Session;
use barberbook_core::validation::{
    validate_login, validate_profile_update, validate_registration,
};
use barberbook_store::{SessionStore, save_session, save_user};
use tracing::info;

/// Registration form as the user filled it in, before validation.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

pub struct AuthWorkflow<A> {
    api: A,
    store: Arc<dyn SessionStore>,
}

impl<A: UserApi + Sync> AuthWorkflow<A> {
    pub fn new(api: A, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Log in and persist the session under the fixed store keys.
    pub async fn login(&self, email: &str, password: &str) -> BookingResult<Session> {
        validate_login(email, password)?;

        let response = self
            .api
            .login(LoginRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
            })
            .await?;

        let session = Session {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            user: response.user,
        };
        save_session(self.store.as_ref(), &session)?;
        info!(user_id = session.user.id, "Session stored");

        Ok(session)
    }

    /// Create an account. New signups are customers; staff and owner
    /// accounts are provisioned elsewhere.
    pub async fn register(&self, form: RegistrationForm) -> BookingResult<User> {
        let request = RegistrationRequest {
            email: form.email.trim().to_string(),
            password: form.password.clone(),
            role: UserRole::Customer,
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            phone: form.phone.trim().to_string(),
        };
        validate_registration(&request, &form.confirm_password)?;

        let user = self.api.register(request).await?;
        info!(user_id = user.id, "Account created");
        Ok(user)
    }

    /// Update the profile and fold the server's answer back into the
    /// stored user, so the next page load shows the new details.
    pub async fn update_profile(
        &self,
        session: &Session,
        first_name: &str,
        last_name: &str,
        phone: &str,
    ) -> BookingResult<User> {
        validate_profile_update(first_name, last_name, phone)?;

        let updated = self
            .api
            .update_profile(
                &session.access_token,
                ProfileUpdateRequest {
                    first_name: Some(first_name.trim().to_string()),
                    last_name: Some(last_name.trim().to_string()),
                    phone: Some(phone.trim().to_string()),
                    address: None,
                },
            )
            .await?;

        save_user(self.store.as_ref(), &updated)?;
        info!(user_id = updated.id, "Profile updated");
        Ok(updated)
    }
}
