//! Identity operations against the user service.

use async_trait::async_trait;
use barberbook_core::errors::BookingResult;
use barberbook_core::models::user::{
    AuthResponse, LoginRequest, ProfileUpdateRequest, RefreshTokenRequest, RegistrationRequest,
    User,
};
use tracing::{debug, info};

use crate::{ApiClient, endpoints, http};

#[async_trait]
pub trait UserApi {
    /// Exchange credentials for a token pair and the user profile.
    async fn login(&self, request: LoginRequest) -> BookingResult<AuthResponse>;

    /// Create a new account.
    async fn register(&self, request: RegistrationRequest) -> BookingResult<User>;

    /// Update the caller's profile. Bearer-token protected.
    async fn update_profile(
        &self,
        token: &str,
        request: ProfileUpdateRequest,
    ) -> BookingResult<User>;

    /// Trade a refresh token for a fresh access token.
    async fn refresh(&self, request: RefreshTokenRequest) -> BookingResult<AuthResponse>;
}

#[async_trait]
impl UserApi for ApiClient {
    async fn login(&self, request: LoginRequest) -> BookingResult<AuthResponse> {
        let url = endpoints::login(&self.config().user_service_url);
        debug!("POST {url}");
        let response: AuthResponse = http::send(self.http().post(url).json(&request)).await?;
        info!(user_id = response.user.id, "Login successful");
        Ok(response)
    }

    async fn register(&self, request: RegistrationRequest) -> BookingResult<User> {
        let url = endpoints::register(&self.config().user_service_url);
        debug!("POST {url}");
        http::send(self.http().post(url).json(&request)).await
    }

    async fn update_profile(
        &self,
        token: &str,
        request: ProfileUpdateRequest,
    ) -> BookingResult<User> {
        let url = endpoints::profile(&self.config().user_service_url);
        debug!("PUT {url}");
        http::send(self.http().put(url).bearer_auth(token).json(&request)).await
    }

    async fn refresh(&self, request: RefreshTokenRequest) -> BookingResult<AuthResponse> {
        let url = endpoints::refresh(&self.config().user_service_url);
        debug!("POST {url}");
        http::send(self.http().post(url).json(&request)).await
    }
}
