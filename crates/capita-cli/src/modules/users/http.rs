use capita_core::{
    ApiError, CustomHttpResponse, LoginRequest, NewUser, Profile, UserProfile,
};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Thin wrapper over the backend's `/user` endpoints. Every call yields the
/// decoded envelope or an [`ApiError`] carrying the message to show.
#[derive(Clone)]
pub struct UserService {
    client: reqwest::Client,
    server: String,
}

impl UserService {
    pub fn new(client: reqwest::Client, server: &str) -> Self {
        Self {
            client,
            server: server.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn server(&self) -> &str {
        &self.server
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.server)
    }

    pub(crate) async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<CustomHttpResponse<Profile>, ApiError> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = self.client.post(self.url("/user/login")).json(&payload);
        send(request, "login").await
    }

    pub(crate) async fn profile(
        &self,
        access_token: &str,
    ) -> Result<CustomHttpResponse<UserProfile>, ApiError> {
        let request = self
            .client
            .get(self.url("/user/profile"))
            .bearer_auth(access_token);
        send(request, "profile").await
    }

    pub(crate) async fn register(
        &self,
        user: &NewUser,
    ) -> Result<CustomHttpResponse<UserProfile>, ApiError> {
        let request = self.client.post(self.url("/user/register")).json(user);
        send(request, "register").await
    }

    pub(crate) async fn reset_password(
        &self,
        email: &str,
    ) -> Result<CustomHttpResponse<serde_json::Value>, ApiError> {
        let path = format!("/user/resetpassword/{}", urlencoding::encode(email));
        send(self.client.get(self.url(&path)), "reset_password").await
    }

    pub(crate) async fn verify_password(
        &self,
        key: &str,
    ) -> Result<CustomHttpResponse<UserProfile>, ApiError> {
        let path = format!("/user/verify/password/{}", urlencoding::encode(key));
        send(self.client.get(self.url(&path)), "verify_password").await
    }

    pub(crate) async fn renew_password(
        &self,
        key: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<CustomHttpResponse<serde_json::Value>, ApiError> {
        let path = format!(
            "/user/resetpassword/{}/{}/{}",
            urlencoding::encode(key),
            urlencoding::encode(password),
            urlencoding::encode(confirm_password)
        );
        send(self.client.post(self.url(&path)), "renew_password").await
    }

    pub(crate) async fn verify_account(
        &self,
        key: &str,
    ) -> Result<CustomHttpResponse<serde_json::Value>, ApiError> {
        let path = format!("/user/verify/account/{}", urlencoding::encode(key));
        send(self.client.get(self.url(&path)), "verify_account").await
    }
}

async fn send<T: DeserializeOwned>(
    request: RequestBuilder,
    operation: &'static str,
) -> Result<CustomHttpResponse<T>, ApiError> {
    let response = request.send().await.map_err(|err| {
        warn!(operation, "request failed before a response arrived: {err}");
        ApiError::client(err.to_string())
    })?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| ApiError::client(err.to_string()))?;

    if !status.is_success() {
        let err = ApiError::from_response(status.as_u16(), &body);
        debug!(operation, status = status.as_u16(), "request rejected: {err}");
        return Err(err);
    }

    let envelope: CustomHttpResponse<T> = serde_json::from_str(&body).map_err(|err| {
        warn!(operation, status = status.as_u16(), "undecodable response body: {err}");
        ApiError::Status {
            status: status.as_u16(),
        }
    })?;
    debug!(
        operation,
        status_code = envelope.status_code,
        status = %envelope.status,
        message = %envelope.message,
        has_data = envelope.data.is_some(),
        "user api response"
    );
    Ok(envelope)
}
