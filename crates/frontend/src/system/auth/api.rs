use crate::shared::api::{self, ApiError};
use contracts::auth::{LoginRequest, LoginResponse, SessionUser};
use gloo_net::http::Request;

/// Authenticate with username and password. This is the one call made
/// before an [`crate::shared::api::ApiClient`] exists, so it builds its own
/// request (still carrying the tunnel-bypass header).
pub async fn login(username: String, password: String) -> Result<SessionUser, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&format!("{}/api/auth/login", api::api_base()))
        .header(api::BYPASS_HEADER.0, api::BYPASS_HEADER.1)
        .json(&request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let code = response.status();
        let message = if code == 401 {
            Some("Username atau password salah".to_string())
        } else {
            None
        };
        return Err(ApiError::Status { code, message });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let login: LoginResponse = api::decode_payload(&body)?;
    Ok(SessionUser::from_login(login))
}
