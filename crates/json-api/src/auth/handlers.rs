//! Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{auth::errors::into_status_error, extensions::*, state::State};

/// Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    /// Signed bearer token
    pub token: String,

    /// Authenticated username
    pub username: String,

    /// Role carried by the token
    pub role: String,
}

/// Login Handler
#[endpoint(
    tags("auth"),
    summary = "Log in as admin",
    responses(
        (status_code = StatusCode::OK, description = "Login succeeded"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid credentials"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn login(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let issued = state
        .app
        .auth
        .login(&request.username, &request.password)
        .await
        .map_err(into_status_error)?;

    Ok(Json(LoginResponse {
        token: issued.token,
        username: issued.username,
        role: issued.role.as_str().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use paperbloom_app::domain::users::{
        AuthServiceError, MockAuthService,
        models::{IssuedLogin, Role},
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::auth_service;

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        auth_service(auth, Router::with_path("auth/login").post(login))
    }

    #[tokio::test]
    async fn test_login_success_returns_token() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .withf(|username, password| username == "admin" && password == "secret")
            .return_once(|_, _| {
                Ok(IssuedLogin {
                    token: "signed-token".to_string(),
                    username: "admin".to_string(),
                    role: Role::Admin,
                })
            });

        auth.expect_verify_bearer().never();

        let mut res = TestClient::post("http://example.com/auth/login")
            .json(&json!({ "username": "admin", "password": "secret" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: LoginResponse = res.take_json().await?;

        assert_eq!(body.token, "signed-token");
        assert_eq!(body.username, "admin");
        assert_eq!(body.role, "Admin");

        Ok(())
    }

    #[tokio::test]
    async fn test_login_bad_credentials_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .return_once(|_, _| Err(AuthServiceError::InvalidCredentials));

        auth.expect_verify_bearer().never();

        let res = TestClient::post("http://example.com/auth/login")
            .json(&json!({ "username": "admin", "password": "wrong" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_login_malformed_body_is_rejected() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_login().never();
        auth.expect_verify_bearer().never();

        let res = TestClient::post("http://example.com/auth/login")
            .json(&json!({ "user": "admin" }))
            .send(&make_service(auth))
            .await;

        assert_ne!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
