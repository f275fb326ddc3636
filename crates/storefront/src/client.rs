//! HTTP client for the Paperbloom JSON API.

use std::path::Path;

use paperbloom_core::{
    products::{Product, ProductId},
    session::{AdminSession, Role},
};
use reqwest::{Client, RequestBuilder, Response, StatusCode, multipart};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request was rejected: {0}")]
    Validation(String),

    #[error("not authenticated or token expired")]
    Unauthorized,

    #[error("resource not found")]
    NotFound,

    #[error("network error")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response status {0}")]
    Unexpected(StatusCode),
}

/// Combo option submitted with a product draft.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboOptionDraft {
    pub name: String,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: String,
}

/// Quantity tier submitted with a product draft.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityOptionDraft {
    pub stems: u32,
    pub price_modifier: Decimal,
}

/// Payload for creating or replacing a product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub base_price: Decimal,
    pub category: String,
    pub eco_friendly: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sustainability_info: Option<String>,
    pub in_stock: bool,
    pub combo_options: Vec<ComboOptionDraft>,
    pub quantity_options: Vec<QuantityOptionDraft>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    username: String,
    role: Role,
}

/// Result of one file in an image upload batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub id: Uuid,
    pub image_url: String,
    pub position: i32,
}

/// Client for the storefront's backend. Login fills the held
/// [`AdminSession`]; admin calls fail with [`ApiError::Unauthorized`]
/// before one, and a 401/403 from the backend tears the session down
/// again so the client never keeps presenting a dead token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
    session: AdminSession,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
            session: AdminSession::new(),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// The admin session backing this client.
    #[must_use]
    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    /// Logs in and stores the session used by subsequent admin calls.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<&AdminSession, ApiError> {
        let response = self
            .http
            .post(self.url("auth/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;

        let response = check_status(response).await?;
        let body: LoginResponse = response.json().await?;

        self.session.apply_login(body.token, body.username, body.role);

        Ok(&self.session)
    }

    /// Tears the session down.
    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// Fetches the full catalog. The backend serves it as a bare array.
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.http.get(self.url("products")).send().await?;

        Ok(check_status(response).await?.json().await?)
    }

    /// Fetches a single product.
    pub async fn product(&self, product: ProductId) -> Result<Product, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("products/{product}")))
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }

    /// Creates a product. Admin only.
    pub async fn create_product(&mut self, draft: &ProductDraft) -> Result<Product, ApiError> {
        let request = self.http.post(self.url("products")).json(draft);
        let response = self.authorized(request)?.send().await?;
        let response = self.checked(response).await?;

        Ok(response.json().await?)
    }

    /// Replaces a product's fields and option collections. The backend
    /// answers 204 with no body. Admin only.
    pub async fn update_product(
        &mut self,
        product: ProductId,
        draft: &ProductDraft,
    ) -> Result<(), ApiError> {
        let request = self
            .http
            .put(self.url(&format!("products/{product}")))
            .json(draft);
        let response = self.authorized(request)?.send().await?;

        self.checked(response).await?;

        Ok(())
    }

    /// Deletes a product. Admin only.
    pub async fn delete_product(&mut self, product: ProductId) -> Result<(), ApiError> {
        let request = self.http.delete(self.url(&format!("products/{product}")));
        let response = self.authorized(request)?.send().await?;

        self.checked(response).await?;

        Ok(())
    }

    /// Uploads image files one at a time, aborting the batch on the first
    /// failure. Already-uploaded files stay uploaded. Admin only.
    pub async fn upload_images(
        &mut self,
        product: ProductId,
        paths: &[&Path],
    ) -> Result<Vec<UploadedImage>, ApiError> {
        let mut uploaded = Vec::with_capacity(paths.len());

        for path in paths {
            uploaded.push(self.upload_image(product, path).await?);
        }

        Ok(uploaded)
    }

    /// Uploads a single image file as a multipart form. Admin only.
    pub async fn upload_image(
        &mut self,
        product: ProductId,
        path: &Path,
    ) -> Result<UploadedImage, ApiError> {
        let file = multipart::Part::bytes(
            tokio::fs::read(path)
                .await
                .map_err(|e| ApiError::Validation(format!("cannot read {}: {e}", path.display())))?,
        )
        .file_name(
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        let form = multipart::Form::new().part("file", file);

        let request = self
            .http
            .post(self.url(&format!("products/{product}/images")))
            .multipart(form);
        let response = self.authorized(request)?.send().await?;
        let response = self.checked(response).await?;

        Ok(response.json().await?)
    }

    /// Deletes an uploaded image. Admin only.
    pub async fn delete_image(&mut self, product: ProductId, image: Uuid) -> Result<(), ApiError> {
        let request = self
            .http
            .delete(self.url(&format!("products/{product}/images/{image}")));
        let response = self.authorized(request)?.send().await?;

        self.checked(response).await?;

        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.session.token().ok_or(ApiError::Unauthorized)?;

        Ok(request.bearer_auth(token))
    }

    /// Status check for admin calls: a rejected token additionally tears
    /// the session down.
    async fn checked(&mut self, response: Response) -> Result<Response, ApiError> {
        self.absorb(check_status(response).await)
    }

    fn absorb<T>(&mut self, outcome: Result<T, ApiError>) -> Result<T, ApiError> {
        if matches!(outcome, Err(ApiError::Unauthorized)) {
            self.session.logout();
        }

        outcome
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT => {
            let detail = response.text().await.unwrap_or_default();

            Err(ApiError::Validation(detail))
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        other => Err(ApiError::Unexpected(other)),
    }
}
