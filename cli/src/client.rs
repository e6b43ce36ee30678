//! Native admin API client over `reqwest`.
//!
//! Mirrors the browser client: same default headers, same endpoints, and the
//! same normalization policy from `model::response`.

use model::response::{ApiResponse, ResponseMeta, normalize};
use model::target::{self, TargetType};
use model::{ApiConfig, ApiError, BoardPage, RawBoard, RawComment};
use reqwest::Method;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderName};

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

#[derive(Debug, Clone)]
pub struct AdminClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl AdminClient {
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// Perform an authenticated call and normalize the response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response arrives and
    /// [`ApiError::Status`] for non-2xx responses.
    pub async fn call(
        &self,
        method: Method,
        endpoint: &str,
        headers: &[(String, String)],
        body: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let network = |e: reqwest::Error| ApiError::Network(e.to_string());

        let mut request = self.http.request(method.clone(), self.config.url(endpoint));
        for (name, value) in self.config.request_headers(headers) {
            request = request.header(name, value);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(network)?;
        let status = response.status();
        let meta = ResponseMeta {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            content_type: header_str(response.headers(), &CONTENT_TYPE),
            content_length: header_str(response.headers(), &CONTENT_LENGTH),
        };
        let body = if meta.needs_body() { Some(response.text().await.map_err(network)?) } else { None };

        let result = normalize(&meta, body.as_deref());
        match &result {
            Ok(ApiResponse::Success { message }) => {
                tracing::debug!(%method, endpoint, ?message, "empty or non-JSON response treated as success");
            }
            Ok(ApiResponse::Json(_)) => tracing::debug!(%method, endpoint, status = meta.status, "api response"),
            Err(err) => tracing::warn!(%method, endpoint, error = %err, "api call failed"),
        }
        result
    }

    /// # Errors
    ///
    /// Propagates [`AdminClient::call`] errors and shape errors.
    pub async fn list_boards(&self, page: u32, size: u32) -> Result<BoardPage, ApiError> {
        self.call(Method::GET, &target::boards_endpoint(page, size), &[], None)
            .await?
            .into_board_page()
    }

    /// # Errors
    ///
    /// Propagates [`AdminClient::call`] errors and [`ApiError::Shape`] when
    /// `boardDetail` is missing.
    pub async fn board_detail(&self, board_id: i64) -> Result<(RawBoard, Vec<RawComment>), ApiError> {
        self.call(Method::GET, &target::board_detail_endpoint(board_id), &[], None)
            .await?
            .into_board_detail()
    }

    /// # Errors
    ///
    /// Propagates [`AdminClient::call`] errors.
    pub async fn delete_target(&self, target_type: TargetType, target_id: i64) -> Result<ApiResponse, ApiError> {
        self.call(Method::DELETE, &target::delete_endpoint(target_type, target_id), &[], None)
            .await
    }

    /// # Errors
    ///
    /// See [`AdminClient::delete_target`].
    pub async fn delete_board(&self, board_id: i64) -> Result<ApiResponse, ApiError> {
        self.delete_target(TargetType::Board, board_id).await
    }

    /// # Errors
    ///
    /// See [`AdminClient::delete_target`].
    pub async fn delete_comment(&self, comment_id: i64) -> Result<ApiResponse, ApiError> {
        self.delete_target(TargetType::Comment, comment_id).await
    }
}

fn header_str(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(ToOwned::to_owned)
}
