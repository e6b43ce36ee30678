//! REST API helpers for the board admin backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the backend credential
//! is only meant to be used from the browser session.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx statuses and malformed
//! shapes are errors; empty, non-JSON and unparseable bodies on a 2xx are
//! normalized to a synthetic success by `model::response::normalize`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use model::response::ApiResponse;
use model::target::{self, TargetType};
use model::{ApiConfig, ApiError, BoardPage, RawBoard, RawComment};

/// HTTP method of an admin call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Delete,
}

/// Per-call options layered over the config defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    #[must_use]
    pub fn delete() -> Self {
        Self { method: Method::Delete, ..Self::default() }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn failure_log_message(endpoint: &str, err: &ApiError) -> String {
    format!("API call failed: {endpoint}: {err}")
}

/// Perform an authenticated call and normalize the response.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the request cannot be sent and
/// [`ApiError::Status`] for non-2xx responses.
pub async fn api_call(config: &ApiConfig, endpoint: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = send(config, endpoint, options).await;
        match &result {
            Ok(response) => log::debug!("API response: {response:?}"),
            Err(err) => log::error!("{}", failure_log_message(endpoint, err)),
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, endpoint, options);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn send(config: &ApiConfig, endpoint: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
    use gloo_net::http::{Method as HttpMethod, RequestBuilder};
    use model::response::{ResponseMeta, normalize};

    let network = |e: gloo_net::Error| ApiError::Network(e.to_string());

    let method = match options.method {
        Method::Get => HttpMethod::GET,
        Method::Delete => HttpMethod::DELETE,
    };
    let mut builder = RequestBuilder::new(&config.url(endpoint)).method(method);
    for (name, value) in config.request_headers(&options.headers) {
        builder = builder.header(&name, &value);
    }
    let request = match options.body {
        Some(body) => builder.body(body).map_err(network)?,
        None => builder.build().map_err(network)?,
    };
    let resp = request.send().await.map_err(network)?;

    let meta = ResponseMeta {
        status: resp.status(),
        status_text: resp.status_text(),
        content_type: resp.headers().get("content-type"),
        content_length: resp.headers().get("content-length"),
    };
    let body = if meta.needs_body() { Some(resp.text().await.map_err(network)?) } else { None };
    if body.is_none() && meta.is_success() {
        log::debug!("API response: empty or non-JSON content");
    }
    normalize(&meta, body.as_deref())
}

/// Fetch one page of boards. `page` is zero-based.
///
/// # Errors
///
/// Propagates [`api_call`] errors and [`ApiError::Shape`] when the body has
/// no `content` array.
pub async fn list_boards(config: &ApiConfig, page: u32, size: u32) -> Result<BoardPage, ApiError> {
    api_call(config, &target::boards_endpoint(page, size), RequestOptions::default())
        .await?
        .into_board_page()
}

/// Fetch a board and its comment tree.
///
/// # Errors
///
/// Propagates [`api_call`] errors and [`ApiError::Shape`] when the body has
/// no `boardDetail`.
pub async fn board_detail(config: &ApiConfig, board_id: i64) -> Result<(RawBoard, Vec<RawComment>), ApiError> {
    api_call(config, &target::board_detail_endpoint(board_id), RequestOptions::default())
        .await?
        .into_board_detail()
}

/// Soft-delete a board or a comment.
///
/// # Errors
///
/// Propagates [`api_call`] errors. Callers still check
/// [`ApiResponse::is_success`] on the returned value.
pub async fn delete_target(config: &ApiConfig, target_type: TargetType, target_id: i64) -> Result<ApiResponse, ApiError> {
    api_call(config, &target::delete_endpoint(target_type, target_id), RequestOptions::delete()).await
}

/// Soft-delete a board.
///
/// # Errors
///
/// See [`delete_target`].
pub async fn delete_board(config: &ApiConfig, board_id: i64) -> Result<ApiResponse, ApiError> {
    delete_target(config, TargetType::Board, board_id).await
}

/// Soft-delete a comment.
///
/// # Errors
///
/// See [`delete_target`].
pub async fn delete_comment(config: &ApiConfig, comment_id: i64) -> Result<ApiResponse, ApiError> {
    delete_target(config, TargetType::Comment, comment_id).await
}
