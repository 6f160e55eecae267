//! Shared request helpers for the order-tracking backend.
//!
//! Every endpoint goes through the same bounded retry policy: up to
//! [`MAX_ATTEMPTS`] tries with a short growing delay, retrying only on
//! transport failures and 5xx responses. Nothing here is endpoint-aware.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY_MS: u32 = 300;

/// All backend routes live under the same-origin API prefix.
pub fn api_url(path: &str) -> String {
    format!("/api/v1{}", path)
}

fn auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

async fn send_with_retry<F>(build: F) -> Result<Response, String>
where
    F: Fn() -> Result<Request, gloo_net::Error>,
{
    let mut last_error = String::new();
    for attempt in 1..=MAX_ATTEMPTS {
        let request = build().map_err(|e| format!("Failed to build request: {}", e))?;
        match request.send().await {
            // 4xx is a definitive answer; only 5xx is worth retrying.
            Ok(response) if response.status() < 500 => return Ok(response),
            Ok(response) => last_error = format!("HTTP {}", response.status()),
            Err(e) => last_error = format!("Failed to send request: {}", e),
        }
        if attempt < MAX_ATTEMPTS {
            gloo_timers::future::TimeoutFuture::new(RETRY_DELAY_MS * attempt).await;
        }
    }
    Err(last_error)
}

fn check_ok(response: &Response) -> Result<(), String> {
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP {}", response.status()))
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    check_ok(&response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = api_url(path);
    let response = send_with_retry(|| {
        let mut builder = Request::get(&url).header("Accept", "application/json");
        if let Some(header) = auth_header() {
            builder = builder.header("Authorization", &header);
        }
        builder.build()
    })
    .await?;
    parse_json(response).await
}

/// GET with query parameters encoded by `serde_qs`.
pub async fn get_json_with_query<P: Serialize, T: DeserializeOwned>(
    path: &str,
    params: &P,
) -> Result<T, String> {
    let query =
        serde_qs::to_string(params).map_err(|e| format!("Failed to encode query: {}", e))?;
    get_json(&format!("{}?{}", path, query)).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let url = api_url(path);
    let response = send_with_retry(|| {
        let mut builder = Request::post(&url).header("Accept", "application/json");
        if let Some(header) = auth_header() {
            builder = builder.header("Authorization", &header);
        }
        builder.json(body)
    })
    .await?;
    parse_json(response).await
}

pub async fn post_json_unit<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let url = api_url(path);
    let response = send_with_retry(|| {
        let mut builder = Request::post(&url);
        if let Some(header) = auth_header() {
            builder = builder.header("Authorization", &header);
        }
        builder.json(body)
    })
    .await?;
    check_ok(&response)
}

pub async fn patch_json_unit<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let url = api_url(path);
    let response = send_with_retry(|| {
        let mut builder = Request::patch(&url);
        if let Some(header) = auth_header() {
            builder = builder.header("Authorization", &header);
        }
        builder.json(body)
    })
    .await?;
    check_ok(&response)
}

/// DELETE with query parameters, mirroring the backend's delete routes.
pub async fn delete_with_query<P: Serialize>(path: &str, params: &P) -> Result<(), String> {
    let query =
        serde_qs::to_string(params).map_err(|e| format!("Failed to encode query: {}", e))?;
    let url = api_url(&format!("{}?{}", path, query));
    let response = send_with_retry(|| {
        let mut builder = Request::delete(&url);
        if let Some(header) = auth_header() {
            builder = builder.header("Authorization", &header);
        }
        builder.build()
    })
    .await?;
    check_ok(&response)
}
