//! Helpers shared by the controller integration tests

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;

/// Read a JSON response body into `T`
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");

    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}
