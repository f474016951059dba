//! Chat - API functions

use crate::shared::api_utils::{post_json, ApiError};
use contracts::query::{QueryRequest, QueryResponse};

/// Send a free-text question to the backend and get the synthesized
/// answer. One request, one response; no streaming.
pub async fn ask(query: &str) -> Result<String, ApiError> {
    let request = QueryRequest {
        query: query.to_string(),
    };
    let response: QueryResponse = post_json("/query/", &request).await?;
    Ok(response.answer)
}
