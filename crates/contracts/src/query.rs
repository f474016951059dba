use serde::{Deserialize, Serialize};

/// Body of POST `/query/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Response of POST `/query/`. One answer per request; no streaming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_expected_shape() {
        let req = QueryRequest {
            query: "Summarize my notes".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"query":"Summarize my notes"}"#
        );
    }

    #[test]
    fn response_deserializes() {
        let resp: QueryResponse =
            serde_json::from_str(r#"{"answer":"Your notes cover..."}"#).unwrap();
        assert_eq!(resp.answer, "Your notes cover...");
    }
}
