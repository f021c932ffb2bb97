use super::graphql::{GraphQlError, GraphQlResponse};

/// Errors from the settings data source
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to reach settings endpoint: {0}")]
    Transport(String),

    #[error("{}", format_http_error(.status, .body))]
    Http { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("GraphQL error: {}", join_messages(.0))]
    GraphQl(Vec<GraphQlError>),

    #[error("Response to {0} contained no data")]
    MissingData(&'static str),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => {
                Self::from_status(status, response.into_string().unwrap_or_default())
            }
            ureq::Error::Transport(transport) => ApiError::Transport(transport.to_string()),
        }
    }
}

impl ApiError {
    /// Error for a non-2xx response.
    ///
    /// Some servers answer GraphQL errors with a 4xx status; their messages are kept.
    pub fn from_status(status: u16, body: String) -> Self {
        let errors = serde_json::from_str::<GraphQlResponse<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.errors)
            .filter(|e| !e.is_empty());

        match errors {
            Some(errors) => ApiError::GraphQl(errors),
            None => ApiError::Http { status, body },
        }
    }
}

fn format_http_error(status: &u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {body}")
    }
}

fn join_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = ApiError::Http {
            status: 502,
            body: "  ".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 502");

        let err = ApiError::Http {
            status: 401,
            body: "invalid token\n".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 401: invalid token");
    }

    #[test]
    fn test_status_body_with_graphql_errors() {
        let err = ApiError::from_status(
            400,
            r#"{"errors":[{"message":"email is not allowed","path":["updateSettings"]}]}"#
                .to_string(),
        );
        assert!(matches!(err, ApiError::GraphQl(ref errors) if errors[0].message == "email is not allowed"));

        let err = ApiError::from_status(400, r#"{"errors":[]}"#.to_string());
        assert!(matches!(err, ApiError::Http { status: 400, .. }));

        let err = ApiError::from_status(503, "<html>busy</html>".to_string());
        assert!(matches!(err, ApiError::Http { status: 503, .. }));
    }

    #[test]
    fn test_graphql_error_display_joins_messages() {
        let err = ApiError::GraphQl(vec![
            GraphQlError::new("email is not allowed"),
            GraphQlError::new("rate limited"),
        ]);
        assert_eq!(
            err.to_string(),
            "GraphQL error: email is not allowed; rate limited"
        );
    }
}
