use thiserror::Error;

/// Failures a summarization call can surface to its caller.
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Model invocation failed: {0}")]
    Invocation(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_error_display_messages() {

        let invocation = SummarizeError::Invocation("connection refused".to_string());
        assert_eq!(invocation.to_string(), "Model invocation failed: connection refused");

        let malformed = SummarizeError::MalformedResponse("missing output".to_string());
        assert_eq!(malformed.to_string(), "Malformed model response: missing output");

    }

}
