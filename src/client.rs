use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::primitives::Blob;
use crate::error::SummarizeError;
use crate::models::{ModelRequest, ModelResponse};

// one blocking invocation per user action, no retry and no streaming.
// timeouts are whatever the SDK defaults to.
#[derive(Clone)]
pub struct Summarizer {
    client: Client,
    model_id: String
}

impl Summarizer {

    // region and credentials come from the ambient AWS configuration
    pub async fn new(model_id: String) -> Self {

        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await;

        Summarizer {
            client: Client::new(&config),
            model_id
        }

    }

    pub fn model_id(&self) -> &str {

        &self.model_id

    }

    pub async fn summarize(
        &self,
        text: &str,
        max_tokens: u32,
        temperature: f32
    ) -> Result<String, SummarizeError> {

        let request = ModelRequest::summarize(text, max_tokens, temperature);
        let body = serde_json::to_vec(&request)?;

        let response = self.client
            .invoke_model()
            .model_id(&self.model_id)
            .body(Blob::new(body))
            .content_type("application/json")
            .accept("application/json")
            .send()
            .await
            .map_err(|e| SummarizeError::Invocation(e.to_string()))?;

        let model_response: ModelResponse = serde_json::from_slice(response.body.as_ref())
            .map_err(|e| SummarizeError::MalformedResponse(e.to_string()))?;

        model_response.summary_text()

    }

}
