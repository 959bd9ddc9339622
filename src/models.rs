use serde::{Deserialize, Serialize};

use crate::error::SummarizeError;

// fixed sampling parameters, only max tokens and temperature are user-tunable
const TOP_P: f32 = 0.5;
const TOP_K: u32 = 20;

const SCHEMA_VERSION: &str = "messages-v1";

// instruction prepended to every prompt before it is sent to the model
const PROMPT_TEMPLATE: &str = "You are a text summarizer please summarize given text ";

// what the UI posts to /v1/summarize
#[derive(Debug, Deserialize, Serialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub max_tokens: u32,
    pub temperature: f32
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub model: String
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ContentBlock {
    pub text: String
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Message {
    pub role: String,
    pub content: Vec<ContentBlock>
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    pub max_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,
    pub temperature: f32
}

// the invoke_model request body, serialized with camelCase keys
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRequest {
    pub schema_version: String,
    pub messages: Vec<Message>,
    pub inference_config: InferenceConfig
}

impl ModelRequest {

    // build the single-turn request for one summarization call,
    // max_tokens and temperature are passed through exactly as given
    pub fn summarize(text: &str, max_tokens: u32, temperature: f32) -> Self {

        let message = Message {
            role: "user".to_string(),
            content: vec![ContentBlock {
                text: format!("{}{}", PROMPT_TEMPLATE, text)
            }]
        };

        ModelRequest {
            schema_version: SCHEMA_VERSION.to_string(),
            messages: vec![message],
            inference_config: InferenceConfig {
                max_tokens,
                top_p: TOP_P,
                top_k: TOP_K,
                temperature
            }
        }

    }

}

#[derive(Debug, Deserialize, Serialize)]
pub struct ModelResponse {
    pub output: ModelOutput
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ModelOutput {
    pub message: OutputMessage
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OutputMessage {
    pub content: Vec<ContentBlock>
}

impl ModelResponse {

    // the summary lives at output.message.content[0].text,
    // an empty content list is an error, never an empty summary
    pub fn summary_text(self) -> Result<String, SummarizeError> {

        let block = self.output.message.content
            .into_iter()
            .next()
            .ok_or_else(|| SummarizeError::MalformedResponse(
                "response contained no content blocks".to_string()
            ))?;

        Ok(block.text)

    }

}
