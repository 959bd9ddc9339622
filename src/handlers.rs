use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use std::time::Instant;
use crate::AppState;
use crate::logger::log_request;
use crate::metrics::MetricsSnapshot;
use crate::models::{SummarizeRequest, SummarizeResponse};

// bounds the UI sliders advertise, enforced here as well
// since plain HTTP callers are not bound by the widgets
const MIN_TOKENS: u32 = 16;
const MAX_TOKENS: u32 = 4096;
const MIN_TEMPERATURE: f32 = 0.0;
const MAX_TEMPERATURE: f32 = 1.0;

fn validate(request: &SummarizeRequest) -> Result<(), String> {

    if request.max_tokens < MIN_TOKENS || request.max_tokens > MAX_TOKENS {
        return Err(format!(
            "max_tokens must be between {} and {}, got {}",
            MIN_TOKENS, MAX_TOKENS, request.max_tokens
        ));
    }

    if request.temperature < MIN_TEMPERATURE || request.temperature > MAX_TEMPERATURE {
        return Err(format!(
            "temperature must be between {} and {}, got {}",
            MIN_TEMPERATURE, MAX_TEMPERATURE, request.temperature
        ));
    }

    Ok(())

}

// the single-page UI
pub async fn index() -> Html<&'static str> {

    Html(include_str!("../static/index.html"))

}

pub async fn health_check() -> &'static str {

    "OK"

}

pub async fn summarize_handler(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>
) -> Result<Json<SummarizeResponse>, (StatusCode, String)> {

    if let Err(reason) = validate(&request) {
        state.metrics.record_rejected();
        return Err((StatusCode::UNPROCESSABLE_ENTITY, reason));
    }

    let input_chars = request.text.chars().count();
    let model = state.summarizer.model_id().to_string();
    let started = Instant::now();

    match state.summarizer.summarize(&request.text, request.max_tokens, request.temperature).await {
        Ok(summary) => {
            state.metrics.record_summary(input_chars as u64, summary.chars().count() as u64);
            log_request("ok", &model, input_chars, started.elapsed().as_millis());
            Ok(Json(SummarizeResponse { summary, model }))
        }
        Err(e) => {
            state.metrics.record_failure();
            log_request("failed", &model, input_chars, started.elapsed().as_millis());
            Err((StatusCode::BAD_GATEWAY, format!("Summarization failed: {}", e)))
        }
    }

}

pub async fn metrics_handler(State(state): State<AppState>) -> Json<MetricsSnapshot> {

    Json(state.metrics.snapshot())

}

#[cfg(test)]
mod tests {

    use super::*;

    fn request(max_tokens: u32, temperature: f32) -> SummarizeRequest {
        SummarizeRequest {
            text: "some text".to_string(),
            max_tokens,
            temperature
        }
    }

    #[test]
    fn test_validate_accepts_bounds() {

        assert!(validate(&request(16, 0.0)).is_ok(), "Lower bounds should be accepted");
        assert!(validate(&request(4096, 1.0)).is_ok(), "Upper bounds should be accepted");
        assert!(validate(&request(1024, 0.5)).is_ok());

    }

    #[test]
    fn test_validate_rejects_out_of_range_tokens() {

        assert!(validate(&request(15, 0.0)).is_err());
        assert!(validate(&request(4097, 0.0)).is_err());

    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {

        assert!(validate(&request(1024, -0.1)).is_err());
        assert!(validate(&request(1024, 1.5)).is_err());

    }

}
