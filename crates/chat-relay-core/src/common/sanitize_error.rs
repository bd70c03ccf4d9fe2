//! Upstream error sanitization for deployments that must not echo provider bodies
//! (request ids, organization names, partial keys) back to callers.
//!
//! Pattern: log the raw body server-side, return only an opaque category with the
//! HTTP status code.

/// Map an upstream status and body to a caller-safe message.
pub fn sanitize_upstream_error(status_code: u16, raw_text: &str) -> String {
    let category = classify_error(status_code, raw_text);
    match category {
        ErrorCategory::RateLimited => format!("Rate limited (HTTP {})", status_code),
        ErrorCategory::QuotaExhausted => format!("Quota exhausted (HTTP {})", status_code),
        ErrorCategory::Unauthorized => format!("Authentication failed (HTTP {})", status_code),
        ErrorCategory::ModelNotFound => format!("Model not available (HTTP {})", status_code),
        ErrorCategory::PromptTooLong => format!("Prompt too long (HTTP {})", status_code),
        ErrorCategory::ServerError => format!("Upstream server error (HTTP {})", status_code),
        ErrorCategory::Unknown => format!("Upstream error (HTTP {})", status_code),
    }
}

enum ErrorCategory {
    RateLimited,
    QuotaExhausted,
    Unauthorized,
    ModelNotFound,
    PromptTooLong,
    ServerError,
    Unknown,
}

fn classify_error(status_code: u16, raw_text: &str) -> ErrorCategory {
    match status_code {
        429 => {
            if raw_text.contains("insufficient_quota") || raw_text.contains("RESOURCE_EXHAUSTED") {
                ErrorCategory::QuotaExhausted
            } else {
                ErrorCategory::RateLimited
            }
        },
        // DeepSeek answers 402 "Insufficient Balance"
        402 => ErrorCategory::QuotaExhausted,
        401 | 403 => ErrorCategory::Unauthorized,
        404 => ErrorCategory::ModelNotFound,
        400 => {
            if raw_text.contains("context_length_exceeded")
                || raw_text.contains("maximum context length")
                || raw_text.contains("token limit")
            {
                ErrorCategory::PromptTooLong
            } else {
                ErrorCategory::Unknown
            }
        },
        500..=599 => ErrorCategory::ServerError,
        _ => ErrorCategory::Unknown,
    }
}
