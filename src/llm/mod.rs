// ABOUTME: Text-generation provider abstraction for schema-constrained LLM output
// ABOUTME: Defines the TextGenerator contract, request shape, and raw service failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Text Generation Provider Interface
//!
//! The recipe adapter depends on a single outbound capability: send an
//! instruction plus a response schema, get back a structured-text payload.
//! [`TextGenerator`] is that seam. [`GeminiProvider`] implements it over
//! HTTP; tests substitute their own implementations.
//!
//! Providers report failures as [`ServiceFailure`], the raw shape of what
//! went wrong (HTTP status, service reason, message). Turning those into
//! user-facing errors is the caller's job.
//!
//! ## Example
//!
//! ```rust,no_run
//! use alchemical_fridge::llm::{GeminiProvider, StructuredRequest, TextGenerator};
//! use serde_json::json;
//!
//! async fn example() {
//!     let provider = GeminiProvider::new("my-api-key");
//!     let schema = json!({ "type": "OBJECT", "properties": {} });
//!     let request = StructuredRequest::new("Describe a sandwich", &schema);
//!     let payload = provider.generate_structured(&request).await;
//! }
//! ```

mod gemini;

pub use gemini::GeminiProvider;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::constants::gemini::RATE_LIMIT_STATUS;

/// A single schema-constrained generation request
#[derive(Debug, Clone, Copy)]
pub struct StructuredRequest<'a> {
    /// Full natural-language instruction
    pub prompt: &'a str,
    /// Schema the output must conform to
    pub response_schema: &'a Value,
    /// Model override; providers use their default when `None`
    pub model: Option<&'a str>,
}

impl<'a> StructuredRequest<'a> {
    /// Create a request with the provider's default model
    #[must_use]
    pub const fn new(prompt: &'a str, response_schema: &'a Value) -> Self {
        Self {
            prompt,
            response_schema,
            model: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub const fn with_model(mut self, model: &'a str) -> Self {
        self.model = Some(model);
        self
    }
}

/// Raw failure reported by a text-generation service or its transport
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub struct ServiceFailure {
    /// HTTP status, when the failure came from an HTTP response
    pub status: Option<u16>,
    /// Machine-readable reason reported by the service (e.g. `RESOURCE_EXHAUSTED`)
    pub reason: Option<String>,
    /// Human-readable message, if the service or transport supplied one
    pub message: Option<String>,
}

impl ServiceFailure {
    /// Failure with only a message (transport errors, rejected promises in stubs)
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Failure from an HTTP status response
    #[must_use]
    pub fn http(status: u16, reason: Option<String>, message: Option<String>) -> Self {
        Self {
            status: Some(status),
            reason,
            message,
        }
    }

    /// Whether this failure carries a throttling signal
    ///
    /// A 429 status or a `RESOURCE_EXHAUSTED` reason decides it. The message
    /// text is only consulted when the failure carries neither a status nor
    /// a reason, as with errors surfaced by client libraries and stubs.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        if self.status == Some(RATE_LIMIT_STATUS) {
            return true;
        }
        if let Some(reason) = self.reason.as_deref() {
            return reason.eq_ignore_ascii_case("RESOURCE_EXHAUSTED");
        }
        if self.status.is_some() {
            return false;
        }
        self.message.as_deref().is_some_and(|m| {
            let lower = m.to_ascii_lowercase();
            lower.contains("429")
                || lower.contains("resource_exhausted")
                || lower.contains("too many requests")
        })
    }
}

impl fmt::Display for ServiceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, self.message.as_deref()) {
            (Some(status), Some(message)) => write!(f, "HTTP {status}: {message}"),
            (Some(status), None) => write!(f, "HTTP {status}"),
            (None, Some(message)) => f.write_str(message),
            (None, None) => f.write_str("unknown service failure"),
        }
    }
}

/// Schema-constrained text generation
///
/// Implementations make exactly one attempt per call: no retries, no
/// backoff. `Ok(None)` means the service answered without any content.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Unique provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Model used when the request does not override it
    fn default_model(&self) -> &str;

    /// Generate a structured-text payload conforming to the request schema
    async fn generate_structured(
        &self,
        request: &StructuredRequest<'_>,
    ) -> Result<Option<String>, ServiceFailure>;
}
