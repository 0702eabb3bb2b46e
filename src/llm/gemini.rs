// ABOUTME: Google Gemini provider for schema-constrained JSON generation
// ABOUTME: Issues a single generateContent call and reports raw failures with status and reason
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gemini Provider
//!
//! Implementation of [`TextGenerator`] for Google's Gemini models using the
//! `generateContent` endpoint with `responseMimeType: application/json` and a
//! `responseSchema`, so the model's output is constrained to the schema.
//!
//! ## Configuration
//!
//! Set `GEMINI_API_KEY` (or `API_KEY`) with a key from Google AI Studio:
//! <https://aistudio.google.com/apikey>. See [`ServiceConfig`].
//!
//! No timeout is configured on the HTTP client and no retry is attempted;
//! every call is one request.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::{ServiceFailure, StructuredRequest, TextGenerator};
use crate::config::ServiceConfig;
use crate::constants::gemini::{API_BASE_URL, API_KEY_HEADER, DEFAULT_MODEL, JSON_MIME_TYPE};

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig<'a>,
}

/// Content structure for Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

/// Text part of a content block
#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: String,
}

/// Generation configuration requesting structured output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    prompt_feedback: Option<PromptFeedback>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

/// Feedback on the prompt itself (set when the prompt was blocked)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// API error body from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    code: Option<u16>,
    message: Option<String>,
    status: Option<String>,
}

/// Envelope of a non-2xx response
#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiError,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini text-generation provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    default_model: String,
    base_url: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            default_model: DEFAULT_MODEL.to_owned(),
            base_url: API_BASE_URL.to_owned(),
        }
    }

    /// Create a provider from loaded service configuration
    #[must_use]
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.api_key.clone())
            .with_default_model(config.model.clone())
            .with_base_url(config.base_url.clone())
    }

    /// Set a custom default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Point the provider at a different API root (proxies, mock servers)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Build the API URL for a model and method
    fn build_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{model}:{method}", self.base_url)
    }

    /// Build a Gemini API request from a structured request
    fn build_gemini_request<'a>(request: &StructuredRequest<'a>) -> GeminiRequest<'a> {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_owned()),
                parts: vec![ContentPart {
                    text: request.prompt.to_owned(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: request.response_schema,
            },
        }
    }

    /// Concatenate the text parts of the first candidate
    ///
    /// Returns `None` when the service produced no text at all.
    fn extract_content(response: GeminiResponse) -> Option<String> {
        let candidate = response.candidates?.into_iter().next()?;
        if let Some(reason) = candidate.finish_reason.as_deref() {
            debug!(finish_reason = %reason, "Gemini candidate finished");
        }
        let text: String = candidate
            .content?
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();
        (!text.is_empty()).then_some(text)
    }

    /// Map a non-2xx response to a service failure, keeping the API's message when present
    fn map_api_error(status: u16, response_text: &str) -> ServiceFailure {
        match serde_json::from_str::<GeminiErrorEnvelope>(response_text) {
            Ok(envelope) => {
                ServiceFailure::http(status, envelope.error.status, envelope.error.message)
            }
            Err(_) => {
                let body = response_text.trim();
                ServiceFailure::http(status, None, (!body.is_empty()).then(|| body.to_owned()))
            }
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.unwrap_or(&self.default_model)))]
    async fn generate_structured(
        &self,
        request: &StructuredRequest<'_>,
    ) -> Result<Option<String>, ServiceFailure> {
        let model = request.model.unwrap_or(&self.default_model);
        let url = self.build_url(model, "generateContent");

        let gemini_request = Self::build_gemini_request(request);

        debug!("Sending structured request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                ServiceFailure::message(format!("HTTP request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| {
                ServiceFailure::message(format!("Failed to read response: {}", e.without_url()))
            })?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, response = %response_text, "Failed to parse response");
                ServiceFailure::message(format!("Failed to parse Gemini response: {e}"))
            })?;

        if let Some(api_error) = gemini_response.error {
            return Err(ServiceFailure {
                status: api_error.code,
                reason: api_error.status,
                message: api_error.message,
            });
        }

        let no_candidates = gemini_response
            .candidates
            .as_ref()
            .is_none_or(Vec::is_empty);
        if no_candidates {
            if let Some(reason) = gemini_response
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.clone())
            {
                return Err(ServiceFailure {
                    status: None,
                    message: Some(format!("Request blocked by Gemini ({reason})")),
                    reason: Some(reason),
                });
            }
        }

        let content = Self::extract_content(gemini_response);
        debug!(has_content = content.is_some(), "Received Gemini response");
        Ok(content)
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("default_model", &self.default_model)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            // Omit `client` field as HTTP clients are not useful to debug
            .finish_non_exhaustive()
    }
}
