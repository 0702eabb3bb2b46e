// ABOUTME: Unified error handling for recipe generation with user-displayable messages
// ABOUTME: Defines ErrorCode taxonomy, AppError, and the JSON error response shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure surfaced by the crate is an [`AppError`] tagged with an
//! [`ErrorCode`]. Messages are written for direct end-user display; the
//! presentation layer shows them as-is and lets the user resubmit.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::messages;

/// Standard error codes used throughout the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The service answered but produced no usable payload
    #[serde(rename = "EMPTY_RESPONSE")]
    EmptyResponse,
    /// The payload did not conform to the declared recipe schema
    #[serde(rename = "PARSE_FAILURE")]
    ParseFailure,
    /// The service reported throttling
    #[serde(rename = "RATE_LIMITED")]
    RateLimited,
    /// Any other service or transport failure
    #[serde(rename = "SERVICE_ERROR")]
    ServiceError,
    /// A required configuration value (the service credential) is absent
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing,
    /// Caller-supplied input was rejected before any call was made
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
}

impl ErrorCode {
    /// Get a short description of this error category
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::EmptyResponse => "The recipe service returned no content",
            Self::ParseFailure => "The recipe service returned a malformed recipe",
            Self::RateLimited => "The recipe service is rate limiting requests",
            Self::ServiceError => "The recipe service encountered an error",
            Self::ConfigMissing => "Required configuration is missing",
            Self::InvalidInput => "The provided input is invalid",
        }
    }
}

/// Unified error type for the crate
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message, safe to show to end users
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// No content was generated
    #[must_use]
    pub fn empty_response() -> Self {
        Self::new(ErrorCode::EmptyResponse, messages::NO_CONTENT)
    }

    /// The generated payload could not be decoded into a recipe
    #[must_use]
    pub fn parse_failure(detail: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::ParseFailure,
            format!("{} ({detail})", messages::MALFORMED_RECIPE),
        )
    }

    /// The service is throttling requests
    #[must_use]
    pub fn rate_limited() -> Self {
        Self::new(ErrorCode::RateLimited, messages::RATE_LIMITED)
    }

    /// Any other service failure; falls back to a generic message when the
    /// underlying error carried none
    #[must_use]
    pub fn service(message: Option<&str>) -> Self {
        let message = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(messages::SERVICE_FALLBACK);
        Self::new(ErrorCode::ServiceError, message)
    }

    /// Missing configuration value
    #[must_use]
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Invalid caller input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// JSON error shape handed to front-ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error body
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error category
    pub code: ErrorCode,
    /// User-facing message
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message.clone(),
            },
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}
