// ABOUTME: Environment-only configuration for the Gemini recipe service
// ABOUTME: Loads the API credential once at startup and fails fast when it is missing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Service Configuration
//!
//! Configuration is read from the environment once, at process start, and
//! is never mutated afterwards. The credential is required: a missing or
//! blank key is a [`ErrorCode::ConfigMissing`](crate::errors::ErrorCode)
//! error rather than an unauthenticated request.

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::constants::{env_vars, gemini};
use crate::errors::{AppError, AppResult};

/// Read-only configuration for the recipe service
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// API credential for the Gemini API
    pub api_key: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Base URL of the Generative Language API
    pub base_url: String,
}

impl ServiceConfig {
    /// Create a configuration with the default model and endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: gemini::DEFAULT_MODEL.to_owned(),
            base_url: gemini::API_BASE_URL.to_owned(),
        }
    }

    /// Load configuration from the environment
    ///
    /// Reads `GEMINI_API_KEY`, falling back to `API_KEY`. `GEMINI_MODEL` and
    /// `GEMINI_BASE_URL` override the defaults when set and non-empty.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigMissing` error if no non-blank credential is set.
    pub fn from_env() -> AppResult<Self> {
        let api_key = non_empty_var(env_vars::GEMINI_API_KEY)
            .or_else(|| non_empty_var(env_vars::API_KEY))
            .ok_or_else(|| {
                AppError::config_missing(format!(
                    "{} environment variable not set",
                    env_vars::GEMINI_API_KEY
                ))
            })?;

        let mut config = Self::new(api_key);
        if let Some(model) = non_empty_var(env_vars::GEMINI_MODEL) {
            config.model = model;
        }
        if let Some(base_url) = non_empty_var(env_vars::GEMINI_BASE_URL) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Set the model identifier
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check that the credential is usable
    ///
    /// # Errors
    ///
    /// Returns a `ConfigMissing` error if the credential is blank.
    pub fn validate(&self) -> AppResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::config_missing("Gemini API key is empty"));
        }
        Ok(())
    }
}

impl Debug for ServiceConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ServiceConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
