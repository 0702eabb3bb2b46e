// ABOUTME: Recipe response adapter performing one generation call per request
// ABOUTME: Parses the structured payload into a Recipe and classifies every failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Chef
//!
//! [`RecipeChef`] is the crate's entry point: build the prompt, make exactly
//! one call to the configured [`TextGenerator`], and return a [`Recipe`] or
//! an [`AppError`] whose message can be shown to the user unchanged.
//!
//! | Outcome                              | Error code      |
//! |--------------------------------------|-----------------|
//! | no payload, or only whitespace       | `EmptyResponse` |
//! | payload is not a conforming recipe   | `ParseFailure`  |
//! | service signals throttling           | `RateLimited`   |
//! | anything else from service/transport | `ServiceError`  |
//!
//! The chef keeps no state between calls; it can be shared across tasks.
//!
//! ## Example
//!
//! ```rust,no_run
//! use alchemical_fridge::errors::AppResult;
//! use alchemical_fridge::recipe::{CookingStyle, RecipeChef, RecipeRequest};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let chef = RecipeChef::from_env()?;
//!     let request = RecipeRequest::new("2 eggs, half a lemon", CookingStyle::Hilarious, true);
//!     let recipe = chef.generate(&request).await?;
//!     println!("{}", recipe.title);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use tracing::{debug, error, instrument};

use super::prompts::build_prompt;
use super::{Recipe, RecipeRequest};
use crate::config::ServiceConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::{GeminiProvider, ServiceFailure, StructuredRequest, TextGenerator};
use crate::session::KitchenState;

/// Generates recipes through a text-generation provider
#[derive(Clone)]
pub struct RecipeChef {
    generator: Arc<dyn TextGenerator>,
}

impl RecipeChef {
    /// Create a chef backed by any text generator
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Create a chef backed by Gemini using loaded configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigMissing` error if the credential is blank.
    pub fn from_config(config: &ServiceConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self::new(Arc::new(GeminiProvider::from_config(config))))
    }

    /// Create a chef backed by Gemini using configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns a `ConfigMissing` error if no credential is set.
    pub fn from_env() -> AppResult<Self> {
        Self::from_config(&ServiceConfig::from_env()?)
    }

    /// Name of the underlying provider
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.generator.name()
    }

    /// Generate one recipe
    ///
    /// # Errors
    ///
    /// Returns `EmptyResponse`, `ParseFailure`, `RateLimited` or
    /// `ServiceError`; see the module documentation.
    #[instrument(
        skip(self, request),
        fields(provider = self.generator.name(), style = %request.style, backstory = request.include_backstory)
    )]
    pub async fn generate(&self, request: &RecipeRequest) -> AppResult<Recipe> {
        let prompt = build_prompt(request);
        let structured = StructuredRequest::new(&prompt.instruction, prompt.schema);

        debug!(prompt_chars = prompt.instruction.len(), "Requesting recipe");

        let payload = self
            .generator
            .generate_structured(&structured)
            .await
            .map_err(|failure| {
                error!(
                    status = ?failure.status,
                    reason = ?failure.reason,
                    message = ?failure.message,
                    "Recipe generation failed"
                );
                classify_failure(&failure)
            })?;

        parse_recipe(payload.as_deref())
    }

    /// Run one cook cycle over explicit UI state
    ///
    /// Blank ingredients, or a state already cooking, come back unchanged
    /// without any call. Otherwise the previous result is cleared, one
    /// generation runs, and the returned state holds the recipe or the error.
    pub async fn cook(&self, mut state: KitchenState) -> KitchenState {
        let Some(request) = state.begin() else {
            return state;
        };
        let outcome = self.generate(&request).await;
        state.finish(outcome);
        state
    }
}

impl std::fmt::Debug for RecipeChef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeChef")
            .field("provider", &self.generator.name())
            .field("model", &self.generator.default_model())
            .finish()
    }
}

/// Decode a generated payload into a recipe
///
/// # Errors
///
/// `EmptyResponse` for a missing or blank payload, `ParseFailure` for
/// anything that is not a conforming recipe object. A partially valid
/// payload is never turned into a recipe.
pub fn parse_recipe(payload: Option<&str>) -> AppResult<Recipe> {
    let text = payload
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(AppError::empty_response)?;

    serde_json::from_str::<Recipe>(text).map_err(|e| {
        error!(error = %e, payload = %text, "Generated payload is not a recipe");
        AppError::parse_failure(&e).with_source(e)
    })
}

/// Map a raw service failure to a user-facing error
#[must_use]
pub fn classify_failure(failure: &ServiceFailure) -> AppError {
    if failure.is_rate_limited() {
        AppError::rate_limited()
    } else {
        AppError::service(failure.message.as_deref()).with_source(failure.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_blank_payloads_are_empty_responses() {
        for payload in [None, Some(""), Some("  \n ")] {
            let error = parse_recipe(payload).err().map(|e| e.code);
            assert_eq!(error, Some(ErrorCode::EmptyResponse));
        }
    }

    #[test]
    fn test_wrong_types_are_parse_failures() {
        let payload = r#"{"is_grocery":"no","title":"x","ingredients_list":[],"steps":[],"chef_comment":""}"#;
        let error = parse_recipe(Some(payload)).err().map(|e| e.code);
        assert_eq!(error, Some(ErrorCode::ParseFailure));
    }

    #[test]
    fn test_rate_limit_beats_message() {
        let failure = ServiceFailure::http(429, None, Some("quota".into()));
        assert_eq!(classify_failure(&failure).code, ErrorCode::RateLimited);
    }
}
