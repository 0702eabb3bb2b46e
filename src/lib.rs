// ABOUTME: Main library entry point for the Alchemical Fridge recipe generator
// ABOUTME: Turns leftover ingredients and a chef persona into a structured recipe via Gemini
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Alchemical Fridge
//!
//! Collects a free-text ingredient list and a chef persona, asks Google
//! Gemini for a recipe constrained to a fixed JSON schema, and returns a
//! typed [`Recipe`](recipe::Recipe) or a classified error.
//!
//! ## Architecture
//!
//! - **Recipe**: prompt builder ([`recipe::prompts`]) and response adapter
//!   ([`recipe::chef`])
//! - **LLM**: the [`TextGenerator`](llm::TextGenerator) seam and the Gemini
//!   provider
//! - **Session**: explicit front-end state for one request cycle
//! - **Config / Errors / Logging**: environment configuration, the error
//!   taxonomy, and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use alchemical_fridge::errors::AppResult;
//! use alchemical_fridge::recipe::{CookingStyle, RecipeChef, RecipeRequest};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let chef = RecipeChef::from_env()?;
//!     let request = RecipeRequest::new("rice, frozen peas, one egg", CookingStyle::Easy, false);
//!     let recipe = chef.generate(&request).await?;
//!     println!("{}", recipe.title);
//!     Ok(())
//! }
//! ```

/// Environment-only service configuration
pub mod config;

/// Endpoint defaults, environment variable names, and user-facing messages
pub mod constants;

/// Unified error handling
pub mod errors;

/// Text-generation provider interface and the Gemini provider
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Recipe domain types, prompt builder, and response adapter
pub mod recipe;

/// Terminal rendering of recipes and errors
pub mod render;

/// Explicit front-end state for one request cycle
pub mod session;
