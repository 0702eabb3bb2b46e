// ABOUTME: Crate-wide constants for service endpoints, environment variables, and messages
// ABOUTME: Centralizes defaults so the provider, config, and CLI agree on names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults and the names of the environment variables that can
//! override them.

/// Service names used in structured logging
pub mod service_names {
    /// Default service name reported at startup
    pub const FRIDGE_CHEF: &str = "fridge-chef";
}

/// Environment variable names
pub mod env_vars {
    /// Primary credential variable for the Gemini API
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Legacy credential variable, read when `GEMINI_API_KEY` is unset
    pub const API_KEY: &str = "API_KEY";
    /// Model identifier override
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    /// Base URL override (proxies, test servers)
    pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
}

/// Gemini API defaults
pub mod gemini {
    /// Default model used for recipe generation
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
    /// Base URL for the Generative Language API
    pub const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Header carrying the API key
    pub const API_KEY_HEADER: &str = "x-goog-api-key";
    /// MIME type requested for structured output
    pub const JSON_MIME_TYPE: &str = "application/json";
    /// HTTP status the service uses for throttling
    pub const RATE_LIMIT_STATUS: u16 = 429;
}

/// User-facing messages
pub mod messages {
    /// Payload missing or blank
    pub const NO_CONTENT: &str = "No content generated.";
    /// Payload present but not a recipe
    pub const MALFORMED_RECIPE: &str = "The chef scribbled something unreadable.";
    /// Throttled by the service
    pub const RATE_LIMITED: &str =
        "Too many chefs in the kitchen (Rate Limit). Please wait a moment.";
    /// Service failure with no usable message
    pub const SERVICE_FALLBACK: &str = "The oven exploded (API Error).";
    /// Blank ingredient list
    pub const EMPTY_INGREDIENTS: &str = "Tell the chef what's in your fridge first.";
}
