// ABOUTME: Explicit kitchen state passed into and returned from each recipe cycle
// ABOUTME: Replaces front-end globals (style, loading flag, last recipe or error) with a value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Kitchen Session State
//!
//! Front-ends keep one [`KitchenState`] per user. It moves
//! `Idle -> Cooking -> Served | Failed`; a new submission clears the
//! previous result. [`RecipeChef::cook`](crate::recipe::RecipeChef::cook)
//! takes the state by value and hands back the next one.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::recipe::{CookingStyle, Recipe, RecipeRequest};

/// Where a kitchen is in its request cycle
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum KitchenStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is outstanding; re-submission is ignored
    Cooking,
    /// The last request produced a recipe
    Served {
        /// The generated recipe
        recipe: Recipe,
    },
    /// The last request failed
    Failed {
        /// Error category
        code: ErrorCode,
        /// User-facing message
        message: String,
    },
}

/// Form inputs plus the outcome of the last request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitchenState {
    /// Free-text ingredient list as typed by the user
    pub ingredients: String,
    /// Selected persona
    pub style: CookingStyle,
    /// Whether to ask for an origin story
    pub include_backstory: bool,
    /// Request cycle status
    pub status: KitchenStatus,
}

impl Default for KitchenState {
    fn default() -> Self {
        Self {
            ingredients: String::new(),
            style: CookingStyle::Hilarious,
            include_backstory: true,
            status: KitchenStatus::Idle,
        }
    }
}

impl KitchenState {
    /// Create an idle state with the default persona and a backstory
    #[must_use]
    pub fn new(ingredients: impl Into<String>) -> Self {
        Self {
            ingredients: ingredients.into(),
            ..Self::default()
        }
    }

    /// Select a persona
    #[must_use]
    pub const fn with_style(mut self, style: CookingStyle) -> Self {
        self.style = style;
        self
    }

    /// Toggle the backstory request
    #[must_use]
    pub const fn with_backstory(mut self, include_backstory: bool) -> Self {
        self.include_backstory = include_backstory;
        self
    }

    /// Whether a request is outstanding
    #[must_use]
    pub const fn is_cooking(&self) -> bool {
        matches!(self.status, KitchenStatus::Cooking)
    }

    /// Whether submitting now would issue a request
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_cooking() && !self.ingredients.trim().is_empty()
    }

    /// Build the request for the current inputs
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error when the ingredient list is blank.
    pub fn request(&self) -> AppResult<RecipeRequest> {
        if self.ingredients.trim().is_empty() {
            return Err(AppError::invalid_input(
                crate::constants::messages::EMPTY_INGREDIENTS,
            ));
        }
        Ok(RecipeRequest::new(
            self.ingredients.clone(),
            self.style,
            self.include_backstory,
        ))
    }

    /// Enter the cooking state, clearing the previous result
    ///
    /// Returns `None` and leaves the state untouched when submission is not
    /// allowed (blank ingredients or a request already outstanding).
    pub fn begin(&mut self) -> Option<RecipeRequest> {
        if self.is_cooking() {
            return None;
        }
        let request = self.request().ok()?;
        self.status = KitchenStatus::Cooking;
        Some(request)
    }

    /// Record the outcome of the outstanding request
    pub fn finish(&mut self, outcome: AppResult<Recipe>) {
        self.status = match outcome {
            Ok(recipe) => KitchenStatus::Served { recipe },
            Err(error) => KitchenStatus::Failed {
                code: error.code,
                message: error.message,
            },
        };
    }

    /// The last generated recipe, if any
    #[must_use]
    pub const fn recipe(&self) -> Option<&Recipe> {
        match &self.status {
            KitchenStatus::Served { recipe } => Some(recipe),
            _ => None,
        }
    }

    /// The last error message, if any
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            KitchenStatus::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
