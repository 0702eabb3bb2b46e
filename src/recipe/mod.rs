// ABOUTME: Recipe domain types: cooking personas, generation requests, and generated recipes
// ABOUTME: Wires the prompt builder and response adapter into a single recipe module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes
//!
//! - [`prompts`] turns a [`RecipeRequest`] into an instruction plus the fixed
//!   response schema.
//! - [`chef`] sends that to a text generator and turns the answer into a
//!   [`Recipe`] or a classified error.

/// Response adapter: one generation call, parsing, and failure classification
pub mod chef;
/// Request builder: persona instructions, backstory clause, and response schema
pub mod prompts;

pub use chef::{classify_failure, parse_recipe, RecipeChef};
pub use prompts::{build_prompt, recipe_schema, RecipePrompt};

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Deserializer, Serialize};

/// Chef persona governing the tone and technique of a generated recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum CookingStyle {
    /// Pretentious fine dining
    Gourmet,
    /// Chaotic mad-scientist cooking
    Hilarious,
    /// Desi techniques and flavours
    Indian,
    /// Minimal effort, minimal dishes (fallback for unknown tags)
    #[default]
    Easy,
}

impl CookingStyle {
    /// All personas, in display order
    pub const ALL: [Self; 4] = [Self::Hilarious, Self::Gourmet, Self::Indian, Self::Easy];

    /// Parse from string with fallback to the easy persona
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "gourmet" => Self::Gourmet,
            "hilarious" => Self::Hilarious,
            "indian" => Self::Indian,
            _ => Self::Easy,
        }
    }

    /// Tag used on the wire and on the command line
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gourmet => "gourmet",
            Self::Hilarious => "hilarious",
            Self::Indian => "indian",
            Self::Easy => "easy",
        }
    }

    /// Display label for persona pickers
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hilarious => "Chaos Mode",
            Self::Gourmet => "Fine Dining",
            Self::Indian => "Desi Twist",
            Self::Easy => "Lazy Cook",
        }
    }

    /// One-line persona description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Hilarious => "Unhinged & Funny",
            Self::Gourmet => "Pretentious",
            Self::Indian => "Spicy & Rich",
            Self::Easy => "Minimal Effort",
        }
    }
}

impl From<String> for CookingStyle {
    fn from(value: String) -> Self {
        Self::from_str_or_default(&value)
    }
}

impl Display for CookingStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Parameters of a single recipe generation
///
/// Callers guarantee `ingredients` is non-empty after trimming; the builder
/// does not validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRequest {
    /// Free-text ingredient list, passed to the model verbatim
    pub ingredients: String,
    /// Chef persona
    pub style: CookingStyle,
    /// Whether the model should invent an origin story
    pub include_backstory: bool,
}

impl RecipeRequest {
    /// Create a request
    #[must_use]
    pub fn new(ingredients: impl Into<String>, style: CookingStyle, include_backstory: bool) -> Self {
        Self {
            ingredients: ingredients.into(),
            style,
            include_backstory,
        }
    }
}

/// A generated recipe
///
/// Either an invented dish (`is_grocery == false`) or a "go buy groceries"
/// result (`is_grocery == true`), in which case `ingredients_list` is a
/// shopping list and `steps` describe the store trip. The model picks the
/// variant; nothing local changes it.
///
/// `tagline` and `backstory` are optional in the response contract: absent
/// or `null` decode to an empty string. Every other field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Whether this is the grocery fallback rather than a dish
    pub is_grocery: bool,
    /// Dish name
    pub title: String,
    /// Short witty subtitle
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tagline: String,
    /// Ingredients, or a shopping list for the grocery fallback
    pub ingredients_list: Vec<String>,
    /// Ordered preparation steps
    pub steps: Vec<String>,
    /// Origin story; empty when none was requested
    #[serde(default, deserialize_with = "null_as_empty")]
    pub backstory: String,
    /// Closing remark from the chef
    pub chef_comment: String,
}

impl Recipe {
    /// Whether the model returned an origin story
    #[must_use]
    pub fn has_backstory(&self) -> bool {
        !self.backstory.trim().is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
