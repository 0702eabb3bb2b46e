// ABOUTME: Plain-text rendering of generated recipes for terminal output
// ABOUTME: Lays out persona badge, ingredients or shopping list, steps, backstory, and chef comment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, ErrorResponse};
use crate::recipe::{CookingStyle, Recipe};

/// Render a recipe as plain text
///
/// Grocery results get a "Shopping List" heading instead of "Ingredients"
/// and no persona badge, since the persona was ignored for them.
#[must_use]
pub fn render_recipe(recipe: &Recipe, style: CookingStyle) -> String {
    let mut lines = Vec::new();

    if recipe.is_grocery {
        lines.push("[Empty Fridge Alert]".to_owned());
    } else {
        lines.push(format!("[{} - {}]", style.label(), style.description()));
    }
    lines.push(String::new());
    lines.push(recipe.title.clone());
    lines.push("=".repeat(recipe.title.chars().count().max(3)));
    if !recipe.tagline.trim().is_empty() {
        lines.push(format!("\"{}\"", recipe.tagline.trim()));
    }

    lines.push(String::new());
    lines.push(if recipe.is_grocery { "Shopping List" } else { "Ingredients" }.to_owned());
    lines.extend(recipe.ingredients_list.iter().map(|item| format!("  - {item}")));

    lines.push(String::new());
    lines.push(if recipe.is_grocery { "The Mission" } else { "Instructions" }.to_owned());
    lines.extend(
        recipe
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("  {}. {step}", i + 1)),
    );

    if recipe.has_backstory() {
        lines.push(String::new());
        lines.push("The Legend".to_owned());
        lines.push(format!("  {}", recipe.backstory.trim()));
    }

    lines.push(String::new());
    lines.push(format!("Chef says: {}", recipe.chef_comment));

    lines.join("\n")
}

/// Render an error for the user: its message, or the JSON error shape
///
/// # Errors
///
/// Returns an error if JSON serialization fails
pub fn render_error(error: &AppError, as_json: bool) -> serde_json::Result<String> {
    if as_json {
        serde_json::to_string_pretty(&ErrorResponse::from(error))
    } else {
        Ok(error.message.clone())
    }
}
