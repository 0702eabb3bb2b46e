// ABOUTME: Builds the Gemini instruction and response schema for a recipe request
// ABOUTME: Persona lookup, backstory clause, and the grocery override are pure and deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Prompts
//!
//! The instruction sent to the model is assembled from four pieces:
//!
//! 1. the persona instruction for the requested [`CookingStyle`]
//! 2. the user's ingredients, verbatim
//! 3. the backstory clause (request one, or demand an empty string)
//! 4. the grocery override, loaded at compile time from
//!    `grocery_override.md` and always present
//!
//! Deciding whether the ingredients are usable is left to the model via
//! the override text; nothing here inspects them.

use std::sync::LazyLock;

use serde_json::{json, Value};

use super::{CookingStyle, RecipeRequest};

/// Directive telling the model to ignore the persona when there is no usable food
pub const GROCERY_OVERRIDE_PROMPT: &str = include_str!("grocery_override.md");

/// Backstory clause when an origin story is wanted
pub const BACKSTORY_REQUESTED: &str =
    "Also, write a creative, absurd, or deeply emotional backstory for why this dish exists.";

/// Backstory clause when no origin story is wanted
pub const BACKSTORY_OMITTED: &str =
    "No backstory needed. Return an empty string for the backstory field.";

/// Fields the model must always return
pub const REQUIRED_FIELDS: [&str; 5] = [
    "is_grocery",
    "title",
    "ingredients_list",
    "steps",
    "chef_comment",
];

static RECIPE_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    let string_list = json!({ "type": "ARRAY", "items": { "type": "STRING" } });
    json!({
        "type": "OBJECT",
        "properties": {
            "is_grocery": { "type": "BOOLEAN" },
            "title": { "type": "STRING" },
            "tagline": { "type": "STRING" },
            "ingredients_list": string_list,
            "steps": string_list,
            "backstory": { "type": "STRING" },
            "chef_comment": { "type": "STRING" },
        },
        "required": REQUIRED_FIELDS,
    })
});

/// Instruction text plus the schema the output must follow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipePrompt {
    /// Full natural-language instruction
    pub instruction: String,
    /// Response schema; identical for every request
    pub schema: &'static Value,
}

/// Gemini `responseSchema` describing a [`Recipe`](super::Recipe)
#[must_use]
pub fn recipe_schema() -> &'static Value {
    &RECIPE_SCHEMA
}

/// Persona instruction for a cooking style
#[must_use]
pub const fn persona_instruction(style: CookingStyle) -> &'static str {
    match style {
        CookingStyle::Gourmet => {
            "You are a pretentious, high-end Michelin star chef. Turn these potentially \
             garbage ingredients into a 'deconstructed' or 'elevated' culinary masterpiece. \
             Use fancy culinary jargon."
        }
        CookingStyle::Hilarious => {
            "You are a chaotic, slightly unhinged mad scientist chef. Create a recipe that is \
             technically edible but hilarious, questioning the user's life choices or inventing \
             wild physics-based cooking methods (like 'Quantum Spaghetti')."
        }
        CookingStyle::Indian => {
            "You are a creative Indian chef. Transform these ingredients into a Desi \
             masterpiece. Use Indian cooking techniques (like Tadka/Tempering, Bhuna, Dum) and \
             flavor profiles. Even if the ingredients are weird, try to make a Curry, Sabzi, or \
             Chaat out of them. Use Hindi/English culinary terms where appropriate."
        }
        CookingStyle::Easy => {
            "You are a pragmatic chef who hates doing dishes. Create the absolute easiest, \
             quickest, lowest-effort edible meal possible from these ingredients. Focus on \
             microwave shortcuts, one-bowl solutions, and minimal prep. Keep instructions very \
             simple."
        }
    }
}

/// Backstory clause for the given flag
#[must_use]
pub const fn backstory_clause(include_backstory: bool) -> &'static str {
    if include_backstory {
        BACKSTORY_REQUESTED
    } else {
        BACKSTORY_OMITTED
    }
}

/// Build the instruction and schema for a request
///
/// Never fails; equal requests always produce identical instructions.
#[must_use]
pub fn build_prompt(request: &RecipeRequest) -> RecipePrompt {
    let instruction = format!(
        "{persona}\nIngredients provided: {ingredients}.\n{backstory}\n\n{grocery}",
        persona = persona_instruction(request.style),
        ingredients = request.ingredients,
        backstory = backstory_clause(request.include_backstory),
        grocery = GROCERY_OVERRIDE_PROMPT.trim_end(),
    );

    RecipePrompt {
        instruction,
        schema: recipe_schema(),
    }
}
