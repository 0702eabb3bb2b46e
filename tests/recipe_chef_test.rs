// ABOUTME: Integration tests for the recipe response adapter against a scripted generator
// ABOUTME: Covers round-trip fidelity, empty and malformed payloads, and failure classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use alchemical_fridge::config::ServiceConfig;
use alchemical_fridge::constants::messages;
use alchemical_fridge::errors::ErrorCode;
use alchemical_fridge::llm::ServiceFailure;
use alchemical_fridge::recipe::{recipe_schema, CookingStyle, Recipe, RecipeChef, RecipeRequest};
use common::{chef_with, grocery_run, quantum_scramble, ScriptedGenerator};
use serde_json::json;

fn scramble_request() -> RecipeRequest {
    RecipeRequest::new(
        "2 eggs, half a lemon, soy sauce",
        CookingStyle::Hilarious,
        true,
    )
}

// ============================================================================
// Successful Generation
// ============================================================================

#[tokio::test]
async fn test_quantum_scramble_round_trip() {
    let payload = quantum_scramble();
    let generator = ScriptedGenerator::returning(payload.to_string());
    let chef = chef_with(&generator);

    let recipe = chef.generate(&scramble_request()).await.unwrap();

    assert!(!recipe.is_grocery);
    assert_eq!(recipe.title, "Quantum Scramble");
    assert_eq!(
        recipe.ingredients_list,
        vec!["2 eggs", "lemon", "soy sauce"]
    );
    // No field renamed or lost
    assert_eq!(serde_json::to_value(&recipe).unwrap(), payload);
}

#[tokio::test]
async fn test_generation_sends_built_prompt_and_schema() {
    let generator = ScriptedGenerator::returning(quantum_scramble().to_string());
    let chef = chef_with(&generator);

    chef.generate(&scramble_request()).await.unwrap();

    assert_eq!(generator.calls(), 1);
    let prompt = generator.last_prompt().unwrap();
    assert!(prompt.contains("mad scientist"));
    assert!(prompt.contains("2 eggs, half a lemon, soy sauce"));
    assert_eq!(generator.last_schema().unwrap(), *recipe_schema());
}

#[tokio::test]
async fn test_grocery_fallback_is_passed_through() {
    let generator = ScriptedGenerator::returning(grocery_run().to_string());
    let chef = chef_with(&generator);

    let recipe = chef
        .generate(&RecipeRequest::new("nothing", CookingStyle::Gourmet, false))
        .await
        .unwrap();

    assert!(recipe.is_grocery);
    assert_eq!(recipe.title, "Time to Buy Groceries");
    assert!(!recipe.has_backstory());
}

#[tokio::test]
async fn test_optional_fields_may_be_absent_or_null() {
    let payload = json!({
        "is_grocery": false,
        "title": "Toast",
        "tagline": null,
        "ingredients_list": ["bread"],
        "steps": ["Toast it"],
        "chef_comment": "Bold."
    });
    let generator = ScriptedGenerator::returning(payload.to_string());

    let recipe = chef_with(&generator)
        .generate(&RecipeRequest::new("bread", CookingStyle::Easy, false))
        .await
        .unwrap();

    assert_eq!(recipe.tagline, "");
    assert_eq!(recipe.backstory, "");
}

// ============================================================================
// Empty and Malformed Payloads
// ============================================================================

#[tokio::test]
async fn test_missing_payload_is_empty_response() {
    let generator = ScriptedGenerator::silent();
    let error = chef_with(&generator)
        .generate(&scramble_request())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::EmptyResponse);
    assert_eq!(error.message, messages::NO_CONTENT);
}

#[tokio::test]
async fn test_blank_payload_is_empty_response() {
    let generator = ScriptedGenerator::returning("   ");
    let error = chef_with(&generator)
        .generate(&scramble_request())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::EmptyResponse);
}

#[tokio::test]
async fn test_prose_payload_is_parse_failure() {
    let generator = ScriptedGenerator::returning("Here is a lovely recipe for you!");
    let error = chef_with(&generator)
        .generate(&scramble_request())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ParseFailure);
}

#[tokio::test]
async fn test_missing_required_field_is_parse_failure() {
    for field in ["is_grocery", "title", "ingredients_list", "steps", "chef_comment"] {
        let mut payload = quantum_scramble();
        payload.as_object_mut().unwrap().remove(field);
        let generator = ScriptedGenerator::returning(payload.to_string());

        let result: Result<Recipe, _> = chef_with(&generator).generate(&scramble_request()).await;

        let error = result.expect_err("partial payload must not become a recipe");
        assert_eq!(error.code, ErrorCode::ParseFailure, "missing {field}");
    }
}

#[tokio::test]
async fn test_non_object_payload_is_parse_failure() {
    let generator = ScriptedGenerator::returning(r#"["Quantum Scramble"]"#);
    let error = chef_with(&generator)
        .generate(&scramble_request())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ParseFailure);
}

// ============================================================================
// Service Failure Classification
// ============================================================================

#[tokio::test]
async fn test_rate_limit_message_is_rate_limited() {
    let generator = ScriptedGenerator::failing(ServiceFailure::message(
        "[429 Too Many Requests] Resource has been exhausted",
    ));
    let error = chef_with(&generator)
        .generate(&scramble_request())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::RateLimited);
    assert!(error.message.contains("Please wait"));
    assert_eq!(generator.calls(), 1, "no retry after throttling");
}

#[tokio::test]
async fn test_rate_limit_status_is_rate_limited() {
    let generator = ScriptedGenerator::failing(ServiceFailure::http(
        429,
        Some("RESOURCE_EXHAUSTED".into()),
        Some("Quota exceeded".into()),
    ));
    let error = chef_with(&generator)
        .generate(&scramble_request())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::RateLimited);
    assert_eq!(error.message, messages::RATE_LIMITED);
}

#[tokio::test]
async fn test_other_failure_keeps_original_message() {
    let generator =
        ScriptedGenerator::failing(ServiceFailure::http(403, None, Some("API key not valid".into())));
    let error = chef_with(&generator)
        .generate(&scramble_request())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ServiceError);
    assert_eq!(error.message, "API key not valid");
    assert!(std::error::Error::source(&error).is_some());
}

#[tokio::test]
async fn test_numbers_in_non_throttling_error_are_not_rate_limits() {
    let generator = ScriptedGenerator::failing(ServiceFailure::http(
        400,
        Some("INVALID_ARGUMENT".into()),
        Some("The input token count (14290) exceeds the maximum".into()),
    ));
    let error = chef_with(&generator)
        .generate(&scramble_request())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ServiceError);
    assert_eq!(
        error.message,
        "The input token count (14290) exceeds the maximum"
    );
}

#[tokio::test]
async fn test_status_without_reason_ignores_message_digits() {
    let generator = ScriptedGenerator::failing(ServiceFailure::http(
        503,
        None,
        Some("upstream host gateway-429.internal unavailable".into()),
    ));
    let error = chef_with(&generator)
        .generate(&scramble_request())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ServiceError);
}

#[tokio::test]
async fn test_failure_without_message_uses_fallback() {
    let generator = ScriptedGenerator::failing(ServiceFailure::default());
    let error = chef_with(&generator)
        .generate(&scramble_request())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ServiceError);
    assert_eq!(error.message, messages::SERVICE_FALLBACK);
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_blank_credential_fails_fast() {
    let error = RecipeChef::from_config(&ServiceConfig::new("  ")).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigMissing);
}

#[test]
fn test_from_config_uses_gemini() {
    let chef = RecipeChef::from_config(&ServiceConfig::new("test-key")).unwrap();
    assert_eq!(chef.provider_name(), "gemini");
    assert!(!format!("{chef:?}").contains("test-key"));
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let generator = ScriptedGenerator::returning(quantum_scramble().to_string());
    let chef = chef_with(&generator);

    let first = scramble_request();
    let second = RecipeRequest::new("rice", CookingStyle::Indian, false);
    let (a, b) = tokio::join!(chef.generate(&first), chef.generate(&second));

    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(generator.calls(), 2);
}
