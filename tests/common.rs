// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides quiet logging setup, a scripted text generator, and sample payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `alchemical_fridge`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use alchemical_fridge::llm::{ServiceFailure, StructuredRequest, TextGenerator};
use alchemical_fridge::recipe::RecipeChef;
use async_trait::async_trait;
use serde_json::{json, Value};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Text generator that replays one scripted outcome and records what it was asked
pub struct ScriptedGenerator {
    outcome: Result<Option<String>, ServiceFailure>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    schemas: Mutex<Vec<Value>>,
}

impl ScriptedGenerator {
    fn with_outcome(outcome: Result<Option<String>, ServiceFailure>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            schemas: Mutex::new(Vec::new()),
        })
    }

    /// Answer every call with this payload
    pub fn returning(payload: impl Into<String>) -> Arc<Self> {
        Self::with_outcome(Ok(Some(payload.into())))
    }

    /// Answer every call with no content
    pub fn silent() -> Arc<Self> {
        Self::with_outcome(Ok(None))
    }

    /// Reject every call with this failure
    pub fn failing(failure: ServiceFailure) -> Arc<Self> {
        Self::with_outcome(Err(failure))
    }

    /// Number of calls made
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Instruction text of the most recent call
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }

    /// Schema of the most recent call
    pub fn last_schema(&self) -> Option<Value> {
        self.schemas.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn generate_structured(
        &self,
        request: &StructuredRequest<'_>,
    ) -> Result<Option<String>, ServiceFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(request.prompt.to_owned());
        self.schemas
            .lock()
            .unwrap()
            .push(request.response_schema.clone());
        self.outcome.clone()
    }
}

/// Chef wired to a scripted generator
pub fn chef_with(generator: &Arc<ScriptedGenerator>) -> RecipeChef {
    init_test_logging();
    RecipeChef::new(generator.clone())
}

/// A well-formed dish payload
pub fn quantum_scramble() -> Value {
    json!({
        "is_grocery": false,
        "title": "Quantum Scramble",
        "tagline": "Eggs observed into existence",
        "ingredients_list": ["2 eggs", "lemon", "soy sauce"],
        "steps": ["Collapse the egg wavefunction", "Deglaze with regret"],
        "backstory": "Born in a particle accelerator break room.",
        "chef_comment": "Your fridge is a crime scene."
    })
}

/// A well-formed grocery fallback payload
pub fn grocery_run() -> Value {
    json!({
        "is_grocery": true,
        "title": "Time to Buy Groceries",
        "tagline": "Your fridge is echoing.",
        "ingredients_list": ["eggs", "bread", "butter"],
        "steps": ["Put on pants", "Walk to the store"],
        "backstory": "",
        "chef_comment": "Air is not an ingredient."
    })
}
