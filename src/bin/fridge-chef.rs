// ABOUTME: fridge-chef - terminal front-end for the Alchemical Fridge recipe generator
// ABOUTME: Reads ingredients and a persona from the command line and prints one generated recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Chaos mode with an origin story (defaults)
//! GEMINI_API_KEY=... fridge-chef "2 eggs, half a lemon, soy sauce"
//!
//! # Fine dining, no backstory
//! fridge-chef --style gourmet --no-backstory "stale crackers, mystery cheese"
//!
//! # Machine-readable output
//! fridge-chef --json --style indian "potatoes, yoghurt"
//! ```

use std::process::ExitCode;

use alchemical_fridge::{
    config::ServiceConfig,
    errors::{AppError, AppResult},
    logging::LoggingConfig,
    recipe::{CookingStyle, RecipeChef},
    render::{render_error, render_recipe},
    session::{KitchenState, KitchenStatus},
};
use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "fridge-chef",
    about = "Turn leftovers into legendary meals",
    long_about = "Dump your fridge contents, pick a persona, and let Gemini invent a disaster or a masterpiece."
)]
struct Cli {
    /// What's in your fridge (free text; multiple words are joined)
    ingredients: Vec<String>,

    /// Chef persona: hilarious, gourmet, indian, or easy (unknown values mean easy)
    #[arg(long, short = 's', default_value = "hilarious")]
    style: String,

    /// Skip the absurd backstory
    #[arg(long)]
    no_backstory: bool,

    /// Print the recipe (or error) as JSON
    #[arg(long)]
    json: bool,

    /// Gemini model override
    #[arg(long)]
    model: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let style = CookingStyle::from_str_or_default(&cli.style);
    let state = KitchenState::new(cli.ingredients.join(" "))
        .with_style(style)
        .with_backstory(!cli.no_backstory);

    // Reject blank input before touching configuration
    if let Err(error) = state.request() {
        report(&error, cli.json)?;
        return Ok(ExitCode::from(2));
    }

    let chef = match build_chef(cli.model) {
        Ok(chef) => chef,
        Err(error) => {
            report(&error, cli.json)?;
            return Ok(ExitCode::FAILURE);
        }
    };
    info!(style = %style, "Consulting the culinary gods");

    let state = chef.cook(state).await;

    match state.status {
        KitchenStatus::Served { recipe } => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&recipe)?);
            } else {
                println!("{}", render_recipe(&recipe, style));
            }
            Ok(ExitCode::SUCCESS)
        }
        KitchenStatus::Failed { code, message } => {
            warn!(code = ?code, "Recipe generation failed");
            report(&AppError::new(code, message), cli.json)?;
            Ok(ExitCode::FAILURE)
        }
        KitchenStatus::Idle | KitchenStatus::Cooking => Ok(ExitCode::FAILURE),
    }
}

fn build_chef(model: Option<String>) -> AppResult<RecipeChef> {
    let mut config = ServiceConfig::from_env()?;
    if let Some(model) = model {
        config = config.with_model(model);
    }
    RecipeChef::from_config(&config)
}

/// JSON errors go to stdout alongside JSON recipes; plain messages go to stderr
fn report(error: &AppError, as_json: bool) -> Result<()> {
    let rendered = render_error(error, as_json)?;
    if as_json {
        println!("{rendered}");
    } else {
        eprintln!("{rendered}");
    }
    Ok(())
}
