//! Demo binary - translates a German greeting into five languages and prints the results
//!
//! Usage:
//!   cargo run --bin demo
//!
//! Required environment variables:
//! - OPENAI_API_KEY
//!
//! Optional:
//! - OPENAI_MODEL (defaults to gpt-4o-mini)
//! - OPENAI_API_URL

use anyhow::{Context, Result};
use polyglot_api::{build_orchestrator, config::Config, i18n::Locale, orchestrator::TranslationRequest};
use std::time::Instant;

const TEXT: &str = "Hallo, wie geht es Ihnen heute? Es ist ja echt ein wunderschöner Tag.";
const TARGETS: &[&str] = &["en", "fr", "it", "ja", "zh"];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("polyglot_api=info".parse()?),
        )
        .init();

    let mut config = Config::from_env()?;
    // Print translations only, whatever the service is configured to echo
    config.echo_original = false;

    let client = reqwest::Client::builder()
        .build()
        .context("Failed to create HTTP client")?;
    let orchestrator = build_orchestrator(client, &config);

    let request = TranslationRequest {
        source_language: Locale::parse("de"),
        target_languages: TARGETS.iter().map(|tag| Locale::parse(tag)).collect(),
        text: TEXT.to_string(),
    };

    let started = Instant::now();
    let response = orchestrator.handle(request).await?;

    for (locale, translation) in &response.translations {
        println!("{}: {}", locale.display_name(), translation);
    }
    println!("total: {:?}", started.elapsed());

    Ok(())
}
