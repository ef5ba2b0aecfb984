pub mod config;
pub mod errors;
pub mod i18n;
pub mod openai;
pub mod orchestrator;
pub mod server;
pub mod translation;

use config::Config;
use openai::OpenAiClient;
use orchestrator::{Orchestrator, OrchestratorOptions};
use std::sync::Arc;
use translation::Translator;

/// Wire the OpenAI client, translator and orchestrator from configuration.
pub fn build_orchestrator(client: reqwest::Client, config: &Config) -> Orchestrator {
    let completion = Arc::new(OpenAiClient::new(client, config));
    Orchestrator::new(
        Translator::new(completion),
        OrchestratorOptions {
            echo_original: config.echo_original,
        },
    )
}
