use crate::errors::TranslateError;
use crate::i18n::Locale;
use crate::openai::ChatCompletion;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Build the system prompt for translation
fn build_system_prompt(source_language: &str, target_language: &str) -> String {
    format!(
        "You are a {} to {} translator.",
        source_language, target_language
    )
}

/// Build the user prompt for translation
fn build_user_prompt(text: &str) -> String {
    format!("Translate: {}", text)
}

/// Translates a single text between two locales through a chat-completion backend.
#[derive(Debug, Clone)]
pub struct Translator {
    completion: Arc<dyn ChatCompletion>,
}

impl Translator {
    pub fn new(completion: Arc<dyn ChatCompletion>) -> Self {
        Self { completion }
    }

    /// Translate `text` from `source` to `target`.
    ///
    /// Makes exactly one completion call. Any failure from the backend, including
    /// an empty completion, is returned to the caller as is.
    pub async fn translate(
        &self,
        source: &Locale,
        target: &Locale,
        text: &str,
    ) -> Result<String, TranslateError> {
        let system_prompt = build_system_prompt(&source.display_name(), &target.display_name());
        let user_prompt = build_user_prompt(text);

        let started = Instant::now();
        let result = self.completion.complete(&system_prompt, &user_prompt).await;
        let duration = started.elapsed();

        match &result {
            Ok(translated) => debug!(
                "\nS: {}\nU: {}\nR: {}\nD: {:?}",
                system_prompt, user_prompt, translated, duration
            ),
            Err(e) => debug!(
                "\nS: {}\nU: {}\nE: {}\nD: {:?}",
                system_prompt, user_prompt, e, duration
            ),
        }

        result.map_err(Into::into)
    }
}
