//! Fan-out/fan-in of one translation request into per-locale completion calls.
//!
//! Every target locale gets its own task on the runtime's worker pool. All tasks
//! are spawned before the first one is awaited, so a request costs roughly as
//! much as its slowest translation. Results are collected in target order; the
//! first failure fails the whole request.

use crate::errors::TranslateError;
use crate::i18n::Locale;
use crate::translation::Translator;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub source_language: Locale,
    #[serde(default)]
    pub target_languages: BTreeSet<Locale>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translations: BTreeMap<Locale, String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OrchestratorOptions {
    /// Seed the response with the untranslated text under the source locale
    pub echo_original: bool,
}

/// Check a request before anything is dispatched.
pub fn validate(request: &TranslationRequest) -> Result<(), TranslateError> {
    if request.target_languages.is_empty() {
        return Err(TranslateError::validation(
            "targetLanguages must not be empty",
        ));
    }
    if request.text.trim().is_empty() {
        return Err(TranslateError::validation("text must not be blank"));
    }
    if !request.source_language.has_language() {
        return Err(TranslateError::validation(
            "sourceLanguage must have a language code",
        ));
    }
    if request
        .target_languages
        .iter()
        .any(|locale| !locale.has_language())
    {
        return Err(TranslateError::validation(
            "targetLanguages must not contain a blank language code",
        ));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Orchestrator {
    translator: Arc<Translator>,
    options: OrchestratorOptions,
}

impl Orchestrator {
    pub fn new(translator: Translator, options: OrchestratorOptions) -> Self {
        Self {
            translator: Arc::new(translator),
            options,
        }
    }

    pub fn options(&self) -> OrchestratorOptions {
        self.options
    }

    /// Translate the request's text into every target locale.
    pub async fn handle(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResponse, TranslateError> {
        validate(&request)?;

        let TranslationRequest {
            source_language,
            target_languages,
            text,
        } = request;

        info!(
            "Translating {} chars from {} into {} languages",
            text.chars().count(),
            source_language,
            target_languages.len()
        );

        let started = Instant::now();
        let text: Arc<str> = Arc::from(text);

        // Fan out: the set is ordered, so dispatch order is by language code
        let tasks: Vec<(Locale, JoinHandle<Result<String, TranslateError>>)> = target_languages
            .into_iter()
            .map(|target| {
                let translator = Arc::clone(&self.translator);
                let source = source_language.clone();
                let task_target = target.clone();
                let text = Arc::clone(&text);

                let handle = tokio::spawn(async move {
                    translator.translate(&source, &task_target, &text).await
                });
                (target, handle)
            })
            .collect();

        let mut translations = BTreeMap::new();
        if self.options.echo_original {
            translations.insert(source_language.clone(), text.to_string());
        }

        // Fan in
        let mut pending = tasks.into_iter();
        while let Some((target, handle)) = pending.next() {
            let outcome = match handle.await {
                Ok(result) => result,
                Err(e) => Err(TranslateError::Task(e.to_string())),
            };

            match outcome {
                Ok(translated) => {
                    debug!("Received translation for {}", target);
                    translations.insert(target, translated);
                }
                Err(e) => {
                    warn!("Translation to {} failed: {}", target, e);
                    // Nobody will read the remaining results
                    for (_, remaining) in pending.by_ref() {
                        remaining.abort();
                    }
                    return Err(e);
                }
            }
        }

        info!(
            "Translated into {} languages in {:?}",
            translations.len(),
            started.elapsed()
        );

        Ok(TranslationResponse { translations })
    }
}
