use anyhow::{bail, Context, Result};
use std::net::IpAddr;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    // OpenAI
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_api_url: String,
    pub openai_temperature: f32,
    pub openai_max_tokens: u32,

    // Server
    pub host: IpAddr,
    pub port: u16,

    // Responses
    pub echo_original: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // OpenAI
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY not set")?,
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string()),
            openai_temperature: parse_var("OPENAI_TEMPERATURE", 0.3)?,
            openai_max_tokens: parse_var("OPENAI_MAX_TOKENS", 1000)?,

            // Server
            host: parse_var("HOST", IpAddr::from([0, 0, 0, 0]))?,
            port: parse_var("PORT", 8080)?,

            // Responses
            echo_original: match std::env::var("ECHO_ORIGINAL") {
                Ok(value) => parse_bool(&value).context("ECHO_ORIGINAL must be a boolean")?,
                Err(_) => false,
            },
        })
    }
}

/// Read an optional variable, failing loudly on values that don't parse.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{} has invalid value '{}': {}", name, value, e)),
        Err(_) => Ok(default),
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("unrecognized boolean '{}'", other),
    }
}
