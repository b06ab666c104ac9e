// src/config.rs
//
// Explicit runtime configuration, constructed once at startup and passed by
// reference into the resolver and formatter constructors. Replaces the
// process-wide mutable globals of earlier designs.

use std::env;

use crate::error::{AppError, AppResult};
use crate::format::ResponseMode;

/// Process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the card catalog API (no trailing slash)
    pub catalog_base_url: String,

    /// Base URL used for card links in text responses (no trailing slash)
    pub card_link_base: String,

    /// Reaction glyph emitted for failed references
    pub not_found_reaction: String,

    /// Which response payload the formatter produces
    pub response_mode: ResponseMode,

    /// The bot's own author id; messages from this author are ignored.
    /// Empty disables the filter (useful for local console sessions).
    pub bot_user_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_base_url: "https://api.deckbrew.com/mtg".to_string(),
            card_link_base: "http://magiccards.info".to_string(),
            not_found_reaction: "\u{2753}".to_string(),
            response_mode: ResponseMode::Text,
            bot_user_id: String::new(),
        }
    }
}

impl Config {
    /// Build a configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// Recognized variables: `CATALOG_BASE_URL`, `CARD_LINK_BASE`,
    /// `NOT_FOUND_REACTION`, `RESPONSE_MODE` (`text` | `image`),
    /// `BOT_USER_ID`.
    pub fn from_env() -> AppResult<Self> {
        let mut config = Config::default();

        if let Ok(value) = env::var("CATALOG_BASE_URL") {
            config.catalog_base_url = value.trim_end_matches('/').to_string();
        }
        if let Ok(value) = env::var("CARD_LINK_BASE") {
            config.card_link_base = value.trim_end_matches('/').to_string();
        }
        if let Ok(value) = env::var("NOT_FOUND_REACTION") {
            config.not_found_reaction = value;
        }
        if let Ok(value) = env::var("RESPONSE_MODE") {
            config.response_mode = parse_response_mode(&value)?;
        }
        if let Ok(value) = env::var("BOT_USER_ID") {
            config.bot_user_id = value;
        }

        Ok(config)
    }
}

fn parse_response_mode(value: &str) -> AppResult<ResponseMode> {
    match value.to_lowercase().as_str() {
        "text" => Ok(ResponseMode::Text),
        "image" => Ok(ResponseMode::Image),
        other => Err(AppError::Config(format!(
            "invalid RESPONSE_MODE {:?} (expected \"text\" or \"image\")",
            other
        ))),
    }
}
