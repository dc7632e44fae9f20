/// Splitting configuration for the update loop.
use regex::Regex;
use thiserror::Error;

/// Errors raised while resolving a [`UpdateConfig`].
///
/// Configuration is the only fallible surface of the widget; once a
/// config is built, every update is infallible.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least one separator is required")]
    NoSeparators,

    #[error("separators must not be empty")]
    EmptySeparator,

    #[error("failed to compile separator pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Separator configuration for [`update`](crate::update).
///
/// The separator literals are escaped and combined into a single regex
/// alternation at construction time, so pasted text is split on all of
/// them in one pass rather than sequential per-separator passes.
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    splitter: Regex,
}

impl UpdateConfig {
    /// Build a config from literal separator strings.
    pub fn new<S: AsRef<str>>(separators: &[S]) -> Result<Self, ConfigError> {
        if separators.is_empty() {
            return Err(ConfigError::NoSeparators);
        }

        let mut escaped = Vec::with_capacity(separators.len());
        for separator in separators {
            let separator = separator.as_ref();
            if separator.is_empty() {
                return Err(ConfigError::EmptySeparator);
            }
            escaped.push(regex::escape(separator));
        }

        let splitter = Regex::new(&escaped.join("|"))?;
        Ok(Self { splitter })
    }

    /// Split text on the configured separators. Empty pieces are kept;
    /// the caller decides what to do with them.
    pub(crate) fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.splitter.split(text).collect()
    }
}
