//! Renderer configuration

use crate::error::{Result, WordListError};
use crate::render::Escaping;
use serde::Deserialize;

/// Class carried by the remove cell of each row
pub const DEFAULT_REMOVE_CLASS: &str = "remove-button";

/// Shape of a rendered row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowLayout {
    /// Term and description cells only
    Plain,
    /// Term, description, and a remove cell
    #[default]
    WithRemove,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RenderConfig {
    pub layout: RowLayout,
    pub escaping: Escaping,
    pub remove_class: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: RowLayout::WithRemove,
            escaping: Escaping::Verbatim,
            remove_class: DEFAULT_REMOVE_CLASS.to_string(),
        }
    }
}

impl RenderConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The remove class is written into a quoted attribute without escaping,
    /// so it must be a single bare class name.
    pub fn validate(&self) -> Result<()> {
        if self.remove_class.is_empty() {
            return Err(WordListError::Config("remove class is empty".to_string()));
        }
        if let Some(bad) = self
            .remove_class
            .chars()
            .find(|&c| c.is_whitespace() || matches!(c, '\'' | '"' | '<' | '>' | '&'))
        {
            return Err(WordListError::Config(format!(
                "remove class {:?} contains {:?}",
                self.remove_class, bad
            )));
        }
        Ok(())
    }
}
