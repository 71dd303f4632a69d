//! Serializable icon recipe for cross-process configuration.
//!
//! An [`IconRecipe`] captures one run's inputs (the emoji plus the two
//! gradient colors) in a JSON-friendly format, so the generator can be
//! driven from a file or another process.
//!
//! # Example
//!
//! ```
//! use emojicon::IconRecipe;
//!
//! let recipe = IconRecipe::new()
//!     .with_emoji("😀")
//!     .with_gradient("#ff0000", "#0000ff");
//!
//! let json = recipe.to_json().unwrap();
//! let restored = IconRecipe::from_json(&json).unwrap();
//! assert_eq!(restored, recipe);
//! ```

use serde::{Deserialize, Serialize};

/// A serializable description of a single generation run.
///
/// Colors are kept as hex strings and parsed when the recipe is applied,
/// so a recipe file round-trips the user's exact spelling.
///
/// # JSON Format
///
/// ```json
/// {
///   "emoji": "😀",
///   "startColor": "#ff0000",
///   "finishColor": "#0000ff"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconRecipe {
    /// The emoji character to render. `None` fails validation at run time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    /// Starting gradient color as a hex string.
    #[serde(default = "default_color")]
    pub start_color: String,

    /// Finishing gradient color as a hex string.
    #[serde(default = "default_color")]
    pub finish_color: String,
}

fn default_color() -> String {
    "#000000".to_string()
}

impl Default for IconRecipe {
    fn default() -> Self {
        Self {
            emoji: None,
            start_color: default_color(),
            finish_color: default_color(),
        }
    }
}

impl IconRecipe {
    /// Creates an empty recipe with a black-to-black gradient.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the emoji.
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Sets both gradient colors.
    pub fn with_gradient(mut self, start: impl Into<String>, finish: impl Into<String>) -> Self {
        self.start_color = start.into();
        self.finish_color = finish.into();
        self
    }

    /// Serializes the recipe to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the recipe to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a recipe from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let recipe = IconRecipe::new()
            .with_emoji("😀")
            .with_gradient("#ff0000", "00f");

        let json = recipe.to_json().unwrap();
        let restored = IconRecipe::from_json(&json).unwrap();

        assert_eq!(restored, recipe);
        assert_eq!(restored.emoji.as_deref(), Some("😀"));
        assert_eq!(restored.finish_color, "00f");
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let json = IconRecipe::new()
            .with_emoji("🦆")
            .to_json_pretty()
            .unwrap();

        assert!(json.contains("\"startColor\""));
        assert!(json.contains("\"finishColor\""));
    }

    #[test]
    fn missing_colors_default_to_black() {
        let recipe = IconRecipe::from_json(r#"{"emoji": "😀"}"#).unwrap();
        assert_eq!(recipe.start_color, "#000000");
        assert_eq!(recipe.finish_color, "#000000");
    }

    #[test]
    fn empty_recipe_deserializes() {
        let recipe = IconRecipe::from_json("{}").unwrap();
        assert!(recipe.emoji.is_none());
    }
}
