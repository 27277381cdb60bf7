use serde::Deserialize;

use crate::error::Result;

/// Slide content parsed out of the model's response.
///
/// The model is a non-deterministic text generator, so every field is
/// optional: a missing `slides` key is an empty deck and a slide missing
/// `title` or `bullet_points` renders as an empty heading or an empty list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlideDeck {
    #[serde(default)]
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Slide {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bullet_points: Vec<String>,
}

impl SlideDeck {
    /// Parses the raw completion text. The model is asked for bare JSON;
    /// anything else (a prose preamble, code fences) is a parse error.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
