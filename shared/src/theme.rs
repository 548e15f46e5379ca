//! # Theme Tokens
//!
//! Colors are opaque CSS values handed to the views unchanged. The field
//! names follow the design system: `neutral` for the header band, `title` for
//! light section backgrounds, `background` for dark foreground text, `bar`
//! for the active-tab underline and `accent` for highlighted words.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub neutral: String,
    pub background: String,
    pub title: String,
    pub bar: String,
    pub accent: String,
    pub body_text: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            neutral: "#FFFFFF".to_string(),
            background: "#000000".to_string(),
            title: "#F5F5F5".to_string(),
            bar: "#3CBD72".to_string(),
            accent: "#3CBD72".to_string(),
            body_text: "#303030".to_string(),
        }
    }
}

impl Theme {
    /// Parse theme tokens from JSON. Absent fields keep their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
