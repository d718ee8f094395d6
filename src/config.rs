//! Element ids, class names, glyphs, and canned text used by the controllers.
//!
//! Every field defaults to the stock portal markup, so an empty JSON object
//! (or no config at all) reproduces the stock page contract. Pages with
//! different naming override only the fields they need.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Complete controller configuration for one page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub chat: ChatConfig,
    pub email_gate: EmailGateConfig,
    pub nav: NavConfig,
    pub modal: ModalConfig,
    pub password: PasswordConfig,
}

impl PageConfig {
    /// Parse a JSON config blob. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the blob is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Chatbot panel markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub panel_id: String,
    pub input_id: String,
    pub body_id: String,
    pub bot_reply: String,
    /// Escape `<`, `>`, `&` and quotes in the user's line before it is
    /// appended. Off by default: the stock page inserts raw markup.
    pub escape_user_text: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            panel_id: CHAT_PANEL_ID.to_owned(),
            input_id: CHAT_INPUT_ID.to_owned(),
            body_id: CHAT_BODY_ID.to_owned(),
            bot_reply: CHAT_BOT_REPLY.to_owned(),
            escape_user_text: false,
        }
    }
}

/// Paid material purchase form markup. Element ids are `prefix + material id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailGateConfig {
    pub input_prefix: String,
    pub hidden_prefix: String,
    pub status_prefix: String,
    pub button_prefix: String,
    pub required_suffix: String,
    pub ok_glyph: String,
    pub ok_color: String,
    pub bad_glyph: String,
    pub bad_color: String,
}

impl Default for EmailGateConfig {
    fn default() -> Self {
        Self {
            input_prefix: EMAIL_INPUT_PREFIX.to_owned(),
            hidden_prefix: EMAIL_HIDDEN_PREFIX.to_owned(),
            status_prefix: EMAIL_STATUS_PREFIX.to_owned(),
            button_prefix: PAY_BUTTON_PREFIX.to_owned(),
            required_suffix: REQUIRED_EMAIL_SUFFIX.to_owned(),
            ok_glyph: EMAIL_OK_GLYPH.to_owned(),
            ok_color: EMAIL_OK_COLOR.to_owned(),
            bad_glyph: EMAIL_BAD_GLYPH.to_owned(),
            bad_color: EMAIL_BAD_COLOR.to_owned(),
        }
    }
}

impl EmailGateConfig {
    #[must_use]
    pub fn input_id(&self, id: &str) -> String {
        format!("{}{id}", self.input_prefix)
    }

    #[must_use]
    pub fn hidden_id(&self, id: &str) -> String {
        format!("{}{id}", self.hidden_prefix)
    }

    #[must_use]
    pub fn status_id(&self, id: &str) -> String {
        format!("{}{id}", self.status_prefix)
    }

    #[must_use]
    pub fn button_id(&self, id: &str) -> String {
        format!("{}{id}", self.button_prefix)
    }
}

/// Mobile navigation drawer markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub nav_id: String,
    pub toggle_class: String,
    pub open_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            nav_id: NAV_ID.to_owned(),
            toggle_class: NAV_TOGGLE_CLASS.to_owned(),
            open_class: NAV_OPEN_CLASS.to_owned(),
        }
    }
}

/// Modal dialog markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub backdrop_class: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self { backdrop_class: MODAL_BACKDROP_CLASS.to_owned() }
    }
}

/// Password toggle glyphs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    pub revealed_glyph: String,
    pub hidden_glyph: String,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            revealed_glyph: PASSWORD_REVEALED_GLYPH.to_owned(),
            hidden_glyph: PASSWORD_HIDDEN_GLYPH.to_owned(),
        }
    }
}
