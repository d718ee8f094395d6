//! Password visibility toggle.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use crate::config::PasswordConfig;
use crate::consts::{INPUT_TYPE_PASSWORD, INPUT_TYPE_TEXT};
use crate::dom::{Page, require};
use crate::error::DomError;

/// Controller for show/hide password buttons.
#[derive(Clone, Copy, Debug)]
pub struct PasswordToggle<'a> {
    config: &'a PasswordConfig,
}

impl<'a> PasswordToggle<'a> {
    #[must_use]
    pub fn new(config: &'a PasswordConfig) -> Self {
        Self { config }
    }

    /// Unmask a `password` input or mask any other input, and set the
    /// button's glyph to match. Returns whether the text is now revealed.
    ///
    /// # Errors
    ///
    /// [`DomError::MissingElement`] if the input is absent.
    pub fn toggle<P: Page>(&self, page: &mut P, input_id: &str, button: Option<&P::Node>) -> Result<bool, DomError> {
        let input = require(page, input_id)?;
        let reveal = page.input_type(&input)? == INPUT_TYPE_PASSWORD;
        page.set_input_type(&input, if reveal { INPUT_TYPE_TEXT } else { INPUT_TYPE_PASSWORD })?;
        if let Some(button) = button {
            let glyph = if reveal { &self.config.revealed_glyph } else { &self.config.hidden_glyph };
            page.set_text(button, glyph);
        }
        Ok(reveal)
    }
}
