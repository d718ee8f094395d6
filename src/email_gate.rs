//! Paid material purchase form: email mirror and Gmail gate.
//!
//! Each material row has a visible email field, a hidden field submitted
//! with the payment form, a status marker, and a pay button, all keyed by
//! the material id. The button is only enabled for addresses ending in the
//! required suffix. The check is a plain suffix match, not address
//! validation.

#[cfg(test)]
#[path = "email_gate_test.rs"]
mod email_gate_test;

use crate::config::EmailGateConfig;
use crate::dom::{Page, require};
use crate::error::DomError;

/// Whether `value`, once trimmed, ends with `suffix`.
#[must_use]
pub fn is_accepted_email(value: &str, suffix: &str) -> bool {
    value.trim().ends_with(suffix)
}

/// Controller for the paid material email fields.
#[derive(Clone, Copy, Debug)]
pub struct EmailGate<'a> {
    config: &'a EmailGateConfig,
}

impl<'a> EmailGate<'a> {
    #[must_use]
    pub fn new(config: &'a EmailGateConfig) -> Self {
        Self { config }
    }

    /// Copy the visible field's value, untrimmed, into the hidden mirror.
    ///
    /// # Errors
    ///
    /// [`DomError::MissingElement`] if either field is absent.
    pub fn copy_email<P: Page>(&self, page: &mut P, id: &str) -> Result<(), DomError> {
        let visible = require(page, &self.config.input_id(id))?;
        let hidden = require(page, &self.config.hidden_id(id))?;
        let value = page.value(&visible)?;
        page.set_value(&hidden, &value)
    }

    /// Mark the address as accepted or rejected and enable or disable the
    /// pay button to match. Returns whether it was accepted.
    ///
    /// # Errors
    ///
    /// [`DomError::MissingElement`] if the field, status marker, or button
    /// is absent; nothing is changed in that case.
    pub fn validate_gmail<P: Page>(&self, page: &mut P, id: &str) -> Result<bool, DomError> {
        let input = require(page, &self.config.input_id(id))?;
        let status = require(page, &self.config.status_id(id))?;
        let button = require(page, &self.config.button_id(id))?;

        let accepted = is_accepted_email(&page.value(&input)?, &self.config.required_suffix);
        let (glyph, color) = if accepted {
            (&self.config.ok_glyph, &self.config.ok_color)
        } else {
            (&self.config.bad_glyph, &self.config.bad_color)
        };
        page.set_inner_html(&status, glyph);
        page.set_style(&status, "color", color)?;
        page.set_disabled(&button, !accepted)?;
        Ok(accepted)
    }
}
