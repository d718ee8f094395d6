//! Mobile navigation drawer.
//!
//! The drawer is open while the nav element carries the open class. It
//! closes on Escape or on a click that lands outside both the drawer and
//! its toggle button.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::NavConfig;
use crate::dom::{Page, require};
use crate::error::DomError;

/// Controller for the mobile navigation drawer.
#[derive(Clone, Copy, Debug)]
pub struct MobileNav<'a> {
    config: &'a NavConfig,
}

impl<'a> MobileNav<'a> {
    #[must_use]
    pub fn new(config: &'a NavConfig) -> Self {
        Self { config }
    }

    /// Flip the open class. Returns whether the drawer is now open.
    ///
    /// # Errors
    ///
    /// [`DomError::MissingElement`] if the nav element is absent.
    pub fn toggle<P: Page>(&self, page: &mut P) -> Result<bool, DomError> {
        let nav = require(page, &self.config.nav_id)?;
        page.toggle_class(&nav, &self.config.open_class)
    }

    #[must_use]
    pub fn is_open<P: Page>(&self, page: &P) -> bool {
        page.element_by_id(&self.config.nav_id)
            .is_some_and(|nav| page.has_class(&nav, &self.config.open_class))
    }

    /// Close the drawer when a click lands outside it and its toggle.
    /// Returns whether the drawer was closed.
    ///
    /// Requires both the nav and the toggle to exist; a closed drawer is
    /// left alone.
    ///
    /// # Errors
    ///
    /// [`DomError::MissingElement`] if the nav or toggle is absent.
    pub fn on_document_click<P: Page>(&self, page: &mut P, target: Option<&P::Node>) -> Result<bool, DomError> {
        let nav = require(page, &self.config.nav_id)?;
        let toggle = page
            .first_by_class(&self.config.toggle_class)
            .ok_or_else(|| DomError::MissingElement(format!(".{}", self.config.toggle_class)))?;

        if !page.has_class(&nav, &self.config.open_class) {
            return Ok(false);
        }
        let inside = target.is_some_and(|t| page.contains(&nav, t) || page.contains(&toggle, t));
        if inside {
            return Ok(false);
        }
        page.remove_class(&nav, &self.config.open_class)?;
        Ok(true)
    }

    /// Close the drawer. Safe to call when already closed.
    ///
    /// # Errors
    ///
    /// [`DomError::MissingElement`] if the nav element is absent.
    pub fn on_escape<P: Page>(&self, page: &mut P) -> Result<(), DomError> {
        let nav = require(page, &self.config.nav_id)?;
        page.remove_class(&nav, &self.config.open_class)
    }
}
