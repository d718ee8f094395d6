//! Backdrop dialogs.
//!
//! A modal is any element carrying the backdrop class; it is open while its
//! inline `display` is `flex`. Opening a modal locks page scrolling through
//! the body's `overflow` style. The lock is one shared flag: closing any
//! modal clears it, even if another modal is still open.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::config::ModalConfig;
use crate::consts::{DISPLAY_FLEX, DISPLAY_NONE, OVERFLOW_HIDDEN};
use crate::dom::{Page, require};
use crate::error::DomError;

/// Controller for backdrop dialogs.
#[derive(Clone, Copy, Debug)]
pub struct ModalManager<'a> {
    config: &'a ModalConfig,
}

impl<'a> ModalManager<'a> {
    #[must_use]
    pub fn new(config: &'a ModalConfig) -> Self {
        Self { config }
    }

    /// Show the modal `id` and lock page scrolling.
    ///
    /// # Errors
    ///
    /// [`DomError::MissingElement`] if no element has that id.
    pub fn open<P: Page>(&self, page: &mut P, id: &str) -> Result<(), DomError> {
        let modal = require(page, id)?;
        page.set_style(&modal, "display", DISPLAY_FLEX)?;
        set_scroll_lock(page, true)
    }

    /// Hide the modal `id` and release the scroll lock.
    ///
    /// # Errors
    ///
    /// [`DomError::MissingElement`] if no element has that id; the lock is
    /// left as it was.
    pub fn close<P: Page>(&self, page: &mut P, id: &str) -> Result<(), DomError> {
        let modal = require(page, id)?;
        page.set_style(&modal, "display", DISPLAY_NONE)?;
        set_scroll_lock(page, false)
    }

    /// Whether the modal `id` is currently shown.
    #[must_use]
    pub fn is_open<P: Page>(&self, page: &P, id: &str) -> bool {
        page.element_by_id(id).is_some_and(|m| is_flex(page, &m))
    }

    /// Whether page scrolling is locked.
    #[must_use]
    pub fn scroll_locked<P: Page>(&self, page: &P) -> bool {
        page.body()
            .is_some_and(|body| page.style(&body, "overflow").is_ok_and(|v| v == OVERFLOW_HIDDEN))
    }

    /// Close the clicked backdrop. Clicks on anything else, including the
    /// dialog content inside a backdrop, are ignored. Returns whether a
    /// modal was closed.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Self::close`].
    pub fn on_document_click<P: Page>(&self, page: &mut P, target: Option<&P::Node>) -> Result<bool, DomError> {
        let Some(target) = target else {
            return Ok(false);
        };
        if !page.has_class(target, &self.config.backdrop_class) {
            return Ok(false);
        }
        let id = page.node_id(target);
        self.close(page, &id)?;
        Ok(true)
    }

    /// Close the first open backdrop in document order. Returns the id of
    /// the closed modal, if any.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Self::close`].
    pub fn on_escape<P: Page>(&self, page: &mut P) -> Result<Option<String>, DomError> {
        let open = page
            .all_by_class(&self.config.backdrop_class)
            .into_iter()
            .find(|m| is_flex(page, m))
            .map(|m| page.node_id(&m))
            .filter(|id| !id.is_empty());
        let Some(id) = open else {
            return Ok(None);
        };
        self.close(page, &id)?;
        Ok(Some(id))
    }
}

fn is_flex<P: Page>(page: &P, node: &P::Node) -> bool {
    page.style(node, "display").is_ok_and(|v| v == DISPLAY_FLEX)
}

fn set_scroll_lock<P: Page>(page: &mut P, locked: bool) -> Result<(), DomError> {
    let body = page.body().ok_or_else(|| DomError::MissingElement("body".to_owned()))?;
    page.set_style(&body, "overflow", if locked { OVERFLOW_HIDDEN } else { "" })
}
