//! Document-level event routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page installs one `click` and one `keydown` listener on the document.
//! Each event is turned into a [`PageEvent`] and handed to [`dispatch`],
//! which runs the rules of every controller that reacts to it. Rules run in
//! a fixed order and are independent: a missing element in one rule never
//! stops the next.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::config::PageConfig;
use crate::consts::KEY_ESCAPE;
use crate::dom::Page;
use crate::error::DomError;
use crate::modal::ModalManager;
use crate::nav::MobileNav;

/// A document event relevant to the controllers.
#[derive(Debug, Clone)]
pub enum PageEvent<N> {
    /// A click anywhere. `target` is `None` when the target is not an
    /// element.
    Click { target: Option<N> },
    /// A key press, with the key name as reported by the browser.
    KeyDown { key: String },
}

/// What a dispatched event changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub nav_closed: bool,
    /// Id of the modal that was closed, if any.
    pub modal_closed: Option<String>,
}

/// Run every document-level rule for `event`.
pub fn dispatch<P: Page>(page: &mut P, config: &PageConfig, event: &PageEvent<P::Node>) -> Outcome {
    let nav = MobileNav::new(&config.nav);
    let modals = ModalManager::new(&config.modal);
    let mut outcome = Outcome::default();

    match event {
        PageEvent::Click { target } => {
            let target = target.as_ref();
            outcome.nav_closed = settle("nav click", nav.on_document_click(page, target)).unwrap_or(false);
            if settle("modal click", modals.on_document_click(page, target)).unwrap_or(false) {
                outcome.modal_closed = target.map(|t| page.node_id(t));
            }
        }
        PageEvent::KeyDown { key } if key == KEY_ESCAPE => {
            outcome.nav_closed = nav.is_open(page);
            if settle("nav escape", nav.on_escape(page)).is_none() {
                outcome.nav_closed = false;
            }
            outcome.modal_closed = settle("modal escape", modals.on_escape(page)).flatten();
        }
        PageEvent::KeyDown { .. } => {}
    }

    outcome
}

/// Log a rule failure and turn it into `None`. Missing markup is expected
/// on pages that omit a widget, so it is only logged at debug level.
pub fn settle<T>(rule: &str, result: Result<T, DomError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) if err.is_missing() => {
            log::debug!("{rule}: skipped, {err}");
            None
        }
        Err(err) => {
            log::warn!("{rule}: {err}");
            None
        }
    }
}
