//! Chatbot panel: show/hide toggle and a local transcript.
//!
//! There is no backend. Each send appends the user's line and a fixed bot
//! reply to the transcript container, then scrolls it to the bottom.
//!
//! The user's line is inserted as markup. Unless
//! [`ChatConfig::escape_user_text`] is set, typing `<b>hi</b>` renders bold
//! text and arbitrary HTML from the input reaches the page unescaped.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::config::ChatConfig;
use crate::consts::{DISPLAY_BLOCK, DISPLAY_NONE};
use crate::dom::{Page, require};
use crate::error::DomError;

/// Controller for the chatbot panel.
#[derive(Clone, Copy, Debug)]
pub struct ChatWidget<'a> {
    config: &'a ChatConfig,
}

impl<'a> ChatWidget<'a> {
    #[must_use]
    pub fn new(config: &'a ChatConfig) -> Self {
        Self { config }
    }

    /// Show the panel if it is hidden or has no inline display, hide it if
    /// it is shown.
    ///
    /// # Errors
    ///
    /// [`DomError::MissingElement`] if the panel is absent; the page is left
    /// untouched.
    pub fn toggle<P: Page>(&self, page: &mut P) -> Result<(), DomError> {
        let panel = require(page, &self.config.panel_id)?;
        let next = if page.style(&panel, "display")? == DISPLAY_BLOCK { DISPLAY_NONE } else { DISPLAY_BLOCK };
        page.set_style(&panel, "display", next)
    }

    /// Append the input's text and the canned reply, clear the input, and
    /// scroll the transcript to its end. Blank input does nothing.
    ///
    /// # Errors
    ///
    /// [`DomError::MissingElement`] if the input or transcript is absent.
    pub fn send_message<P: Page>(&self, page: &mut P) -> Result<(), DomError> {
        let input = require(page, &self.config.input_id)?;
        let body = require(page, &self.config.body_id)?;

        let text = page.value(&input)?;
        if text.trim().is_empty() {
            return Ok(());
        }

        let user_text = if self.config.escape_user_text { escape_html(&text) } else { text };
        page.append_html(&body, &transcript_line("You", &user_text))?;
        page.append_html(&body, &transcript_line("Bot", &self.config.bot_reply))?;
        log::debug!("chat: appended message ({} bytes)", user_text.len());

        page.set_value(&input, "")?;
        let bottom = page.scroll_height(&body);
        page.set_scroll_top(&body, bottom);
        Ok(())
    }
}

/// One transcript paragraph. `text` is interpolated as-is.
#[must_use]
pub fn transcript_line(author: &str, text: &str) -> String {
    format!("<p><strong>{author}:</strong> {text}</p>")
}

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
