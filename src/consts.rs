//! Default markup contract for the portal pages.

// ── Chatbot ─────────────────────────────────────────────────────

pub const CHAT_PANEL_ID: &str = "chatbot";
pub const CHAT_INPUT_ID: &str = "chatInput";
pub const CHAT_BODY_ID: &str = "chatBody";

/// Fixed reply appended after every user line.
pub const CHAT_BOT_REPLY: &str = "Thank you. We will assist you shortly.";

// ── Paid material email gate ────────────────────────────────────

pub const EMAIL_INPUT_PREFIX: &str = "email_";
pub const EMAIL_HIDDEN_PREFIX: &str = "hidden_email_";
pub const EMAIL_STATUS_PREFIX: &str = "email_status_";
pub const PAY_BUTTON_PREFIX: &str = "pay_btn_";

/// Only addresses ending with this suffix may purchase.
pub const REQUIRED_EMAIL_SUFFIX: &str = "@gmail.com";

pub const EMAIL_OK_GLYPH: &str = "✔️";
pub const EMAIL_OK_COLOR: &str = "green";
pub const EMAIL_BAD_GLYPH: &str = "❌";
pub const EMAIL_BAD_COLOR: &str = "red";

// ── Navigation ──────────────────────────────────────────────────

pub const NAV_ID: &str = "primaryNav";
pub const NAV_TOGGLE_CLASS: &str = "nav-toggle";
pub const NAV_OPEN_CLASS: &str = "is-open";

// ── Modals ──────────────────────────────────────────────────────

pub const MODAL_BACKDROP_CLASS: &str = "modal-backdrop";

// ── Password toggle ─────────────────────────────────────────────

/// Shown while the password is readable.
pub const PASSWORD_REVEALED_GLYPH: &str = "🙈";
/// Shown while the password is masked.
pub const PASSWORD_HIDDEN_GLYPH: &str = "👁";

// ── Keys / styles ───────────────────────────────────────────────

pub const KEY_ESCAPE: &str = "Escape";

pub const DISPLAY_BLOCK: &str = "block";
pub const DISPLAY_FLEX: &str = "flex";
pub const DISPLAY_NONE: &str = "none";
pub const OVERFLOW_HIDDEN: &str = "hidden";

pub const INPUT_TYPE_PASSWORD: &str = "password";
pub const INPUT_TYPE_TEXT: &str = "text";
