use super::*;
use crate::dom::{MemoryPage, NodeId};

// =============================================================
// Helpers
// =============================================================

struct ChatPage {
    page: MemoryPage,
    panel: NodeId,
    input: NodeId,
    body: NodeId,
}

fn chat_page() -> ChatPage {
    let mut page = MemoryPage::new();
    let panel = page.element(page.root(), "chatbot");
    let body = page.element(panel, "chatBody");
    let input = page.input(panel, "chatInput");
    ChatPage { page, panel, input, body }
}

const BOT_LINE: &str = "<p><strong>Bot:</strong> Thank you. We will assist you shortly.</p>";

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_shows_panel_without_inline_display() {
    let config = ChatConfig::default();
    let mut c = chat_page();
    ChatWidget::new(&config).toggle(&mut c.page).unwrap();
    assert_eq!(c.page.style(&c.panel, "display").unwrap(), "block");
}

#[test]
fn toggle_hides_shown_panel() {
    let config = ChatConfig::default();
    let mut c = chat_page();
    c.page.set_style(&c.panel, "display", "block").unwrap();
    ChatWidget::new(&config).toggle(&mut c.page).unwrap();
    assert_eq!(c.page.style(&c.panel, "display").unwrap(), "none");
}

#[test]
fn toggle_treats_other_display_values_as_hidden() {
    let config = ChatConfig::default();
    let mut c = chat_page();
    c.page.set_style(&c.panel, "display", "flex").unwrap();
    ChatWidget::new(&config).toggle(&mut c.page).unwrap();
    assert_eq!(c.page.style(&c.panel, "display").unwrap(), "block");
}

#[test]
fn double_toggle_round_trips_visible_state() {
    let config = ChatConfig::default();
    let widget = ChatWidget::new(&config);
    let mut c = chat_page();
    c.page.set_style(&c.panel, "display", "none").unwrap();
    widget.toggle(&mut c.page).unwrap();
    widget.toggle(&mut c.page).unwrap();
    assert_eq!(c.page.style(&c.panel, "display").unwrap(), "none");
}

#[test]
fn toggle_without_panel_is_missing() {
    let config = ChatConfig::default();
    let mut page = MemoryPage::new();
    let err = ChatWidget::new(&config).toggle(&mut page).unwrap_err();
    assert_eq!(err, DomError::MissingElement("chatbot".to_owned()));
}

// =============================================================
// send_message
// =============================================================

#[test]
fn send_appends_two_lines_and_clears_input() {
    let config = ChatConfig::default();
    let mut c = chat_page();
    c.page.set_value(&c.input, "Hello").unwrap();
    ChatWidget::new(&config).send_message(&mut c.page).unwrap();

    let expected = format!("<p><strong>You:</strong> Hello</p>{BOT_LINE}");
    assert_eq!(c.page.inner_html(c.body), expected);
    assert_eq!(c.page.value(&c.input).unwrap(), "");
}

#[test]
fn send_scrolls_transcript_to_bottom() {
    let config = ChatConfig::default();
    let mut c = chat_page();
    c.page.set_value(&c.input, "Hi").unwrap();
    ChatWidget::new(&config).send_message(&mut c.page).unwrap();
    assert!(c.page.scroll_top(c.body) > 0);
    assert_eq!(c.page.scroll_top(c.body), c.page.scroll_height(&c.body));
}

#[test]
fn send_keeps_untrimmed_text() {
    let config = ChatConfig::default();
    let mut c = chat_page();
    c.page.set_value(&c.input, "  spaced ").unwrap();
    ChatWidget::new(&config).send_message(&mut c.page).unwrap();
    assert!(c.page.inner_html(c.body).starts_with("<p><strong>You:</strong>   spaced </p>"));
}

#[test]
fn send_blank_input_changes_nothing() {
    let config = ChatConfig::default();
    let widget = ChatWidget::new(&config);
    for blank in ["", "   ", "\t\n"] {
        let mut c = chat_page();
        c.page.append_html(&c.body, "<p>earlier</p>").unwrap();
        c.page.set_value(&c.input, blank).unwrap();
        widget.send_message(&mut c.page).unwrap();
        assert_eq!(c.page.inner_html(c.body), "<p>earlier</p>");
        assert_eq!(c.page.value(&c.input).unwrap(), blank);
        assert_eq!(c.page.scroll_top(c.body), 0);
    }
}

#[test]
fn send_repeats_append_in_order() {
    let config = ChatConfig::default();
    let widget = ChatWidget::new(&config);
    let mut c = chat_page();
    for text in ["one", "two"] {
        c.page.set_value(&c.input, text).unwrap();
        widget.send_message(&mut c.page).unwrap();
    }
    let html = c.page.inner_html(c.body);
    assert_eq!(html.matches("<p>").count(), 4);
    assert!(html.find("one").unwrap() < html.find("two").unwrap());
}

#[test]
fn send_inserts_markup_unescaped_by_default() {
    let config = ChatConfig::default();
    let mut c = chat_page();
    c.page.set_value(&c.input, "<img src=x>").unwrap();
    ChatWidget::new(&config).send_message(&mut c.page).unwrap();
    assert!(c.page.inner_html(c.body).contains("<strong>You:</strong> <img src=x></p>"));
}

#[test]
fn send_escapes_when_configured() {
    let config = ChatConfig { escape_user_text: true, ..ChatConfig::default() };
    let mut c = chat_page();
    c.page.set_value(&c.input, "<b>\"hi\" & 'bye'</b>").unwrap();
    ChatWidget::new(&config).send_message(&mut c.page).unwrap();
    assert!(
        c.page
            .inner_html(c.body)
            .contains("&lt;b&gt;&quot;hi&quot; &amp; &#39;bye&#39;&lt;/b&gt;")
    );
    assert!(c.page.inner_html(c.body).ends_with(BOT_LINE));
}

#[test]
fn send_uses_configured_reply() {
    let config = ChatConfig { bot_reply: "Office hours are 9-5.".to_owned(), ..ChatConfig::default() };
    let mut c = chat_page();
    c.page.set_value(&c.input, "when?").unwrap();
    ChatWidget::new(&config).send_message(&mut c.page).unwrap();
    assert!(c.page.inner_html(c.body).ends_with("<p><strong>Bot:</strong> Office hours are 9-5.</p>"));
}

#[test]
fn send_without_transcript_leaves_input_alone() {
    let config = ChatConfig::default();
    let mut page = MemoryPage::new();
    let input = page.input(page.root(), "chatInput");
    page.set_value(&input, "hello").unwrap();
    let err = ChatWidget::new(&config).send_message(&mut page).unwrap_err();
    assert!(err.is_missing());
    assert_eq!(page.value(&input).unwrap(), "hello");
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn transcript_line_formats_author() {
    assert_eq!(transcript_line("You", "x"), "<p><strong>You:</strong> x</p>");
}

#[test]
fn escape_html_leaves_plain_text() {
    assert_eq!(escape_html("plain text 123"), "plain text 123");
}
