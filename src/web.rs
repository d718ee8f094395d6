//! Browser entry points.
//!
//! Markup calls these exports by the same names the old page script used
//! (`onclick="openModal('loginModal')"`, `oninput="validateGmail(12)"`).
//! [`install`] must run once after the module loads: it sets up logging,
//! stores the page configuration, and attaches the document listeners.
//! Requires a browser environment.

use std::cell::{Cell, RefCell};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, KeyboardEvent};

use crate::chat::ChatWidget;
use crate::config::PageConfig;
use crate::dom::WebPage;
use crate::email_gate::EmailGate;
use crate::error::DomError;
use crate::events::{PageEvent, dispatch, settle};
use crate::modal::ModalManager;
use crate::nav::MobileNav;
use crate::password::PasswordToggle;

thread_local! {
    static CONFIG: RefCell<PageConfig> = RefCell::new(PageConfig::default());
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Run `f` against the live document with the installed config.
fn with_page<T>(rule: &str, f: impl FnOnce(&mut WebPage, &PageConfig) -> Result<T, DomError>) -> Option<T> {
    let Some(mut page) = WebPage::current() else {
        log::warn!("{rule}: no document");
        return None;
    };
    CONFIG.with(|config| settle(rule, f(&mut page, &config.borrow())))
}

/// Material ids arrive as numbers or strings depending on the template.
fn id_string(id: &JsValue) -> String {
    id.as_string()
        .or_else(|| id.as_f64().map(|n| n.to_string()))
        .unwrap_or_default()
}

fn init_logging() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Warn };
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already set");
    }
}

/// Configure the controllers and attach the document listeners.
///
/// `config_json` overrides element ids and text; `None` or an invalid blob
/// keeps the stock markup contract. Later calls only replace the config.
///
/// # Errors
///
/// Throws if the listeners cannot be attached.
#[wasm_bindgen]
pub fn install(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging();

    let config = match config_json.as_deref().map(PageConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            log::warn!("{err}; using defaults");
            PageConfig::default()
        }
        None => PageConfig::default(),
    };
    CONFIG.with(|cell| *cell.borrow_mut() = config);

    if INSTALLED.with(Cell::get) {
        return Ok(());
    }
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Err(JsValue::from_str("no document"));
    };

    let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let target = ev.target().and_then(|t| t.dyn_ref::<Element>().cloned());
        with_page("click", |page, config| Ok(dispatch(page, config, &PageEvent::Click { target })));
    });
    doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
        with_page("keydown", |page, config| Ok(dispatch(page, config, &PageEvent::KeyDown { key: ev.key() })));
    });
    doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();

    INSTALLED.with(|flag| flag.set(true));
    log::info!("portal-ui installed");
    Ok(())
}

#[wasm_bindgen(js_name = toggleChatbot)]
pub fn toggle_chatbot() {
    with_page("toggleChatbot", |page, config| ChatWidget::new(&config.chat).toggle(page));
}

#[wasm_bindgen(js_name = sendMessage)]
pub fn send_message() {
    with_page("sendMessage", |page, config| ChatWidget::new(&config.chat).send_message(page));
}

#[wasm_bindgen(js_name = copyEmail)]
pub fn copy_email(id: JsValue) {
    let id = id_string(&id);
    with_page("copyEmail", |page, config| EmailGate::new(&config.email_gate).copy_email(page, &id));
}

#[wasm_bindgen(js_name = validateGmail)]
pub fn validate_gmail(id: JsValue) {
    let id = id_string(&id);
    with_page("validateGmail", |page, config| EmailGate::new(&config.email_gate).validate_gmail(page, &id));
}

#[wasm_bindgen(js_name = toggleMobileNav)]
pub fn toggle_mobile_nav() {
    with_page("toggleMobileNav", |page, config| MobileNav::new(&config.nav).toggle(page));
}

#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(id: &str) {
    with_page("openModal", |page, config| ModalManager::new(&config.modal).open(page, id));
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(id: &str) {
    with_page("closeModal", |page, config| ModalManager::new(&config.modal).close(page, id));
}

#[wasm_bindgen(js_name = togglePassword)]
pub fn toggle_password(input_id: &str, button: Option<Element>) {
    with_page("togglePassword", |page, config| {
        PasswordToggle::new(&config.password).toggle(page, input_id, button.as_ref())
    });
}
