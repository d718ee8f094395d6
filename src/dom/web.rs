//! [`Page`] over the live browser document.
//!
//! Requires a browser environment. Form values go through `Reflect` so that
//! `<input>`, `<textarea>` and `<select>` all work; everything else uses the
//! typed `web-sys` bindings.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use super::Page;
use crate::error::DomError;

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// The window's document.
#[derive(Clone, Debug)]
pub struct WebPage {
    doc: Document,
}

impl WebPage {
    /// Bind to `window.document`, if there is one.
    #[must_use]
    pub fn current() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(|doc| Self { doc })
    }

    fn html_element(node: &Element) -> Result<&HtmlElement, DomError> {
        node.dyn_ref::<HtmlElement>()
            .ok_or_else(|| DomError::WrongKind { id: node.id(), expected: "html element" })
    }

    fn input_element(node: &Element) -> Result<&HtmlInputElement, DomError> {
        node.dyn_ref::<HtmlInputElement>()
            .ok_or_else(|| DomError::WrongKind { id: node.id(), expected: "input" })
    }
}

impl Page for WebPage {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        if id.is_empty() {
            return None;
        }
        self.doc.get_element_by_id(id)
    }

    fn first_by_class(&self, class: &str) -> Option<Element> {
        self.doc.get_elements_by_class_name(class).item(0)
    }

    fn all_by_class(&self, class: &str) -> Vec<Element> {
        let collection = self.doc.get_elements_by_class_name(class);
        (0..collection.length()).filter_map(|i| collection.item(i)).collect()
    }

    fn body(&self) -> Option<Element> {
        self.doc.body().map(Element::from)
    }

    fn node_id(&self, node: &Element) -> String {
        node.id()
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &web_sys::Node = node;
        ancestor.contains(Some(node))
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn toggle_class(&mut self, node: &Element, class: &str) -> Result<bool, DomError> {
        Ok(node.class_list().toggle(class)?)
    }

    fn remove_class(&mut self, node: &Element, class: &str) -> Result<(), DomError> {
        Ok(node.class_list().remove_1(class)?)
    }

    fn style(&self, node: &Element, property: &str) -> Result<String, DomError> {
        Ok(Self::html_element(node)?.style().get_property_value(property)?)
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) -> Result<(), DomError> {
        let style = Self::html_element(node)?.style();
        if value.is_empty() {
            style.remove_property(property)?;
        } else {
            style.set_property(property, value)?;
        }
        Ok(())
    }

    fn value(&self, node: &Element) -> Result<String, DomError> {
        js_sys::Reflect::get(node, &JsValue::from_str("value"))?
            .as_string()
            .ok_or_else(|| DomError::WrongKind { id: node.id(), expected: "form field" })
    }

    fn set_value(&mut self, node: &Element, value: &str) -> Result<(), DomError> {
        if js_sys::Reflect::set(node, &JsValue::from_str("value"), &JsValue::from_str(value))? {
            Ok(())
        } else {
            Err(DomError::WrongKind { id: node.id(), expected: "form field" })
        }
    }

    fn input_type(&self, node: &Element) -> Result<String, DomError> {
        Ok(Self::input_element(node)?.type_())
    }

    fn set_input_type(&mut self, node: &Element, input_type: &str) -> Result<(), DomError> {
        Self::input_element(node)?.set_type(input_type);
        Ok(())
    }

    fn set_disabled(&mut self, node: &Element, disabled: bool) -> Result<(), DomError> {
        node.toggle_attribute_with_force("disabled", disabled)?;
        Ok(())
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_inner_html(&mut self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn append_html(&mut self, node: &Element, html: &str) -> Result<(), DomError> {
        Ok(node.insert_adjacent_html("beforeend", html)?)
    }

    fn scroll_height(&self, node: &Element) -> i32 {
        node.scroll_height()
    }

    fn set_scroll_top(&mut self, node: &Element, top: i32) {
        node.set_scroll_top(top);
    }
}
