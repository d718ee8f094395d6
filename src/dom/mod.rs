//! Page access for the controllers.
//!
//! DESIGN
//! ======
//! [`Page`] exposes only the DOM operations the controllers perform. Nodes
//! are opaque handles obtained per call; nothing is cached across events.
//! Reads that can fail in the browser (style, value, input type) return
//! `Result` so the `web-sys` page can report a wrong element kind instead
//! of guessing.

pub mod memory;
#[cfg(feature = "hydrate")]
pub mod web;

pub use memory::{MemoryPage, NodeId};
#[cfg(feature = "hydrate")]
pub use web::WebPage;

use crate::error::DomError;

/// The document as seen by the controllers.
pub trait Page {
    /// Handle to one element.
    type Node: Clone;

    /// First element with the given id, in document order.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// First element carrying `class`, in document order.
    fn first_by_class(&self, class: &str) -> Option<Self::Node>;

    /// Every element carrying `class`, in document order.
    fn all_by_class(&self, class: &str) -> Vec<Self::Node>;

    /// The `<body>` element.
    fn body(&self) -> Option<Self::Node>;

    /// The element's `id` attribute, empty when unset.
    fn node_id(&self, node: &Self::Node) -> String;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    // --- Classes ---

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Flip `class` on `node`. Returns whether the class is now present.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the browser rejects the class token.
    fn toggle_class(&mut self, node: &Self::Node, class: &str) -> Result<bool, DomError>;

    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the browser rejects the class token.
    fn remove_class(&mut self, node: &Self::Node, class: &str) -> Result<(), DomError>;

    // --- Inline style ---

    /// Inline style value of `property`, empty when unset.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::WrongKind`] if the node has no inline style.
    fn style(&self, node: &Self::Node, property: &str) -> Result<String, DomError>;

    /// Set inline `property`; an empty `value` removes it.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::WrongKind`] if the node has no inline style.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str) -> Result<(), DomError>;

    // --- Form fields ---

    /// Current `value` of an input-like element.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::WrongKind`] if the node has no `value`.
    fn value(&self, node: &Self::Node) -> Result<String, DomError>;

    /// # Errors
    ///
    /// Returns [`DomError::WrongKind`] if the node has no `value`.
    fn set_value(&mut self, node: &Self::Node, value: &str) -> Result<(), DomError>;

    /// The `type` of an `<input>`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::WrongKind`] if the node is not an `<input>`.
    fn input_type(&self, node: &Self::Node) -> Result<String, DomError>;

    /// # Errors
    ///
    /// Returns [`DomError::WrongKind`] if the node is not an `<input>`.
    fn set_input_type(&mut self, node: &Self::Node, input_type: &str) -> Result<(), DomError>;

    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the attribute cannot be written.
    fn set_disabled(&mut self, node: &Self::Node, disabled: bool) -> Result<(), DomError>;

    // --- Content ---

    /// Replace the node's children with a single text node.
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Replace the node's markup.
    fn set_inner_html(&mut self, node: &Self::Node, html: &str);

    /// Append markup after the node's existing content. `html` is parsed,
    /// not escaped.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the browser rejects the markup.
    fn append_html(&mut self, node: &Self::Node, html: &str) -> Result<(), DomError>;

    // --- Scrolling ---

    fn scroll_height(&self, node: &Self::Node) -> i32;

    fn set_scroll_top(&mut self, node: &Self::Node, top: i32);
}

/// Look up `id` or report it missing.
///
/// # Errors
///
/// Returns [`DomError::MissingElement`] when no element has that id.
pub fn require<P: Page>(page: &P, id: &str) -> Result<P::Node, DomError> {
    page.element_by_id(id).ok_or_else(|| DomError::MissingElement(id.to_owned()))
}
