//! In-memory page used by native builds and tests.
//!
//! Elements live in an arena and form a single tree rooted at `<body>`.
//! Document order is a pre-order walk from the root. Markup passed to
//! `append_html` is stored as a string; it is not parsed into nodes.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::BTreeMap;

use super::Page;
use crate::error::DomError;

/// Handle to a [`MemoryPage`] element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// What a node stands in for. Decides which reads and writes it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A plain element (`<div>`, `<span>`, `<nav>`, `<button>`).
    Element,
    /// An `<input>`; carries `value` and `type`.
    Input,
}

#[derive(Debug, Clone)]
struct MemoryNode {
    kind: NodeKind,
    id: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    value: String,
    input_type: String,
    html: String,
    disabled: bool,
    scroll_top: i32,
}

impl MemoryNode {
    fn new(kind: NodeKind, id: &str, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            id: id.to_owned(),
            parent,
            children: Vec::new(),
            classes: Vec::new(),
            style: BTreeMap::new(),
            value: String::new(),
            input_type: if kind == NodeKind::Input { "text".to_owned() } else { String::new() },
            html: String::new(),
            disabled: false,
            scroll_top: 0,
        }
    }
}

/// A detached document tree.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    nodes: Vec<MemoryNode>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self { nodes: vec![MemoryNode::new(NodeKind::Element, "", None)] }
    }
}

impl MemoryPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The `<body>` element every other node descends from.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    // --- Building ---

    /// Append a plain element with `id` (may be empty) under `parent`.
    pub fn element(&mut self, parent: NodeId, id: &str) -> NodeId {
        self.append(parent, NodeKind::Element, id)
    }

    /// Append an `<input type="text">` with `id` under `parent`.
    pub fn input(&mut self, parent: NodeId, id: &str) -> NodeId {
        self.append(parent, NodeKind::Input, id)
    }

    /// Add `class` to `node` if not already present.
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        let classes = &mut self.nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn append(&mut self, parent: NodeId, kind: NodeKind, id: &str) -> NodeId {
        let node = NodeId(self.nodes.len());
        self.nodes.push(MemoryNode::new(kind, id, Some(parent)));
        self.nodes[parent.0].children.push(node);
        node
    }

    // --- Inspection ---

    #[must_use]
    pub fn kind(&self, node: NodeId) -> NodeKind {
        self.nodes[node.0].kind
    }

    #[must_use]
    pub fn inner_html(&self, node: NodeId) -> &str {
        &self.nodes[node.0].html
    }

    #[must_use]
    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.nodes[node.0].disabled
    }

    #[must_use]
    pub fn scroll_top(&self, node: NodeId) -> i32 {
        self.nodes[node.0].scroll_top
    }

    /// All nodes in document order.
    fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.nodes[node.0].children.iter().rev());
        }
        out
    }

    fn input_node(&self, node: NodeId) -> Result<&MemoryNode, DomError> {
        let n = &self.nodes[node.0];
        if n.kind == NodeKind::Input {
            Ok(n)
        } else {
            Err(DomError::WrongKind { id: n.id.clone(), expected: "input" })
        }
    }

    fn input_node_mut(&mut self, node: NodeId) -> Result<&mut MemoryNode, DomError> {
        let n = &mut self.nodes[node.0];
        if n.kind == NodeKind::Input {
            Ok(n)
        } else {
            Err(DomError::WrongKind { id: n.id.clone(), expected: "input" })
        }
    }
}

impl Page for MemoryPage {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.walk().into_iter().find(|n| self.nodes[n.0].id == id)
    }

    fn first_by_class(&self, class: &str) -> Option<NodeId> {
        self.walk().into_iter().find(|n| self.has_class(n, class))
    }

    fn all_by_class(&self, class: &str) -> Vec<NodeId> {
        self.walk().into_iter().filter(|n| self.has_class(n, class)).collect()
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.root())
    }

    fn node_id(&self, node: &NodeId) -> String {
        self.nodes[node.0].id.clone()
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let mut cursor = Some(*node);
        while let Some(current) = cursor {
            if current == *ancestor {
                return true;
            }
            cursor = self.nodes[current.0].parent;
        }
        false
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    fn toggle_class(&mut self, node: &NodeId, class: &str) -> Result<bool, DomError> {
        if self.has_class(node, class) {
            self.nodes[node.0].classes.retain(|c| c != class);
            Ok(false)
        } else {
            self.add_class(*node, class);
            Ok(true)
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) -> Result<(), DomError> {
        self.nodes[node.0].classes.retain(|c| c != class);
        Ok(())
    }

    fn style(&self, node: &NodeId, property: &str) -> Result<String, DomError> {
        Ok(self.nodes[node.0].style.get(property).cloned().unwrap_or_default())
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) -> Result<(), DomError> {
        let style = &mut self.nodes[node.0].style;
        if value.is_empty() {
            style.remove(property);
        } else {
            style.insert(property.to_owned(), value.to_owned());
        }
        Ok(())
    }

    fn value(&self, node: &NodeId) -> Result<String, DomError> {
        Ok(self.input_node(*node)?.value.clone())
    }

    fn set_value(&mut self, node: &NodeId, value: &str) -> Result<(), DomError> {
        value.clone_into(&mut self.input_node_mut(*node)?.value);
        Ok(())
    }

    fn input_type(&self, node: &NodeId) -> Result<String, DomError> {
        Ok(self.input_node(*node)?.input_type.clone())
    }

    fn set_input_type(&mut self, node: &NodeId, input_type: &str) -> Result<(), DomError> {
        input_type.clone_into(&mut self.input_node_mut(*node)?.input_type);
        Ok(())
    }

    fn set_disabled(&mut self, node: &NodeId, disabled: bool) -> Result<(), DomError> {
        self.nodes[node.0].disabled = disabled;
        Ok(())
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        text.clone_into(&mut self.nodes[node.0].html);
    }

    fn set_inner_html(&mut self, node: &NodeId, html: &str) {
        html.clone_into(&mut self.nodes[node.0].html);
    }

    fn append_html(&mut self, node: &NodeId, html: &str) -> Result<(), DomError> {
        self.nodes[node.0].html.push_str(html);
        Ok(())
    }

    /// One pixel per byte of stored markup.
    fn scroll_height(&self, node: &NodeId) -> i32 {
        i32::try_from(self.nodes[node.0].html.len()).unwrap_or(i32::MAX)
    }

    fn set_scroll_top(&mut self, node: &NodeId, top: i32) {
        self.nodes[node.0].scroll_top = top;
    }
}
