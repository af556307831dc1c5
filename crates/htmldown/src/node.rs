//! Read-only document tree consumed by the converter.
//!
//! Any HTML parser can produce this structure; the [`html`](crate::html)
//! module does so for `scraper`. The converter only ever borrows a tree, it
//! never mutates one.

/// Kind of a node in the document tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node, e.g. `<p>`
    Element,
    /// Text run
    Text,
    /// `<!-- comment -->`
    Comment,
    /// Root of a parsed document
    Document,
}

/// A node of the document tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Node kind
    pub node_type: NodeType,

    /// Lowercase tag name for elements, `#text`, `#comment` or `#document` otherwise
    pub node_name: String,

    /// Text payload for text and comment nodes
    pub node_value: Option<String>,

    /// Attributes in source order. Duplicate names are kept; lookups return the first.
    pub attributes: Vec<(String, String)>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty document root
    pub fn document() -> Self {
        Self {
            node_type: NodeType::Document,
            node_name: "#document".to_string(),
            node_value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_lowercase(),
            node_value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        node.attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self {
            node_type: NodeType::Comment,
            node_name: "#comment".to_string(),
            node_value: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Lowercase tag name (empty for non-elements)
    pub fn tag_name(&self) -> &str {
        if self.is_element() {
            &self.node_name
        } else {
            ""
        }
    }

    /// Text payload of a text or comment node
    pub fn value(&self) -> &str {
        self.node_value.as_deref().unwrap_or("")
    }

    /// Get an attribute value by name (case-insensitive, first match wins)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// First child, if any
    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// The child when there is exactly one
    pub fn only_child(&self) -> Option<&Node> {
        match self.children.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Set an attribute, replacing the first existing one with the same name
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self
            .attributes
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }
}

/// A borrowed node together with the parent it was reached from.
///
/// The tree stores no back-references, so parent lookup is answered by
/// carrying the parent along during traversal.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    /// The node itself
    pub node: &'a Node,
    parent: Option<&'a Node>,
}

impl<'a> NodeRef<'a> {
    /// Create a new NodeRef without parent context
    pub fn new(node: &'a Node) -> Self {
        Self { node, parent: None }
    }

    /// Create a new NodeRef with parent context
    pub fn with_parent(node: &'a Node, parent: &'a Node) -> Self {
        Self {
            node,
            parent: Some(parent),
        }
    }

    /// The parent node if known
    pub fn parent(&self) -> Option<&'a Node> {
        self.parent
    }

    /// Tag name of the parent element, empty if the parent is not an element
    pub fn parent_tag(&self) -> &'a str {
        self.parent.map(Node::tag_name).unwrap_or("")
    }

    /// Children, each knowing this node as its parent
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let parent = self.node;
        parent
            .children
            .iter()
            .map(move |child| NodeRef::with_parent(child, parent))
    }

    /// The child when there is exactly one
    pub fn only_child(&self) -> Option<NodeRef<'a>> {
        self.node
            .only_child()
            .map(|child| NodeRef::with_parent(child, self.node))
    }

    pub fn node_type(&self) -> NodeType {
        self.node.node_type
    }

    pub fn is_element(&self) -> bool {
        self.node.is_element()
    }

    pub fn tag_name(&self) -> &'a str {
        self.node.tag_name()
    }

    pub fn value(&self) -> &'a str {
        self.node.value()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.attr(name)
    }

    /// Attribute value lower-cased, empty if absent
    pub fn attr_lower(&self, name: &str) -> String {
        self.attr(name).map(str::to_lowercase).unwrap_or_default()
    }

    pub fn attributes(&self) -> &'a [(String, String)] {
        &self.node.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "div");
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert_eq!(node.node_type, NodeType::Text);
        assert_eq!(node.tag_name(), "");
        assert_eq!(node.value(), "Hello World");
    }

    #[test]
    fn test_attributes_first_match_wins() {
        let node = Node::element_with_attrs(
            "a",
            vec![("href", "https://example.com"), ("HREF", "other"), ("title", "Example")],
        );
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("Title"), Some("Example"));
        assert_eq!(node.attr("class"), None);
    }

    #[test]
    fn test_set_attr() {
        let mut node = Node::element("pre");
        node.set_attr("class", "rust");
        node.set_attr("CLASS", "go");
        assert_eq!(node.attributes.len(), 1);
        assert_eq!(node.attr("class"), Some("go"));
    }

    #[test]
    fn test_only_child() {
        let mut parent = Node::element("pre");
        assert!(parent.only_child().is_none());
        parent.add_child(Node::element("code"));
        assert_eq!(parent.only_child().map(Node::tag_name), Some("code"));
        parent.add_child(Node::text("\n"));
        assert!(parent.only_child().is_none());
    }

    #[test]
    fn test_node_ref_parent_tag() {
        let mut pre = Node::element("pre");
        pre.add_child(Node::element("code"));

        let root = NodeRef::new(&pre);
        assert_eq!(root.parent_tag(), "");

        let code = root.only_child().unwrap();
        assert_eq!(code.tag_name(), "code");
        assert_eq!(code.parent_tag(), "pre");
    }

    #[test]
    fn test_attr_lower() {
        let img = Node::element_with_attrs("img", vec![("SRC", "Logo.PNG")]);
        let img = NodeRef::new(&img);
        assert_eq!(img.attr_lower("src"), "logo.png");
        assert_eq!(img.attr_lower("alt"), "");
    }
}
