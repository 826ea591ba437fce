use ego_tree::NodeRef;
use scraper::node::Element;
use scraper::Node;

/// A position in the document that may already have fallen off the tree.
///
/// Each hop returns a new cursor; once a hop finds nothing, every later hop
/// also finds nothing, so a fixed chain reads top to bottom without nested
/// checks and the caller picks its default at the end.
#[derive(Clone, Copy)]
pub struct Cursor<'a>(Option<NodeRef<'a, Node>>);

impl<'a> Cursor<'a> {
    pub fn at(node: NodeRef<'a, Node>) -> Self {
        Cursor(Some(node))
    }

    pub fn first_child(self) -> Self {
        Cursor(self.0.and_then(|n| n.first_child()))
    }

    pub fn next_sibling(self) -> Self {
        Cursor(self.0.and_then(|n| n.next_sibling()))
    }

    /// Zero-based child index, counting text and comment nodes.
    pub fn nth_child(self, idx: usize) -> Self {
        Cursor(self.0.and_then(|n| n.children().nth(idx)))
    }

    pub fn filter(self, pred: impl FnOnce(NodeRef<'a, Node>) -> bool) -> Self {
        Cursor(self.0.filter(|n| pred(*n)))
    }

    pub fn node(self) -> Option<NodeRef<'a, Node>> {
        self.0
    }

    pub fn element(self) -> Option<&'a Element> {
        self.0.and_then(|n| n.value().as_element())
    }

    pub fn attr(self, name: &str) -> Option<&'a str> {
        self.element().and_then(|e| e.attr(name))
    }

    /// Literal content when the cursor sits on a text node.
    pub fn text(self) -> Option<&'a str> {
        self.0.and_then(|n| n.value().as_text()).map(|t| &**t)
    }
}

/// Element checks used at the end of a hop chain.
pub trait NodeExt {
    fn is_tag(&self, name: &str) -> bool;

    fn has_class(&self, class_name: &str) -> bool;
}

impl NodeExt for NodeRef<'_, Node> {
    fn is_tag(&self, name: &str) -> bool {
        self.value()
            .as_element()
            .is_some_and(|e| e.name().eq_ignore_ascii_case(name))
    }

    fn has_class(&self, class_name: &str) -> bool {
        self.value()
            .as_element()
            .is_some_and(|e| e.classes().any(|class| class == class_name))
    }
}
