use std::collections::HashMap;

/// A single segment of a route path.
///
/// Each node owns its children outright, keyed by the literal segment that
/// leads to them. Root nodes carry the path `"/"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    path: String,
    handler: Option<T>,
    children: HashMap<String, Node<T>>,
}

impl<T> Node<T> {
    pub(crate) fn new(path: &str) -> Node<T> {
        Node {
            path: path.to_string(),
            handler: None,
            children: HashMap::new(),
        }
    }

    pub(crate) fn root() -> Node<T> {
        Node::new("/")
    }

    /// The literal segment this node stands for.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The handler bound here, if a route terminates at this node.
    ///
    /// `None` means the node only exists as a prefix of longer routes.
    pub fn handler(&self) -> Option<&T> {
        self.handler.as_ref()
    }

    pub fn children(&self) -> &HashMap<String, Node<T>> {
        &self.children
    }

    pub fn child(&self, segment: &str) -> Option<&Node<T>> {
        self.children.get(segment)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the child for `segment`, creating it first if needed.
    pub(crate) fn child_or_insert(&mut self, segment: &str) -> &mut Node<T> {
        self.children
            .entry(segment.to_string())
            .or_insert_with(|| Node::new(segment))
    }

    /// Binds `handler` here. A previous handler is overwritten.
    pub(crate) fn set_handler(&mut self, handler: T) {
        self.handler = Some(handler);
    }

    /// Collects the full path of every node below (and including) this one
    /// that carries a handler.
    pub(crate) fn collect_routes(&self, prefix: &str, out: &mut Vec<String>) {
        if self.handler.is_some() {
            out.push(if prefix.is_empty() {
                "/".to_string()
            } else {
                prefix.to_string()
            });
        }
        for (segment, child) in &self.children {
            child.collect_routes(&format!("{}/{}", prefix, segment), out);
        }
    }
}
