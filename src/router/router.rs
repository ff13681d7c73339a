use std::collections::BTreeMap;

use log::{debug, trace};

use crate::error::RouteError;
use crate::router::path::{segments, split_path};
use crate::router::tree::Node;

/// Router keeps one route tree per HTTP method.
///
/// Routes are matched literally, segment by segment. There are no path
/// parameters, wildcards or trailing-slash redirects.
///
/// The router is meant to be filled once during startup and only read
/// afterwards. It does no locking of its own: do not call `add_route`
/// concurrently with `find_route`, or with itself. Borrowing rules hold you to
/// that as long as registration goes through `&mut Router`.
#[derive(Debug, Clone, PartialEq)]
pub struct Router<T> {
    trees: BTreeMap<String, Node<T>>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Router::new()
    }
}

impl<T> Router<T> {
    /// New returns an empty Router.
    pub fn new() -> Router<T> {
        Router {
            trees: BTreeMap::new(),
        }
    }

    /// get is a shortcut for router.add_route("GET", path, handler)
    pub fn get(&mut self, path: &str, handler: T) {
        self.add_route("GET", path, handler);
    }

    /// head is a shortcut for router.add_route("HEAD", path, handler)
    pub fn head(&mut self, path: &str, handler: T) {
        self.add_route("HEAD", path, handler);
    }

    /// options is a shortcut for router.add_route("OPTIONS", path, handler)
    pub fn options(&mut self, path: &str, handler: T) {
        self.add_route("OPTIONS", path, handler);
    }

    /// post is a shortcut for router.add_route("POST", path, handler)
    pub fn post(&mut self, path: &str, handler: T) {
        self.add_route("POST", path, handler);
    }

    /// put is a shortcut for router.add_route("PUT", path, handler)
    pub fn put(&mut self, path: &str, handler: T) {
        self.add_route("PUT", path, handler);
    }

    /// patch is a shortcut for router.add_route("PATCH", path, handler)
    pub fn patch(&mut self, path: &str, handler: T) {
        self.add_route("PATCH", path, handler);
    }

    /// delete is a shortcut for router.add_route("DELETE", path, handler)
    pub fn delete(&mut self, path: &str, handler: T) {
        self.add_route("DELETE", path, handler);
    }

    /// Registers `handler` for the given method and path.
    ///
    /// Registering the same method and path again replaces the handler.
    ///
    /// # Panics
    ///
    /// Panics if the method or path is empty, or if the path contains an
    /// empty segment such as `/a//b`. A malformed route table is a bug in the
    /// program, so it is reported loudly at startup instead of being skipped.
    /// Use [`Router::try_add_route`] to get the error back instead.
    pub fn add_route(&mut self, method: &str, path: &str, handler: T) {
        if let Err(err) = self.try_add_route(method, path, handler) {
            panic!("invalid route {} '{}': {}", method, path, err);
        }
    }

    /// Like [`Router::add_route`] but returns configuration errors.
    ///
    /// The path is validated before anything is inserted, so a rejected route
    /// leaves the router untouched.
    pub fn try_add_route(&mut self, method: &str, path: &str, handler: T) -> Result<(), RouteError> {
        if method.is_empty() {
            return Err(RouteError::EmptyMethod {
                path: path.to_string(),
            });
        }

        let segments = if path == "/" {
            Vec::new()
        } else {
            split_path(path)?
        };

        let mut node = self
            .trees
            .entry(method.to_string())
            .or_insert_with(Node::root);
        for segment in segments {
            node = node.child_or_insert(segment);
        }
        node.set_handler(handler);

        debug!("route registered: {} {}", method, path);
        Ok(())
    }

    /// Resolves a method and path to the node that represents it.
    ///
    /// Returns `None` if the method has no routes or no node exists at that
    /// path. A returned node may still have no handler when the path is only a
    /// prefix of registered routes; callers that care should check
    /// [`Node::handler`].
    pub fn find_route(&self, method: &str, path: &str) -> Option<&Node<T>> {
        let root = match self.trees.get(method) {
            Some(root) => root,
            None => {
                trace!("no routes for method {}", method);
                return None;
            }
        };

        if path == "/" {
            return Some(root);
        }

        let mut node = root;
        for segment in segments(path) {
            node = match node.child(segment) {
                Some(child) => child,
                None => {
                    trace!("no route for {} {} at segment '{}'", method, path, segment);
                    return None;
                }
            };
        }
        Some(node)
    }

    /// Lookup returns the handler bound to the method + path combo, if any.
    pub fn lookup(&self, method: &str, path: &str) -> Option<&T> {
        self.find_route(method, path).and_then(Node::handler)
    }

    /// Root node of the method's route tree.
    pub fn root(&self, method: &str) -> Option<&Node<T>> {
        self.trees.get(method)
    }

    /// Methods with at least one registration, in sorted order.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(String::as_str)
    }

    /// Every `(method, path)` pair that has a handler bound, sorted.
    pub fn routes(&self) -> Vec<(String, String)> {
        let mut routes = Vec::new();
        for (method, root) in &self.trees {
            let mut paths = Vec::new();
            root.collect_routes("", &mut paths);
            paths.sort();
            routes.extend(paths.into_iter().map(|path| (method.clone(), path)));
        }
        routes
    }

    /// Methods that have a handler bound at `path`, in sorted order.
    pub fn allowed(&self, path: &str) -> Vec<String> {
        self.methods()
            .filter(|method| self.lookup(method, path).is_some())
            .map(str::to_string)
            .collect()
    }
}
