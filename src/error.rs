use thiserror::Error;

/// Route table configuration errors.
///
/// These are programmer mistakes caught while the route table is being built.
/// `Router::add_route` turns them into a panic; `Router::try_add_route` hands
/// them back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The method string was empty.
    #[error("method must not be empty (path '{path}')")]
    EmptyMethod { path: String },

    /// The path string was empty.
    #[error("path must not be empty")]
    EmptyPath,

    /// Splitting the path produced an empty segment, e.g. `/a//b`.
    #[error("empty segment in path '{path}'")]
    EmptySegment { path: String },
}
