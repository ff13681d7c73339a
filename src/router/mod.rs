//! Per-method route trees.

mod path;
mod router;
mod tree;

pub use self::router::Router;
pub use self::tree::Node;
