//! sroute matches an HTTP method and a literal URL path to a registered
//! handler.
//!
//! The core is [`Router`], a tree of path segments per method. [`Application`]
//! wraps it with async handlers and an HTTP/1.1 listener.

pub mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod router;

pub use app::Application;
pub use config::Config;
pub use context::{Context, Handle};
pub use error::RouteError;
pub use router::{Node, Router};

pub use http_types::Result;

pub fn new() -> Application {
    Application::new()
}

pub fn with_config(config: Config) -> Application {
    Application::with_config(config)
}
