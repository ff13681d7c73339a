use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_std::net::{TcpListener, TcpStream};
use async_std::task;
use futures::StreamExt;
use http_types::{Request, Response, StatusCode};
use log::{debug, error, info};

use crate::config::Config;
use crate::context::{Context, Handle};
use crate::router::Router;

/// Application ties handlers to a `Router` and serves them over HTTP/1.1.
///
/// Register every route first, then call `listen`. Once listening the route
/// table is shared read-only between connection tasks.
pub struct Application {
    router: Router<Box<dyn Handle>>,
    config: Config,
    next_id: AtomicU64,
}

impl Default for Application {
    fn default() -> Self {
        Application::new()
    }
}

impl Application {
    pub fn new() -> Application {
        Application::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Application {
        Application {
            router: Router::new(),
            config,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn router(&self) -> &Router<Box<dyn Handle>> {
        &self.router
    }

    /// Registers `handler` for `method` and `path`.
    ///
    /// # Panics
    ///
    /// Panics on an empty method, an empty path or an empty path segment,
    /// the same as [`Router::add_route`].
    pub fn at<H: Handle>(&mut self, method: &str, path: &str, handler: H) -> &mut Self {
        self.router.add_route(method, path, Box::new(handler));
        self
    }

    pub fn get<H: Handle>(&mut self, path: &str, handler: H) -> &mut Self {
        self.at("GET", path, handler)
    }

    pub fn head<H: Handle>(&mut self, path: &str, handler: H) -> &mut Self {
        self.at("HEAD", path, handler)
    }

    pub fn options<H: Handle>(&mut self, path: &str, handler: H) -> &mut Self {
        self.at("OPTIONS", path, handler)
    }

    pub fn post<H: Handle>(&mut self, path: &str, handler: H) -> &mut Self {
        self.at("POST", path, handler)
    }

    pub fn put<H: Handle>(&mut self, path: &str, handler: H) -> &mut Self {
        self.at("PUT", path, handler)
    }

    pub fn patch<H: Handle>(&mut self, path: &str, handler: H) -> &mut Self {
        self.at("PATCH", path, handler)
    }

    pub fn delete<H: Handle>(&mut self, path: &str, handler: H) -> &mut Self {
        self.at("DELETE", path, handler)
    }

    /// Routes a single request and produces its response.
    ///
    /// Unknown methods, unknown paths and paths that only exist as a prefix
    /// of other routes all answer `404 Not Found`.
    pub async fn respond(&self, req: Request) -> http_types::Result<Response> {
        let method = req.method().to_string();
        let path = req.url().path().to_string();

        let handler = match self.router.lookup(&method, &path) {
            Some(handler) => handler,
            None => {
                let allowed = self.router.allowed(&path);
                if allowed.is_empty() {
                    debug!("{} {} -> 404", method, path);
                } else {
                    debug!("{} {} -> 404 (bound for {})", method, path, allowed.join(", "));
                }
                return Ok(not_found());
            }
        };

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!("{} {} -> request #{}", method, path, id);
        handler.handle(Context::new(id, req)).await
    }

    /// Serves on the configured address until the listener fails.
    pub async fn listen(self) -> io::Result<()> {
        let addr = self.config.addr.clone();
        self.listen_on(&addr).await
    }

    /// Serves on `addr` until the listener fails.
    pub async fn listen_on(self, addr: &str) -> io::Result<()> {
        let listener = TcpListener::bind(addr).await?;
        info!("listening on {}", listener.local_addr()?);
        for (method, path) in self.router.routes() {
            info!("  {} {}", method, path);
        }

        let app = Arc::new(self);
        let mut incoming = listener.incoming();
        while let Some(stream) = incoming.next().await {
            let stream = stream?;
            let app = app.clone();
            task::spawn(async move {
                if let Err(err) = accept(app, stream).await {
                    error!("connection error: {}", err);
                }
            });
        }
        Ok(())
    }
}

async fn accept(app: Arc<Application>, stream: TcpStream) -> http_types::Result<()> {
    debug!("accepted connection from {:?}", stream.peer_addr());
    async_h1::accept(stream.clone(), |req| {
        let app = app.clone();
        async move { app.respond(req).await }
    })
    .await
}

fn not_found() -> Response {
    let mut res = Response::new(StatusCode::NotFound);
    res.set_body("404 page not found");
    res
}
