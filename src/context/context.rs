use std::future::Future;

use futures::future::BoxFuture;
use http_types::{Method, Request, Response, Result, Url};

pub type BoxFut = BoxFuture<'static, Result<Response>>;

/// A request handler.
///
/// Implemented for every `Fn(Context) -> impl Future<Output = Result<Response>>`,
/// so plain `async fn`s can be registered directly.
pub trait Handle: Send + Sync + 'static {
    fn handle(&self, ctx: Context) -> BoxFut;
}

impl<F, Fut> Handle for F
where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response>> + Send + 'static,
{
    fn handle(&self, ctx: Context) -> BoxFut {
        Box::pin((*self)(ctx))
    }
}

/// Per-request state handed to a handler.
pub struct Context {
    id: u64,
    request: Request,
}

impl Context {
    pub fn new(id: u64, request: Request) -> Context {
        Context { id, request }
    }

    /// Identifier assigned by the application, unique per request.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn method(&self) -> Method {
        self.request.method()
    }

    pub fn url(&self) -> &Url {
        self.request.url()
    }

    pub fn path(&self) -> &str {
        self.request.url().path()
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn into_request(self) -> Request {
        self.request
    }
}
