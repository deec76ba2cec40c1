//! HTTP transport seam between `AuthApi` and the browser fetch API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, each bound to an
//! `AbortController` that fires when the in-flight future is dropped.
//! `send` resolves as soon as the status line and headers arrive; the body is
//! read afterwards through `ResponseHead::read` and is never aborted.
//! Native builds: `FetchTransport` reports every call as unreachable so the
//! pages still compile and the controllers run under test doubles.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use std::fmt;
use std::future::Future;

use futures::future::LocalBoxFuture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// An outgoing JSON request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
    /// Send cookies along with a cross-origin request.
    pub include_credentials: bool,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), body: None, include_credentials: false }
    }

    pub fn post(url: impl Into<String>, body: Option<serde_json::Value>) -> Self {
        Self { method: Method::Post, url: url.into(), body, include_credentials: false }
    }

    #[must_use]
    pub fn with_credentials(mut self) -> Self {
        self.include_credentials = true;
        self
    }
}

/// Status and raw body text of a received response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        is_success_status(self.status)
    }
}

/// A response whose headers have arrived and whose body is still pending.
pub struct ResponseHead {
    pub status: u16,
    body: LocalBoxFuture<'static, Result<String, TransportFailure>>,
}

impl ResponseHead {
    pub fn new(status: u16, body: impl Future<Output = Result<String, TransportFailure>> + 'static) -> Self {
        Self { status, body: Box::pin(body) }
    }

    pub fn is_success(&self) -> bool {
        is_success_status(self.status)
    }

    /// Wait for the full body.
    ///
    /// # Errors
    ///
    /// Returns the transport failure raised while streaming the body.
    pub async fn read(self) -> Result<RawResponse, TransportFailure> {
        let body = self.body.await?;
        Ok(RawResponse { status: self.status, body })
    }
}

impl fmt::Debug for ResponseHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseHead").field("status", &self.status).finish_non_exhaustive()
    }
}

fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Raw failure signal reported by a transport before any response arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// The request was cancelled through its abort signal.
    Aborted,
    /// Connection refused, DNS failure, CORS rejection, or similar.
    Unreachable(String),
}

/// Sends requests and provides the timer used for abort deadlines.
pub trait Transport {
    /// Resolve once the response headers are in.
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ResponseHead, TransportFailure>>;

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Browser `fetch` transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ResponseHead, TransportFailure>> {
        Box::pin(fetch(request))
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        #[cfg(feature = "csr")]
        {
            Box::pin(gloo_timers::future::sleep(duration))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = duration;
            Box::pin(futures::future::pending())
        }
    }
}

#[cfg(feature = "csr")]
async fn fetch(request: ApiRequest) -> Result<ResponseHead, TransportFailure> {
    use gloo_net::http::{Method as HttpMethod, RequestBuilder};
    use web_sys::{RequestCredentials, RequestMode};

    let controller = web_sys::AbortController::new()
        .map_err(|_| TransportFailure::Unreachable("AbortController unavailable".to_owned()))?;
    let guard = AbortOnDrop { controller, armed: true };
    let signal = guard.controller.signal();

    let mut builder = RequestBuilder::new(&request.url)
        .method(match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
        })
        .abort_signal(Some(&signal));
    if request.method == Method::Post {
        builder = builder
            .mode(RequestMode::Cors)
            .header("Content-Type", "application/json");
    }
    if request.include_credentials {
        builder = builder.credentials(RequestCredentials::Include);
    }
    let outgoing = match &request.body {
        Some(body) => builder.json(body).map_err(fetch_failure)?,
        None => builder.build().map_err(fetch_failure)?,
    };

    let response = outgoing.send().await.map_err(fetch_failure)?;
    guard.disarm();
    let status = response.status();
    Ok(ResponseHead::new(status, async move { response.text().await.map_err(fetch_failure) }))
}

#[cfg(not(feature = "csr"))]
async fn fetch(request: ApiRequest) -> Result<ResponseHead, TransportFailure> {
    let _ = request;
    Err(TransportFailure::Unreachable("not available outside the browser".to_owned()))
}

#[cfg(feature = "csr")]
fn fetch_failure(err: gloo_net::Error) -> TransportFailure {
    match err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => TransportFailure::Aborted,
        other => TransportFailure::Unreachable(other.to_string()),
    }
}

/// Aborts the bound fetch unless disarmed once the headers have arrived.
#[cfg(feature = "csr")]
struct AbortOnDrop {
    controller: web_sys::AbortController,
    armed: bool,
}

#[cfg(feature = "csr")]
impl AbortOnDrop {
    fn disarm(mut self) {
        self.armed = false;
    }
}

#[cfg(feature = "csr")]
impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if self.armed {
            self.controller.abort();
        }
    }
}
