//! Scripted `Transport` double shared by async tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;

use super::transport::{ApiRequest, ResponseHead, Transport, TransportFailure};

enum Step {
    Respond { status: u16, body: String, after: Option<Duration>, body_after: Option<Duration> },
    Fail(TransportFailure),
    Hang,
}

#[derive(Default)]
struct Script {
    steps: VecDeque<Step>,
    requests: Vec<ApiRequest>,
}

/// Replays queued outcomes in order and records every request it sees.
///
/// Timers run on tokio's clock so `start_paused` tests advance instantly.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    script: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.respond_raw(status, &body.to_string())
    }

    pub(crate) fn respond_raw(self, status: u16, body: &str) -> Self {
        self.push(Step::Respond { status, body: body.to_owned(), after: None, body_after: None })
    }

    pub(crate) fn respond_after(self, after: Duration, status: u16, body: serde_json::Value) -> Self {
        self.push(Step::Respond { status, body: body.to_string(), after: Some(after), body_after: None })
    }

    /// Headers after `after`, then the body `body_after` later.
    pub(crate) fn respond_slow_body(
        self,
        after: Duration,
        body_after: Duration,
        status: u16,
        body: serde_json::Value,
    ) -> Self {
        self.push(Step::Respond { status, body: body.to_string(), after: Some(after), body_after: Some(body_after) })
    }

    pub(crate) fn fail(self, failure: TransportFailure) -> Self {
        self.push(Step::Fail(failure))
    }

    pub(crate) fn hang(self) -> Self {
        self.push(Step::Hang)
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.script.borrow().requests.clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.script.borrow().requests.len()
    }

    fn push(self, step: Step) -> Self {
        self.script.borrow_mut().steps.push_back(step);
        self
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ResponseHead, TransportFailure>> {
        let step = {
            let mut script = self.script.borrow_mut();
            script.requests.push(request);
            script.steps.pop_front()
        };
        Box::pin(async move {
            match step {
                Some(Step::Respond { status, body, after, body_after }) => {
                    if let Some(delay) = after {
                        tokio::time::sleep(delay).await;
                    }
                    Ok(ResponseHead::new(status, async move {
                        if let Some(delay) = body_after {
                            tokio::time::sleep(delay).await;
                        }
                        Ok(body)
                    }))
                }
                Some(Step::Fail(failure)) => Err(failure),
                Some(Step::Hang) => futures::future::pending().await,
                None => Err(TransportFailure::Unreachable("no scripted response".to_owned())),
            }
        })
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}
