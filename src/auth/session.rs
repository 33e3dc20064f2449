//! Authorization session and its timer-driven polling loop

use super::directive::AuthPollingDirective;
use super::types::AuthEvent;
use crate::error::AuthFailure;
use crate::http::{Payload, Transport};
use crate::request::{BasePath, RequestDescriptor, ResponseFormat};
use crate::types::JsonValue;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Endpoint returning the XML registration document
pub const REG_CODE_PATH: &str = "apple-tv/get-code";

/// Endpoint polled with the registration code
pub const POLL_PATH: &str = "apple-tv/get-result";

/// Floor for the poll period so a bogus `retryInterval` cannot busy-loop
const MIN_POLL_PERIOD: Duration = Duration::from_millis(10);

/// One device-authorization attempt.
///
/// Owns its own directive and timer; independent of any concurrent
/// resource fetches sharing the same transport.
#[derive(Debug)]
pub struct AuthorizationSession {
    transport: Arc<Transport>,
    device_id: Option<String>,
    partner: Option<String>,
}

impl AuthorizationSession {
    pub(crate) fn new(
        transport: Arc<Transport>,
        device_id: Option<String>,
        partner: Option<String>,
    ) -> Self {
        Self {
            transport,
            device_id,
            partner,
        }
    }

    /// Start the flow on a background task.
    ///
    /// Events arrive on the returned receiver in state-machine order; the
    /// handle cancels the attempt.
    pub fn begin(self) -> (AuthorizationHandle, UnboundedReceiver<AuthEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_flow(
            self.transport,
            self.device_id,
            self.partner,
            tx,
        ));
        (
            AuthorizationHandle {
                task,
                cancelled: AtomicBool::new(false),
            },
            rx,
        )
    }
}

/// Cancellation handle for a running authorization attempt.
///
/// Dropping the handle abandons the attempt as if [`cancel`](Self::cancel)
/// had been called.
#[derive(Debug)]
pub struct AuthorizationHandle {
    task: JoinHandle<()>,
    cancelled: AtomicBool,
}

impl AuthorizationHandle {
    /// Abandon the attempt. Idempotent; after the first call no further
    /// events are delivered and no further network calls are made.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.task.abort();
        }
    }

    /// Whether [`cancel`](Self::cancel) has been called
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for AuthorizationHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_flow(
    transport: Arc<Transport>,
    device_id: Option<String>,
    partner: Option<String>,
    tx: UnboundedSender<AuthEvent>,
) {
    let mut builder = RequestDescriptor::builder(BasePath::Api, REG_CODE_PATH)
        .format(ResponseFormat::Xml)
        .unauthenticated();
    if let Some(id) = &device_id {
        builder = builder.param("deviceID", id);
    }
    if let Some(partner) = &partner {
        builder = builder.param("partner", partner);
    }

    let body = match transport.execute(&builder.build()).await {
        Ok(Payload::Raw(bytes)) => String::from_utf8_lossy(&bytes).into_owned(),
        Ok(Payload::Json(_)) | Err(_) => {
            warn!("registration-code request failed");
            let _ = tx.send(AuthEvent::Failed(AuthFailure::ResponseSerialization));
            return;
        }
    };

    let Some(directive) = AuthPollingDirective::from_xml(&body) else {
        warn!("registration-code response missing regCode element");
        let _ = tx.send(AuthEvent::Failed(AuthFailure::ResponseSerialization));
        return;
    };

    let _ = tx.send(AuthEvent::AwaitingUserCode {
        reg_code: directive.reg_code.clone(),
    });

    let period = directive.retry_interval.max(MIN_POLL_PERIOD);
    let mut timer = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    // Polls are awaited inline, so ticks cannot overlap; a poll slower than
    // the interval just delays the next tick instead of bursting.
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        timer.tick().await;
        match poll_tick(&transport, &directive, &tx).await {
            PollOutcome::Continue => {}
            PollOutcome::Done => return,
        }
    }
}

/// Result of one timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PollOutcome {
    /// Keep polling
    Continue,
    /// Terminal state reached; stop the timer
    Done,
}

/// Evaluate one poll tick against the directive.
///
/// The original implementation still issued one last poll on the tick that
/// decided to give up; that final poll is suppressed here so a timed-out
/// attempt stops cleanly.
pub(crate) async fn poll_tick(
    transport: &Transport,
    directive: &AuthPollingDirective,
    tx: &UnboundedSender<AuthEvent>,
) -> PollOutcome {
    if directive.reg_code.is_empty() {
        // Should not occur; the directive parser requires the element
        let _ = tx.send(AuthEvent::Failed(AuthFailure::MissingRegCode));
        return PollOutcome::Done;
    }

    if directive.should_give_up() {
        let _ = tx.send(AuthEvent::Failed(AuthFailure::PollingTimedOut));
        return PollOutcome::Done;
    }

    let _ = tx.send(AuthEvent::Polling);

    let descriptor = RequestDescriptor::builder(BasePath::Api, POLL_PATH)
        .unauthenticated()
        .param("regCode", &directive.reg_code)
        .build();

    match transport.execute(&descriptor).await {
        Ok(Payload::Json(value)) => {
            let success = value.get("status").and_then(JsonValue::as_str) == Some("success");
            let token = value.get("regToken").and_then(JsonValue::as_str);
            if let (true, Some(token)) = (success, token) {
                transport.credentials().set_api_key(token).await;
                let _ = tx.send(AuthEvent::Authenticated {
                    api_key: token.to_string(),
                });
                return PollOutcome::Done;
            }
            debug!("code not yet entered; polling continues");
            PollOutcome::Continue
        }
        Ok(Payload::Raw(_)) => {
            debug!("unexpected raw poll response; polling continues");
            PollOutcome::Continue
        }
        // Not-yet-ready and transient failures alike are silently ignored;
        // only the timeout terminates an unanswered attempt.
        Err(err) => {
            debug!("poll attempt failed ({err}); polling continues");
            PollOutcome::Continue
        }
    }
}
