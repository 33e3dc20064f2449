//! Polling directive parsed from the registration-code response

use std::time::{Duration, Instant};

/// Fallback poll interval when the response omits `retryInterval`
const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(5);

/// Fallback polling window when the response omits `retryDuration`
const DEFAULT_RETRY_DURATION: Duration = Duration::from_secs(300);

/// Ephemeral value driving one authorization attempt.
///
/// Created once per attempt from the XML registration response and
/// discarded when the attempt concludes.
#[derive(Debug, Clone)]
pub struct AuthPollingDirective {
    /// Status string reported by the server
    pub status: Option<String>,
    /// How often to poll
    pub retry_interval: Duration,
    /// How long to keep polling before giving up
    pub retry_duration: Duration,
    /// Code the user must enter on another device
    pub reg_code: String,
    /// When this attempt started
    pub(crate) created_at: Instant,
}

impl AuthPollingDirective {
    /// Parse the flat XML registration document.
    ///
    /// Only substring tag extraction is used; the document has no nesting
    /// or attributes worth a real XML parser. Returns `None` when the
    /// `regCode` element is missing entirely.
    pub fn from_xml(body: &str) -> Option<Self> {
        let reg_code = tag_text(body, "regCode")?;

        let retry_interval =
            parse_seconds(tag_text(body, "retryInterval")).unwrap_or(DEFAULT_RETRY_INTERVAL);
        let retry_duration =
            parse_seconds(tag_text(body, "retryDuration")).unwrap_or(DEFAULT_RETRY_DURATION);

        Some(Self {
            status: tag_text(body, "status").map(str::to_string),
            retry_interval,
            retry_duration,
            reg_code: reg_code.to_string(),
            created_at: Instant::now(),
        })
    }

    /// Whether the polling window has elapsed
    pub fn should_give_up(&self) -> bool {
        self.created_at.elapsed() > self.retry_duration
    }
}

/// Extract the text between `<name>` and `</name>`
fn tag_text<'a>(body: &'a str, name: &str) -> Option<&'a str> {
    string_between(body, &format!("<{name}>"), &format!("</{name}>"))
}

/// Parses a seconds value, treating negative or non-finite numbers as absent.
fn parse_seconds(text: Option<&str>) -> Option<Duration> {
    let seconds = text?.trim().parse::<f64>().ok()?;
    Duration::try_from_secs_f64(seconds).ok()
}

/// First substring of `text` between `open` and `close`
pub(crate) fn string_between<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = text.find(open)? + open.len();
    let end = text[start..].find(close)? + start;
    Some(&text[start..end])
}
