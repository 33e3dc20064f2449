//! Device authorization
//!
//! Headless/TV-style authentication: fetch a registration code, show it to
//! the user, poll on a timer until the server reports the code was entered,
//! then store the returned key in the shared credential store.

mod directive;
mod session;
mod types;


pub use directive::AuthPollingDirective;
pub use session::{AuthorizationHandle, AuthorizationSession, POLL_PATH, REG_CODE_PATH};
pub use types::AuthEvent;
