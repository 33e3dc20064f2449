//! Authorization flow events

use crate::error::AuthFailure;

/// State transitions of a device-authorization attempt, delivered in order
/// over the session's event channel.
///
/// `Authenticated` and `Failed` are terminal; no events follow them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// A registration code was obtained; show it to the user
    AwaitingUserCode {
        /// Code the user enters on another device
        reg_code: String,
    },
    /// A poll is about to be issued
    Polling,
    /// The flow succeeded and the key was stored
    Authenticated {
        /// The API key returned by the server
        api_key: String,
    },
    /// The attempt concluded without a key
    Failed(AuthFailure),
}
