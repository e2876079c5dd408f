use std::fmt;
use std::str::FromStr;

use shared::error::{Error, Result};

use crate::configuration::UNSPECIFIED_STR;

/// Indicates the state of the ICE connection.
///
/// Aggregates the states of every ICE transport in use. `Failed` and
/// `Disconnected` take precedence over `Checking`, which takes precedence over
/// the connected states.
///
/// # Examples
///
/// ```
/// use rtc_ice_facade::state::RTCIceConnectionState;
///
/// let state: RTCIceConnectionState = "checking".parse().unwrap();
/// assert_eq!(state, RTCIceConnectionState::Checking);
/// assert_eq!(RTCIceConnectionState::Unspecified.to_string(), "Unspecified");
/// ```
///
/// # Specifications
///
/// - [W3C RTCIceConnectionState](https://w3c.github.io/webrtc-pc/#dom-rtciceconnectionstate)
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RTCIceConnectionState {
    /// State not specified. This should not occur in normal operation.
    #[default]
    Unspecified,

    /// Any of the ICE transports are in the "new" state and none of them are
    /// in the "checking", "disconnected" or "failed" state, or all ICE
    /// transports are in the "closed" state, or there are no transports.
    New,

    /// Any of the ICE transports are in the "checking" state and none of them
    /// are in the "disconnected" or "failed" state.
    Checking,

    /// All ICE transports are in the "connected", "completed" or "closed"
    /// state and at least one of them is in the "connected" state.
    Connected,

    /// All ICE transports are in the "completed" or "closed" state and at
    /// least one of them is in the "completed" state.
    Completed,

    /// Any of the ICE transports are in the "disconnected" state and none of
    /// them are in the "failed" state.
    Disconnected,

    /// Any of the ICE transports are in the "failed" state.
    Failed,

    /// The owning connection is closed.
    Closed,
}

const ICE_CONNECTION_STATE_NEW_STR: &str = "new";
const ICE_CONNECTION_STATE_CHECKING_STR: &str = "checking";
const ICE_CONNECTION_STATE_CONNECTED_STR: &str = "connected";
const ICE_CONNECTION_STATE_COMPLETED_STR: &str = "completed";
const ICE_CONNECTION_STATE_DISCONNECTED_STR: &str = "disconnected";
const ICE_CONNECTION_STATE_FAILED_STR: &str = "failed";
const ICE_CONNECTION_STATE_CLOSED_STR: &str = "closed";

/// takes a string and converts it to ICEConnectionState
impl FromStr for RTCIceConnectionState {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            ICE_CONNECTION_STATE_NEW_STR => Ok(RTCIceConnectionState::New),
            ICE_CONNECTION_STATE_CHECKING_STR => Ok(RTCIceConnectionState::Checking),
            ICE_CONNECTION_STATE_CONNECTED_STR => Ok(RTCIceConnectionState::Connected),
            ICE_CONNECTION_STATE_COMPLETED_STR => Ok(RTCIceConnectionState::Completed),
            ICE_CONNECTION_STATE_DISCONNECTED_STR => Ok(RTCIceConnectionState::Disconnected),
            ICE_CONNECTION_STATE_FAILED_STR => Ok(RTCIceConnectionState::Failed),
            ICE_CONNECTION_STATE_CLOSED_STR => Ok(RTCIceConnectionState::Closed),
            _ => Err(Error::ErrUnknownValue {
                kind: "ICE connection state",
                value: raw.to_owned(),
            }),
        }
    }
}

impl From<u8> for RTCIceConnectionState {
    fn from(v: u8) -> Self {
        match v {
            1 => RTCIceConnectionState::New,
            2 => RTCIceConnectionState::Checking,
            3 => RTCIceConnectionState::Connected,
            4 => RTCIceConnectionState::Completed,
            5 => RTCIceConnectionState::Disconnected,
            6 => RTCIceConnectionState::Failed,
            7 => RTCIceConnectionState::Closed,
            _ => RTCIceConnectionState::Unspecified,
        }
    }
}

impl fmt::Display for RTCIceConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RTCIceConnectionState::New => ICE_CONNECTION_STATE_NEW_STR,
            RTCIceConnectionState::Checking => ICE_CONNECTION_STATE_CHECKING_STR,
            RTCIceConnectionState::Connected => ICE_CONNECTION_STATE_CONNECTED_STR,
            RTCIceConnectionState::Completed => ICE_CONNECTION_STATE_COMPLETED_STR,
            RTCIceConnectionState::Disconnected => ICE_CONNECTION_STATE_DISCONNECTED_STR,
            RTCIceConnectionState::Failed => ICE_CONNECTION_STATE_FAILED_STR,
            RTCIceConnectionState::Closed => ICE_CONNECTION_STATE_CLOSED_STR,
            RTCIceConnectionState::Unspecified => UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_ice_connection_state() {
        let tests = vec![
            ("new", RTCIceConnectionState::New),
            ("checking", RTCIceConnectionState::Checking),
            ("connected", RTCIceConnectionState::Connected),
            ("completed", RTCIceConnectionState::Completed),
            ("disconnected", RTCIceConnectionState::Disconnected),
            ("failed", RTCIceConnectionState::Failed),
            ("closed", RTCIceConnectionState::Closed),
        ];

        for (state_string, expected_state) in tests {
            assert_eq!(
                state_string.parse::<RTCIceConnectionState>(),
                Ok(expected_state)
            );
        }

        for raw in ["", UNSPECIFIED_STR, "Connected", "connecting"] {
            assert!(raw.parse::<RTCIceConnectionState>().is_err(), "{raw}");
        }
    }

    #[test]
    fn test_ice_connection_state_string() {
        let tests = vec![
            (RTCIceConnectionState::Unspecified, "Unspecified"),
            (RTCIceConnectionState::New, "new"),
            (RTCIceConnectionState::Checking, "checking"),
            (RTCIceConnectionState::Connected, "connected"),
            (RTCIceConnectionState::Completed, "completed"),
            (RTCIceConnectionState::Disconnected, "disconnected"),
            (RTCIceConnectionState::Failed, "failed"),
            (RTCIceConnectionState::Closed, "closed"),
        ];

        for (state, expected_string) in tests {
            assert_eq!(state.to_string(), expected_string);
        }
    }

    #[test]
    fn test_ice_connection_state_from_u8() {
        for v in 0..8u8 {
            assert_eq!(RTCIceConnectionState::from(v) as u8, v);
        }
        assert_eq!(
            RTCIceConnectionState::from(8),
            RTCIceConnectionState::Unspecified
        );
    }
}
