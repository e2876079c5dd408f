use std::fmt;
use std::str::FromStr;

use shared::error::{Error, Result};

use crate::configuration::UNSPECIFIED_STR;

/// ICETransportState represents the current state of the ICE transport.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RTCIceTransportState {
    #[default]
    Unspecified,

    /// ICETransportStateNew indicates the ICETransport is waiting
    /// for remote candidates to be supplied.
    New,

    /// ICETransportStateChecking indicates the ICETransport has
    /// received at least one remote candidate, and a local and remote
    /// ICECandidateComplete dictionary was not added as the last candidate.
    Checking,

    /// ICETransportStateConnected indicates the ICETransport has
    /// received a response to an outgoing connectivity check, or has
    /// received incoming DTLS/media after a successful response to an
    /// incoming connectivity check, but is still checking other candidate
    /// pairs to see if there is a better connection.
    Connected,

    /// ICETransportStateCompleted indicates the ICETransport tested
    /// all appropriate candidate pairs and at least one functioning
    /// candidate pair has been found.
    Completed,

    /// ICETransportStateFailed indicates the ICETransport the last
    /// candidate was added and all appropriate candidate pairs have either
    /// failed connectivity checks or have lost consent.
    Failed,

    /// ICETransportStateDisconnected indicates the ICETransport has received
    /// at least one local and remote candidate, but the final candidate was
    /// received yet and all appropriate candidate pairs thus far have been
    /// tested and failed.
    Disconnected,

    /// ICETransportStateClosed indicates the ICETransport has shut down
    /// and is no longer responding to STUN requests.
    Closed,
}

const ICE_TRANSPORT_STATE_NEW_STR: &str = "new";
const ICE_TRANSPORT_STATE_CHECKING_STR: &str = "checking";
const ICE_TRANSPORT_STATE_CONNECTED_STR: &str = "connected";
const ICE_TRANSPORT_STATE_COMPLETED_STR: &str = "completed";
const ICE_TRANSPORT_STATE_FAILED_STR: &str = "failed";
const ICE_TRANSPORT_STATE_DISCONNECTED_STR: &str = "disconnected";
const ICE_TRANSPORT_STATE_CLOSED_STR: &str = "closed";

impl FromStr for RTCIceTransportState {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            ICE_TRANSPORT_STATE_NEW_STR => Ok(RTCIceTransportState::New),
            ICE_TRANSPORT_STATE_CHECKING_STR => Ok(RTCIceTransportState::Checking),
            ICE_TRANSPORT_STATE_CONNECTED_STR => Ok(RTCIceTransportState::Connected),
            ICE_TRANSPORT_STATE_COMPLETED_STR => Ok(RTCIceTransportState::Completed),
            ICE_TRANSPORT_STATE_FAILED_STR => Ok(RTCIceTransportState::Failed),
            ICE_TRANSPORT_STATE_DISCONNECTED_STR => Ok(RTCIceTransportState::Disconnected),
            ICE_TRANSPORT_STATE_CLOSED_STR => Ok(RTCIceTransportState::Closed),
            _ => Err(Error::ErrUnknownValue {
                kind: "ICE transport state",
                value: raw.to_owned(),
            }),
        }
    }
}

impl From<u8> for RTCIceTransportState {
    fn from(v: u8) -> Self {
        match v {
            1 => Self::New,
            2 => Self::Checking,
            3 => Self::Connected,
            4 => Self::Completed,
            5 => Self::Failed,
            6 => Self::Disconnected,
            7 => Self::Closed,
            _ => Self::Unspecified,
        }
    }
}

impl fmt::Display for RTCIceTransportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RTCIceTransportState::New => ICE_TRANSPORT_STATE_NEW_STR,
            RTCIceTransportState::Checking => ICE_TRANSPORT_STATE_CHECKING_STR,
            RTCIceTransportState::Connected => ICE_TRANSPORT_STATE_CONNECTED_STR,
            RTCIceTransportState::Completed => ICE_TRANSPORT_STATE_COMPLETED_STR,
            RTCIceTransportState::Failed => ICE_TRANSPORT_STATE_FAILED_STR,
            RTCIceTransportState::Disconnected => ICE_TRANSPORT_STATE_DISCONNECTED_STR,
            RTCIceTransportState::Closed => ICE_TRANSPORT_STATE_CLOSED_STR,
            RTCIceTransportState::Unspecified => UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}

impl From<RTCIceTransportState> for super::RTCIceConnectionState {
    fn from(state: RTCIceTransportState) -> Self {
        use super::RTCIceConnectionState as C;
        match state {
            RTCIceTransportState::New => C::New,
            RTCIceTransportState::Checking => C::Checking,
            RTCIceTransportState::Connected => C::Connected,
            RTCIceTransportState::Completed => C::Completed,
            RTCIceTransportState::Failed => C::Failed,
            RTCIceTransportState::Disconnected => C::Disconnected,
            RTCIceTransportState::Closed => C::Closed,
            RTCIceTransportState::Unspecified => C::Unspecified,
        }
    }
}
