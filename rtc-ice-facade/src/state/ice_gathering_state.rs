use std::fmt;
use std::str::FromStr;

use shared::error::{Error, Result};

use crate::configuration::UNSPECIFIED_STR;

/// Describes the state of the ICE candidate gathering process.
///
/// The gatherer moves from **New** to **Gathering** when gathering starts and
/// to **Complete** once every local candidate has been surfaced.
///
/// # Specifications
///
/// - [W3C RTCIceGatheringState](https://w3c.github.io/webrtc-pc/#dom-rtcicegatheringstate)
/// - [RFC 8838] - Trickle ICE
///
/// [RFC 8838]: https://datatracker.ietf.org/doc/html/rfc8838
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RTCIceGatheringState {
    /// State not specified. This should not occur in normal operation.
    #[default]
    Unspecified,

    /// Any of the ICE transports are in the "new" gathering state and none
    /// of the transports are in the "gathering" state, or there are no
    /// transports.
    New,

    /// Any of the ICE transports are in the "gathering" state.
    Gathering,

    /// At least one ICE transport exists, and all ICE transports are in the
    /// "completed" gathering state.
    Complete,
}

const ICE_GATHERING_STATE_NEW_STR: &str = "new";
const ICE_GATHERING_STATE_GATHERING_STR: &str = "gathering";
const ICE_GATHERING_STATE_COMPLETE_STR: &str = "complete";

/// takes a string and converts it to ICEGatheringState
impl FromStr for RTCIceGatheringState {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            ICE_GATHERING_STATE_NEW_STR => Ok(RTCIceGatheringState::New),
            ICE_GATHERING_STATE_GATHERING_STR => Ok(RTCIceGatheringState::Gathering),
            ICE_GATHERING_STATE_COMPLETE_STR => Ok(RTCIceGatheringState::Complete),
            _ => Err(Error::ErrUnknownValue {
                kind: "ICE gathering state",
                value: raw.to_owned(),
            }),
        }
    }
}

impl From<u8> for RTCIceGatheringState {
    fn from(v: u8) -> Self {
        match v {
            1 => RTCIceGatheringState::New,
            2 => RTCIceGatheringState::Gathering,
            3 => RTCIceGatheringState::Complete,
            _ => RTCIceGatheringState::Unspecified,
        }
    }
}

impl fmt::Display for RTCIceGatheringState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RTCIceGatheringState::New => write!(f, "{ICE_GATHERING_STATE_NEW_STR}"),
            RTCIceGatheringState::Gathering => write!(f, "{ICE_GATHERING_STATE_GATHERING_STR}"),
            RTCIceGatheringState::Complete => {
                write!(f, "{ICE_GATHERING_STATE_COMPLETE_STR}")
            }
            _ => write!(f, "{UNSPECIFIED_STR}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_ice_gathering_state() {
        let tests = vec![
            ("new", RTCIceGatheringState::New),
            ("gathering", RTCIceGatheringState::Gathering),
            ("complete", RTCIceGatheringState::Complete),
        ];

        for (state_string, expected_state) in tests {
            assert_eq!(
                state_string.parse::<RTCIceGatheringState>(),
                Ok(expected_state)
            );
        }

        assert_eq!(
            "Unspecified".parse::<RTCIceGatheringState>(),
            Err(Error::ErrUnknownValue {
                kind: "ICE gathering state",
                value: "Unspecified".to_owned(),
            })
        );
    }

    #[test]
    fn test_ice_gathering_state_string() {
        let tests = vec![
            (RTCIceGatheringState::Unspecified, "Unspecified"),
            (RTCIceGatheringState::New, "new"),
            (RTCIceGatheringState::Gathering, "gathering"),
            (RTCIceGatheringState::Complete, "complete"),
        ];

        for (state, expected_string) in tests {
            assert_eq!(state.to_string(), expected_string);
        }
    }
}
