use std::fmt;
use std::str::FromStr;

use shared::error::{Error, Result};

use crate::configuration::UNSPECIFIED_STR;

/// ICEGathererState represents the current state of the ICE gatherer.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RTCIceGathererState {
    #[default]
    Unspecified,

    /// ICEGathererStateNew indicates object has been created but
    /// gather() has not been called.
    New,

    /// ICEGathererStateGathering indicates gather() has been called,
    /// and the ICEGatherer is in the process of gathering candidates.
    Gathering,

    /// ICEGathererStateComplete indicates the ICEGatherer has completed gathering.
    Complete,

    /// ICEGathererStateClosed indicates the closed state can only be entered
    /// when the ICEGatherer has been closed intentionally by calling close().
    Closed,
}

const ICE_GATHERER_STATE_NEW_STR: &str = "new";
const ICE_GATHERER_STATE_GATHERING_STR: &str = "gathering";
const ICE_GATHERER_STATE_COMPLETE_STR: &str = "complete";
const ICE_GATHERER_STATE_CLOSED_STR: &str = "closed";

impl FromStr for RTCIceGathererState {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            ICE_GATHERER_STATE_NEW_STR => Ok(RTCIceGathererState::New),
            ICE_GATHERER_STATE_GATHERING_STR => Ok(RTCIceGathererState::Gathering),
            ICE_GATHERER_STATE_COMPLETE_STR => Ok(RTCIceGathererState::Complete),
            ICE_GATHERER_STATE_CLOSED_STR => Ok(RTCIceGathererState::Closed),
            _ => Err(Error::ErrUnknownValue {
                kind: "ICE gatherer state",
                value: raw.to_owned(),
            }),
        }
    }
}

impl From<u8> for RTCIceGathererState {
    fn from(v: u8) -> Self {
        match v {
            1 => RTCIceGathererState::New,
            2 => RTCIceGathererState::Gathering,
            3 => RTCIceGathererState::Complete,
            4 => RTCIceGathererState::Closed,
            _ => RTCIceGathererState::Unspecified,
        }
    }
}

impl fmt::Display for RTCIceGathererState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RTCIceGathererState::New => write!(f, "{ICE_GATHERER_STATE_NEW_STR}"),
            RTCIceGathererState::Gathering => write!(f, "{ICE_GATHERER_STATE_GATHERING_STR}"),
            RTCIceGathererState::Complete => write!(f, "{ICE_GATHERER_STATE_COMPLETE_STR}"),
            RTCIceGathererState::Closed => write!(f, "{ICE_GATHERER_STATE_CLOSED_STR}"),
            _ => write!(f, "{UNSPECIFIED_STR}"),
        }
    }
}
