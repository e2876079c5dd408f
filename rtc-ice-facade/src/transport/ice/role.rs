use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};

use crate::configuration::UNSPECIFIED_STR;

/// ICERole describes the role ice.Agent is playing in selecting the
/// preferred the candidate pair.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RTCIceRole {
    #[default]
    Unspecified,

    /// ICERoleControlling indicates that the ICE agent that is responsible
    /// for selecting the final choice of candidate pairs and signaling them
    /// through STUN and an updated offer, if needed. In any session, one agent
    /// is always controlling. The other is the controlled agent.
    #[serde(rename = "controlling")]
    Controlling,

    /// ICERoleControlled indicates that an ICE agent that waits for the
    /// controlling agent to select the final choice of candidate pairs.
    #[serde(rename = "controlled")]
    Controlled,
}

const ICE_ROLE_CONTROLLING_STR: &str = "controlling";
const ICE_ROLE_CONTROLLED_STR: &str = "controlled";

impl FromStr for RTCIceRole {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            ICE_ROLE_CONTROLLING_STR => Ok(RTCIceRole::Controlling),
            ICE_ROLE_CONTROLLED_STR => Ok(RTCIceRole::Controlled),
            _ => Err(Error::ErrUnknownValue {
                kind: "ICE role",
                value: raw.to_owned(),
            }),
        }
    }
}

impl fmt::Display for RTCIceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RTCIceRole::Controlling => write!(f, "{ICE_ROLE_CONTROLLING_STR}"),
            RTCIceRole::Controlled => write!(f, "{ICE_ROLE_CONTROLLED_STR}"),
            _ => write!(f, "{UNSPECIFIED_STR}"),
        }
    }
}
