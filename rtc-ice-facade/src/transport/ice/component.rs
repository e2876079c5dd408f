use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};

use crate::configuration::UNSPECIFIED_STR;

/// Describes if the ICE transport is used for RTP (or RTCP multiplexing).
///
/// The discriminant is the component-id written in the candidate attribute.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RTCIceComponent {
    #[default]
    Unspecified = 0,

    /// The ICE transport is used for RTP (or RTCP multiplexing), as defined in
    /// <https://tools.ietf.org/html/rfc5245#section-4.1.1.1>. Protocols
    /// multiplexed with RTP (e.g. data channel) share its component ID.
    #[serde(rename = "rtp")]
    Rtp = 1,

    /// The ICE transport is used for RTCP.
    #[serde(rename = "rtcp")]
    Rtcp = 2,
}

const ICE_COMPONENT_RTP_STR: &str = "rtp";
const ICE_COMPONENT_RTCP_STR: &str = "rtcp";

impl RTCIceComponent {
    /// Returns the component-id carried on the wire, 0 for `Unspecified`.
    pub fn component_id(self) -> u16 {
        self as u16
    }
}

impl TryFrom<u16> for RTCIceComponent {
    type Error = Error;

    fn try_from(component_id: u16) -> Result<Self> {
        match component_id {
            1 => Ok(RTCIceComponent::Rtp),
            2 => Ok(RTCIceComponent::Rtcp),
            _ => Err(Error::ErrUnknownValue {
                kind: "ICE component",
                value: component_id.to_string(),
            }),
        }
    }
}

impl FromStr for RTCIceComponent {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            ICE_COMPONENT_RTP_STR => Ok(RTCIceComponent::Rtp),
            ICE_COMPONENT_RTCP_STR => Ok(RTCIceComponent::Rtcp),
            _ => Err(Error::ErrUnknownValue {
                kind: "ICE component",
                value: raw.to_owned(),
            }),
        }
    }
}

impl fmt::Display for RTCIceComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RTCIceComponent::Rtp => ICE_COMPONENT_RTP_STR,
            RTCIceComponent::Rtcp => ICE_COMPONENT_RTCP_STR,
            RTCIceComponent::Unspecified => UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}
