use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};

use crate::configuration::UNSPECIFIED_STR;

/// ICEProtocol indicates the transport protocol type that is used in the
/// ice.URL structure.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RTCIceProtocol {
    #[default]
    Unspecified,

    /// UDP indicates the URL uses a UDP transport.
    #[serde(rename = "udp")]
    Udp,

    /// TCP indicates the URL uses a TCP transport.
    #[serde(rename = "tcp")]
    Tcp,
}

const ICE_PROTOCOL_UDP_STR: &str = "udp";
const ICE_PROTOCOL_TCP_STR: &str = "tcp";

/// takes a string and converts it to ICEProtocol.
///
/// Matching ignores ASCII case, so `UDP` from an upper-cased SDP line parses.
impl FromStr for RTCIceProtocol {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        if raw.eq_ignore_ascii_case(ICE_PROTOCOL_UDP_STR) {
            Ok(RTCIceProtocol::Udp)
        } else if raw.eq_ignore_ascii_case(ICE_PROTOCOL_TCP_STR) {
            Ok(RTCIceProtocol::Tcp)
        } else {
            Err(Error::ErrUnknownValue {
                kind: "protocol",
                value: raw.to_owned(),
            })
        }
    }
}

impl fmt::Display for RTCIceProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RTCIceProtocol::Udp => write!(f, "{ICE_PROTOCOL_UDP_STR}"),
            RTCIceProtocol::Tcp => write!(f, "{ICE_PROTOCOL_TCP_STR}"),
            _ => write!(f, "{UNSPECIFIED_STR}"),
        }
    }
}
