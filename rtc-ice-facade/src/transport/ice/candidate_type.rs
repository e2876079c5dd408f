use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};

use crate::configuration::UNSPECIFIED_STR;

/// Indicates the type of ICE candidate.
///
/// `RTCIceCandidateType` describes how an ICE candidate was obtained and what
/// kind of network path it represents.
///
/// 1. **Host** - Direct connection via local network interface
/// 2. **Srflx** (Server Reflexive) - NAT mapping discovered via STUN
/// 3. **Prflx** (Peer Reflexive) - NAT mapping discovered during ICE checks
/// 4. **Relay** - Relayed connection via TURN server
///
/// # Examples
///
/// ```
/// use rtc_ice_facade::transport::ice::RTCIceCandidateType;
///
/// let srflx: RTCIceCandidateType = "srflx".parse().unwrap();
/// assert_eq!(srflx, RTCIceCandidateType::Srflx);
/// assert_eq!(RTCIceCandidateType::Host.to_string(), "host");
///
/// fn needs_turn_server(candidate_type: RTCIceCandidateType) -> bool {
///     matches!(candidate_type, RTCIceCandidateType::Relay)
/// }
/// assert!(!needs_turn_server(srflx));
/// ```
///
/// # Specifications
///
/// - [RFC 8445 Section 5.1.1.1] - Candidate Types
/// - [W3C RTCIceCandidateStats.candidateType]
///
/// [RFC 8445 Section 5.1.1.1]: https://datatracker.ietf.org/doc/html/rfc8445#section-5.1.1.1
/// [W3C RTCIceCandidateStats.candidateType]: https://w3c.github.io/webrtc-stats/#dom-rtcicecandidatestats-candidatetype
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RTCIceCandidateType {
    /// Type not specified. This should not occur in normal operation.
    #[default]
    Unspecified,

    /// A candidate obtained by binding to a specific port from an IP address on
    /// the host. This includes IP addresses on physical interfaces and logical
    /// ones, such as those obtained through VPNs.
    #[serde(rename = "host")]
    Host,

    /// A candidate whose IP address and port are a binding allocated by a NAT
    /// for an ICE agent after it sends a packet through the NAT to a STUN server.
    #[serde(rename = "srflx")]
    Srflx,

    /// A candidate whose IP address and port are a binding allocated by a NAT
    /// for an ICE agent after it sends a packet through the NAT to its peer.
    #[serde(rename = "prflx")]
    Prflx,

    /// A candidate obtained from a relay server, such as a TURN server.
    #[serde(rename = "relay")]
    Relay,
}

const ICE_CANDIDATE_TYPE_HOST_STR: &str = "host";
const ICE_CANDIDATE_TYPE_SRFLX_STR: &str = "srflx";
const ICE_CANDIDATE_TYPE_PRFLX_STR: &str = "prflx";
const ICE_CANDIDATE_TYPE_RELAY_STR: &str = "relay";

///  takes a string and converts it into ICECandidateType
impl FromStr for RTCIceCandidateType {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            ICE_CANDIDATE_TYPE_HOST_STR => Ok(RTCIceCandidateType::Host),
            ICE_CANDIDATE_TYPE_SRFLX_STR => Ok(RTCIceCandidateType::Srflx),
            ICE_CANDIDATE_TYPE_PRFLX_STR => Ok(RTCIceCandidateType::Prflx),
            ICE_CANDIDATE_TYPE_RELAY_STR => Ok(RTCIceCandidateType::Relay),
            _ => Err(Error::ErrUnknownValue {
                kind: "ICE candidate type",
                value: raw.to_owned(),
            }),
        }
    }
}

impl fmt::Display for RTCIceCandidateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RTCIceCandidateType::Host => write!(f, "{ICE_CANDIDATE_TYPE_HOST_STR}"),
            RTCIceCandidateType::Srflx => write!(f, "{ICE_CANDIDATE_TYPE_SRFLX_STR}"),
            RTCIceCandidateType::Prflx => write!(f, "{ICE_CANDIDATE_TYPE_PRFLX_STR}"),
            RTCIceCandidateType::Relay => write!(f, "{ICE_CANDIDATE_TYPE_RELAY_STR}"),
            _ => write!(f, "{UNSPECIFIED_STR}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ice_candidate_type() {
        let tests = vec![
            ("host", RTCIceCandidateType::Host),
            ("srflx", RTCIceCandidateType::Srflx),
            ("prflx", RTCIceCandidateType::Prflx),
            ("relay", RTCIceCandidateType::Relay),
        ];

        for (type_string, expected_type) in tests {
            let actual: RTCIceCandidateType = type_string.parse().unwrap();
            assert_eq!(actual, expected_type);
        }
    }

    #[test]
    fn test_ice_candidate_type_unknown() {
        for raw in ["", "Unspecified", "Host", "HOST", "server-reflexive"] {
            assert_eq!(
                raw.parse::<RTCIceCandidateType>(),
                Err(Error::ErrUnknownValue {
                    kind: "ICE candidate type",
                    value: raw.to_owned(),
                })
            );
        }
    }

    #[test]
    fn test_ice_candidate_type_string() {
        let tests = vec![
            (RTCIceCandidateType::Unspecified, "Unspecified"),
            (RTCIceCandidateType::Host, "host"),
            (RTCIceCandidateType::Srflx, "srflx"),
            (RTCIceCandidateType::Prflx, "prflx"),
            (RTCIceCandidateType::Relay, "relay"),
        ];

        for (ctype, expected_string) in tests {
            assert_eq!(ctype.to_string(), expected_string);
        }
    }
}
