use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};

/// ICE transport policy controlling which candidate types are used for connectivity.
///
/// This policy determines which ICE candidates the gatherer will collect and
/// surface. It's primarily used for privacy control and network security
/// requirements.
///
/// # Privacy Considerations
///
/// - **All** - Exposes local IP addresses (host candidates) and public IPs (srflx)
/// - **Relay** - Hides all IP addresses, only TURN server address visible (privacy mode)
///
/// # Examples
///
/// ```
/// use rtc_ice_facade::configuration::RTCIceTransportPolicy;
///
/// let policy: RTCIceTransportPolicy = "relay".parse().unwrap();
/// assert_eq!(policy, RTCIceTransportPolicy::Relay);
/// assert_eq!(policy.to_string(), "relay");
/// assert!("RELAY".parse::<RTCIceTransportPolicy>().is_err());
/// ```
///
/// ## Specifications
///
/// * [W3C RTCIceTransportPolicy](https://w3c.github.io/webrtc-pc/#rtcicetransportpolicy-enum)
/// * [RFC 8445 - ICE](https://tools.ietf.org/html/rfc8445)
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum RTCIceTransportPolicy {
    /// Unspecified - not a valid policy, used as default value
    #[default]
    Unspecified = 0,

    /// Use all types of ICE candidates (recommended for best connectivity).
    ///
    /// Gathers and uses host, server reflexive and relay candidates. This
    /// provides the best chance of establishing a connection but may expose
    /// local and public IP addresses.
    #[serde(rename = "all")]
    All = 1,

    /// Only use relay candidates from TURN servers (privacy mode).
    ///
    /// **Requirements:** Must have TURN servers configured
    #[serde(rename = "relay")]
    Relay = 2,
}

/// ORTC-compatible alias for ICETransportPolicy.
///
/// In ORTC terminology, this is called ICEGatherPolicy, but it serves
/// the same purpose as ICETransportPolicy in WebRTC.
pub type ICEGatherPolicy = RTCIceTransportPolicy;

const ICE_TRANSPORT_POLICY_RELAY_STR: &str = "relay";
const ICE_TRANSPORT_POLICY_ALL_STR: &str = "all";

/// takes a string and converts it to ICETransportPolicy
impl FromStr for RTCIceTransportPolicy {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            ICE_TRANSPORT_POLICY_RELAY_STR => Ok(RTCIceTransportPolicy::Relay),
            ICE_TRANSPORT_POLICY_ALL_STR => Ok(RTCIceTransportPolicy::All),
            _ => Err(Error::ErrUnknownValue {
                kind: "ICE transport policy",
                value: raw.to_owned(),
            }),
        }
    }
}

impl fmt::Display for RTCIceTransportPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RTCIceTransportPolicy::Relay => ICE_TRANSPORT_POLICY_RELAY_STR,
            RTCIceTransportPolicy::All => ICE_TRANSPORT_POLICY_ALL_STR,
            RTCIceTransportPolicy::Unspecified => super::UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}
