use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};

use crate::configuration::UNSPECIFIED_STR;

/// NetworkType represents the type of network a candidate may be gathered on.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkType {
    #[default]
    Unspecified,

    /// UDP over IPv4.
    #[serde(rename = "udp4")]
    Udp4,

    /// UDP over IPv6.
    #[serde(rename = "udp6")]
    Udp6,

    /// TCP over IPv4.
    #[serde(rename = "tcp4")]
    Tcp4,

    /// TCP over IPv6.
    #[serde(rename = "tcp6")]
    Tcp6,
}

const NETWORK_TYPE_UDP4_STR: &str = "udp4";
const NETWORK_TYPE_UDP6_STR: &str = "udp6";
const NETWORK_TYPE_TCP4_STR: &str = "tcp4";
const NETWORK_TYPE_TCP6_STR: &str = "tcp6";

impl FromStr for NetworkType {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            NETWORK_TYPE_UDP4_STR => Ok(NetworkType::Udp4),
            NETWORK_TYPE_UDP6_STR => Ok(NetworkType::Udp6),
            NETWORK_TYPE_TCP4_STR => Ok(NetworkType::Tcp4),
            NETWORK_TYPE_TCP6_STR => Ok(NetworkType::Tcp6),
            _ => Err(Error::ErrUnknownValue {
                kind: "network type",
                value: raw.to_owned(),
            }),
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            NetworkType::Udp4 => NETWORK_TYPE_UDP4_STR,
            NetworkType::Udp6 => NETWORK_TYPE_UDP6_STR,
            NetworkType::Tcp4 => NETWORK_TYPE_TCP4_STR,
            NetworkType::Tcp6 => NETWORK_TYPE_TCP6_STR,
            NetworkType::Unspecified => UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}
