use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};

use crate::configuration::UNSPECIFIED_STR;

/// ICECredentialType indicates the type of credentials used to connect to
/// an ICE server.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RTCIceCredentialType {
    #[default]
    Unspecified,

    /// ICECredential::Password describes username and password based
    /// credentials as described in <https://tools.ietf.org/html/rfc5389>.
    #[serde(rename = "password")]
    Password,

    /// ICECredential::Oauth describes token based credential as described
    /// in <https://tools.ietf.org/html/rfc7635>.
    #[serde(rename = "oauth")]
    Oauth,
}

const ICE_CREDENTIAL_TYPE_PASSWORD_STR: &str = "password";
const ICE_CREDENTIAL_TYPE_OAUTH_STR: &str = "oauth";

impl FromStr for RTCIceCredentialType {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            ICE_CREDENTIAL_TYPE_PASSWORD_STR => Ok(RTCIceCredentialType::Password),
            ICE_CREDENTIAL_TYPE_OAUTH_STR => Ok(RTCIceCredentialType::Oauth),
            _ => Err(Error::ErrUnknownValue {
                kind: "ICE credential type",
                value: raw.to_owned(),
            }),
        }
    }
}

impl fmt::Display for RTCIceCredentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RTCIceCredentialType::Password => write!(f, "{ICE_CREDENTIAL_TYPE_PASSWORD_STR}"),
            RTCIceCredentialType::Oauth => write!(f, "{ICE_CREDENTIAL_TYPE_OAUTH_STR}"),
            _ => write!(f, "{UNSPECIFIED_STR}"),
        }
    }
}
