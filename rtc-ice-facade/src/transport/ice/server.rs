use serde::{Deserialize, Serialize};

use super::credential_type::RTCIceCredentialType;
use ice::url::{SchemeType, Url};
use shared::error::{Error, Result};

/// OAuth credential information which is used by the STUN/TURN client to
/// connect to an ICE server as defined in <https://tools.ietf.org/html/rfc7635>.
///
/// The kid parameter is not located here, but in the server's username.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCOAuthCredential {
    pub mac_key: String,
    pub access_token: String,
}

/// The credential carried by an `RTCIceServer`, typed by its
/// `RTCIceCredentialType`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RTCIceCredential {
    #[default]
    None,
    Password(String),
    OAuth(RTCOAuthCredential),
}

impl RTCIceCredential {
    pub fn is_none(&self) -> bool {
        *self == RTCIceCredential::None
    }
}

/// ICEServer describes a single STUN and TURN server that can be used by
/// the ICEAgent to establish a connection with a peer.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCIceServer {
    pub urls: Vec<String>,
    pub username: String,
    pub credential: RTCIceCredential,
    pub credential_type: RTCIceCredentialType,
}

impl RTCIceServer {
    pub(crate) fn parse_url(&self, url_str: &str) -> Result<Url> {
        Url::parse_url(url_str)
    }

    /// Validates every URL and returns them parsed, with TURN credentials attached.
    pub fn urls(&self) -> Result<Vec<Url>> {
        let mut urls = vec![];

        for url_str in &self.urls {
            let mut url = self.parse_url(strip_stun_query(url_str))?;

            if url.scheme == SchemeType::Turn || url.scheme == SchemeType::Turns {
                // https://www.w3.org/TR/webrtc/#set-the-configuration (step #11.3.2)
                if self.username.is_empty() || self.credential.is_none() {
                    return Err(Error::ErrNoTurnCredentials);
                }
                url.username.clone_from(&self.username);

                match (self.credential_type, &self.credential) {
                    (RTCIceCredentialType::Password, RTCIceCredential::Password(password)) => {
                        url.password.clone_from(password);
                    }
                    // the OAuth token is carried by the TURN client, not the URL
                    (RTCIceCredentialType::Oauth, RTCIceCredential::OAuth(_)) => {}
                    _ => return Err(Error::ErrTurnCredentials),
                };
            }

            urls.push(url);
        }

        Ok(urls)
    }
}

/// Strips a query from a stun(s) URL, which the URL grammar forbids.
fn strip_stun_query(url_str: &str) -> &str {
    if url_str.starts_with("stun") {
        if let Some((stripped, _)) = url_str.split_once('?') {
            log::warn!("query in stun url {url_str} is ignored");
            return stripped;
        }
    }
    url_str
}

/// Validates the servers of a gather request and flattens their URLs.
pub(crate) fn validate_ice_servers(ice_servers: &[RTCIceServer]) -> Result<Vec<Url>> {
    let mut validated_servers = vec![];
    for server in ice_servers {
        validated_servers.extend(server.urls()?);
    }
    Ok(validated_servers)
}
