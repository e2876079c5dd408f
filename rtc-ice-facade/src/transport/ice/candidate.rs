use serde::{Deserialize, Serialize};
use std::fmt;

use super::candidate_type::RTCIceCandidateType;
use super::protocol::RTCIceProtocol;
use shared::error::Result;

/// ICECandidate represents a ice candidate
///
/// Candidates are immutable values: every conversion borrows them and
/// produces a new value, so one candidate may be converted any number of
/// times from any thread.
///
/// ## Specifications
///
/// * [MDN]
/// * [W3C]
///
/// [MDN]: https://developer.mozilla.org/en-US/docs/Web/API/RTCIceCandidate
/// [W3C]: https://w3c.github.io/webrtc-pc/#rtcicecandidate-interface
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RTCIceCandidate {
    pub stats_id: String,
    pub foundation: String,
    pub priority: u32,
    pub address: String,
    pub protocol: RTCIceProtocol,
    pub port: u16,
    /// The component-id as written in the candidate attribute, 1 for RTP and 2 for RTCP.
    pub component: u16,
    pub typ: RTCIceCandidateType,
    /// Empty for host candidates.
    pub related_address: String,
    pub related_port: u16,
}

impl RTCIceCandidate {
    /// to_json returns an ICECandidateInit
    /// as indicated by the spec <https://w3c.github.io/webrtc-pc/#dom-rtcicecandidate-tojson>
    pub fn to_json(&self) -> Result<RTCIceCandidateInit> {
        Ok(RTCIceCandidateInit {
            candidate: format!("candidate:{}", self.to_wire_attribute()?),
            sdp_mid: Some("".to_owned()),
            sdp_mline_index: Some(0u16),
            username_fragment: None,
        })
    }
}

impl fmt::Display for RTCIceCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}:{}",
            self.protocol, self.typ, self.address, self.port
        )?;
        if !self.related_address.is_empty() {
            write!(f, " related {}:{}", self.related_address, self.related_port)?;
        }
        Ok(())
    }
}

/// ICECandidateInit is used to serialize ice candidates
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCIceCandidateInit {
    pub candidate: String,
    pub sdp_mid: Option<String>,
    #[serde(rename = "sdpMLineIndex")]
    pub sdp_mline_index: Option<u16>,
    pub username_fragment: Option<String>,
}

impl RTCIceCandidateInit {
    /// Parses the carried candidate attribute back into an `RTCIceCandidate`.
    pub fn to_candidate(&self) -> Result<RTCIceCandidate> {
        RTCIceCandidate::from_wire_attribute(&self.candidate)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ice_candidate_serialization() {
        let tests = vec![
            (
                RTCIceCandidateInit {
                    candidate: "candidate:abc123".to_string(),
                    sdp_mid: Some("0".to_string()),
                    sdp_mline_index: Some(0),
                    username_fragment: Some("def".to_string()),
                },
                r#"{"candidate":"candidate:abc123","sdpMid":"0","sdpMLineIndex":0,"usernameFragment":"def"}"#,
            ),
            (
                RTCIceCandidateInit {
                    candidate: "candidate:abc123".to_string(),
                    sdp_mid: None,
                    sdp_mline_index: None,
                    username_fragment: None,
                },
                r#"{"candidate":"candidate:abc123","sdpMid":null,"sdpMLineIndex":null,"usernameFragment":null}"#,
            ),
        ];

        for (candidate_init, expected_string) in tests {
            let result = serde_json::to_string(&candidate_init);
            assert!(result.is_ok(), "testCase: marshal err: {result:?}");
            let candidate_data = result.unwrap();
            assert_eq!(candidate_data, expected_string, "string is not expected");

            let result = serde_json::from_str::<RTCIceCandidateInit>(&candidate_data);
            assert!(result.is_ok(), "testCase: unmarshal err: {result:?}");
            if let Ok(actual_candidate_init) = result {
                assert_eq!(actual_candidate_init, candidate_init);
            }
        }
    }

    #[test]
    fn test_ice_candidate_to_json() -> Result<()> {
        let candidate = RTCIceCandidate {
            foundation: "4207374051".to_owned(),
            priority: 1694498815,
            address: "191.228.238.68".to_owned(),
            protocol: RTCIceProtocol::Udp,
            port: 53991,
            component: 1,
            typ: RTCIceCandidateType::Srflx,
            related_address: "192.168.0.274".to_owned(),
            related_port: 53991,
            ..Default::default()
        };

        let init = candidate.to_json()?;
        assert_eq!(
            init.candidate,
            "candidate:4207374051 1 udp 1694498815 191.228.238.68 53991 typ srflx raddr 192.168.0.274 rport 53991"
        );
        assert_eq!(init.sdp_mline_index, Some(0));
        assert_eq!(init.to_candidate()?, candidate);

        Ok(())
    }

    #[test]
    fn test_ice_candidate_display() {
        let tests = vec![
            (
                RTCIceCandidate {
                    address: "1.0.0.1".to_owned(),
                    protocol: RTCIceProtocol::Udp,
                    port: 1234,
                    typ: RTCIceCandidateType::Host,
                    ..Default::default()
                },
                "udp host 1.0.0.1:1234",
            ),
            (
                RTCIceCandidate {
                    address: "::1".to_owned(),
                    protocol: RTCIceProtocol::Tcp,
                    port: 1234,
                    typ: RTCIceCandidateType::Prflx,
                    related_address: "1.0.0.1".to_owned(),
                    related_port: 4321,
                    ..Default::default()
                },
                "tcp prflx ::1:1234 related 1.0.0.1:4321",
            ),
        ];

        for (candidate, expected) in tests {
            assert_eq!(candidate.to_string(), expected);
        }
    }
}
