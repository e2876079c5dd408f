//! Mapping between [`RTCIceCandidate`] and the SDP `candidate` attribute.
//!
//! ```text
//! candidate-attribute = "candidate" ":" foundation SP component-id SP
//!                       transport SP priority SP connection-address SP port
//!                       SP cand-type [SP rel-addr] [SP rel-port]
//!                       *(SP extension-att-name SP extension-att-value)
//! ```
//!
//! [RFC 8839 Section 5.1](https://datatracker.ietf.org/doc/html/rfc8839#section-5.1)


use std::fmt;

use crate::transport::ice::{
    RTCIceCandidate, RTCIceCandidateType, RTCIceComponent, RTCIceProtocol,
};
use shared::error::{Error, Result};

const ATTRIBUTE_PREFIX: &str = "a=";
const CANDIDATE_PREFIX: &str = "candidate:";

/// A candidate attribute as the SDP layer sees it: transport and type are
/// kept as raw tokens and validated only when converted to an `RTCIceCandidate`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SdpIceCandidate {
    pub foundation: String,
    pub component: u16,
    pub protocol: String,
    pub priority: u32,
    pub address: String,
    pub port: u16,
    pub typ: String,
    pub related_address: String,
    pub related_port: u16,
    /// Trailing key/value pairs such as `tcptype`, `generation` or `ufrag`.
    pub extensions: Vec<(String, String)>,
}

impl fmt::Display for SdpIceCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marshal())
    }
}

impl SdpIceCandidate {
    /// Returns the attribute value, without the `candidate:` prefix.
    pub fn marshal(&self) -> String {
        let mut val = format!(
            "{} {} {} {} {} {} typ {}",
            self.foundation,
            self.component,
            self.protocol,
            self.priority,
            self.address,
            self.port,
            self.typ
        );

        if !self.related_address.is_empty() {
            val += format!(
                " raddr {} rport {}",
                self.related_address, self.related_port
            )
            .as_str();
        }

        for (key, value) in &self.extensions {
            val += format!(" {key} {value}").as_str();
        }

        val
    }

    /// Parses an attribute value. A leading `a=` and `candidate:` are accepted.
    pub fn unmarshal(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let raw = raw.strip_prefix(ATTRIBUTE_PREFIX).unwrap_or(raw);
        let raw = raw.strip_prefix(CANDIDATE_PREFIX).unwrap_or(raw);

        let split: Vec<&str> = raw.split_whitespace().collect();
        if split.len() < 8 {
            return Err(Error::Other(format!(
                "{:?} ({})",
                Error::ErrAttributeTooShortIceCandidate,
                split.len()
            )));
        }

        if split[6] != "typ" {
            return Err(Error::ErrParseType);
        }

        let mut candidate = SdpIceCandidate {
            foundation: split[0].to_owned(),
            component: split[1].parse()?,
            protocol: split[2].to_owned(),
            priority: split[3].parse()?,
            address: split[4].to_owned(),
            port: split[5].parse()?,
            typ: split[7].to_owned(),
            ..Default::default()
        };

        let rest = &split[8..];
        if rest.len() % 2 != 0 {
            return Err(Error::Other(format!(
                "{:?}: dangling key {}",
                Error::ErrAttributeTooShortIceCandidate,
                rest[rest.len() - 1]
            )));
        }

        let mut has_related_port = false;
        for pair in rest.chunks(2) {
            match pair[0] {
                "raddr" => candidate.related_address = pair[1].to_owned(),
                "rport" => {
                    candidate.related_port = pair[1].parse().map_err(|_| {
                        Error::Other(format!("{:?}: {}", Error::ErrParseRelatedAddr, pair[1]))
                    })?;
                    has_related_port = true;
                }
                key => candidate
                    .extensions
                    .push((key.to_owned(), pair[1].to_owned())),
            }
        }

        if candidate.related_address.is_empty() == has_related_port {
            return Err(Error::Other(format!(
                "{:?}: raddr and rport must appear together",
                Error::ErrParseRelatedAddr
            )));
        }

        Ok(candidate)
    }
}

impl TryFrom<&SdpIceCandidate> for RTCIceCandidate {
    type Error = Error;

    fn try_from(c: &SdpIceCandidate) -> Result<Self> {
        let typ: RTCIceCandidateType = c.typ.parse()?;
        let protocol: RTCIceProtocol = c.protocol.parse()?;
        RTCIceComponent::try_from(c.component)?;

        Ok(RTCIceCandidate {
            stats_id: String::new(),
            foundation: c.foundation.clone(),
            priority: c.priority,
            address: c.address.clone(),
            protocol,
            port: c.port,
            component: c.component,
            typ,
            related_address: c.related_address.clone(),
            related_port: c.related_port,
        })
    }
}

impl From<&RTCIceCandidate> for SdpIceCandidate {
    fn from(c: &RTCIceCandidate) -> Self {
        SdpIceCandidate {
            foundation: c.foundation.clone(),
            component: c.component,
            protocol: c.protocol.to_string(),
            priority: c.priority,
            address: c.address.clone(),
            port: c.port,
            typ: c.typ.to_string(),
            related_address: c.related_address.clone(),
            related_port: c.related_port,
            extensions: vec![],
        }
    }
}

impl RTCIceCandidate {
    /// Serializes the candidate into the SDP attribute value.
    ///
    /// `stats_id` is local bookkeeping and is not carried on the wire.
    /// Anything [`RTCIceCandidate::from_wire_attribute`] would reject is
    /// refused here instead of being emitted.
    pub fn to_wire_attribute(&self) -> Result<String> {
        if self.typ == RTCIceCandidateType::Unspecified {
            return Err(Error::ErrICECandidateTypeUnknown);
        }
        if self.protocol == RTCIceProtocol::Unspecified {
            return Err(Error::ErrICEProtocolUnknown);
        }
        if self.foundation.is_empty() || self.foundation.contains(char::is_whitespace) {
            return Err(Error::ErrInvalidFoundation(self.foundation.clone()));
        }
        RTCIceComponent::try_from(self.component)?;
        if self.related_address.is_empty() && self.related_port != 0 {
            return Err(Error::Other(format!(
                "{:?}: rport {} without raddr",
                Error::ErrParseRelatedAddr,
                self.related_port
            )));
        }

        Ok(SdpIceCandidate::from(self).marshal())
    }

    /// Parses a candidate from an SDP attribute value.
    pub fn from_wire_attribute(raw: &str) -> Result<Self> {
        let c = SdpIceCandidate::unmarshal(raw)?;
        RTCIceCandidate::try_from(&c)
    }
}
