use std::net::IpAddr;

use ice::candidate::candidate_host::CandidateHostConfig;
use ice::candidate::candidate_peer_reflexive::CandidatePeerReflexiveConfig;
use ice::candidate::candidate_relay::CandidateRelayConfig;
use ice::candidate::candidate_server_reflexive::CandidateServerReflexiveConfig;
use ice::candidate::{
    Candidate, CandidateConfig, CandidateRelatedAddress, CandidateType, DEFAULT_LOCAL_PREFERENCE,
};
use shared::error::{Error, Result};

use crate::transport::ice::{
    NetworkType, RTCIceCandidate, RTCIceCandidateType, RTCIceComponent, RTCIceProtocol,
};

impl RTCIceCandidate {
    /// Converts the candidate into the native engine's representation.
    ///
    /// The engine derives the network type from the address family and the
    /// protocol, and computes the priority itself from a fixed local preference.
    pub fn to_ice(&self) -> Result<Candidate> {
        if self.address.parse::<IpAddr>().is_err() {
            return Err(Error::ErrInvalidAddress(self.address.clone()));
        }
        if self.protocol == RTCIceProtocol::Unspecified {
            return Err(Error::ErrICEProtocolUnknown);
        }
        RTCIceComponent::try_from(self.component)?;

        let related_address = if self.related_address.is_empty() {
            None
        } else {
            Some(CandidateRelatedAddress {
                address: self.related_address.clone(),
                port: self.related_port,
            })
        };

        let base_config = CandidateConfig {
            candidate_id: self.stats_id.clone(),
            network: self.protocol.to_string(),
            address: self.address.clone(),
            port: self.port,
            component: self.component,
            foundation: self.foundation.clone(),
            local_preference: Some(DEFAULT_LOCAL_PREFERENCE),
            ..Default::default()
        };

        match self.typ {
            RTCIceCandidateType::Host => {
                if let Some(related_address) = &related_address {
                    log::debug!(
                        "host candidate {} carries related address {}:{}, not forwarded",
                        self,
                        related_address.address,
                        related_address.port
                    );
                }
                CandidateHostConfig { base_config }.new_candidate_host()
            }
            RTCIceCandidateType::Srflx => CandidateServerReflexiveConfig {
                base_config,
                related_address,
            }
            .new_candidate_server_reflexive(),
            RTCIceCandidateType::Prflx => CandidatePeerReflexiveConfig {
                base_config,
                related_address,
            }
            .new_candidate_peer_reflexive(),
            RTCIceCandidateType::Relay => CandidateRelayConfig {
                base_config,
                related_address,
            }
            .new_candidate_relay(),
            RTCIceCandidateType::Unspecified => Err(Error::ErrICECandidateTypeUnknown),
        }
    }
}

impl TryFrom<CandidateType> for RTCIceCandidateType {
    type Error = Error;

    fn try_from(candidate_type: CandidateType) -> Result<Self> {
        match candidate_type {
            CandidateType::Host => Ok(RTCIceCandidateType::Host),
            CandidateType::ServerReflexive => Ok(RTCIceCandidateType::Srflx),
            CandidateType::PeerReflexive => Ok(RTCIceCandidateType::Prflx),
            CandidateType::Relay => Ok(RTCIceCandidateType::Relay),
            CandidateType::Unspecified => Err(Error::ErrICEInvalidConvertCandidateType),
        }
    }
}

impl TryFrom<&Candidate> for RTCIceCandidate {
    type Error = Error;

    fn try_from(candidate: &Candidate) -> Result<Self> {
        let typ = RTCIceCandidateType::try_from(candidate.candidate_type())?;
        let network_type = candidate.network_type();
        let protocol = if network_type.is_udp() {
            RTCIceProtocol::Udp
        } else if network_type.is_tcp() {
            RTCIceProtocol::Tcp
        } else {
            return Err(Error::ErrNetworkTypeUnknown);
        };

        let (related_address, related_port) = match candidate.related_address() {
            Some(related_address) => (related_address.address, related_address.port),
            None => (String::new(), 0),
        };

        Ok(RTCIceCandidate {
            stats_id: candidate.id(),
            foundation: candidate.foundation(),
            priority: candidate.priority(),
            address: candidate.address().to_owned(),
            protocol,
            port: candidate.port(),
            component: candidate.component(),
            typ,
            related_address,
            related_port,
        })
    }
}

impl From<NetworkType> for ice::network_type::NetworkType {
    fn from(network_type: NetworkType) -> Self {
        match network_type {
            NetworkType::Udp4 => ice::network_type::NetworkType::Udp4,
            NetworkType::Udp6 => ice::network_type::NetworkType::Udp6,
            NetworkType::Tcp4 => ice::network_type::NetworkType::Tcp4,
            NetworkType::Tcp6 => ice::network_type::NetworkType::Tcp6,
            NetworkType::Unspecified => ice::network_type::NetworkType::Unspecified,
        }
    }
}
