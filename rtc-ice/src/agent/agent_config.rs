use std::time::Duration;

use super::*;
use crate::network_type::{NetworkType, supported_network_types};
use crate::url::*;

/// The interval used to keep candidates alive.
pub(crate) const DEFAULT_KEEPALIVE_INTERVAL: Duration = Duration::from_secs(2);

/// The default time till an Agent transitions disconnected.
pub(crate) const DEFAULT_DISCONNECTED_TIMEOUT: Duration = Duration::from_secs(5);

/// The default time till an Agent transitions to failed after disconnected.
pub(crate) const DEFAULT_FAILED_TIMEOUT: Duration = Duration::from_secs(25);

pub(crate) fn default_candidate_types() -> Vec<CandidateType> {
    vec![
        CandidateType::Host,
        CandidateType::ServerReflexive,
        CandidateType::Relay,
    ]
}

/// Collects the arguments to `ice::Agent` construction into a single structure, for
/// future-proofness of the interface.
#[derive(Default, Debug, Clone)]
pub struct AgentConfig {
    pub urls: Vec<Url>,

    /// Lower bound of the ephemeral port range host candidates must come from.
    /// Both bounds set to 0 disables the check.
    pub port_min: u16,
    /// Upper bound of the ephemeral port range host candidates must come from.
    pub port_max: u16,

    /// It is used to perform connectivity checks. The values MUST be unguessable, with at least
    /// 128 bits of random number generator output used to generate the password, and at least 24
    /// bits of output to generate the username fragment.
    pub local_ufrag: String,
    /// It is used to perform connectivity checks. The values MUST be unguessable, with at least
    /// 128 bits of random number generator output used to generate the password, and at least 24
    /// bits of output to generate the username fragment.
    pub local_pwd: String,

    /// Defaults to 5 seconds when this property is nil.
    /// If the duration is 0, the ICE Agent will never go to disconnected.
    pub disconnected_timeout: Option<Duration>,

    /// Defaults to 25 seconds when this property is nil.
    /// If the duration is 0, we will never go to failed.
    pub failed_timeout: Option<Duration>,

    /// Determines how often should we send ICE keepalives (should be less than connection timeout
    /// above) when this is nil, it defaults to 2 seconds.
    /// A keepalive interval of 0 means we never send keepalive packets
    pub keepalive_interval: Option<Duration>,

    /// The network types the agent accepts candidates on. Empty means every supported type.
    pub network_types: Vec<NetworkType>,

    /// An optional configuration for disabling or enabling support for specific candidate types.
    pub candidate_types: Vec<CandidateType>,

    pub is_controlling: bool,

    /// lite agents do not perform connectivity check and only provide host candidates.
    pub lite: bool,
}

impl AgentConfig {
    pub(crate) fn init_network_types(&self) -> Vec<NetworkType> {
        if self.network_types.is_empty() {
            supported_network_types()
        } else {
            self.network_types.clone()
        }
    }

    pub(crate) fn init_candidate_types(&self) -> Vec<CandidateType> {
        if self.candidate_types.is_empty() {
            default_candidate_types()
        } else {
            self.candidate_types.clone()
        }
    }
}
