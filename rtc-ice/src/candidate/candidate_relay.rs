use super::*;

/// The config required to create a new `CandidateRelay`.
#[derive(Default)]
pub struct CandidateRelayConfig {
    pub base_config: CandidateConfig,

    pub related_address: Option<CandidateRelatedAddress>,
}

impl CandidateRelayConfig {
    /// Creates a new relay candidate.
    pub fn new_candidate_relay(self) -> Result<Candidate> {
        self.base_config
            .into_candidate(CandidateType::Relay, self.related_address)
    }
}
