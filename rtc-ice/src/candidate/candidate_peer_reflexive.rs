use super::*;

/// The config required to create a new `CandidatePeerReflexive`.
#[derive(Default)]
pub struct CandidatePeerReflexiveConfig {
    pub base_config: CandidateConfig,

    pub related_address: Option<CandidateRelatedAddress>,
}

impl CandidatePeerReflexiveConfig {
    /// Creates a new peer reflective candidate.
    pub fn new_candidate_peer_reflexive(self) -> Result<Candidate> {
        self.base_config
            .into_candidate(CandidateType::PeerReflexive, self.related_address)
    }
}
