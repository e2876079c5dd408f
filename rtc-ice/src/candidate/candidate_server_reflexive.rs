use super::*;

/// The config required to create a new `CandidateServerReflexive`.
#[derive(Default)]
pub struct CandidateServerReflexiveConfig {
    pub base_config: CandidateConfig,

    pub related_address: Option<CandidateRelatedAddress>,
}

impl CandidateServerReflexiveConfig {
    /// Creates a new server reflective candidate.
    pub fn new_candidate_server_reflexive(self) -> Result<Candidate> {
        self.base_config
            .into_candidate(CandidateType::ServerReflexive, self.related_address)
    }
}
