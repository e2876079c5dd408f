use super::candidate::RTCIceCandidate;
use super::parameters::RTCIceParameters;
use super::server::RTCIceServer;
use crate::configuration::RTCIceTransportPolicy;
use crate::state::RTCIceGathererState;
use shared::error::Result;

/// ICEGatherOptions provides options relating to the gathering of ICE candidates.
#[derive(Default, Debug, Clone)]
pub struct RTCIceGatherOptions {
    pub ice_servers: Vec<RTCIceServer>,
    pub ice_gather_policy: RTCIceTransportPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IceGathererEvent {
    OnLocalCandidate(RTCIceCandidate),
    OnICEGathererState(RTCIceGathererState),
    OnGatheringComplete,
}

/// Candidate gathering as exposed by every engine binding.
///
/// Gathers local host, server reflexive and relay candidates, as well as
/// enabling the retrieval of local ICE parameters which can be exchanged in
/// signaling. Progress is reported through [`IceGatherer::poll_event`].
pub trait IceGatherer {
    /// Starts gathering ICE candidates.
    fn gather(&mut self) -> Result<()>;

    /// Prunes all local candidates and releases the engine.
    fn close(&mut self) -> Result<()>;

    /// Returns the ICE parameters of the gatherer.
    fn get_local_parameters(&mut self) -> Result<RTCIceParameters>;

    /// Returns the sequence of valid local candidates.
    fn get_local_candidates(&mut self) -> Result<Vec<RTCIceCandidate>>;

    fn state(&self) -> RTCIceGathererState;

    fn poll_event(&mut self) -> Option<IceGathererEvent>;
}
