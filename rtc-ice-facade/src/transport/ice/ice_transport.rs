use super::candidate::RTCIceCandidate;
use super::parameters::RTCIceParameters;
use super::role::RTCIceRole;
use crate::state::RTCIceTransportState;
use shared::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IceTransportEvent {
    OnConnectionStateChange(RTCIceTransportState),
}

/// ICETransport allows an application access to information about the ICE
/// transport over which packets are sent and received.
pub trait IceTransport {
    /// Starts connectivity checks against the remote parameters in the given role.
    ///
    /// Only valid while the transport is in `RTCIceTransportState::New`.
    fn start(&mut self, params: RTCIceParameters, role: Option<RTCIceRole>) -> Result<()>;

    /// Irreversibly stops the transport.
    fn stop(&mut self) -> Result<()>;

    /// Adds a remote candidate; `None` signals the end of remote candidates.
    fn add_remote_candidate(&mut self, remote_candidate: Option<RTCIceCandidate>) -> Result<()>;

    fn role(&self) -> RTCIceRole;

    fn state(&self) -> RTCIceTransportState;

    fn get_remote_parameters(&self) -> RTCIceParameters;

    fn poll_event(&mut self) -> Option<IceTransportEvent>;
}
