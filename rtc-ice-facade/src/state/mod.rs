//! ICE state enumerations.

pub mod ice_connection_state;
pub mod ice_gatherer_state;
pub mod ice_gathering_state;
pub mod ice_transport_state;

pub use ice_connection_state::RTCIceConnectionState;
pub use ice_gatherer_state::RTCIceGathererState;
pub use ice_gathering_state::RTCIceGatheringState;
pub use ice_transport_state::RTCIceTransportState;
