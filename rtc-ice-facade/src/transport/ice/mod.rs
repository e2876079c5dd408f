//! The ICE candidate model and the binding-independent gatherer and
//! transport contracts.

pub mod candidate;
pub mod candidate_pair;
pub mod candidate_type;
pub mod component;
pub mod credential_type;
pub mod gatherer;
pub mod ice_transport;
pub mod network_type;
pub mod parameters;
pub mod protocol;
pub mod role;
pub mod server;

pub use candidate::{RTCIceCandidate, RTCIceCandidateInit};
pub use candidate_pair::RTCIceCandidatePair;
pub use candidate_type::RTCIceCandidateType;
pub use component::RTCIceComponent;
pub use credential_type::RTCIceCredentialType;
pub use gatherer::{IceGatherer, IceGathererEvent, RTCIceGatherOptions};
pub use ice_transport::{IceTransport, IceTransportEvent};
pub use network_type::NetworkType;
pub use parameters::RTCIceParameters;
pub use protocol::RTCIceProtocol;
pub use role::RTCIceRole;
pub use server::{RTCIceCredential, RTCIceServer, RTCOAuthCredential};
