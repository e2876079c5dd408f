//! Caller-side configuration shared by both engine bindings.

pub mod ice_transport_policy;

pub use ice_transport_policy::{ICEGatherPolicy, RTCIceTransportPolicy};

/// What every enumeration's `Display` writes for its `Unspecified` value.
///
/// It is never a valid wire token, and no enumeration's `FromStr` accepts it.
pub const UNSPECIFIED_STR: &str = "Unspecified";
