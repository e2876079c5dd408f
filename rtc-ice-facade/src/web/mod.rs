//! Host-bridge engine binding.
//!
//! The ICE agent lives in the host environment (a browser's `RTCIceTransport`
//! or an embedding application) and is reached through a [`HostBridge`].
//! Port ranges, timeouts and logging belong to the host, so constructors only
//! take the gather options.

pub mod bridge;
pub mod ice_gatherer;
pub mod ice_transport;
#[cfg(target_arch = "wasm32")]
pub mod js_bridge;

use std::rc::Rc;

pub use bridge::HostBridge;
pub use ice_gatherer::RTCIceGatherer;
pub use ice_transport::RTCIceTransport;
#[cfg(target_arch = "wasm32")]
pub use js_bridge::JsHostBridge;

use crate::transport::ice::RTCIceGatherOptions;
use shared::error::Result;

/// API bundles the constructors of the ICE objects over one host bridge.
pub struct API {
    pub(crate) bridge: Rc<dyn HostBridge>,
}

impl API {
    pub fn new(bridge: Rc<dyn HostBridge>) -> Self {
        API { bridge }
    }

    /// new_ice_gatherer creates a new ice gatherer on the host.
    pub fn new_ice_gatherer(&self, opts: RTCIceGatherOptions) -> Result<RTCIceGatherer> {
        RTCIceGatherer::new(Rc::clone(&self.bridge), opts)
    }

    /// new_ice_transport creates a new ice transport; the host side is created on start.
    pub fn new_ice_transport(&self, gatherer: RTCIceGatherer) -> RTCIceTransport {
        RTCIceTransport::new(Rc::clone(&self.bridge), gatherer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::state::RTCIceTransportState;
    use crate::transport::ice::{IceGatherer, IceTransport, RTCIceParameters};
    use bridge::test::MockBridge;

    #[test]
    fn test_api_shares_bridge() -> Result<()> {
        let mock = Rc::new(MockBridge::default());
        let api = API::new(mock.clone());

        let mut gatherer = api.new_ice_gatherer(RTCIceGatherOptions::default())?;
        gatherer.gather()?;
        let mut transport = api.new_ice_transport(gatherer);
        assert_eq!(transport.state(), RTCIceTransportState::New);

        transport.start(
            RTCIceParameters {
                username_fragment: "ufrag".to_owned(),
                password: "pwd".to_owned(),
                ice_lite: false,
            },
            None,
        )?;
        transport.stop()?;

        assert_eq!(mock.methods().len(), 5);
        Ok(())
    }
}
