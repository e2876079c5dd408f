//! Native engine binding over the sans-I/O [`ice::agent::Agent`].
//!
//! The caller's socket layer owns UDP/TCP I/O and STUN transactions; it hands
//! discovered candidates to the gatherer and connectivity results to the
//! transport, while this binding keeps the engine state and reports events.

pub mod candidate;
pub mod ice_gatherer;
pub mod ice_transport;
pub mod logger;
pub mod setting_engine;

use std::sync::Arc;

pub use ice_gatherer::RTCIceGatherer;
pub use ice_transport::RTCIceTransport;
pub use logger::LogSink;
pub use setting_engine::SettingEngine;

use crate::transport::ice::RTCIceGatherOptions;
use shared::error::Result;

/// API bundles the constructors of the ICE objects and the settings shared by them.
pub struct API {
    pub(crate) setting_engine: Arc<SettingEngine>,
}

impl API {
    /// new_ice_gatherer creates a new ice gatherer.
    /// This constructor is part of the ORTC API. It is not
    /// meant to be used together with the basic WebRTC API.
    pub fn new_ice_gatherer(&self, opts: RTCIceGatherOptions) -> Result<RTCIceGatherer> {
        let setting_engine = &self.setting_engine;

        let mut gatherer = RTCIceGatherer::new(
            setting_engine.ephemeral_udp.port_min,
            setting_engine.ephemeral_udp.port_max,
            setting_engine.timeout.ice_disconnected_timeout,
            setting_engine.timeout.ice_keepalive_interval,
            setting_engine.logger,
            setting_engine.candidates.ice_network_types.clone(),
            opts,
        )?;
        gatherer.failed_timeout = setting_engine.timeout.ice_failed_timeout;
        gatherer.lite = setting_engine.candidates.ice_lite;
        gatherer.username_fragment = setting_engine.candidates.username_fragment.clone();
        gatherer.password = setting_engine.candidates.password.clone();

        Ok(gatherer)
    }

    /// new_ice_transport creates a new ice transport.
    /// This constructor is part of the ORTC API. It is not
    /// meant to be used together with the basic WebRTC API.
    pub fn new_ice_transport(&self, gatherer: RTCIceGatherer) -> RTCIceTransport {
        RTCIceTransport::new(gatherer, self.setting_engine.logger)
    }

    /// Returns the internal [`SettingEngine`].
    pub fn setting_engine(&self) -> &SettingEngine {
        &self.setting_engine
    }
}

#[derive(Default)]
pub struct APIBuilder {
    setting_engine: Option<Arc<SettingEngine>>,
}

impl APIBuilder {
    pub fn new() -> Self {
        APIBuilder::default()
    }

    pub fn build(mut self) -> API {
        API {
            setting_engine: if let Some(setting_engine) = self.setting_engine.take() {
                setting_engine
            } else {
                Arc::new(SettingEngine::default())
            },
        }
    }

    /// WithSettingEngine allows providing a SettingEngine to the API.
    /// Settings should not be changed after passing the engine to an API.
    pub fn with_setting_engine(mut self, setting_engine: Arc<SettingEngine>) -> Self {
        self.setting_engine = Some(setting_engine);
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::transport::ice::{IceGatherer, IceTransport, RTCIceRole, RTCIceServer};
    use shared::error::Error;
    use std::time::Duration;

    #[test]
    fn test_api_applies_setting_engine() -> Result<()> {
        let mut setting_engine = SettingEngine::default();
        setting_engine.set_ephemeral_udp_port_range(40000, 40100)?;
        setting_engine.set_ice_timeouts(
            Some(Duration::from_secs(1)),
            Some(Duration::from_secs(2)),
            Some(Duration::from_secs(3)),
        );
        setting_engine.set_ice_credentials(
            "localufrag".to_owned(),
            "localpasswordlocalpassword".to_owned(),
        );

        let api = APIBuilder::new()
            .with_setting_engine(Arc::new(setting_engine))
            .build();
        let mut gatherer = api.new_ice_gatherer(RTCIceGatherOptions::default())?;
        assert_eq!(gatherer.port_min, 40000);
        assert_eq!(gatherer.port_max, 40100);

        let params = gatherer.get_local_parameters()?;
        assert_eq!(params.username_fragment, "localufrag");
        assert_eq!(params.password, "localpasswordlocalpassword");
        assert!(!params.ice_lite);

        let agent = gatherer.agent.as_ref().unwrap();
        assert_eq!(agent.disconnected_timeout(), Duration::from_secs(1));
        assert_eq!(agent.failed_timeout(), Duration::from_secs(2));
        assert_eq!(agent.keepalive_interval(), Duration::from_secs(3));

        let mut transport = api.new_ice_transport(gatherer);
        transport.start(
            crate::transport::ice::RTCIceParameters {
                username_fragment: "remoteufrag".to_owned(),
                password: "remotepasswordremotepassword".to_owned(),
                ice_lite: false,
            },
            Some(RTCIceRole::Controlling),
        )?;
        assert_eq!(transport.role(), RTCIceRole::Controlling);

        Ok(())
    }

    #[test]
    fn test_api_lite_rejects_server_urls() -> Result<()> {
        let mut setting_engine = SettingEngine::default();
        setting_engine.set_lite(true);
        let api = APIBuilder::new()
            .with_setting_engine(Arc::new(setting_engine))
            .build();

        let mut lite = api.new_ice_gatherer(RTCIceGatherOptions::default())?;
        assert!(lite.get_local_parameters()?.ice_lite);

        let mut with_stun = api.new_ice_gatherer(RTCIceGatherOptions {
            ice_servers: vec![RTCIceServer {
                urls: vec!["stun:stun.example.org".to_owned()],
                ..Default::default()
            }],
            ..Default::default()
        })?;
        assert_eq!(with_stun.gather(), Err(Error::ErrUselessUrlsProvided));

        Ok(())
    }
}
