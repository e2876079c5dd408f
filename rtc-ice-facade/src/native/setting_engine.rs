//! Process-owned configuration of the native engine binding.
//!
//! ```
//! use rtc_ice_facade::engine::setting_engine::SettingEngine;
//! use rtc_ice_facade::transport::ice::NetworkType;
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut setting_engine = SettingEngine::default();
//! setting_engine.set_ephemeral_udp_port_range(50000, 50100)?;
//! setting_engine.set_ice_timeouts(
//!     Some(Duration::from_secs(10)), // disconnected_timeout (default: 5s)
//!     Some(Duration::from_secs(30)), // failed_timeout (default: 25s)
//!     Some(Duration::from_secs(3)),  // keep_alive_interval (default: 2s)
//! );
//! setting_engine.set_network_types(vec![NetworkType::Udp4]);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use super::logger::LogSink;
use crate::transport::ice::NetworkType;
use shared::error::{Error, Result};

/// Range host candidates must be bound within. `0, 0` means any port.
#[derive(Default, Debug, Copy, Clone)]
pub struct EphemeralUDP {
    pub port_min: u16,
    pub port_max: u16,
}

/// ICE timeout configuration for connection health monitoring.
#[derive(Default, Debug, Clone)]
pub struct Timeout {
    /// Duration without network activity before ICE is considered disconnected.
    /// Default: 5 seconds.
    pub ice_disconnected_timeout: Option<Duration>,

    /// Duration without network activity before ICE is considered failed after disconnected.
    /// Default: 25 seconds.
    pub ice_failed_timeout: Option<Duration>,

    /// How often ICE sends keepalive packets when there's no media flow.
    /// Default: 2 seconds.
    pub ice_keepalive_interval: Option<Duration>,
}

/// ICE candidate gathering configuration.
#[derive(Default, Debug, Clone)]
pub struct Candidates {
    /// Enable ICE Lite mode (only respond to connectivity checks, don't initiate).
    pub ice_lite: bool,

    /// Restrict candidate gathering to specific network types. Empty means all.
    pub ice_network_types: Vec<NetworkType>,

    /// Static ICE username fragment (ufrag) for reproducible sessions.
    pub username_fragment: String,

    /// Static ICE password for reproducible sessions.
    pub password: String,
}

/// SettingEngine allows influencing behavior in ways that are not
/// supported by the WebRTC API. This allows us to support additional
/// use-cases without deviating from the WebRTC API elsewhere.
#[derive(Default, Debug, Clone)]
pub struct SettingEngine {
    pub(crate) ephemeral_udp: EphemeralUDP,
    pub(crate) timeout: Timeout,
    pub(crate) candidates: Candidates,
    pub(crate) logger: LogSink,
}

impl SettingEngine {
    /// Limits the pool of ephemeral ports that ICE UDP connections can allocate from.
    pub fn set_ephemeral_udp_port_range(&mut self, port_min: u16, port_max: u16) -> Result<()> {
        if port_max < port_min {
            return Err(Error::ErrInvalidPortRange);
        }

        self.ephemeral_udp.port_min = port_min;
        self.ephemeral_udp.port_max = port_max;
        Ok(())
    }

    /// Sets the behavior around ICE Timeouts
    /// * disconnected_timeout is the duration without network activity before a Agent is considered disconnected. Default is 5 Seconds
    /// * failed_timeout is the duration without network activity before a Agent is considered failed after disconnected. Default is 25 Seconds
    /// * keep_alive_interval is how often the ICE Agent sends extra traffic if there is no activity, if media is flowing no traffic will be sent. Default is 2 seconds
    pub fn set_ice_timeouts(
        &mut self,
        disconnected_timeout: Option<Duration>,
        failed_timeout: Option<Duration>,
        keep_alive_interval: Option<Duration>,
    ) {
        self.timeout.ice_disconnected_timeout = disconnected_timeout;
        self.timeout.ice_failed_timeout = failed_timeout;
        self.timeout.ice_keepalive_interval = keep_alive_interval;
    }

    /// Configures what types of candidate networks are supported during local and server reflexive gathering.
    pub fn set_network_types(&mut self, candidate_types: Vec<NetworkType>) {
        self.candidates.ice_network_types = candidate_types;
    }

    /// Configures whether or not the ice agent should be a lite agent
    pub fn set_lite(&mut self, lite: bool) {
        self.candidates.ice_lite = lite;
    }

    /// Sets a static local ufrag/pwd. Empty values let the engine generate them.
    pub fn set_ice_credentials(&mut self, username_fragment: String, password: String) {
        self.candidates.username_fragment = username_fragment;
        self.candidates.password = password;
    }

    /// Sets the sink the gatherer and transport write their diagnostics to.
    pub fn set_logger(&mut self, logger: LogSink) {
        self.logger = logger;
    }
}
