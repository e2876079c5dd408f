use std::collections::VecDeque;

use ice::state::ConnectionState;
use shared::error::{Error, Result};

use super::ice_gatherer::RTCIceGatherer;
use super::logger::LogSink;
use crate::state::{RTCIceGathererState, RTCIceTransportState};
use crate::transport::ice::{
    IceGatherer, IceTransport, IceTransportEvent, RTCIceCandidate, RTCIceParameters, RTCIceRole,
};

impl From<ConnectionState> for RTCIceTransportState {
    fn from(raw: ConnectionState) -> Self {
        match raw {
            ConnectionState::New => RTCIceTransportState::New,
            ConnectionState::Checking => RTCIceTransportState::Checking,
            ConnectionState::Connected => RTCIceTransportState::Connected,
            ConnectionState::Completed => RTCIceTransportState::Completed,
            ConnectionState::Failed => RTCIceTransportState::Failed,
            ConnectionState::Disconnected => RTCIceTransportState::Disconnected,
            ConnectionState::Closed => RTCIceTransportState::Closed,
            ConnectionState::Unspecified => RTCIceTransportState::Unspecified,
        }
    }
}

impl From<RTCIceTransportState> for ConnectionState {
    fn from(state: RTCIceTransportState) -> Self {
        match state {
            RTCIceTransportState::New => ConnectionState::New,
            RTCIceTransportState::Checking => ConnectionState::Checking,
            RTCIceTransportState::Connected => ConnectionState::Connected,
            RTCIceTransportState::Completed => ConnectionState::Completed,
            RTCIceTransportState::Failed => ConnectionState::Failed,
            RTCIceTransportState::Disconnected => ConnectionState::Disconnected,
            RTCIceTransportState::Closed => ConnectionState::Closed,
            RTCIceTransportState::Unspecified => ConnectionState::Unspecified,
        }
    }
}

/// ICETransport allows an application access to information about the ICE
/// transport over which packets are sent and received.
#[derive(Debug)]
pub struct RTCIceTransport {
    pub(crate) gatherer: RTCIceGatherer,
    pub(crate) state: RTCIceTransportState,
    pub(crate) role: RTCIceRole,
    pub(crate) remote_parameters: RTCIceParameters,
    pub(crate) logger: LogSink,
    pub(crate) events: VecDeque<IceTransportEvent>,
}

impl RTCIceTransport {
    /// creates a new new_icetransport.
    pub fn new(gatherer: RTCIceGatherer, logger: LogSink) -> Self {
        RTCIceTransport {
            gatherer,
            state: RTCIceTransportState::New,
            role: RTCIceRole::Unspecified,
            remote_parameters: RTCIceParameters::default(),
            logger,
            events: VecDeque::new(),
        }
    }

    pub fn gatherer(&self) -> &RTCIceGatherer {
        &self.gatherer
    }

    pub fn gatherer_mut(&mut self) -> &mut RTCIceGatherer {
        &mut self.gatherer
    }

    /// Restarts the ICE agent with fresh local credentials, keeping the role,
    /// and installs the peer's new `remote_parameters`.
    ///
    /// Local candidates are discarded and gathering returns to new, so the
    /// caller gathers again and exchanges the new parameters.
    pub fn restart(&mut self, remote_parameters: RTCIceParameters) -> Result<()> {
        if remote_parameters.username_fragment.is_empty() {
            return Err(Error::ErrRemoteUfragEmpty);
        }
        if remote_parameters.password.is_empty() {
            return Err(Error::ErrRemotePwdEmpty);
        }

        let ufrag = self.gatherer.username_fragment.clone();
        let pwd = self.gatherer.password.clone();

        let agent = self
            .gatherer
            .agent
            .as_mut()
            .ok_or(Error::ErrICEAgentNotExist)?;
        agent.restart(ufrag, pwd, false)?;
        agent.set_remote_credentials(
            remote_parameters.username_fragment.clone(),
            remote_parameters.password.clone(),
        )?;

        self.remote_parameters = remote_parameters;
        self.logger.debug(format_args!("ICE transport restarted"));
        self.sync_state();

        Ok(())
    }

    /// Records a connection state reported by the connectivity-check layer.
    pub fn update_connection_state(&mut self, state: RTCIceTransportState) -> Result<()> {
        if state == RTCIceTransportState::Unspecified {
            return Err(Error::ErrUnknownValue {
                kind: "ICE transport state",
                value: state.to_string(),
            });
        }

        self.gatherer
            .agent
            .as_mut()
            .ok_or(Error::ErrICEAgentNotExist)?
            .update_connection_state(state.into());
        self.sync_state();

        Ok(())
    }

    /// Pulls connection states the engine reported into transport events.
    fn sync_state(&mut self) {
        self.gatherer.drain_agent_events();
        while let Some(state) = self.gatherer.connection_states.pop_front() {
            self.set_state(state);
        }
    }

    fn set_state(&mut self, state: RTCIceTransportState) {
        if self.state != state {
            self.logger
                .debug(format_args!("ICE transport state: {} -> {}", self.state, state));
            self.state = state;
            self.events
                .push_back(IceTransportEvent::OnConnectionStateChange(state));
        }
    }
}

impl IceTransport for RTCIceTransport {
    /// Start incoming connectivity checks based on its configured role.
    fn start(&mut self, params: RTCIceParameters, role: Option<RTCIceRole>) -> Result<()> {
        if self.state != RTCIceTransportState::New {
            return Err(Error::ErrICETransportNotInNew);
        }

        let role = role.unwrap_or(RTCIceRole::Controlled);
        if role == RTCIceRole::Unspecified {
            return Err(Error::ErrICERoleUnknown);
        }

        self.gatherer.agent_mut()?.start_connectivity_checks(
            role == RTCIceRole::Controlling,
            params.username_fragment.clone(),
            params.password.clone(),
        )?;

        self.logger
            .debug(format_args!("ICE transport started as {role}"));
        self.role = role;
        self.remote_parameters = params;
        self.sync_state();

        Ok(())
    }

    /// Stop irreversibly stops the ICETransport.
    fn stop(&mut self) -> Result<()> {
        self.set_state(RTCIceTransportState::Closed);

        if self.gatherer.state() != RTCIceGathererState::Closed {
            self.gatherer.close()?;
        }
        self.gatherer.connection_states.clear();

        Ok(())
    }

    fn add_remote_candidate(&mut self, remote_candidate: Option<RTCIceCandidate>) -> Result<()> {
        let Some(remote_candidate) = remote_candidate else {
            self.logger
                .debug(format_args!("end of remote candidates"));
            return Ok(());
        };

        let c = remote_candidate.to_ice()?;
        self.gatherer.agent_mut()?.add_remote_candidate(c)
    }

    fn role(&self) -> RTCIceRole {
        self.role
    }

    fn state(&self) -> RTCIceTransportState {
        self.state
    }

    fn get_remote_parameters(&self) -> RTCIceParameters {
        self.remote_parameters.clone()
    }

    fn poll_event(&mut self) -> Option<IceTransportEvent> {
        self.sync_state();
        self.events.pop_front()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::transport::ice::{RTCIceCandidateType, RTCIceGatherOptions, RTCIceProtocol};

    fn new_transport() -> Result<RTCIceTransport> {
        let gatherer = RTCIceGatherer::new(
            0,
            0,
            None,
            None,
            LogSink::default(),
            vec![],
            RTCIceGatherOptions::default(),
        )?;
        Ok(RTCIceTransport::new(gatherer, LogSink::default()))
    }

    fn remote_params() -> RTCIceParameters {
        RTCIceParameters {
            username_fragment: "remoteufrag".to_owned(),
            password: "remotepasswordremotepassword".to_owned(),
            ice_lite: false,
        }
    }

    fn drain(transport: &mut RTCIceTransport) -> Vec<RTCIceTransportState> {
        std::iter::from_fn(|| transport.poll_event())
            .map(|IceTransportEvent::OnConnectionStateChange(state)| state)
            .collect()
    }

    #[test]
    fn test_connection_state_conversion() {
        for v in 0..8u8 {
            let state = RTCIceTransportState::from(v);
            assert_eq!(RTCIceTransportState::from(ConnectionState::from(v)), state);
            assert_eq!(ConnectionState::from(state), ConnectionState::from(v));
        }
    }

    #[test]
    fn test_ice_transport_start() -> Result<()> {
        let mut transport = new_transport()?;
        assert_eq!(transport.state(), RTCIceTransportState::New);
        assert_eq!(transport.role(), RTCIceRole::Unspecified);

        transport.start(remote_params(), None)?;
        assert_eq!(transport.role(), RTCIceRole::Controlled);
        assert_eq!(transport.state(), RTCIceTransportState::Checking);
        assert_eq!(transport.get_remote_parameters(), remote_params());
        assert_eq!(drain(&mut transport), vec![RTCIceTransportState::Checking]);

        assert_eq!(
            transport.start(remote_params(), Some(RTCIceRole::Controlling)),
            Err(Error::ErrICETransportNotInNew)
        );

        Ok(())
    }

    #[test]
    fn test_ice_transport_start_controlling() -> Result<()> {
        let mut transport = new_transport()?;
        transport.start(remote_params(), Some(RTCIceRole::Controlling))?;

        assert_eq!(transport.role(), RTCIceRole::Controlling);
        let agent = transport.gatherer.agent.as_ref().unwrap();
        assert!(agent.is_controlling());
        assert_eq!(agent.get_remote_credentials().ufrag, "remoteufrag");

        Ok(())
    }

    #[test]
    fn test_ice_transport_start_errors() -> Result<()> {
        let mut transport = new_transport()?;
        assert_eq!(
            transport.start(remote_params(), Some(RTCIceRole::Unspecified)),
            Err(Error::ErrICERoleUnknown)
        );

        let mut transport = new_transport()?;
        assert_eq!(
            transport.start(RTCIceParameters::default(), None),
            Err(Error::ErrRemoteUfragEmpty)
        );

        Ok(())
    }

    #[test]
    fn test_ice_transport_connectivity_states() -> Result<()> {
        let mut transport = new_transport()?;
        transport.start(remote_params(), None)?;

        transport.update_connection_state(RTCIceTransportState::Connected)?;
        transport.update_connection_state(RTCIceTransportState::Disconnected)?;
        transport.update_connection_state(RTCIceTransportState::Failed)?;
        assert_eq!(
            transport.update_connection_state(RTCIceTransportState::Unspecified),
            Err(Error::ErrUnknownValue {
                kind: "ICE transport state",
                value: "Unspecified".to_owned(),
            })
        );

        assert_eq!(
            drain(&mut transport),
            vec![
                RTCIceTransportState::Checking,
                RTCIceTransportState::Connected,
                RTCIceTransportState::Disconnected,
                RTCIceTransportState::Failed,
            ]
        );

        Ok(())
    }

    #[test]
    fn test_ice_transport_remote_candidates() -> Result<()> {
        let mut transport = new_transport()?;
        transport.start(remote_params(), None)?;

        let remote = RTCIceCandidate {
            address: "10.0.0.9".to_owned(),
            protocol: RTCIceProtocol::Udp,
            port: 9000,
            component: 1,
            typ: RTCIceCandidateType::Host,
            ..Default::default()
        };
        transport.add_remote_candidate(Some(remote.clone()))?;
        transport.add_remote_candidate(Some(remote))?;
        transport.add_remote_candidate(None)?;

        let agent = transport.gatherer.agent.as_ref().unwrap();
        assert_eq!(agent.get_remote_candidates().len(), 1);

        assert_eq!(
            transport.add_remote_candidate(Some(RTCIceCandidate {
                address: "nope".to_owned(),
                ..Default::default()
            })),
            Err(Error::ErrInvalidAddress("nope".to_owned()))
        );

        Ok(())
    }

    #[test]
    fn test_ice_transport_restart() -> Result<()> {
        let mut transport = new_transport()?;
        let before = transport.gatherer.get_local_parameters()?;
        transport.start(remote_params(), Some(RTCIceRole::Controlling))?;
        transport.update_connection_state(RTCIceTransportState::Connected)?;
        drain(&mut transport);

        let restarted = RTCIceParameters {
            username_fragment: "restartufrag".to_owned(),
            password: "restartpasswordrestartpassword".to_owned(),
            ice_lite: false,
        };
        assert_eq!(
            transport.restart(RTCIceParameters::default()),
            Err(Error::ErrRemoteUfragEmpty)
        );
        assert_eq!(
            transport.restart(RTCIceParameters {
                password: String::new(),
                ..restarted.clone()
            }),
            Err(Error::ErrRemotePwdEmpty)
        );

        transport.restart(restarted.clone())?;
        let after = transport.gatherer.get_local_parameters()?;
        assert_ne!(before.username_fragment, after.username_fragment);
        assert_eq!(transport.role(), RTCIceRole::Controlling);
        assert_eq!(transport.get_remote_parameters(), restarted);
        assert_eq!(drain(&mut transport), vec![RTCIceTransportState::Checking]);

        let agent = transport.gatherer.agent.as_ref().unwrap();
        assert_eq!(agent.get_remote_credentials().ufrag, "restartufrag");
        assert_eq!(
            agent.get_remote_credentials().pwd,
            "restartpasswordrestartpassword"
        );
        assert!(agent.is_controlling());

        // The restarted session is already running; start stays one-shot.
        assert_eq!(
            transport.start(restarted, None),
            Err(Error::ErrICETransportNotInNew)
        );

        Ok(())
    }

    #[test]
    fn test_ice_transport_stop() -> Result<()> {
        let mut transport = new_transport()?;
        transport.start(remote_params(), None)?;
        drain(&mut transport);

        transport.stop()?;
        assert_eq!(transport.state(), RTCIceTransportState::Closed);
        assert_eq!(transport.gatherer.state(), RTCIceGathererState::Closed);
        assert_eq!(drain(&mut transport), vec![RTCIceTransportState::Closed]);

        // Stopping twice is harmless.
        transport.stop()?;
        assert_eq!(
            transport.add_remote_candidate(Some(RTCIceCandidate::default())),
            Err(Error::ErrInvalidAddress(String::new()))
        );

        Ok(())
    }
}
