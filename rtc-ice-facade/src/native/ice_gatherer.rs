use std::collections::VecDeque;
use std::time::Duration;

use ice::agent::agent_config::AgentConfig;
use ice::agent::{Agent, Event};
use ice::candidate::CandidateType;
use ice::state::GatheringState;
use ice::url::Url;
use shared::error::{Error, Result};

use super::logger::LogSink;
use crate::configuration::RTCIceTransportPolicy;
use crate::state::{RTCIceGathererState, RTCIceGatheringState, RTCIceTransportState};
use crate::transport::ice::server::validate_ice_servers;
use crate::transport::ice::{
    IceGatherer, IceGathererEvent, NetworkType, RTCIceCandidate, RTCIceGatherOptions,
    RTCIceParameters,
};

impl From<GatheringState> for RTCIceGatheringState {
    fn from(state: GatheringState) -> Self {
        match state {
            GatheringState::New => RTCIceGatheringState::New,
            GatheringState::Gathering => RTCIceGatheringState::Gathering,
            GatheringState::Complete => RTCIceGatheringState::Complete,
            GatheringState::Unspecified => RTCIceGatheringState::Unspecified,
        }
    }
}

/// ICEGatherer gathers local host, server reflexive and relay
/// candidates, as well as enabling the retrieval of local Interactive
/// Connectivity Establishment (ICE) parameters which can be
/// exchanged in signaling.
///
/// Candidates are discovered by the caller's socket layer and handed in with
/// [`RTCIceGatherer::add_local_candidate`]; the gatherer filters them through
/// the engine and reports them as [`IceGathererEvent`]s.
#[derive(Debug)]
pub struct RTCIceGatherer {
    pub(crate) validated_servers: Vec<Url>,
    pub(crate) gather_policy: RTCIceTransportPolicy,

    pub(crate) port_min: u16,
    pub(crate) port_max: u16,
    pub(crate) disconnected_timeout: Option<Duration>,
    pub(crate) failed_timeout: Option<Duration>,
    pub(crate) keepalive_interval: Option<Duration>,
    pub(crate) network_types: Vec<NetworkType>,
    pub(crate) lite: bool,
    pub(crate) username_fragment: String,
    pub(crate) password: String,
    pub(crate) logger: LogSink,

    pub(crate) state: RTCIceGathererState,
    pub(crate) agent: Option<Agent>,
    pub(crate) events: VecDeque<IceGathererEvent>,
    /// Engine connection states waiting to be picked up by the transport.
    pub(crate) connection_states: VecDeque<RTCIceTransportState>,
}

impl RTCIceGatherer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        port_min: u16,
        port_max: u16,
        disconnected_timeout: Option<Duration>,
        keepalive_interval: Option<Duration>,
        logger: LogSink,
        network_types: Vec<NetworkType>,
        opts: RTCIceGatherOptions,
    ) -> Result<Self> {
        let validated_servers = match validate_ice_servers(&opts.ice_servers) {
            Ok(validated_servers) => validated_servers,
            Err(err) => {
                logger.warn(format_args!("rejecting ICE servers: {err}"));
                return Err(err);
            }
        };
        logger.debug(format_args!(
            "validated {} ICE server url(s), gather policy {}",
            validated_servers.len(),
            opts.ice_gather_policy
        ));

        Ok(RTCIceGatherer {
            validated_servers,
            gather_policy: opts.ice_gather_policy,
            port_min,
            port_max,
            disconnected_timeout,
            failed_timeout: None,
            keepalive_interval,
            network_types,
            lite: false,
            username_fragment: String::new(),
            password: String::new(),
            logger,
            state: RTCIceGathererState::New,
            agent: None,
            events: VecDeque::new(),
            connection_states: VecDeque::new(),
        })
    }

    pub(crate) fn create_agent(&mut self) -> Result<()> {
        if self.agent.is_some() {
            return Ok(());
        }
        if self.state == RTCIceGathererState::Closed {
            return Err(Error::ErrClosed);
        }

        let candidate_types = if self.lite {
            vec![CandidateType::Host]
        } else if self.gather_policy == RTCIceTransportPolicy::Relay {
            vec![CandidateType::Relay]
        } else {
            vec![]
        };

        let config = AgentConfig {
            lite: self.lite,
            urls: self.validated_servers.clone(),
            port_min: self.port_min,
            port_max: self.port_max,
            disconnected_timeout: self.disconnected_timeout,
            failed_timeout: self.failed_timeout,
            keepalive_interval: self.keepalive_interval,
            candidate_types,
            network_types: self
                .network_types
                .iter()
                .map(|&network_type| network_type.into())
                .collect(),
            local_ufrag: self.username_fragment.clone(),
            local_pwd: self.password.clone(),
            ..Default::default()
        };

        self.agent = Some(Agent::new(config)?);
        self.logger.debug(format_args!("ICE agent created"));

        Ok(())
    }

    /// Starts gathering; candidates are then fed in with `add_local_candidate`.
    pub fn gather(&mut self) -> Result<()> {
        self.create_agent()?;
        if let Some(agent) = self.agent.as_mut() {
            agent.gather_candidates()?;
        }
        self.drain_agent_events();

        Ok(())
    }

    /// Hands a candidate discovered by the socket layer to the engine.
    ///
    /// Candidates the engine rejects (disabled network type, disallowed
    /// candidate type, port outside the ephemeral range) are returned as errors.
    pub fn add_local_candidate(&mut self, candidate: &RTCIceCandidate) -> Result<()> {
        if self.state != RTCIceGathererState::Gathering {
            return Err(Error::ErrICEGathererNotStarted);
        }
        let agent = self.agent.as_mut().ok_or(Error::ErrICEAgentNotExist)?;

        let result = candidate.to_ice().and_then(|c| agent.add_local_candidate(c));
        if let Err(err) = &result {
            self.logger
                .debug(format_args!("dropping local candidate {candidate}: {err}"));
        }
        self.drain_agent_events();

        result
    }

    /// Signals that the socket layer has no further local candidates.
    pub fn end_of_candidates(&mut self) -> Result<()> {
        let agent = self.agent.as_mut().ok_or(Error::ErrICEGathererNotStarted)?;
        agent.end_of_candidates()?;
        self.drain_agent_events();

        Ok(())
    }

    /// Returns the engine's gathering state.
    pub fn gathering_state(&self) -> RTCIceGatheringState {
        self.agent
            .as_ref()
            .map(|agent| agent.gathering_state().into())
            .unwrap_or(RTCIceGatheringState::New)
    }

    pub(crate) fn agent_mut(&mut self) -> Result<&mut Agent> {
        self.create_agent()?;
        self.agent.as_mut().ok_or(Error::ErrICEAgentNotExist)
    }

    pub(crate) fn set_state(&mut self, state: RTCIceGathererState) {
        if self.state != state {
            self.logger
                .trace(format_args!("ICE gatherer state: {} -> {}", self.state, state));
            self.state = state;
            self.events
                .push_back(IceGathererEvent::OnICEGathererState(state));
        }
    }

    /// Normalizes the engine's queued events into gatherer events.
    pub(crate) fn drain_agent_events(&mut self) {
        let agent_events: Vec<Event> = match self.agent.as_mut() {
            Some(agent) => std::iter::from_fn(|| agent.poll_event()).collect(),
            None => return,
        };

        for event in agent_events {
            match event {
                Event::LocalCandidate(c) => match RTCIceCandidate::try_from(&c) {
                    Ok(candidate) => self
                        .events
                        .push_back(IceGathererEvent::OnLocalCandidate(candidate)),
                    Err(err) => self
                        .logger
                        .warn(format_args!("failed to convert ice.Candidate {c}: {err}")),
                },
                Event::GatheringStateChange(state) => match state {
                    GatheringState::New => self.set_state(RTCIceGathererState::New),
                    GatheringState::Gathering => self.set_state(RTCIceGathererState::Gathering),
                    GatheringState::Complete => {
                        self.set_state(RTCIceGathererState::Complete);
                        self.events.push_back(IceGathererEvent::OnGatheringComplete);
                    }
                    GatheringState::Unspecified => {}
                },
                Event::ConnectionStateChange(state) => {
                    self.connection_states.push_back(state.into())
                }
            }
        }
    }
}

impl IceGatherer for RTCIceGatherer {
    fn gather(&mut self) -> Result<()> {
        RTCIceGatherer::gather(self)
    }

    fn close(&mut self) -> Result<()> {
        self.set_state(RTCIceGathererState::Closed);

        if let Some(mut agent) = self.agent.take() {
            agent.close()?;
        }

        Ok(())
    }

    fn get_local_parameters(&mut self) -> Result<RTCIceParameters> {
        let lite = self.lite;
        let credentials = self.agent_mut()?.get_local_credentials();

        Ok(RTCIceParameters {
            username_fragment: credentials.ufrag.clone(),
            password: credentials.pwd.clone(),
            ice_lite: lite,
        })
    }

    fn get_local_candidates(&mut self) -> Result<Vec<RTCIceCandidate>> {
        self.agent_mut()?
            .get_local_candidates()
            .iter()
            .map(RTCIceCandidate::try_from)
            .collect()
    }

    fn state(&self) -> RTCIceGathererState {
        self.state
    }

    fn poll_event(&mut self) -> Option<IceGathererEvent> {
        self.events.pop_front()
    }
}
