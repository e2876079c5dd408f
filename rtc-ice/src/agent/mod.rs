
pub mod agent_config;

use agent_config::*;
use std::collections::VecDeque;
use std::time::Duration;

use crate::candidate::*;
use crate::network_type::NetworkType;
use crate::rand::*;
use crate::state::*;
use crate::url::*;
use shared::error::*;

/// ICE username fragment and password.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub ufrag: String,
    pub pwd: String,
}

/// Events the agent queues for its owner, drained with `Agent::poll_event`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ConnectionStateChange(ConnectionState),
    GatheringStateChange(GatheringState),
    LocalCandidate(Candidate),
}

/// Represents the ICE agent.
///
/// The agent owns credentials, role, candidates and the state machines. Sockets,
/// STUN transactions and connectivity-check scheduling live with the caller, which
/// feeds discovered candidates in and reports connectivity results back.
#[derive(Debug)]
pub struct Agent {
    pub(crate) tie_breaker: u64,
    pub(crate) is_controlling: bool,
    pub(crate) lite: bool,
    pub(crate) started: bool,

    pub(crate) connection_state: ConnectionState,
    pub(crate) gathering_state: GatheringState,

    pub(crate) local_credentials: Credentials,
    pub(crate) remote_credentials: Credentials,

    pub(crate) local_candidates: Vec<Candidate>,
    pub(crate) remote_candidates: Vec<Candidate>,

    // the following variables won't be changed after new()
    pub(crate) port_min: u16,
    pub(crate) port_max: u16,
    // How long connectivity checks can fail before the ICE Agent
    // goes to disconnected
    pub(crate) disconnected_timeout: Duration,
    // How long connectivity checks can fail before the ICE Agent
    // goes to failed
    pub(crate) failed_timeout: Duration,
    // How often should we send keepalive packets?
    // 0 means never
    pub(crate) keepalive_interval: Duration,

    pub(crate) candidate_types: Vec<CandidateType>,
    pub(crate) network_types: Vec<NetworkType>,
    pub(crate) urls: Vec<Url>,

    pub(crate) events: VecDeque<Event>,
}

impl Agent {
    /// Creates a new Agent.
    pub fn new(config: AgentConfig) -> Result<Self> {
        let candidate_types = config.init_candidate_types();

        if config.lite && (candidate_types.len() != 1 || candidate_types[0] != CandidateType::Host)
        {
            return Err(Error::ErrLiteUsingNonHostCandidates);
        }

        if !config.urls.is_empty()
            && !contains_candidate_type(CandidateType::ServerReflexive, &candidate_types)
            && !contains_candidate_type(CandidateType::Relay, &candidate_types)
        {
            return Err(Error::ErrUselessUrlsProvided);
        }

        if config.port_max < config.port_min {
            return Err(Error::ErrInvalidPortRange);
        }

        let mut agent = Self {
            tie_breaker: rand::random::<u64>(),
            is_controlling: config.is_controlling,
            lite: config.lite,
            started: false,

            connection_state: ConnectionState::New,
            gathering_state: GatheringState::New,

            local_credentials: Credentials::default(),
            remote_credentials: Credentials::default(),

            local_candidates: vec![],
            remote_candidates: vec![],

            port_min: config.port_min,
            port_max: config.port_max,

            disconnected_timeout: if let Some(disconnected_timeout) = config.disconnected_timeout {
                disconnected_timeout
            } else {
                DEFAULT_DISCONNECTED_TIMEOUT
            },

            failed_timeout: if let Some(failed_timeout) = config.failed_timeout {
                failed_timeout
            } else {
                DEFAULT_FAILED_TIMEOUT
            },

            keepalive_interval: if let Some(keepalive_interval) = config.keepalive_interval {
                keepalive_interval
            } else {
                DEFAULT_KEEPALIVE_INTERVAL
            },

            network_types: config.init_network_types(),
            candidate_types,
            urls: config.urls,

            events: VecDeque::new(),
        };

        // Restart is also used to initialize the agent for the first time
        if let Err(err) = agent.restart(config.local_ufrag, config.local_pwd, false) {
            let _ = agent.close();
            return Err(err);
        }

        Ok(agent)
    }

    /// Moves the agent into the gathering state. Candidates found by the caller's
    /// sockets are then handed in with `add_local_candidate`.
    pub fn gather_candidates(&mut self) -> Result<()> {
        self.ensure_open()?;
        if self.gathering_state != GatheringState::New {
            return Err(Error::ErrMultipleGatherAttempted);
        }

        self.set_gathering_state(GatheringState::Gathering);
        Ok(())
    }

    /// Marks gathering as complete, no more local candidates will follow.
    pub fn end_of_candidates(&mut self) -> Result<()> {
        self.ensure_open()?;
        if self.gathering_state != GatheringState::Gathering {
            return Err(Error::ErrICEGathererNotStarted);
        }

        self.set_gathering_state(GatheringState::Complete);
        Ok(())
    }

    /// Adds a new local candidate.
    pub fn add_local_candidate(&mut self, c: Candidate) -> Result<()> {
        self.ensure_open()?;

        if !self.network_types.contains(&c.network_type()) {
            log::debug!(
                "[{}]: dropping local candidate {} on disabled network",
                self.get_name(),
                c
            );
            return Err(Error::ErrUnsupportedNetworkType);
        }

        if !contains_candidate_type(c.candidate_type(), &self.candidate_types) {
            log::debug!(
                "[{}]: dropping local candidate {} of disabled type",
                self.get_name(),
                c
            );
            return Err(Error::ErrCandidateTypeNotPermitted);
        }

        if c.candidate_type() == CandidateType::Host && !self.port_in_range(c.port()) {
            log::debug!(
                "[{}]: dropping local candidate {} outside port range {}-{}",
                self.get_name(),
                c,
                self.port_min,
                self.port_max
            );
            return Err(Error::ErrPortOutOfRange);
        }

        for cand in &self.local_candidates {
            if cand.equal(&c) {
                return Ok(());
            }
        }

        log::trace!("[{}]: new local candidate {}", self.get_name(), c);
        self.local_candidates.push(c.clone());
        self.events.push_back(Event::LocalCandidate(c));

        Ok(())
    }

    /// Adds a new remote candidate.
    pub fn add_remote_candidate(&mut self, c: Candidate) -> Result<()> {
        self.ensure_open()?;

        for cand in &self.remote_candidates {
            if cand.equal(&c) {
                return Ok(());
            }
        }

        log::trace!("[{}]: new remote candidate {}", self.get_name(), c);
        self.remote_candidates.push(c);

        Ok(())
    }

    /// Returns the local user credentials.
    pub fn get_local_credentials(&self) -> &Credentials {
        &self.local_credentials
    }

    /// Returns the remote user credentials.
    pub fn get_remote_credentials(&self) -> &Credentials {
        &self.remote_credentials
    }

    /// Returns the local candidates.
    pub fn get_local_candidates(&self) -> &[Candidate] {
        &self.local_candidates
    }

    /// Returns the remote candidates.
    pub fn get_remote_candidates(&self) -> &[Candidate] {
        &self.remote_candidates
    }

    pub fn poll_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Cleans up the Agent.
    pub fn close(&mut self) -> Result<()> {
        self.delete_all_candidates(false);
        self.update_connection_state(ConnectionState::Closed);

        Ok(())
    }

    /// Sets the credentials of the remote agent.
    pub fn set_remote_credentials(
        &mut self,
        remote_ufrag: String,
        remote_pwd: String,
    ) -> Result<()> {
        if remote_ufrag.is_empty() {
            return Err(Error::ErrRemoteUfragEmpty);
        } else if remote_pwd.is_empty() {
            return Err(Error::ErrRemotePwdEmpty);
        }

        self.remote_credentials = Credentials {
            ufrag: remote_ufrag,
            pwd: remote_pwd,
        };
        Ok(())
    }

    /// Restarts the ICE Agent with the provided ufrag/pwd
    /// If no ufrag/pwd is provided the Agent will generate one itself.
    pub fn restart(
        &mut self,
        mut ufrag: String,
        mut pwd: String,
        keep_local_candidates: bool,
    ) -> Result<()> {
        self.ensure_open()?;

        if ufrag.is_empty() {
            ufrag = generate_ufrag();
        }
        if pwd.is_empty() {
            pwd = generate_pwd();
        }

        if ufrag.len() * 8 < 24 {
            return Err(Error::ErrLocalUfragInsufficientBits);
        }
        if pwd.len() * 8 < 128 {
            return Err(Error::ErrLocalPwdInsufficientBits);
        }

        if self.gathering_state == GatheringState::Gathering {
            return Err(Error::ErrRestartWhenGathering);
        }

        // Clear all agent needed to take back to fresh state
        self.local_credentials = Credentials { ufrag, pwd };
        self.remote_credentials = Credentials::default();

        self.delete_all_candidates(keep_local_candidates);
        if !keep_local_candidates && self.gathering_state == GatheringState::Complete {
            self.set_gathering_state(GatheringState::New);
        }

        // Restart is used by new(). start_connectivity_checks should be used to move
        // to checking for new Agents
        if self.connection_state != ConnectionState::New {
            self.update_connection_state(ConnectionState::Checking);
        }

        Ok(())
    }

    /// Starts connectivity checks against the remote agent.
    pub fn start_connectivity_checks(
        &mut self,
        is_controlling: bool,
        remote_ufrag: String,
        remote_pwd: String,
    ) -> Result<()> {
        self.ensure_open()?;
        if self.started {
            return Err(Error::ErrMultipleStart);
        }

        log::debug!(
            "Started agent: isControlling? {}, remoteUfrag: {}, remotePwd: {}",
            is_controlling,
            remote_ufrag,
            remote_pwd
        );
        self.set_remote_credentials(remote_ufrag, remote_pwd)?;
        self.is_controlling = is_controlling;
        self.started = true;

        self.update_connection_state(ConnectionState::Checking);

        Ok(())
    }

    /// Returns whether the agent is controlling.
    pub fn is_controlling(&self) -> bool {
        self.is_controlling
    }

    /// Changes the agent role, used to resolve role conflicts.
    pub fn set_controlling(&mut self, is_controlling: bool) {
        self.is_controlling = is_controlling;
    }

    /// Returns the tie-breaker value sent in ICE-CONTROLLING/ICE-CONTROLLED.
    pub fn tie_breaker(&self) -> u64 {
        self.tie_breaker
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection_state
    }

    pub fn gathering_state(&self) -> GatheringState {
        self.gathering_state
    }

    pub fn urls(&self) -> &[Url] {
        &self.urls
    }

    pub fn disconnected_timeout(&self) -> Duration {
        self.disconnected_timeout
    }

    pub fn failed_timeout(&self) -> Duration {
        self.failed_timeout
    }

    pub fn keepalive_interval(&self) -> Duration {
        self.keepalive_interval
    }

    /// Records a connection state reported by the connectivity-check layer.
    pub fn update_connection_state(&mut self, new_state: ConnectionState) {
        if self.connection_state != new_state {
            // Connection has gone to failed, release all gathered candidates
            if new_state == ConnectionState::Failed {
                self.delete_all_candidates(false);
            }

            log::info!(
                "[{}]: Setting new connection state: {}",
                self.get_name(),
                new_state
            );
            self.connection_state = new_state;
            self.events
                .push_back(Event::ConnectionStateChange(new_state));
        }
    }

    pub(crate) fn set_gathering_state(&mut self, new_state: GatheringState) {
        if self.gathering_state != new_state {
            log::debug!(
                "[{}]: Setting new gathering state: {}",
                self.get_name(),
                new_state
            );
            self.gathering_state = new_state;
            self.events.push_back(Event::GatheringStateChange(new_state));
        }
    }

    pub(crate) fn delete_all_candidates(&mut self, keep_local_candidates: bool) {
        if !keep_local_candidates {
            self.local_candidates.clear();
        }
        self.remote_candidates.clear();
    }

    pub(crate) fn port_in_range(&self, port: u16) -> bool {
        if self.port_min == 0 && self.port_max == 0 {
            return true;
        }
        (self.port_min..=self.port_max).contains(&port)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.connection_state == ConnectionState::Closed {
            Err(Error::ErrClosed)
        } else {
            Ok(())
        }
    }

    pub(crate) fn get_name(&self) -> &str {
        if self.is_controlling {
            "controlling"
        } else {
            "controlled"
        }
    }
}
