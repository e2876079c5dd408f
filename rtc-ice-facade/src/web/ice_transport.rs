use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use serde_json::{Value, json};
use shared::error::{Error, Result};

use super::bridge::*;
use super::ice_gatherer::RTCIceGatherer;
use crate::state::RTCIceTransportState;
use crate::transport::ice::{
    IceGatherer, IceTransport, IceTransportEvent, RTCIceCandidate, RTCIceParameters, RTCIceRole,
};

/// ICETransport backed by the host's ICE implementation.
///
/// Connection state changes happen on the host; report each one with
/// [`RTCIceTransport::handle_host_state_change`].
pub struct RTCIceTransport {
    pub(crate) bridge: Rc<dyn HostBridge>,
    pub(crate) gatherer: RTCIceGatherer,
    pub(crate) id: Option<u64>,
    pub(crate) state: RTCIceTransportState,
    pub(crate) role: RTCIceRole,
    pub(crate) remote_parameters: RTCIceParameters,
    pub(crate) events: VecDeque<IceTransportEvent>,
}

impl fmt::Debug for RTCIceTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RTCIceTransport")
            .field("gatherer", &self.gatherer)
            .field("id", &self.id)
            .field("state", &self.state)
            .field("role", &self.role)
            .finish()
    }
}

impl RTCIceTransport {
    pub(crate) fn new(bridge: Rc<dyn HostBridge>, gatherer: RTCIceGatherer) -> Self {
        RTCIceTransport {
            bridge,
            gatherer,
            id: None,
            state: RTCIceTransportState::New,
            role: RTCIceRole::Unspecified,
            remote_parameters: RTCIceParameters::default(),
            events: VecDeque::new(),
        }
    }

    pub fn gatherer(&self) -> &RTCIceGatherer {
        &self.gatherer
    }

    pub fn gatherer_mut(&mut self) -> &mut RTCIceGatherer {
        &mut self.gatherer
    }

    /// Feeds a connection state reported by the host, e.g. `"connected"`.
    pub fn handle_host_state_change(&mut self, raw: &str) -> Result<()> {
        let state: RTCIceTransportState = raw.parse()?;
        self.set_state(state);
        Ok(())
    }

    fn set_state(&mut self, state: RTCIceTransportState) {
        if self.state != state {
            log::debug!("ICE transport state: {} -> {}", self.state, state);
            self.state = state;
            self.events
                .push_back(IceTransportEvent::OnConnectionStateChange(state));
        }
    }
}

impl IceTransport for RTCIceTransport {
    fn start(&mut self, params: RTCIceParameters, role: Option<RTCIceRole>) -> Result<()> {
        if self.state != RTCIceTransportState::New || self.id.is_some() {
            return Err(Error::ErrICETransportNotInNew);
        }

        let role = role.unwrap_or(RTCIceRole::Controlled);
        if role == RTCIceRole::Unspecified {
            return Err(Error::ErrICERoleUnknown);
        }

        let reply = self.bridge.call(
            METHOD_START_ICE_TRANSPORT,
            json!({
                "gatherer": self.gatherer.id,
                "remoteParameters": to_value(&params)?,
                "role": role.to_string(),
            }),
        )?;
        self.id = Some(handle_of(&reply)?);
        self.role = role;
        self.remote_parameters = params;

        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if self.state == RTCIceTransportState::Closed {
            return Ok(());
        }
        self.set_state(RTCIceTransportState::Closed);

        let mut errs = vec![];
        if let Some(id) = self.id {
            if let Err(err) = self.bridge.call(METHOD_STOP_ICE_TRANSPORT, json!({ "id": id })) {
                errs.push(err);
            }
        }
        if let Err(err) = self.gatherer.close() {
            errs.push(err);
        }

        shared::error::flatten_errs(errs)
    }

    fn add_remote_candidate(&mut self, remote_candidate: Option<RTCIceCandidate>) -> Result<()> {
        let id = self.id.ok_or(Error::ErrICEAgentNotExist)?;

        let candidate = match remote_candidate {
            Some(remote_candidate) => to_value(&remote_candidate.to_json()?)?,
            None => Value::Null,
        };

        self.bridge.call(
            METHOD_ADD_REMOTE_CANDIDATE,
            json!({ "id": id, "candidate": candidate }),
        )?;

        Ok(())
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
        self.events.pop_front()
    }
}
