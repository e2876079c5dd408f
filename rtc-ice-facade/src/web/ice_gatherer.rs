use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use serde_json::{Value, json};
use shared::error::{Error, Result};

use super::bridge::*;
use crate::configuration::RTCIceTransportPolicy;
use crate::state::RTCIceGathererState;
use crate::transport::ice::server::validate_ice_servers;
use crate::transport::ice::{
    IceGatherer, IceGathererEvent, RTCIceCandidate, RTCIceCandidateInit, RTCIceGatherOptions,
    RTCIceParameters,
};

/// ICEGatherer backed by the host's ICE implementation.
///
/// The host reports discovered candidates asynchronously; feed each one back
/// with [`RTCIceGatherer::handle_host_candidate`], and `None` once the host
/// signals the end of candidates.
pub struct RTCIceGatherer {
    pub(crate) bridge: Rc<dyn HostBridge>,
    pub(crate) id: u64,
    pub(crate) state: RTCIceGathererState,
    pub(crate) events: VecDeque<IceGathererEvent>,
}

impl fmt::Debug for RTCIceGatherer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RTCIceGatherer")
            .field("id", &self.id)
            .field("state", &self.state)
            .finish()
    }
}

impl RTCIceGatherer {
    pub(crate) fn new(bridge: Rc<dyn HostBridge>, opts: RTCIceGatherOptions) -> Result<Self> {
        validate_ice_servers(&opts.ice_servers)?;

        let mut args = json!({ "iceServers": to_value(&opts.ice_servers)? });
        if opts.ice_gather_policy != RTCIceTransportPolicy::Unspecified {
            args["iceTransportPolicy"] = Value::String(opts.ice_gather_policy.to_string());
        }

        let reply = bridge.call(METHOD_CREATE_ICE_GATHERER, args)?;
        let id = handle_of(&reply)?;
        log::debug!("host ICE gatherer {id} created");

        Ok(RTCIceGatherer {
            bridge,
            id,
            state: RTCIceGathererState::New,
            events: VecDeque::new(),
        })
    }

    /// Feeds a candidate event from the host back into the gatherer.
    ///
    /// `None` is the host's end-of-candidates signal.
    pub fn handle_host_candidate(&mut self, init: Option<RTCIceCandidateInit>) -> Result<()> {
        if self.state != RTCIceGathererState::Gathering {
            return Err(Error::ErrICEGathererNotStarted);
        }

        match init {
            Some(init) => {
                let candidate = init.to_candidate()?;
                log::trace!("host ICE gatherer {} candidate {}", self.id, candidate);
                self.events
                    .push_back(IceGathererEvent::OnLocalCandidate(candidate));
            }
            None => {
                self.set_state(RTCIceGathererState::Complete);
                self.events.push_back(IceGathererEvent::OnGatheringComplete);
            }
        }

        Ok(())
    }

    fn set_state(&mut self, state: RTCIceGathererState) {
        if self.state != state {
            self.state = state;
            self.events
                .push_back(IceGathererEvent::OnICEGathererState(state));
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.state == RTCIceGathererState::Closed {
            Err(Error::ErrClosed)
        } else {
            Ok(())
        }
    }
}

impl IceGatherer for RTCIceGatherer {
    fn gather(&mut self) -> Result<()> {
        self.ensure_open()?;
        if self.state != RTCIceGathererState::New {
            return Err(Error::ErrMultipleGatherAttempted);
        }

        self.bridge.call(METHOD_GATHER, json!({ "id": self.id }))?;
        self.set_state(RTCIceGathererState::Gathering);

        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.state == RTCIceGathererState::Closed {
            return Ok(());
        }

        self.set_state(RTCIceGathererState::Closed);
        self.bridge
            .call(METHOD_CLOSE_ICE_GATHERER, json!({ "id": self.id }))?;

        Ok(())
    }

    fn get_local_parameters(&mut self) -> Result<RTCIceParameters> {
        self.ensure_open()?;
        let reply = self
            .bridge
            .call(METHOD_GET_LOCAL_PARAMETERS, json!({ "id": self.id }))?;
        from_value(reply)
    }

    fn get_local_candidates(&mut self) -> Result<Vec<RTCIceCandidate>> {
        self.ensure_open()?;
        let reply = self
            .bridge
            .call(METHOD_GET_LOCAL_CANDIDATES, json!({ "id": self.id }))?;
        let inits: Vec<RTCIceCandidateInit> = from_value(reply)?;

        inits.iter().map(RTCIceCandidateInit::to_candidate).collect()
    }

    fn state(&self) -> RTCIceGathererState {
        self.state
    }

    fn poll_event(&mut self) -> Option<IceGathererEvent> {
        self.events.pop_front()
    }
}
