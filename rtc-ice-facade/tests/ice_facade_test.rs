use rtc_ice_facade::Result;
use rtc_ice_facade::configuration::UNSPECIFIED_STR;
use rtc_ice_facade::state::RTCIceConnectionState;
use rtc_ice_facade::transport::ice::*;
use rtc_ice_facade::{API, Error};

fn turn_without_credentials() -> RTCIceGatherOptions {
    RTCIceGatherOptions {
        ice_servers: vec![RTCIceServer {
            urls: vec!["turn:turn.example.org:3478?transport=udp".to_owned()],
            ..Default::default()
        }],
        ..Default::default()
    }
}

#[cfg(not(any(target_arch = "wasm32", feature = "host-bridge")))]
fn new_api() -> API {
    rtc_ice_facade::engine::APIBuilder::new().build()
}

#[cfg(all(not(target_arch = "wasm32"), feature = "host-bridge"))]
fn new_api() -> API {
    use rtc_ice_facade::engine::HostBridge;
    use serde_json::{Value, json};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct EchoHost {
        next_id: Cell<u64>,
    }

    impl HostBridge for EchoHost {
        fn call(&self, method: &str, _args: Value) -> Result<Value> {
            match method {
                "createIceGatherer" | "startIceTransport" => {
                    self.next_id.set(self.next_id.get() + 1);
                    Ok(json!({ "id": self.next_id.get() }))
                }
                "getLocalParameters" => Ok(json!({
                    "usernameFragment": "hostufrag",
                    "password": "hostpasswordhostpassword",
                    "iceLite": false
                })),
                "getLocalCandidates" => Ok(json!([])),
                _ => Ok(Value::Null),
            }
        }
    }

    API::new(Rc::new(EchoHost::default()))
}

#[test]
fn test_gatherer_requires_turn_credentials() {
    let _ = env_logger::builder().is_test(true).try_init();

    let api = new_api();
    assert_eq!(
        api.new_ice_gatherer(turn_without_credentials()).err(),
        Some(Error::ErrNoTurnCredentials)
    );
}

#[test]
fn test_gatherer_and_transport_lifecycle() -> Result<()> {
    let api = new_api();

    let mut gatherer = api.new_ice_gatherer(RTCIceGatherOptions {
        ice_servers: vec![RTCIceServer {
            urls: vec!["turn:turn.example.org:3478".to_owned()],
            username: "user".to_owned(),
            credential: RTCIceCredential::Password("secret".to_owned()),
            credential_type: RTCIceCredentialType::Password,
        }],
        ..Default::default()
    })?;
    gatherer.gather()?;

    let params = gatherer.get_local_parameters()?;
    assert!(!params.username_fragment.is_empty());
    assert!(!params.password.is_empty());

    let mut transport = api.new_ice_transport(gatherer);
    transport.start(
        RTCIceParameters {
            username_fragment: "remoteufrag".to_owned(),
            password: "remotepasswordremotepassword".to_owned(),
            ice_lite: false,
        },
        Some(RTCIceRole::Controlling),
    )?;
    assert_eq!(transport.role(), RTCIceRole::Controlling);

    let remote = RTCIceCandidate::from_wire_attribute(
        "candidate:842163049 1 udp 1677729535 203.0.113.7 46154 typ srflx raddr 192.168.1.5 rport 46154",
    )?;
    transport.add_remote_candidate(Some(remote))?;
    transport.add_remote_candidate(None)?;

    transport.stop()?;
    assert_eq!(
        RTCIceConnectionState::from(transport.state()),
        RTCIceConnectionState::Closed
    );

    Ok(())
}

#[test]
fn test_candidate_wire_and_json_round_trip() -> Result<()> {
    let tests = vec![
        RTCIceCandidate {
            foundation: "1052353102".to_owned(),
            priority: 2122260223,
            address: "192.168.1.5".to_owned(),
            protocol: RTCIceProtocol::Udp,
            port: 52310,
            component: RTCIceComponent::Rtp.component_id(),
            typ: RTCIceCandidateType::Host,
            ..Default::default()
        },
        RTCIceCandidate {
            foundation: "3745".to_owned(),
            priority: 16777215,
            address: "2001:db8::1".to_owned(),
            protocol: RTCIceProtocol::Tcp,
            port: 443,
            component: RTCIceComponent::Rtcp.component_id(),
            typ: RTCIceCandidateType::Relay,
            related_address: "10.1.1.1".to_owned(),
            related_port: 50000,
            ..Default::default()
        },
    ];

    for candidate in tests {
        let attribute = candidate.to_wire_attribute()?;
        assert_eq!(RTCIceCandidate::from_wire_attribute(&attribute)?, candidate);

        let json = serde_json::to_string(&candidate.to_json()?)
            .map_err(|err| Error::Json(err.to_string()))?;
        let init: RTCIceCandidateInit =
            serde_json::from_str(&json).map_err(|err| Error::Json(err.to_string()))?;
        assert_eq!(init.to_candidate()?, candidate);
    }

    Ok(())
}

#[test]
fn test_enumerations_reject_unknown_tokens() {
    assert_eq!(RTCIceCandidateType::Unspecified.to_string(), UNSPECIFIED_STR);
    assert_eq!(
        "".parse::<RTCIceCandidateType>(),
        Err(Error::ErrUnknownValue {
            kind: "ICE candidate type",
            value: String::new(),
        })
    );
    assert!(UNSPECIFIED_STR.parse::<RTCIceRole>().is_err());
    assert!("HOST".parse::<RTCIceCandidateType>().is_err());
    assert_eq!("UDP".parse::<RTCIceProtocol>(), Ok(RTCIceProtocol::Udp));
}
