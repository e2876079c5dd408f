use super::*;

#[test]
fn test_candidate_priority() -> Result<()> {
    let tests = vec![
        (
            Candidate {
                candidate_type: CandidateType::Host,
                component: COMPONENT_RTP,
                ..Default::default()
            },
            2130706431,
        ),
        (
            Candidate {
                candidate_type: CandidateType::PeerReflexive,
                component: COMPONENT_RTP,
                ..Default::default()
            },
            1862270975,
        ),
        (
            Candidate {
                candidate_type: CandidateType::ServerReflexive,
                component: COMPONENT_RTP,
                ..Default::default()
            },
            1694498815,
        ),
        (
            Candidate {
                candidate_type: CandidateType::Relay,
                component: COMPONENT_RTP,
                ..Default::default()
            },
            16777215,
        ),
        (
            Candidate {
                candidate_type: CandidateType::Host,
                component: COMPONENT_RTCP,
                ..Default::default()
            },
            2130706430,
        ),
        (
            Candidate {
                candidate_type: CandidateType::Host,
                component: COMPONENT_RTP,
                priority_override: 128,
                ..Default::default()
            },
            128,
        ),
        (
            Candidate {
                candidate_type: CandidateType::Host,
                component: 300,
                ..Default::default()
            },
            2130706176,
        ),
    ];

    for (candidate, want) in tests {
        let got = candidate.priority();
        assert_eq!(
            got, want,
            "Candidate({candidate}).Priority() = {got}, want {want}"
        );
    }

    Ok(())
}

#[test]
fn test_candidate_foundation() -> Result<()> {
    let a = CandidateHostConfig {
        base_config: CandidateConfig {
            network: "udp".to_owned(),
            address: "192.168.0.1".to_owned(),
            port: 19216,
            component: COMPONENT_RTP,
            ..Default::default()
        },
    }
    .new_candidate_host()?;

    // Same type, address and network share a foundation even across ports.
    let b = CandidateHostConfig {
        base_config: CandidateConfig {
            network: "udp".to_owned(),
            address: "192.168.0.1".to_owned(),
            port: 19217,
            component: COMPONENT_RTP,
            ..Default::default()
        },
    }
    .new_candidate_host()?;
    assert_eq!(a.foundation(), b.foundation());

    let c = CandidateHostConfig {
        base_config: CandidateConfig {
            network: "tcp".to_owned(),
            address: "192.168.0.1".to_owned(),
            port: 19216,
            component: COMPONENT_RTP,
            ..Default::default()
        },
    }
    .new_candidate_host()?;
    assert_ne!(a.foundation(), c.foundation());

    let d = CandidateHostConfig {
        base_config: CandidateConfig {
            network: "udp".to_owned(),
            address: "192.168.0.1".to_owned(),
            port: 19216,
            component: COMPONENT_RTP,
            foundation: "foundation".to_owned(),
            ..Default::default()
        },
    }
    .new_candidate_host()?;
    assert_eq!(d.foundation(), "foundation");

    Ok(())
}

#[test]
fn test_candidate_network_type() -> Result<()> {
    let tests = vec![
        ("udp", "1.0.0.1", NetworkType::Udp4),
        ("udp", "::1", NetworkType::Udp6),
        ("tcp", "1.0.0.1", NetworkType::Tcp4),
        ("TCP", "::1", NetworkType::Tcp6),
    ];

    for (network, address, expected) in tests {
        let c = CandidateHostConfig {
            base_config: CandidateConfig {
                network: network.to_owned(),
                address: address.to_owned(),
                port: 1234,
                component: COMPONENT_RTP,
                ..Default::default()
            },
        }
        .new_candidate_host()?;
        assert_eq!(c.network_type(), expected, "{network} {address}");
        assert_eq!(c.local_preference(), DEFAULT_LOCAL_PREFERENCE);
    }

    Ok(())
}

#[test]
fn test_candidate_bad_address() {
    let result = CandidateHostConfig {
        base_config: CandidateConfig {
            network: "udp".to_owned(),
            address: "not-an-ip".to_owned(),
            port: 1234,
            component: COMPONENT_RTP,
            ..Default::default()
        },
    }
    .new_candidate_host();
    assert_eq!(result, Err(Error::ErrAddressParseFailed));

    let result = CandidateHostConfig {
        base_config: CandidateConfig {
            network: "sctp".to_owned(),
            address: "1.0.0.1".to_owned(),
            port: 1234,
            component: COMPONENT_RTP,
            ..Default::default()
        },
    }
    .new_candidate_host();
    assert!(result.is_err());
}

#[test]
fn test_candidate_marshal() -> Result<()> {
    let tests = vec![
        (
            CandidateHostConfig {
                base_config: CandidateConfig {
                    network: "udp".to_owned(),
                    address: "10.0.75.1".to_owned(),
                    port: 53634,
                    component: COMPONENT_RTP,
                    foundation: "750".to_owned(),
                    ..Default::default()
                },
            }
            .new_candidate_host()?,
            "750 1 udp 2130706431 10.0.75.1 53634 typ host",
        ),
        (
            CandidateServerReflexiveConfig {
                base_config: CandidateConfig {
                    network: "udp".to_owned(),
                    address: "191.228.238.68".to_owned(),
                    port: 53991,
                    component: COMPONENT_RTP,
                    foundation: "4207374051".to_owned(),
                    ..Default::default()
                },
                related_address: Some(CandidateRelatedAddress {
                    address: "192.168.0.274".to_owned(),
                    port: 53991,
                }),
            }
            .new_candidate_server_reflexive()?,
            "4207374051 1 udp 1694498815 191.228.238.68 53991 typ srflx raddr 192.168.0.274 rport 53991",
        ),
        (
            CandidateRelayConfig {
                base_config: CandidateConfig {
                    network: "udp".to_owned(),
                    address: "50.0.0.1".to_owned(),
                    port: 5000,
                    component: COMPONENT_RTP,
                    foundation: "848194626".to_owned(),
                    ..Default::default()
                },
                related_address: Some(CandidateRelatedAddress {
                    address: "192.168.0.1".to_owned(),
                    port: 5001,
                }),
            }
            .new_candidate_relay()?,
            "848194626 1 udp 16777215 50.0.0.1 5000 typ relay raddr 192.168.0.1 rport 5001",
        ),
    ];

    for (candidate, marshaled) in tests {
        assert_eq!(candidate.marshal(), marshaled);

        let actual = unmarshal_candidate(marshaled)?;
        assert!(
            candidate.equal(&actual),
            "{candidate} != {actual} for {marshaled}"
        );
        assert_eq!(actual.marshal(), marshaled);
    }

    Ok(())
}

#[test]
fn test_unmarshal_candidate_errors() {
    let tests = vec![
        "",
        "1938809241 1 udp 2122262783",
        "1938809241 1 udp 2122262783 fcd9:e3b8:12ce:9fc5:74a5:c6bb:d8b:e08a 53987 typ unknown",
        "1938809241 1 udp 2122262783 10.0.75.1 fortytwo typ host",
        "4207374052 1 udp 1685790463 191.228.238.68 53992 typ srflx raddr 192.168.0.274",
    ];

    for raw in tests {
        assert!(unmarshal_candidate(raw).is_err(), "expected error for {raw:?}");
    }
}

#[test]
fn test_candidate_display() -> Result<()> {
    let c = CandidatePeerReflexiveConfig {
        base_config: CandidateConfig {
            network: "udp".to_owned(),
            address: "::1".to_owned(),
            port: 1234,
            component: COMPONENT_RTP,
            ..Default::default()
        },
        related_address: Some(CandidateRelatedAddress {
            address: "1.0.0.1".to_owned(),
            port: 4321,
        }),
    }
    .new_candidate_peer_reflexive()?;

    assert_eq!(c.to_string(), "udp6 prflx ::1:1234 related 1.0.0.1:4321");
    assert!(c.id().starts_with("candidate:"));

    Ok(())
}
