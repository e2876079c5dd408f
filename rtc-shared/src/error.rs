#![allow(dead_code)]

use std::net;
use std::num::ParseIntError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    // Enumeration errors
    /// Indicates a token outside an enumeration's closed vocabulary.
    #[error("unknown {kind}: {value}")]
    ErrUnknownValue { kind: &'static str, value: String },

    /// Indicates an error with Unknown info.
    #[error("Unknown type")]
    ErrUnknownType,

    // URL errors
    #[error("invalid url")]
    ErrInvalidUrl,
    #[error("unknown scheme type")]
    ErrSchemeType,
    #[error("invalid hostname")]
    ErrHost,

    /// Indicates query arguments are provided in a STUN URL.
    #[error("queries not supported in stun address")]
    ErrStunQuery,

    /// Indicates an malformed query is provided.
    #[error("invalid query")]
    ErrInvalidQuery,

    /// Indicates malformed port is provided.
    #[error("url parse: invalid port number")]
    ErrPort,

    /// Indicates an unsupported transport type was provided.
    #[error("invalid transport protocol type")]
    ErrProtoType,

    #[error("missing protocol scheme")]
    ErrMissingProtocolScheme,

    // ICE agent errors
    /// Indicates local username fragment insufficient bits are provided.
    /// Have to be at least 24 bits long.
    #[error("local username fragment is less than 24 bits long")]
    ErrLocalUfragInsufficientBits,

    /// Indicates local passoword insufficient bits are provided.
    /// Have to be at least 128 bits long.
    #[error("local password is less than 128 bits long")]
    ErrLocalPwdInsufficientBits,

    /// Indicates agent was started twice.
    #[error("attempted to start agent twice")]
    ErrMultipleStart,

    /// Indicates agent was started with an empty remote ufrag.
    #[error("remote ufrag is empty")]
    ErrRemoteUfragEmpty,

    /// Indicates agent was started with an empty remote pwd.
    #[error("remote pwd is empty")]
    ErrRemotePwdEmpty,

    /// Indicates GatherCandidates has been called multiple times.
    #[error("attempting to gather candidates during gathering state")]
    ErrMultipleGatherAttempted,

    /// Indicates we were unable to parse a candidate address.
    #[error("failed to parse address")]
    ErrAddressParseFailed,

    /// Indicates that non host candidates were selected for a lite agent.
    #[error("lite agents must only use host candidates")]
    ErrLiteUsingNonHostCandidates,

    /// Indicates that one or more URL was provided to the agent but no host candidate required them.
    #[error("agent does not need URL with selected candidate types")]
    ErrUselessUrlsProvided,

    /// Indicates Restart was called when Agent is in GatheringStateGathering.
    #[error("ICE Agent can not be restarted when gathering")]
    ErrRestartWhenGathering,

    /// Indicates an operation on an agent that has been closed.
    #[error("the agent is closed")]
    ErrClosed,

    /// Indicates the ephemeral port range ends before it starts.
    #[error("invalid port range: max must not be less than min")]
    ErrInvalidPortRange,

    /// Indicates a candidate whose network type is not enabled on the agent.
    #[error("candidate network type is not enabled")]
    ErrUnsupportedNetworkType,

    /// Indicates a candidate whose type is not enabled on the agent.
    #[error("candidate type is not permitted")]
    ErrCandidateTypeNotPermitted,

    /// Indicates a host candidate outside the configured ephemeral port range.
    #[error("candidate port is outside the ephemeral port range")]
    ErrPortOutOfRange,

    // Candidate attribute errors
    #[error("attribute not long enough to be ICE candidate")]
    ErrAttributeTooShortIceCandidate,
    #[error("could not parse related addresses")]
    ErrParseRelatedAddr,
    /// Indicates a foundation that is empty or not a single token.
    #[error("invalid candidate foundation: {0:?}")]
    ErrInvalidFoundation(String),
    #[error("could not parse type")]
    ErrParseType,
    #[error("unable to determine networkType")]
    ErrDetermineNetworkType,

    // Facade errors
    /// ErrNoTurnCredentials indicates that a TURN server URL was provided
    /// without required credentials.
    #[error("turn server credentials required")]
    ErrNoTurnCredentials,

    /// ErrTurnCredentials indicates that provided TURN credentials are partial
    /// or malformed.
    #[error("invalid turn server credentials")]
    ErrTurnCredentials,

    /// Indicates a candidate address that is not an IPv4 or IPv6 literal.
    #[error("invalid candidate address: {0}")]
    ErrInvalidAddress(String),

    #[error("unknown candidate type")]
    ErrICECandidateTypeUnknown,
    #[error("cannot convert ice.CandidateType into webrtc.ICECandidateType, invalid type")]
    ErrICEInvalidConvertCandidateType,
    #[error("ICEAgent does not exist")]
    ErrICEAgentNotExist,
    #[error("unknown ICE Role")]
    ErrICERoleUnknown,
    #[error("unknown protocol")]
    ErrICEProtocolUnknown,
    #[error("gatherer not started")]
    ErrICEGathererNotStarted,
    #[error("unknown network type")]
    ErrNetworkTypeUnknown,
    #[error("ICETransport can only be called in ICETransportStateNew")]
    ErrICETransportNotInNew,

    // Host bridge errors
    #[error("host bridge: {0}")]
    ErrHostBridge(String),

    //Third Party Error
    #[error("parse ip: {0}")]
    ParseIp(#[from] net::AddrParseError),
    #[error("parse int: {0}")]
    ParseInt(#[from] ParseIntError),
    #[error("url parse: {0}")]
    Url(#[from] url::ParseError),
    #[error("json: {0}")]
    Json(String),

    //Other Errors
    #[error("Other ICE Err: {0}")]
    OtherIceErr(String),
    #[error("{0}")]
    Other(String),
}

/// flatten_errs flattens multiple errors into one
pub fn flatten_errs(errs: Vec<impl Into<Error>>) -> Result<()> {
    if errs.is_empty() {
        Ok(())
    } else {
        let errs_strs: Vec<String> = errs.into_iter().map(|e| e.into().to_string()).collect();
        Err(Error::Other(errs_strs.join("\n")))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_errors_compare_by_kind() {
        assert_eq!(Error::ErrNoTurnCredentials, Error::ErrNoTurnCredentials);
        assert_ne!(Error::ErrNoTurnCredentials, Error::ErrTurnCredentials);
        assert_eq!(
            Error::ErrUnknownValue {
                kind: "protocol",
                value: "sctp".to_owned()
            },
            Error::ErrUnknownValue {
                kind: "protocol",
                value: "sctp".to_owned()
            }
        );
    }

    #[test]
    fn test_error_display() {
        let tests = vec![
            (
                Error::ErrUnknownValue {
                    kind: "ICE candidate type",
                    value: "bogus".to_owned(),
                },
                "unknown ICE candidate type: bogus",
            ),
            (
                Error::ErrInvalidAddress("1.2.3".to_owned()),
                "invalid candidate address: 1.2.3",
            ),
            (
                Error::ErrNoTurnCredentials,
                "turn server credentials required",
            ),
        ];

        for (err, expected) in tests {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_flatten_errs() {
        assert!(flatten_errs(Vec::<Error>::new()).is_ok());

        let result = flatten_errs(vec![Error::ErrClosed, Error::ErrTurnCredentials]);
        assert_eq!(
            result,
            Err(Error::Other(
                "the agent is closed\ninvalid turn server credentials".to_owned()
            ))
        );
    }
}
