use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::{Error, Result};

/// The narrow call interface into the host's ICE implementation.
///
/// Every call names a host method and passes one JSON argument object. Host
/// objects (gatherers, transports) are referred to by the numeric `id` the
/// host returned when creating them.
pub trait HostBridge {
    fn call(&self, method: &str, args: Value) -> Result<Value>;
}

pub(crate) const METHOD_CREATE_ICE_GATHERER: &str = "createIceGatherer";
pub(crate) const METHOD_GATHER: &str = "gather";
pub(crate) const METHOD_CLOSE_ICE_GATHERER: &str = "closeIceGatherer";
pub(crate) const METHOD_GET_LOCAL_PARAMETERS: &str = "getLocalParameters";
pub(crate) const METHOD_GET_LOCAL_CANDIDATES: &str = "getLocalCandidates";
pub(crate) const METHOD_START_ICE_TRANSPORT: &str = "startIceTransport";
pub(crate) const METHOD_STOP_ICE_TRANSPORT: &str = "stopIceTransport";
pub(crate) const METHOD_ADD_REMOTE_CANDIDATE: &str = "addRemoteCandidate";

pub(crate) fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|err| Error::Json(err.to_string()))
}

pub(crate) fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|err| Error::Json(err.to_string()))
}

/// Extracts the host object id from a create/start reply.
pub(crate) fn handle_of(reply: &Value) -> Result<u64> {
    reply
        .get("id")
        .and_then(Value::as_u64)
        .ok_or_else(|| Error::ErrHostBridge(format!("no object id in host reply {reply}")))
}
