use js_sys::{Function, JSON, Reflect};
use serde_json::Value;
use shared::error::{Error, Result};
use wasm_bindgen::{JsCast, JsValue};

use super::bridge::HostBridge;

/// [`HostBridge`] over a JavaScript object whose methods implement the host calls.
///
/// Each method receives one plain object argument and returns a JSON-compatible
/// value (or `undefined`).
pub struct JsHostBridge {
    host: JsValue,
}

impl JsHostBridge {
    pub fn new(host: JsValue) -> Self {
        JsHostBridge { host }
    }
}

fn js_error(err: JsValue) -> Error {
    Error::ErrHostBridge(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl HostBridge for JsHostBridge {
    fn call(&self, method: &str, args: Value) -> Result<Value> {
        let function: Function = Reflect::get(&self.host, &JsValue::from_str(method))
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| Error::ErrHostBridge(format!("host has no method {method}")))?;

        let js_args = JSON::parse(&args.to_string()).map_err(js_error)?;
        let reply = function.call1(&self.host, &js_args).map_err(js_error)?;
        if reply.is_undefined() || reply.is_null() {
            return Ok(Value::Null);
        }

        let text: String = JSON::stringify(&reply).map_err(js_error)?.into();
        serde_json::from_str(&text).map_err(|err| Error::Json(err.to_string()))
    }
}
