#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub mod configuration;
pub mod sdp;
pub mod state;
pub mod transport;

/// The engine binding compiled into this build.
///
/// `native/` drives the in-process sans-I/O agent; `web/` forwards to an ICE
/// implementation owned by the host. Both export `API`, `RTCIceGatherer` and
/// `RTCIceTransport` implementing [`transport::ice::IceGatherer`] and
/// [`transport::ice::IceTransport`].
#[cfg_attr(
    any(target_arch = "wasm32", feature = "host-bridge"),
    path = "web/mod.rs"
)]
#[cfg_attr(
    not(any(target_arch = "wasm32", feature = "host-bridge")),
    path = "native/mod.rs"
)]
pub mod engine;

pub use engine::{API, RTCIceGatherer, RTCIceTransport};
pub use shared::error::{Error, Result};
