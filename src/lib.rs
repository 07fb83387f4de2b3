//! # vmservice
//!
//! Typed views over the JSON objects of a VM service protocol: isolates,
//! libraries, instances, breakpoints and the other runtime objects a
//! debugger inspects.
//!
//! ## Overview
//!
//! - Elements such as [`Isolate`] and [`InstanceRef`] borrow the received
//!   [`serde_json::Value`] and read each field when its accessor is called.
//!   Nothing is copied, and nested elements borrow the same tree.
//! - Accessors are strict. A field the service did not send, or sent with
//!   the wrong JSON type, fails with a [`ProtocolViolation`].
//! - Fields and responses that can hold several shapes decode into enums
//!   selected by the object's `type` discriminator, for example
//!   [`GetObjectResponse`] or [`InstanceOrSentinel`].
//! - Each remote procedure is a [`Method`]. A [`Consumer`] receives exactly
//!   one outcome per call: one of the documented shapes or the [`RpcError`]
//!   the service reported.
//!
//! Sending requests and reading messages off the wire is left to the
//! caller.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use vmservice::{Consumer, GetIsolate, IsolateResponse, RpcError, dispatch};
//!
//! struct PrintIsolate;
//!
//! impl Consumer<GetIsolate> for PrintIsolate {
//!     fn received(&mut self, result: Result<IsolateResponse<'_>, RpcError>) {
//!         match result {
//!             Ok(IsolateResponse::Isolate(isolate)) => {
//!                 if let Ok(name) = isolate.name() {
//!                     println!("isolate {name}");
//!                 }
//!             }
//!             Ok(IsolateResponse::Sentinel(_)) => println!("isolate has exited"),
//!             Err(e) => println!("getIsolate failed: {e}"),
//!         }
//!     }
//! }
//!
//! let message = json!({
//!     "jsonrpc": "2.0",
//!     "id": "1",
//!     "result": { "type": "Isolate", "id": "isolates/1", "name": "main" },
//! });
//! dispatch(&message, &mut PrintIsolate)?;
//! # Ok::<(), vmservice::Error>(())
//! ```

mod dispatch;
mod element;
mod error;
mod kind;
mod message;
mod method;
mod object;

pub use dispatch::*;
pub use element::*;
pub use error::*;
pub use kind::*;
pub use message::*;
pub use method::*;
pub use object::*;
