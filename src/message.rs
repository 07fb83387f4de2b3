use derive_ex::derive_ex;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    Discriminated, DispatchOptions, Event, JsonType, Object, ProtocolViolation, Result,
};


#[derive(Debug, Serialize, Deserialize, Clone)]
#[derive_ex(Eq, PartialEq, Hash)]
#[serde(untagged)]
pub enum RequestId {
    Number(i64),
    Float(#[eq(key = OrderedFloat($))] f64),
    String(String),
}
impl From<i64> for RequestId {
    fn from(id: i64) -> Self {
        RequestId::Number(id)
    }
}
impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        RequestId::String(id.to_string())
    }
}

/// The failure the remote service reported for a call.
///
/// This is a normal outcome of a call and is delivered to the
/// [`Consumer`](crate::Consumer), unlike local decode failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} (code {code})")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
impl RpcError {
    /// The human readable detail the service puts in `data.details`.
    pub fn details(&self) -> Option<&str> {
        self.data.as_ref()?.get("details")?.as_str()
    }
}

pub mod error_codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;
    pub const SERVER_ERROR: i64 = -32000;

    pub const FEATURE_DISABLED: i64 = 100;
    pub const CANNOT_ADD_BREAKPOINT: i64 = 102;
    pub const STREAM_ALREADY_SUBSCRIBED: i64 = 103;
    pub const STREAM_NOT_SUBSCRIBED: i64 = 104;
    pub const ISOLATE_MUST_BE_RUNNABLE: i64 = 105;
    pub const ISOLATE_MUST_BE_PAUSED: i64 = 106;
    pub const CANNOT_RESUME: i64 = 107;
    pub const ISOLATE_IS_RELOADING: i64 = 108;
    pub const ISOLATE_CANNOT_BE_RELOADED: i64 = 109;
    pub const ISOLATE_NO_RELOAD_CHANGES_APPLIED: i64 = 110;
    pub const SERVICE_ALREADY_REGISTERED: i64 = 111;
    pub const SERVICE_DISAPPEARED: i64 = 112;
    pub const EXPRESSION_COMPILATION_ERROR: i64 = 113;
    pub const INVALID_TIMELINE_REQUEST: i64 = 114;
}

pub const STREAM_NOTIFY: &str = "streamNotify";

/// A message received from the service.
#[derive(Debug, Clone)]
pub enum Incoming<'a> {
    Response(ResponseMessage<'a>),
    Notification(StreamNotification<'a>),
}
impl<'a> Incoming<'a> {
    pub fn parse(message: &'a Value) -> Result<Self> {
        Self::parse_with(message, &DispatchOptions::default())
    }
    pub fn parse_with(message: &'a Value, options: &DispatchOptions) -> Result<Self> {
        let m = Object::new("Message", message)?;
        if options.check_version() {
            let version = m.str("jsonrpc")?;
            if version != "2.0" {
                return Err(ProtocolViolation::Version(version.to_string()).into());
            }
        }
        let id = if m.has("id") {
            Some(parse_request_id(m.get("id")?)?)
        } else {
            None
        };
        match (id, m.has("method"), m.has("result"), m.has("error")) {
            (Some(id), false, true, false) => Ok(Self::Response(ResponseMessage {
                id: Some(id),
                outcome: Ok(m.get("result")?),
            })),
            (id, false, false, true) => Ok(Self::Response(ResponseMessage {
                id,
                outcome: Err(parse_rpc_error(m.get("error")?)?),
            })),
            (None, true, false, false) => {
                let method = m.str("method")?;
                if method != STREAM_NOTIFY {
                    return Err(ProtocolViolation::UnknownDiscriminator {
                        ty: "Message",
                        field: "method",
                        value: method.to_string(),
                    }
                    .into());
                }
                let params = Object::new("StreamNotification", m.get("params")?)?;
                Ok(Self::Notification(StreamNotification {
                    stream_id: params.str("streamId")?,
                    event: params.get("event")?,
                }))
            }
            _ => Err(ProtocolViolation::MessageStructure.into()),
        }
    }
}

/// The reply to one call: either the result object or the remote failure.
#[derive(Debug, Clone)]
pub struct ResponseMessage<'a> {
    pub id: Option<RequestId>,
    pub outcome: Result<&'a Value, RpcError>,
}

/// An event published on a stream the client is subscribed to.
#[derive(Debug, Clone, Copy)]
pub struct StreamNotification<'a> {
    stream_id: &'a str,
    event: &'a Value,
}
impl<'a> StreamNotification<'a> {
    /// The stream the event was published on, such as `Debug` or `Isolate`.
    pub fn stream_id(&self) -> &'a str {
        self.stream_id
    }
    pub fn event(&self) -> Result<Event<'a>> {
        Event::discriminate(self.event)
    }
}

fn parse_request_id(value: &Value) -> Result<RequestId> {
    RequestId::deserialize(value).map_err(|_| {
        ProtocolViolation::FieldType {
            ty: "Message",
            field: "id",
            expected: "a number or a string",
            got: JsonType::of(value),
        }
        .into()
    })
}
fn parse_rpc_error(value: &Value) -> Result<RpcError> {
    RpcError::deserialize(value).map_err(|_| {
        ProtocolViolation::FieldType {
            ty: "Message",
            field: "error",
            expected: "an error object",
            got: JsonType::of(value),
        }
        .into()
    })
}
