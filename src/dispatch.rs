use serde_json::Value;
use tracing::{debug, trace};

use super::{
    Consumer, Discriminated, Event, Incoming, Method, Object, ProtocolViolation, Result,
    RpcError,
};

#[derive(Debug, Clone, Default)]
pub struct DispatchOptions {
    /// Reject messages whose `jsonrpc` member is not `"2.0"`.
    ///
    /// Defaults to `true`.
    pub check_version: Option<bool>,
}
impl DispatchOptions {
    pub(crate) fn check_version(&self) -> bool {
        self.check_version.unwrap_or(true)
    }
}

/// Receives events from the streams the client subscribed to.
pub trait Listener {
    fn received(&mut self, stream_id: &str, event: Event<'_>);
}

/// Decodes the `result` object of a response to `M`.
pub fn decode_response<'a, M: Method>(result: &'a Value) -> Result<M::Response<'a>> {
    let response = <M::Response<'a> as Discriminated<'a>>::discriminate(result)?;
    let discriminator = Object::new(M::NAME, result)?.discriminator()?;
    trace!(method = M::NAME, discriminator, "decoded response");
    Ok(response)
}

/// Decodes a response message to `M` and delivers it to `consumer`.
///
/// On success `consumer` has been called exactly once. If the message
/// violates the protocol the error is returned and `consumer` is not called.
pub fn dispatch<M: Method>(message: &Value, consumer: &mut impl Consumer<M>) -> Result<()> {
    dispatch_with(message, consumer, &DispatchOptions::default())
}
pub fn dispatch_with<M: Method>(
    message: &Value,
    consumer: &mut impl Consumer<M>,
    options: &DispatchOptions,
) -> Result<()> {
    match Incoming::parse_with(message, options)? {
        Incoming::Response(response) => deliver(response.outcome, consumer),
        Incoming::Notification(_) => Err(ProtocolViolation::MessageStructure.into()),
    }
}

/// Delivers the outcome of a response that was already split out of its
/// envelope.
pub fn deliver<M: Method>(
    outcome: Result<&Value, RpcError>,
    consumer: &mut impl Consumer<M>,
) -> Result<()> {
    match outcome {
        Ok(result) => {
            let response = decode_response::<M>(result)?;
            consumer.received(Ok(response));
        }
        Err(e) => {
            debug!(method = M::NAME, code = e.code, "remote error: {}", e.message);
            consumer.received(Err(e));
        }
    }
    Ok(())
}

pub fn dispatch_notification(message: &Value, listener: &mut impl Listener) -> Result<()> {
    dispatch_notification_with(message, listener, &DispatchOptions::default())
}
pub fn dispatch_notification_with(
    message: &Value,
    listener: &mut impl Listener,
    options: &DispatchOptions,
) -> Result<()> {
    match Incoming::parse_with(message, options)? {
        Incoming::Notification(n) => {
            let event = n.event()?;
            trace!(stream = n.stream_id(), "received event");
            listener.received(n.stream_id(), event);
            Ok(())
        }
        Incoming::Response(_) => Err(ProtocolViolation::MessageStructure.into()),
    }
}
