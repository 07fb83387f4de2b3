use crate::{Breakpoint, Decimal, ElementList, EventKind, InstanceRef, IsolateRef, Result};

element! {
    /// A notification delivered on a stream, or the pause state of an
    /// isolate.
    ///
    /// Which fields are sent depends on [`kind`](Self::kind).
    Event = "Event"
}
impl<'a> Event<'a> {
    pub fn kind(&self) -> Result<EventKind> {
        self.0.kind("kind")
    }
    /// The isolate the event belongs to. Absent for VM-level events.
    pub fn isolate(&self) -> Result<IsolateRef<'a>> {
        self.0.element("isolate")
    }
    /// When the event was generated, in milliseconds since the epoch.
    pub fn timestamp(&self) -> Result<Decimal> {
        self.0.decimal("timestamp")
    }
    pub fn breakpoint(&self) -> Result<Breakpoint<'a>> {
        self.0.element("breakpoint")
    }
    /// Every breakpoint at the position the isolate paused at.
    pub fn pause_breakpoints(&self) -> Result<ElementList<'a, Breakpoint<'a>>> {
        self.0.list("pauseBreakpoints")
    }
    /// The exception thrown, for `PauseException`.
    pub fn exception(&self) -> Result<InstanceRef<'a>> {
        self.0.element("exception")
    }
    /// The object to inspect, for `Inspect`.
    pub fn inspectee(&self) -> Result<InstanceRef<'a>> {
        self.0.element("inspectee")
    }
    pub fn at_async_suspension(&self) -> Result<bool> {
        self.0.flag("atAsyncSuspension")
    }
    pub fn extension_kind(&self) -> Result<&'a str> {
        self.0.str("extensionKind")
    }
    /// The name of the service extension that was added.
    pub fn extension_rpc(&self) -> Result<&'a str> {
        self.0.str("extensionRPC")
    }
    /// The bytes written, base64 encoded, for `WriteEvent`.
    pub fn bytes(&self) -> Result<&'a str> {
        self.0.str("bytes")
    }
}
