use crate::{
    Breakpoint, Decimal, ElementList, ErrorObj, Event, FuncRef, LibraryRef, Result,
};

element! {
    /// A reference to an [`Isolate`].
    IsolateRef = "@Isolate" | "Isolate"
}
impl<'a> IsolateRef<'a> {
    /// The id passed to `getIsolate` to load this isolate.
    pub fn id(&self) -> Result<&'a str> {
        self.0.str("id")
    }
    /// A unique numeric id for this isolate, sent as a string.
    pub fn number(&self) -> Result<&'a str> {
        self.0.str("number")
    }
    /// A name for this isolate. Not guaranteed to be unique.
    pub fn name(&self) -> Result<&'a str> {
        self.0.str("name")
    }
}

element! {
    /// One isolate in the VM.
    ///
    /// `entry`, `libraries` and `rootLib` are only sent once the isolate has
    /// become runnable. Callers that read them before the `IsolateRunnable`
    /// event get [`ProtocolViolation::MissingField`](crate::ProtocolViolation::MissingField).
    Isolate = "Isolate"
}
impl<'a> Isolate<'a> {
    /// Every breakpoint set in this isolate.
    pub fn breakpoints(&self) -> Result<ElementList<'a, Breakpoint<'a>>> {
        self.0.list("breakpoints")
    }
    pub fn entry(&self) -> Result<FuncRef<'a>> {
        self.0.element("entry")
    }
    /// The error causing this isolate to exit, if any.
    pub fn error(&self) -> Result<ErrorObj<'a>> {
        self.0.element("error")
    }
    pub fn id(&self) -> Result<&'a str> {
        self.0.str("id")
    }
    pub fn libraries(&self) -> Result<ElementList<'a, LibraryRef<'a>>> {
        self.0.list("libraries")
    }
    pub fn live_ports(&self) -> Result<i64> {
        self.0.int("livePorts")
    }
    pub fn name(&self) -> Result<&'a str> {
        self.0.str("name")
    }
    pub fn number(&self) -> Result<&'a str> {
        self.0.str("number")
    }
    /// The last pause event delivered to this isolate. A `Resume` event if
    /// the isolate is running.
    pub fn pause_event(&self) -> Result<Event<'a>> {
        self.0.element("pauseEvent")
    }
    pub fn pause_on_exit(&self) -> Result<bool> {
        self.0.bool("pauseOnExit")
    }
    pub fn root_lib(&self) -> Result<LibraryRef<'a>> {
        self.0.element("rootLib")
    }
    /// When the isolate started, in milliseconds since the epoch.
    pub fn start_time(&self) -> Result<Decimal> {
        self.0.decimal("startTime")
    }
}

element! {
    /// The VM itself.
    Vm = "VM"
}
impl<'a> Vm<'a> {
    pub fn name(&self) -> Result<&'a str> {
        self.0.str("name")
    }
    /// Word length of the target architecture, in bits.
    pub fn architecture_bits(&self) -> Result<i64> {
        self.0.int("architectureBits")
    }
    pub fn host_cpu(&self) -> Result<&'a str> {
        self.0.str("hostCPU")
    }
    pub fn target_cpu(&self) -> Result<&'a str> {
        self.0.str("targetCPU")
    }
    /// The version string of the VM, not of the protocol.
    pub fn version(&self) -> Result<&'a str> {
        self.0.str("version")
    }
    pub fn pid(&self) -> Result<i64> {
        self.0.int("pid")
    }
    pub fn start_time(&self) -> Result<Decimal> {
        self.0.decimal("startTime")
    }
    pub fn isolates(&self) -> Result<ElementList<'a, IsolateRef<'a>>> {
        self.0.list("isolates")
    }
}

element! {
    /// The version of the service protocol.
    Version = "Version"
}
impl Version<'_> {
    pub fn major(&self) -> Result<i64> {
        self.0.int("major")
    }
    pub fn minor(&self) -> Result<i64> {
        self.0.int("minor")
    }
}
