use parse_display::{Display, FromStr};
use serde_json::Value;

/// The JSON type of a received value, as reported in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, FromStr)]
#[display(style = "lowercase")]
pub enum JsonType {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}
impl JsonType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

/// What kind of instance an [`InstanceRef`](crate::InstanceRef) or
/// [`Instance`](crate::Instance) is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, FromStr)]
pub enum InstanceKind {
    /// A general instance of a user class.
    PlainInstance,
    Null,
    Bool,
    Double,
    Int,
    String,
    List,
    Map,
    Set,
    Float32x4,
    Float64x2,
    Int32x4,
    Uint8ClampedList,
    Uint8List,
    Uint16List,
    Uint32List,
    Uint64List,
    Int8List,
    Int16List,
    Int32List,
    Int64List,
    Float32List,
    Float64List,
    Int32x4List,
    Float32x4List,
    Float64x2List,
    Record,
    StackTrace,
    Closure,
    MirrorReference,
    RegExp,
    WeakProperty,
    WeakReference,
    Type,
    TypeParameter,
    TypeRef,
    FunctionType,
    RecordType,
    BoundedType,
    ReceivePort,
    UserTag,
}
impl InstanceKind {
    /// Whether instances of this kind are collections that carry a `length`
    /// and can be fetched in sub-ranges with `offset` and `count`.
    ///
    /// `String` instances also carry a `length`, but it counts characters and
    /// this returns `false` for them.
    pub fn is_list_like(self) -> bool {
        matches!(
            self,
            Self::List
                | Self::Map
                | Self::Set
                | Self::Record
                | Self::Uint8ClampedList
                | Self::Uint8List
                | Self::Uint16List
                | Self::Uint32List
                | Self::Uint64List
                | Self::Int8List
                | Self::Int16List
                | Self::Int32List
                | Self::Int64List
                | Self::Float32List
                | Self::Float64List
                | Self::Int32x4List
                | Self::Float32x4List
                | Self::Float64x2List
        )
    }
}

/// Why a [`Sentinel`](crate::Sentinel) was returned instead of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, FromStr)]
pub enum SentinelKind {
    /// The object has been garbage collected.
    Collected,
    /// The id refers to an object that is no longer tracked by the service.
    Expired,
    NotInitialized,
    BeingInitialized,
    OptimizedOut,
    Free,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, FromStr)]
pub enum ErrorKind {
    UnhandledException,
    LanguageError,
    InternalError,
    TerminationError,
}

/// The kind of an [`Event`](crate::Event) delivered on a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, FromStr)]
pub enum EventKind {
    #[display("VMUpdate")]
    VmUpdate,
    #[display("VMFlagUpdate")]
    VmFlagUpdate,
    IsolateStart,
    IsolateRunnable,
    IsolateExit,
    IsolateUpdate,
    IsolateReload,
    ServiceExtensionAdded,
    PauseStart,
    PauseExit,
    PauseBreakpoint,
    PauseInterrupted,
    PauseException,
    PausePostRequest,
    None,
    Resume,
    BreakpointAdded,
    BreakpointResolved,
    BreakpointRemoved,
    BreakpointUpdated,
    #[display("GC")]
    Gc,
    WriteEvent,
    Inspect,
    Extension,
    Logging,
    ServiceRegistered,
    ServiceUnregistered,
}
impl EventKind {
    /// Whether the isolate is paused after this event.
    pub fn is_pause(self) -> bool {
        matches!(
            self,
            Self::PauseStart
                | Self::PauseExit
                | Self::PauseBreakpoint
                | Self::PauseInterrupted
                | Self::PauseException
                | Self::PausePostRequest
        )
    }
}
