use super::{
    Breakpoint, Discriminated, ErrorRef, Instance, InstanceRef, Isolate, Library, Obj, RpcError,
    Sentinel, Success, Version, Vm,
};
use crate::element::family;

/// One remote procedure of the service.
///
/// `Response` lists every shape the call can legitimately return. Failures
/// reported by the service are delivered separately as [`RpcError`].
pub trait Method {
    const NAME: &'static str;
    type Response<'a>: Discriminated<'a>;
}

/// Receives the outcome of one call to `M`.
///
/// `received` is called exactly once for a call that completed. It is not
/// called if the response could not be decoded or if the call was dropped
/// before a response arrived.
pub trait Consumer<M: Method> {
    fn received(&mut self, result: Result<M::Response<'_>, RpcError>);
}

family! {
    /// The result of [`GetObject`].
    pub enum GetObjectResponse {
        Instance(Instance) = "Instance",
        Library(Library) = "Library",
        Sentinel(Sentinel) = "Sentinel",
        Obj(Obj) = "Object"
            | "Class"
            | "Code"
            | "Context"
            | "Error"
            | "Field"
            | "Function"
            | "ICData"
            | "LocalVarDescriptors"
            | "MegamorphicCache"
            | "ObjectPool"
            | "PcDescriptors"
            | "Script"
            | "SingleTargetCache"
            | "SubtypeTestCache"
            | "TypeArguments"
            | "UnlinkedCall",
    }
}

family! {
    pub enum IsolateResponse {
        Isolate(Isolate) = "Isolate",
        Sentinel(Sentinel) = "Sentinel",
    }
}

family! {
    /// The result of evaluating an expression or invoking a function.
    pub enum EvaluateResponse {
        Instance(InstanceRef) = "@Instance" | "Instance",
        Error(ErrorRef) = "@Error" | "Error",
        Sentinel(Sentinel) = "Sentinel",
    }
}

family! {
    pub enum BreakpointResponse {
        Breakpoint(Breakpoint) = "Breakpoint",
        Sentinel(Sentinel) = "Sentinel",
    }
}

family! {
    /// The result of a call on an isolate that has nothing to return. The
    /// isolate may have exited before the call was handled.
    pub enum SuccessResponse {
        Success(Success) = "Success",
        Sentinel(Sentinel) = "Sentinel",
    }
}

macro_rules! methods {
    ($($(#[$meta:meta])* $name:ident = $wire:literal => $response:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name;

            impl Method for $name {
                const NAME: &'static str = $wire;
                type Response<'a> = $response<'a>;
            }
        )*
    };
}

methods! {
    GetVersion = "getVersion" => Version;
    GetVm = "getVM" => Vm;
    GetIsolate = "getIsolate" => IsolateResponse;
    /// Looks up any object by id.
    GetObject = "getObject" => GetObjectResponse;
    Evaluate = "evaluate" => EvaluateResponse;
    EvaluateInFrame = "evaluateInFrame" => EvaluateResponse;
    Invoke = "invoke" => EvaluateResponse;
    AddBreakpoint = "addBreakpoint" => BreakpointResponse;
    AddBreakpointWithScriptUri = "addBreakpointWithScriptUri" => BreakpointResponse;
    AddBreakpointAtEntry = "addBreakpointAtEntry" => BreakpointResponse;
    RemoveBreakpoint = "removeBreakpoint" => SuccessResponse;
    Pause = "pause" => SuccessResponse;
    Resume = "resume" => SuccessResponse;
    Kill = "kill" => SuccessResponse;
    SetName = "setName" => SuccessResponse;
    SetLibraryDebuggable = "setLibraryDebuggable" => SuccessResponse;
    /// Subscribes to a stream. Stream calls are not tied to an isolate.
    StreamListen = "streamListen" => Success;
    StreamCancel = "streamCancel" => Success;
}
