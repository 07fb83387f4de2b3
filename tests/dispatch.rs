use anyhow::Result;
use assert_call::{CallRecorder, call};
use serde_json::{Value, json};
use vmservice::{
    Consumer, DispatchOptions, Error, Event, EvaluateResponse, GetObject, GetObjectResponse,
    GetVm, Listener, ProtocolViolation, Resume, RpcError, StreamListen, SuccessResponse, Vm,
    deliver, dispatch, dispatch_notification, dispatch_with, error_codes,
};

fn response(result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": "1", "result": result })
}

struct GetObjectRecorder;

impl Consumer<GetObject> for GetObjectRecorder {
    fn received(&mut self, result: Result<GetObjectResponse<'_>, RpcError>) {
        match result {
            Ok(GetObjectResponse::Instance(_)) => call!("instance"),
            Ok(GetObjectResponse::Library(_)) => call!("library"),
            Ok(GetObjectResponse::Obj(_)) => call!("obj"),
            Ok(GetObjectResponse::Sentinel(_)) => call!("sentinel"),
            Err(_) => call!("error"),
        }
    }
}

#[derive(Default)]
struct Count(usize);

impl Consumer<GetObject> for Count {
    fn received(&mut self, _result: Result<GetObjectResponse<'_>, RpcError>) {
        self.0 += 1;
    }
}

#[test]
fn sentinel_goes_to_sentinel_only() -> Result<()> {
    let mut c = CallRecorder::new();
    let m = response(json!({ "type": "Sentinel", "kind": "Expired", "valueAsString": "<expired>" }));
    dispatch(&m, &mut GetObjectRecorder)?;
    c.verify(["sentinel"]);
    Ok(())
}

#[test]
fn sentinel_without_type_is_selected_by_kind() -> Result<()> {
    let mut c = CallRecorder::new();
    let m = response(json!({ "kind": "Sentinel" }));
    dispatch(&m, &mut GetObjectRecorder)?;
    c.verify(["sentinel"]);
    Ok(())
}

#[test]
fn each_shape_goes_to_its_entry() -> Result<()> {
    let mut c = CallRecorder::new();
    let shapes = [
        json!({ "type": "Instance", "kind": "Int", "id": "objects/1" }),
        json!({ "type": "Library", "id": "libraries/1", "name": "", "uri": "file:///a.dart" }),
        json!({ "type": "Class", "id": "classes/1", "name": "A" }),
        json!({ "type": "Script", "id": "scripts/1", "uri": "file:///a.dart" }),
        json!({ "type": "Sentinel", "kind": "Collected" }),
    ];
    for shape in shapes {
        dispatch(&response(shape), &mut GetObjectRecorder)?;
    }
    c.verify(["instance", "library", "obj", "obj", "sentinel"]);
    Ok(())
}

#[test]
fn remote_error_goes_to_error_entry() -> Result<()> {
    let mut c = CallRecorder::new();
    let m = json!({
        "jsonrpc": "2.0",
        "id": "1",
        "error": { "code": 105, "message": "Isolate must be runnable" }
    });
    dispatch(&m, &mut GetObjectRecorder)?;
    c.verify(["error"]);
    Ok(())
}

#[test]
fn unknown_discriminator_calls_nothing() {
    let mut count = Count::default();
    let m = response(json!({ "type": "Teapot", "id": "objects/1" }));
    let e = dispatch(&m, &mut count).unwrap_err();
    assert_eq!(
        e,
        Error::ProtocolViolation(ProtocolViolation::UnknownDiscriminator {
            ty: "GetObjectResponse",
            field: "type",
            value: "Teapot".to_string(),
        })
    );
    assert_eq!(count.0, 0);
}

#[test]
fn ref_type_is_not_a_get_object_result() {
    let mut count = Count::default();
    let m = response(json!({ "type": "@Instance", "kind": "Int" }));
    assert!(dispatch(&m, &mut count).is_err());
    assert_eq!(count.0, 0);
}

#[test]
fn malformed_envelope_calls_nothing() {
    let mut count = Count::default();
    for m in [
        json!("not an object"),
        json!({ "jsonrpc": "2.0", "id": "1" }),
        json!({ "jsonrpc": "2.0", "id": "1", "result": 3 }),
        json!({ "jsonrpc": "2.0", "method": "streamNotify", "params": { "streamId": "Debug", "event": {} } }),
    ] {
        assert!(dispatch(&m, &mut count).is_err(), "{m}");
    }
    assert_eq!(count.0, 0);
}

struct VmName(Option<String>);

impl Consumer<GetVm> for VmName {
    fn received(&mut self, result: Result<Vm<'_>, RpcError>) {
        self.0 = result.ok().and_then(|vm| vm.name().ok()).map(str::to_string);
    }
}

#[test]
fn single_shape_method() -> Result<()> {
    let m = response(json!({
        "type": "VM",
        "name": "vm",
        "architectureBits": 64,
        "hostCPU": "x64",
        "targetCPU": "x64",
        "version": "3.5.0",
        "pid": 4242,
        "startTime": 1_700_000_000_000_i64,
        "isolates": [{ "type": "@Isolate", "id": "isolates/1", "number": "1", "name": "main" }]
    }));
    let mut consumer = VmName(None);
    dispatch(&m, &mut consumer)?;
    assert_eq!(consumer.0.as_deref(), Some("vm"));

    let m = response(json!({ "type": "Version", "major": 4, "minor": 0 }));
    assert!(dispatch(&m, &mut VmName(None)).is_err());
    Ok(())
}

struct ResumeRecorder;

impl Consumer<Resume> for ResumeRecorder {
    fn received(&mut self, result: Result<SuccessResponse<'_>, RpcError>) {
        match result {
            Ok(SuccessResponse::Success(_)) => call!("success"),
            Ok(SuccessResponse::Sentinel(_)) => call!("sentinel"),
            Err(e) if e.code == error_codes::CANNOT_RESUME => call!("cannot resume"),
            Err(_) => call!("error"),
        }
    }
}

#[test]
fn success_or_sentinel() -> Result<()> {
    let mut c = CallRecorder::new();
    dispatch(&response(json!({ "type": "Success" })), &mut ResumeRecorder)?;
    dispatch(
        &response(json!({ "type": "Sentinel", "kind": "Collected" })),
        &mut ResumeRecorder,
    )?;
    dispatch(
        &json!({ "jsonrpc": "2.0", "id": 3, "error": { "code": 107, "message": "Cannot resume execution" } }),
        &mut ResumeRecorder,
    )?;
    c.verify(["success", "sentinel", "cannot resume"]);
    Ok(())
}

struct StreamListenRecorder;

impl Consumer<StreamListen> for StreamListenRecorder {
    fn received(&mut self, result: Result<vmservice::Success<'_>, RpcError>) {
        match result {
            Ok(_) => call!("ok"),
            Err(_) => call!("error"),
        }
    }
}

#[test]
fn deliver_split_outcome() -> Result<()> {
    let mut c = CallRecorder::new();
    let result = json!({ "type": "Success" });
    deliver(Ok(&result), &mut StreamListenRecorder)?;
    deliver(
        Err(RpcError {
            code: error_codes::STREAM_ALREADY_SUBSCRIBED,
            message: "Stream already subscribed".to_string(),
            data: None,
        }),
        &mut StreamListenRecorder,
    )?;
    c.verify(["ok", "error"]);
    Ok(())
}

#[test]
fn version_check_is_optional() -> Result<()> {
    let mut c = CallRecorder::new();
    let m = json!({ "id": "1", "result": { "type": "Success" } });
    assert!(dispatch(&m, &mut StreamListenRecorder).is_err());
    let options = DispatchOptions {
        check_version: Some(false),
    };
    dispatch_with(&m, &mut StreamListenRecorder, &options)?;
    c.verify(["ok"]);
    Ok(())
}

#[derive(Default)]
struct EvaluateRecorder(Vec<String>);

impl Consumer<vmservice::Evaluate> for EvaluateRecorder {
    fn received(&mut self, result: Result<EvaluateResponse<'_>, RpcError>) {
        let s = match result {
            Ok(EvaluateResponse::Instance(i)) => format!("instance {}", i.value_as_string().unwrap_or("?")),
            Ok(EvaluateResponse::Error(e)) => format!("error {}", e.message().unwrap_or("?")),
            Ok(EvaluateResponse::Sentinel(_)) => "sentinel".to_string(),
            Err(e) => format!("rpc {}", e.code),
        };
        self.0.push(s);
    }
}

#[test]
fn evaluate_shapes() -> Result<()> {
    let mut r = EvaluateRecorder::default();
    dispatch(
        &response(json!({ "type": "@Instance", "kind": "Int", "valueAsString": "3" })),
        &mut r,
    )?;
    dispatch(
        &response(json!({ "type": "@Error", "kind": "LanguageError", "message": "bad syntax" })),
        &mut r,
    )?;
    dispatch(
        &json!({ "jsonrpc": "2.0", "id": "7", "error": { "code": 113, "message": "Expression compilation error" } }),
        &mut r,
    )?;
    assert_eq!(r.0, ["instance 3", "error bad syntax", "rpc 113"]);
    Ok(())
}

#[derive(Default)]
struct Events(Vec<(String, String)>);

impl Listener for Events {
    fn received(&mut self, stream_id: &str, event: Event<'_>) {
        let kind = event.kind().map(|k| k.to_string()).unwrap_or_default();
        self.0.push((stream_id.to_string(), kind));
    }
}

#[test]
fn stream_notifications() -> Result<()> {
    let mut events = Events::default();
    dispatch_notification(
        &json!({
            "jsonrpc": "2.0",
            "method": "streamNotify",
            "params": {
                "streamId": "VM",
                "event": { "type": "Event", "kind": "VMUpdate", "timestamp": 1 }
            }
        }),
        &mut events,
    )?;
    dispatch_notification(
        &json!({
            "jsonrpc": "2.0",
            "method": "streamNotify",
            "params": {
                "streamId": "GC",
                "event": { "type": "Event", "kind": "GC", "timestamp": 2 }
            }
        }),
        &mut events,
    )?;
    assert!(
        dispatch_notification(&response(json!({ "type": "Success" })), &mut events).is_err()
    );
    assert_eq!(
        events.0,
        [
            ("VM".to_string(), "VMUpdate".to_string()),
            ("GC".to_string(), "GC".to_string())
        ]
    );
    Ok(())
}
