use std::sync::Arc;

use anyhow::Result;
use serde_json::{Value, json};
use tokio::{spawn, test};
use vmservice::{GetObject, GetObjectResponse, InstanceOrSentinel, decode_response};

fn list(n: i64) -> Value {
    let elements: Vec<Value> = (0..n)
        .map(|i| json!({ "type": "@Instance", "kind": "Int", "valueAsString": i.to_string() }))
        .collect();
    json!({ "type": "Instance", "kind": "List", "length": n, "elements": elements })
}

fn sum(value: &Value) -> vmservice::Result<i64> {
    let GetObjectResponse::Instance(instance) = decode_response::<GetObject>(value)? else {
        return Ok(-1);
    };
    let mut sum = 0;
    for e in instance.elements()? {
        if let InstanceOrSentinel::Instance(i) = e? {
            sum += i.value_as_string()?.parse::<i64>().unwrap_or(0);
        }
    }
    Ok(sum)
}

#[test(flavor = "multi_thread")]
async fn independent_payloads_decode_in_parallel() -> Result<()> {
    let mut tasks = Vec::new();
    for n in 1..=16 {
        tasks.push(spawn(async move {
            let value = list(n);
            sum(&value).map(|s| (n, s))
        }));
    }
    for task in tasks {
        let (n, s) = task.await??;
        assert_eq!(s, n * (n - 1) / 2);
    }
    Ok(())
}

#[test(flavor = "multi_thread")]
async fn shared_payload_is_read_from_many_tasks() -> Result<()> {
    let value = Arc::new(list(100));
    let mut tasks = Vec::new();
    for _ in 0..8 {
        let value = value.clone();
        tasks.push(spawn(async move { sum(&value) }));
    }
    for task in tasks {
        assert_eq!(task.await??, 4950);
    }
    Ok(())
}
