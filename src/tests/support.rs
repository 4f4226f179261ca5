//! Shared test doubles for the binding suites.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::dispatcher::{Dispatcher, InvokeError};

/// Capturing fake dispatcher.
///
/// Records every invocation and answers with a per-command canned response,
/// defaulting to `null` (the host's acknowledgement for void commands).
#[derive(Default)]
pub struct FakeDispatcher {
    calls: Mutex<Vec<(String, Value)>>,
    responses: Mutex<HashMap<String, Result<Value, String>>>,
}

impl FakeDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with `response` from now on
    pub fn respond_with(&self, command: &str, response: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(command.to_string(), Ok(response));
    }

    /// Reject `command` with `diagnostic` from now on
    pub fn fail_with(&self, command: &str, diagnostic: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(command.to_string(), Err(diagnostic.to_string()));
    }

    /// All recorded invocations, in order
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded argument values for one command, in order
    pub fn calls_for(&self, command: &str) -> Vec<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == command)
            .map(|(_, args)| args.clone())
            .collect()
    }
}

#[async_trait]
impl Dispatcher for FakeDispatcher {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, InvokeError> {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), args));
        match self.responses.lock().unwrap().get(command) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(diagnostic)) => Err(InvokeError::Dispatch(diagnostic.clone())),
            None => Ok(Value::Null),
        }
    }
}

/// Let fire-and-forget tasks spawned by the shim run to completion.
pub async fn drain_spawned_tasks() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
