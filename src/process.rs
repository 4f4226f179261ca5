//! Process exit and relaunch bindings.

use std::sync::Arc;

use serde_json::json;

use crate::dispatcher::{request_unit, Dispatcher};
use crate::Result;

/// Client for the host's process commands.
pub struct Process {
    dispatcher: Arc<dyn Dispatcher>,
}

impl Process {
    /// Create a client over the given dispatcher
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Exit the application with the given exit code
    pub async fn exit(&self, code: i32) -> Result<()> {
        request_unit(&*self.dispatcher, "plugin:process|exit", &json!({ "code": code })).await
    }

    /// Exit and relaunch the application
    pub async fn relaunch(&self) -> Result<()> {
        request_unit(&*self.dispatcher, "plugin:process|restart", &json!({})).await
    }
}
