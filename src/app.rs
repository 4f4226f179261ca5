//! Application metadata and visibility bindings.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::dispatcher::{request, request_unit, Dispatcher};
use crate::Result;

/// Client for the host's application commands.
pub struct App {
    dispatcher: Arc<dyn Dispatcher>,
}

impl App {
    /// Create a client over the given dispatcher
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// The application version string
    pub async fn version(&self) -> Result<String> {
        request(&*self.dispatcher, "plugin:app|version", &Value::Null).await
    }

    /// The application name
    pub async fn name(&self) -> Result<String> {
        request(&*self.dispatcher, "plugin:app|name", &Value::Null).await
    }

    /// The host runtime version string
    pub async fn tauri_version(&self) -> Result<String> {
        request(&*self.dispatcher, "plugin:app|tauri_version", &Value::Null).await
    }

    /// Show the application
    pub async fn show(&self) -> Result<()> {
        request_unit(&*self.dispatcher, "plugin:app|show", &json!({})).await
    }

    /// Hide the application
    pub async fn hide(&self) -> Result<()> {
        request_unit(&*self.dispatcher, "plugin:app|hide", &json!({})).await
    }
}
