//! Window handle bindings.
//!
//! A [`Window`] addresses one host window by label; every operation forwards
//! to the host's window commands with that label attached. Per-window event
//! helpers reuse the event shim with a window-scoped target.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::callback::HandlerRegistry;
use crate::dispatcher::{request, request_unit, Dispatcher};
use crate::event::{Event, EventOptions, EventTarget, Events, Subscription};
use crate::Result;

/// Window theme reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Attention type to request on a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum UserAttentionType {
    /// Keeps flashing/bouncing until the window is focused
    Critical = 1,
    /// A single, short attention request
    Informational = 2,
}

/// Position in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalPosition {
    pub x: i32,
    pub y: i32,
}

/// Position in logical pixels (physical pixels / scale factor).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogicalPosition {
    pub x: f64,
    pub y: f64,
}

/// Size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

/// Size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogicalSize {
    pub width: f64,
    pub height: f64,
}

/// A position in either coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Position {
    Physical(PhysicalPosition),
    Logical(LogicalPosition),
}

impl From<PhysicalPosition> for Position {
    fn from(position: PhysicalPosition) -> Self {
        Self::Physical(position)
    }
}

impl From<LogicalPosition> for Position {
    fn from(position: LogicalPosition) -> Self {
        Self::Logical(position)
    }
}

/// A size in either coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Size {
    Physical(PhysicalSize),
    Logical(LogicalSize),
}

impl From<PhysicalSize> for Size {
    fn from(size: PhysicalSize) -> Self {
        Self::Physical(size)
    }
}

impl From<LogicalSize> for Size {
    fn from(size: LogicalSize) -> Self {
        Self::Logical(size)
    }
}

/// Client for one host window, addressed by label.
pub struct Window {
    label: String,
    dispatcher: Arc<dyn Dispatcher>,
    events: Events,
}

impl Window {
    /// Create a client for the window with the given label
    pub fn new(
        label: impl Into<String>,
        dispatcher: Arc<dyn Dispatcher>,
        callbacks: Arc<dyn HandlerRegistry>,
    ) -> Self {
        Self {
            label: label.into(),
            dispatcher: dispatcher.clone(),
            events: Events::new(dispatcher, callbacks),
        }
    }

    /// The window label
    pub fn label(&self) -> &str {
        &self.label
    }

    fn label_args(&self) -> Value {
        json!({ "label": self.label })
    }

    fn value_args<T: Serialize>(&self, value: T) -> Result<Value> {
        Ok(json!({ "label": self.label, "value": serde_json::to_value(value)? }))
    }

    async fn query<T: serde::de::DeserializeOwned>(&self, command: &str) -> Result<T> {
        request(&*self.dispatcher, command, &self.label_args()).await
    }

    async fn run(&self, command: &str) -> Result<()> {
        request_unit(&*self.dispatcher, command, &self.label_args()).await
    }

    async fn set<T: Serialize>(&self, command: &str, value: T) -> Result<()> {
        let args = self.value_args(value)?;
        request_unit(&*self.dispatcher, command, &args).await
    }

    // Queries

    /// Scale factor mapping logical to physical pixels
    pub async fn scale_factor(&self) -> Result<f64> {
        self.query("plugin:window|scale_factor").await
    }

    /// Position of the window's client area, in physical pixels
    pub async fn inner_position(&self) -> Result<PhysicalPosition> {
        self.query("plugin:window|inner_position").await
    }

    /// Position of the whole window including decorations, in physical pixels
    pub async fn outer_position(&self) -> Result<PhysicalPosition> {
        self.query("plugin:window|outer_position").await
    }

    /// Size of the window's client area, in physical pixels
    pub async fn inner_size(&self) -> Result<PhysicalSize> {
        self.query("plugin:window|inner_size").await
    }

    /// Size of the whole window including decorations, in physical pixels
    pub async fn outer_size(&self) -> Result<PhysicalSize> {
        self.query("plugin:window|outer_size").await
    }

    /// Whether the window is in fullscreen mode
    pub async fn is_fullscreen(&self) -> Result<bool> {
        self.query("plugin:window|is_fullscreen").await
    }

    /// Whether the window is maximized
    pub async fn is_maximized(&self) -> Result<bool> {
        self.query("plugin:window|is_maximized").await
    }

    /// Whether the window has decorations
    pub async fn is_decorated(&self) -> Result<bool> {
        self.query("plugin:window|is_decorated").await
    }

    /// Whether the window is resizable
    pub async fn is_resizable(&self) -> Result<bool> {
        self.query("plugin:window|is_resizable").await
    }

    /// Whether the window is visible
    pub async fn is_visible(&self) -> Result<bool> {
        self.query("plugin:window|is_visible").await
    }

    /// Current window theme
    pub async fn theme(&self) -> Result<Theme> {
        self.query("plugin:window|theme").await
    }

    // Mutations

    /// Center the window on the current monitor
    pub async fn center(&self) -> Result<()> {
        self.run("plugin:window|center").await
    }

    /// Request user attention on the window
    pub async fn request_user_attention(
        &self,
        request_type: Option<UserAttentionType>,
    ) -> Result<()> {
        self.set(
            "plugin:window|request_user_attention",
            request_type.map(|t| t as u8),
        )
        .await
    }

    /// Set whether the window is resizable
    pub async fn set_resizable(&self, resizable: bool) -> Result<()> {
        self.set("plugin:window|set_resizable", resizable).await
    }

    /// Set the window title
    pub async fn set_title(&self, title: impl AsRef<str>) -> Result<()> {
        self.set("plugin:window|set_title", title.as_ref()).await
    }

    /// Maximize the window
    pub async fn maximize(&self) -> Result<()> {
        self.run("plugin:window|maximize").await
    }

    /// Restore the window from the maximized state
    pub async fn unmaximize(&self) -> Result<()> {
        self.run("plugin:window|unmaximize").await
    }

    /// Toggle the maximized state
    pub async fn toggle_maximize(&self) -> Result<()> {
        self.run("plugin:window|toggle_maximize").await
    }

    /// Minimize the window
    pub async fn minimize(&self) -> Result<()> {
        self.run("plugin:window|minimize").await
    }

    /// Restore the window from the minimized state
    pub async fn unminimize(&self) -> Result<()> {
        self.run("plugin:window|unminimize").await
    }

    /// Show the window
    pub async fn show(&self) -> Result<()> {
        self.run("plugin:window|show").await
    }

    /// Hide the window
    pub async fn hide(&self) -> Result<()> {
        self.run("plugin:window|hide").await
    }

    /// Close the window
    pub async fn close(&self) -> Result<()> {
        self.run("plugin:window|close").await
    }

    /// Set whether the window has decorations
    pub async fn set_decorations(&self, decorations: bool) -> Result<()> {
        self.set("plugin:window|set_decorations", decorations).await
    }

    /// Set whether the window stays above all other windows
    pub async fn set_always_on_top(&self, always_on_top: bool) -> Result<()> {
        self.set("plugin:window|set_always_on_top", always_on_top).await
    }

    /// Resize the window
    pub async fn set_size(&self, size: impl Into<Size>) -> Result<()> {
        self.set("plugin:window|set_size", size.into()).await
    }

    /// Set the minimum window size, `None` to unset
    pub async fn set_min_size(&self, size: Option<Size>) -> Result<()> {
        self.set("plugin:window|set_min_size", size).await
    }

    /// Set the maximum window size, `None` to unset
    pub async fn set_max_size(&self, size: Option<Size>) -> Result<()> {
        self.set("plugin:window|set_max_size", size).await
    }

    /// Move the window
    pub async fn set_position(&self, position: impl Into<Position>) -> Result<()> {
        self.set("plugin:window|set_position", position.into()).await
    }

    /// Set whether the window is in fullscreen mode
    pub async fn set_fullscreen(&self, fullscreen: bool) -> Result<()> {
        self.set("plugin:window|set_fullscreen", fullscreen).await
    }

    /// Focus the window
    pub async fn set_focus(&self) -> Result<()> {
        self.run("plugin:window|set_focus").await
    }

    /// Set whether the window is skipped by the taskbar
    pub async fn set_skip_taskbar(&self, skip: bool) -> Result<()> {
        self.set("plugin:window|set_skip_taskbar", skip).await
    }

    /// Start dragging the window from the current cursor position
    pub async fn start_dragging(&self) -> Result<()> {
        self.run("plugin:window|start_dragging").await
    }

    // Per-window events

    fn scoped_options(&self) -> EventOptions {
        EventOptions::with_target(EventTarget::WebviewWindow {
            label: self.label.clone(),
        })
    }

    /// Publish `payload` under `event`, scoped to this window
    pub async fn emit(&self, event: &str, payload: Value) -> Result<()> {
        self.events.emit(event, payload, self.scoped_options()).await
    }

    /// Subscribe to `event` deliveries scoped to this window
    pub async fn listen<F>(&self, event: &str, handler: F) -> Result<Subscription>
    where
        F: Fn(Event) + Send + Sync + 'static,
    {
        self.events.listen(event, handler, self.scoped_options()).await
    }

    /// Subscribe to a single delivery of `event` scoped to this window
    pub async fn once<F>(&self, event: &str, handler: F) -> Result<Subscription>
    where
        F: Fn(Event) + Send + Sync + 'static,
    {
        self.events.once(event, handler, self.scoped_options()).await
    }
}
