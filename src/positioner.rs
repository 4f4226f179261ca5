//! Window positioning bindings.
//!
//! Positions are encoded as integers on the wire, matching the host plugin's
//! enum order.

use std::sync::Arc;

use serde_json::json;

use crate::dispatcher::{request_unit, Dispatcher};
use crate::Result;

/// Well-known window positions understood by the host positioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Position {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
    TopCenter = 4,
    BottomCenter = 5,
    LeftCenter = 6,
    RightCenter = 7,
    Center = 8,
    TrayLeft = 9,
    TrayBottomLeft = 10,
    TrayRight = 11,
    TrayBottomRight = 12,
    TrayCenter = 13,
    TrayBottomCenter = 14,
}

/// Client for the host's positioner commands.
pub struct Positioner {
    dispatcher: Arc<dyn Dispatcher>,
}

impl Positioner {
    /// Create a client over the given dispatcher
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Move the window to one of the well-known positions
    pub async fn move_window(&self, to: Position) -> Result<()> {
        request_unit(
            &*self.dispatcher,
            "plugin:positioner|move_window",
            &json!({ "position": to as u8 }),
        )
        .await
    }
}
