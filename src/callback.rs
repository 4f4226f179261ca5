//! Handler registry: local closures exposed as opaque callback tokens.
//!
//! The host cannot hold a reference to a Rust closure, so handlers are
//! registered here and identified on the wire by a numeric token. The host
//! delivers an event by invoking the token; the registry routes the payload
//! to the matching closure.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque reference to a registered handler, serialized as a bare integer.
///
/// The host hands tokens back verbatim when delivering, so the type is
/// deserializable too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallbackToken(u32);

/// Handler receiving the raw payload the host delivered for a token.
pub type RawHandler = Arc<dyn Fn(Value) + Send + Sync>;

/// Trait for the callback-token registry.
///
/// Split from [`LocalHandlerRegistry`] so embedders with their own callback
/// plumbing (or tests) can supply a different implementation.
pub trait HandlerRegistry: Send + Sync {
    /// Register a handler and return the token identifying it.
    fn register(&self, handler: RawHandler) -> CallbackToken;

    /// Deliver a payload to the handler behind `token`.
    ///
    /// Unknown tokens are dropped; the host may still be flushing deliveries
    /// for a registration that was just removed.
    fn invoke(&self, token: CallbackToken, payload: Value);

    /// Remove a handler. Removing an unknown token is a no-op.
    fn unregister(&self, token: CallbackToken);
}

/// In-process registry backed by a mutex-guarded token map.
#[derive(Default)]
pub struct LocalHandlerRegistry {
    handlers: Mutex<HashMap<CallbackToken, RawHandler>>,
    next_token: AtomicU32,
}

impl LocalHandlerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently registered handlers
    pub fn len(&self) -> usize {
        self.handlers.lock().unwrap().len()
    }

    /// Whether no handlers are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HandlerRegistry for LocalHandlerRegistry {
    fn register(&self, handler: RawHandler) -> CallbackToken {
        let token = CallbackToken(self.next_token.fetch_add(1, Ordering::Relaxed));
        self.handlers.lock().unwrap().insert(token, handler);
        token
    }

    fn invoke(&self, token: CallbackToken, payload: Value) {
        // Clone the handler out of the lock so it may re-enter the registry.
        let handler = self.handlers.lock().unwrap().get(&token).cloned();
        match handler {
            Some(handler) => handler(payload),
            None => log::warn!("dropping delivery for unknown callback token {:?}", token),
        }
    }

    fn unregister(&self, token: CallbackToken) {
        self.handlers.lock().unwrap().remove(&token);
    }
}
