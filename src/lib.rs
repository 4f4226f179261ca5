//! Typed client bindings to a webview host runtime's command dispatcher.
//!
//! Every operation serializes its arguments and forwards them, by command
//! name, to a handler registered on the host side. The transport is injected
//! through the [`Dispatcher`] trait and event handlers are exposed to the
//! host as opaque tokens through a [`HandlerRegistry`], so both can be
//! replaced by fakes in tests.
//!
//! ```no_run
//! use std::sync::Arc;
//! use hostbridge::{Events, EventOptions, LocalHandlerRegistry};
//!
//! # async fn example(dispatcher: Arc<dyn hostbridge::Dispatcher>) -> hostbridge::Result<()> {
//! let events = Events::new(dispatcher, Arc::new(LocalHandlerRegistry::new()));
//! let subscription = events
//!     .listen("ready", |event| println!("{:?}", event.payload), EventOptions::default())
//!     .await?;
//! subscription.unlisten().await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod callback;
pub mod dialog;
pub mod dispatcher;
pub mod event;
pub mod os;
pub mod positioner;
pub mod process;
pub mod window;

#[cfg(test)]
mod tests;

pub use callback::{CallbackToken, HandlerRegistry, LocalHandlerRegistry, RawHandler};
pub use dispatcher::{Dispatcher, InvokeError};
pub use event::{Event, EventId, EventOptions, EventTarget, Events, Subscription};

/// Crate-wide result type carrying [`InvokeError`]
pub type Result<T> = std::result::Result<T, InvokeError>;
