//! Command dispatcher abstraction.
//!
//! Every binding in this crate forwards its arguments to a command registered
//! on the host side. The transport is injected through the [`Dispatcher`]
//! trait so the host channel (and a fake in tests) can be substituted without
//! touching the bindings themselves.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Errors that can occur while invoking a host command
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// The dispatcher rejected the request; carries the host's diagnostic.
    #[error("dispatcher request failed: {0}")]
    Dispatch(String),

    /// A command argument or response could not be (de)serialized.
    #[error("command payload error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Trait for the host command dispatcher.
///
/// Implementations own the request/response channel to the host runtime;
/// this crate never caches or mirrors host state and treats the dispatcher
/// as the sole source of truth.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Invoke a named host command with already-serialized arguments.
    ///
    /// Resolves with the host's response value, or an error carrying
    /// whatever diagnostic the host supplied.
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, InvokeError>;
}

/// Invoke a command with typed arguments and decode the typed response.
pub(crate) async fn request<A, T>(
    dispatcher: &dyn Dispatcher,
    command: &str,
    args: &A,
) -> Result<T, InvokeError>
where
    A: Serialize + ?Sized,
    T: DeserializeOwned,
{
    log::debug!("invoking host command `{}`", command);
    let response = dispatcher.invoke(command, serde_json::to_value(args)?).await?;
    Ok(serde_json::from_value(response)?)
}

/// Invoke a command whose response carries no data.
pub(crate) async fn request_unit<A>(
    dispatcher: &dyn Dispatcher,
    command: &str,
    args: &A,
) -> Result<(), InvokeError>
where
    A: Serialize + ?Sized,
{
    log::debug!("invoking host command `{}`", command);
    dispatcher.invoke(command, serde_json::to_value(args)?).await?;
    Ok(())
}
