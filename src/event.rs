//! Event subscription shim over the host's publish/subscribe commands.
//!
//! The host owns the subscription table; this module only translates local
//! closures into callback tokens the host can invoke, and keeps the
//! host-assigned subscription id long enough to cancel with it. No local
//! mirror of the host's state is kept.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::callback::{CallbackToken, HandlerRegistry};
use crate::dispatcher::{request, request_unit, Dispatcher};
use crate::Result;

/// Host-assigned identifier for an active event registration.
pub type EventId = u32;

/// Delivery scope for listening to or emitting an event.
///
/// Interpreted entirely by the host dispatcher; the default is to match
/// every scope.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EventTarget {
    /// Any scope
    #[default]
    Any,
    /// Any scope with the given label
    AnyLabel { label: String },
    /// The application itself
    App,
    /// The window with the given label
    Window { label: String },
    /// The webview with the given label
    Webview { label: String },
    /// The webview window with the given label
    WebviewWindow { label: String },
}

/// Options recognized by [`Events::listen`], [`Events::once`] and
/// [`Events::emit`].
#[derive(Debug, Clone, Default)]
pub struct EventOptions {
    /// Delivery target, defaulting to [`EventTarget::Any`]
    pub target: EventTarget,
}

impl EventOptions {
    /// Options scoped to a single delivery target
    pub fn with_target(target: EventTarget) -> Self {
        Self { target }
    }
}

/// Envelope delivered to event handlers.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    /// Event name the handler was registered for
    pub event: String,
    /// Subscription id this delivery belongs to
    pub id: EventId,
    /// Caller-defined payload, left opaque
    #[serde(default)]
    pub payload: Value,
}

#[derive(Serialize)]
struct ListenArgs<'a> {
    event: &'a str,
    target: &'a EventTarget,
    handler: CallbackToken,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UnlistenArgs<'a> {
    event: &'a str,
    event_id: EventId,
}

#[derive(Serialize)]
struct EmitArgs<'a> {
    event: &'a str,
    target: &'a EventTarget,
    payload: &'a Value,
}

async fn unlisten_request(dispatcher: &dyn Dispatcher, event: &str, event_id: EventId) -> Result<()> {
    request_unit(
        dispatcher,
        "plugin:event|unlisten",
        &UnlistenArgs { event, event_id },
    )
    .await
}

/// Handle for an active subscription, returned by [`Events::listen`] and
/// [`Events::once`].
///
/// Holds the host-assigned id; dropping it does not cancel the subscription.
pub struct Subscription {
    event: String,
    id: EventId,
    token: CallbackToken,
    dispatcher: Arc<dyn Dispatcher>,
    callbacks: Arc<dyn HandlerRegistry>,
}

impl Subscription {
    /// The host-assigned subscription id
    pub fn id(&self) -> EventId {
        self.id
    }

    /// The event name this subscription was created for
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Cancel the subscription.
    ///
    /// Issues one unlisten request per call; deduplicating repeated cancels
    /// is the dispatcher's responsibility. The local handler is released
    /// once the host acknowledges removal.
    pub async fn unlisten(&self) -> Result<()> {
        unlisten_request(&*self.dispatcher, &self.event, self.id).await?;
        self.callbacks.unregister(self.token);
        Ok(())
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Client for the host's event commands.
pub struct Events {
    dispatcher: Arc<dyn Dispatcher>,
    callbacks: Arc<dyn HandlerRegistry>,
}

impl Events {
    /// Create a client over the given dispatcher and handler registry
    pub fn new(dispatcher: Arc<dyn Dispatcher>, callbacks: Arc<dyn HandlerRegistry>) -> Self {
        Self {
            dispatcher,
            callbacks,
        }
    }

    /// Subscribe `handler` to `event`.
    ///
    /// On success the host has assigned a subscription id and deliveries may
    /// begin; cancel through the returned [`Subscription`]. On failure no
    /// subscription exists and the handler is released again.
    pub async fn listen<F>(
        &self,
        event: &str,
        handler: F,
        options: EventOptions,
    ) -> Result<Subscription>
    where
        F: Fn(Event) + Send + Sync + 'static,
    {
        let token = self.callbacks.register(Arc::new(move |payload| {
            match serde_json::from_value::<Event>(payload) {
                Ok(delivery) => handler(delivery),
                Err(err) => log::warn!("dropping malformed event delivery: {}", err),
            }
        }));

        let subscribed: Result<EventId> = request(
            &*self.dispatcher,
            "plugin:event|listen",
            &ListenArgs {
                event,
                target: &options.target,
                handler: token,
            },
        )
        .await;

        match subscribed {
            Ok(id) => {
                log::debug!("listening for `{}` as subscription {}", event, id);
                Ok(Subscription {
                    event: event.to_string(),
                    id,
                    token,
                    dispatcher: self.dispatcher.clone(),
                    callbacks: self.callbacks.clone(),
                })
            }
            Err(err) => {
                self.callbacks.unregister(token);
                Err(err)
            }
        }
    }

    /// Subscribe `handler` to `event` for a single delivery.
    ///
    /// The handler runs at most once. After the first delivery the shim
    /// issues a best-effort unlisten using the id embedded in the delivered
    /// envelope; a failure of that cleanup is swallowed since the handler's
    /// work has already completed. The returned [`Subscription`] can still
    /// cancel before the first delivery arrives.
    pub async fn once<F>(
        &self,
        event: &str,
        handler: F,
        options: EventOptions,
    ) -> Result<Subscription>
    where
        F: Fn(Event) + Send + Sync + 'static,
    {
        let dispatcher = self.dispatcher.clone();
        let event_name = event.to_string();
        let fired = AtomicBool::new(false);

        self.listen(
            event,
            move |delivery: Event| {
                if fired.swap(true, Ordering::SeqCst) {
                    return;
                }
                let id = delivery.id;
                handler(delivery);

                let dispatcher = dispatcher.clone();
                let event_name = event_name.clone();
                tokio::spawn(async move {
                    if let Err(err) = unlisten_request(&*dispatcher, &event_name, id).await {
                        log::debug!(
                            "best-effort unlisten for one-shot `{}` failed: {}",
                            event_name,
                            err
                        );
                    }
                });
            },
            options,
        )
        .await
    }

    /// Publish `payload` under `event` to the given target.
    ///
    /// Resolves when the host acknowledges the publish request; individual
    /// subscriber delivery is not reported.
    pub async fn emit(&self, event: &str, payload: Value, options: EventOptions) -> Result<()> {
        request_unit(
            &*self.dispatcher,
            "plugin:event|emit",
            &EmitArgs {
                event,
                target: &options.target,
                payload: &payload,
            },
        )
        .await
    }
}
