//! Server-Sent Events (SSE) stream of device changes.
//!
//! Every change the simulation publishes is forwarded to each connected
//! subscriber as one SSE event named `message`, whose data is the device
//! record serialized to a JSON string. Subscribers get no replay and no
//! initial snapshot: only changes published while they are connected.
//!
//! The endpoint speaks plain SSE, not the socket.io protocol: socket.io
//! clients cannot connect to it. A browser subscribes with `EventSource`
//! and listens for `message`:
//!
//! ```js
//! const source = new EventSource("http://localhost:3400/api/v1/refresh");
//! source.addEventListener("message", (e) => update(JSON.parse(e.data)));
//! ```

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::{BroadcastStream, WatchStream};
use uuid::Uuid;

use mockhub_app::ports::DeviceRepository;
use mockhub_domain::event::DeviceChanged;

use crate::state::AppState;

/// SSE event name carried by every change message.
pub const MESSAGE_EVENT: &str = "message";

/// `GET /api/v1/refresh` — SSE stream of device changes.
///
/// The stream continues until the client disconnects, the event bus is
/// closed or the server starts shutting down.
pub async fn stream<DR>(
    State(state): State<AppState<DR>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let subscriber = Subscriber::connect();
    let event_rx = state.event_bus.subscribe();
    let changes = BroadcastStream::new(event_rx).filter_map(move |result| match result {
        Ok(changed) => match message_event(&changed) {
            Ok(event) => Some(Ok(event)),
            Err(err) => {
                tracing::warn!(
                    %err,
                    subscriber_id = %subscriber.id,
                    device_id = %changed.device_id(),
                    "failed to serialize device for SSE stream"
                );
                None
            }
        },
        Err(BroadcastStreamRecvError::Lagged(n)) => {
            tracing::warn!(
                subscriber_id = %subscriber.id,
                skipped = n,
                "SSE subscriber lagged, some changes were dropped"
            );
            None
        }
    });
    let stop = WatchStream::from_changes(state.shutdown.clone())
        .filter(|stopping| *stopping)
        .map(|_| None);

    let event_stream = changes
        .map(Some)
        .merge(stop)
        .take_while(Option::is_some)
        .filter_map(std::convert::identity);

    Sse::new(event_stream).keep_alive(KeepAlive::default())
}

/// Build the SSE event for one change.
///
/// # Errors
///
/// Returns the serializer error if the device cannot be encoded.
pub fn message_event(changed: &DeviceChanged) -> Result<Event, serde_json::Error> {
    let payload = serde_json::to_string(&changed.device)?;
    Ok(Event::default().event(MESSAGE_EVENT).data(payload))
}

/// One connected stream, logged on connect and on disconnect.
///
/// Owned by the stream closure, so it is dropped when axum drops the
/// response body after the client goes away.
struct Subscriber {
    id: Uuid,
}

impl Subscriber {
    fn connect() -> Self {
        let id = Uuid::new_v4();
        tracing::info!(subscriber_id = %id, "subscriber connected");
        Self { id }
    }
}

impl Drop for Subscriber {
    fn drop(&mut self) {
        tracing::info!(subscriber_id = %self.id, "subscriber disconnected");
    }
}
