//! WebSocket push handlers
//!
//! Each upgraded connection gets its own loop: wait one interval, build a
//! report, send it as a JSON text frame, repeat. The loop ends when the
//! client goes away or a write fails.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{
        ws::{rejection::WebSocketUpgradeRejection, Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::state::AppState;
use crate::error::{FeedError, FeedResult};
use crate::source::{ReportSource, SharedSource};
use crate::types::Feed;

type Upgrade = Result<WebSocketUpgrade, WebSocketUpgradeRejection>;

/// `GET /traffic`
pub async fn traffic_ws(ws: Upgrade, State(state): State<Arc<AppState>>) -> Response {
    let source = Arc::clone(&state.sources.traffic);
    upgrade(ws, state, Feed::Traffic, source)
}

/// `GET /status`
pub async fn status_ws(ws: Upgrade, State(state): State<Arc<AppState>>) -> Response {
    let source = Arc::clone(&state.sources.status);
    upgrade(ws, state, Feed::Status, source)
}

/// `GET /situation`
pub async fn situation_ws(ws: Upgrade, State(state): State<Arc<AppState>>) -> Response {
    let source = Arc::clone(&state.sources.situation);
    upgrade(ws, state, Feed::Situation, source)
}

/// Complete the handshake and hand the socket to the push loop
fn upgrade<R>(ws: Upgrade, state: Arc<AppState>, feed: Feed, source: SharedSource<R>) -> Response
where
    R: Serialize + 'static,
{
    let ws = match ws {
        Ok(ws) => ws,
        Err(rejection) => {
            warn!(%feed, error = %rejection, "websocket handshake rejected");
            return rejection.into_response();
        }
    };

    let period = state.config.interval;
    ws.write_buffer_size(state.config.write_buffer_size)
        .on_failed_upgrade(move |e| warn!(%feed, error = %e, "websocket upgrade failed"))
        .on_upgrade(move |socket| async move {
            let _guard = state.track_connection();
            info!(%feed, clients = state.connection_count(), "client connected");

            match push_reports(socket, source.as_ref(), period).await {
                Ok(sent) => info!(%feed, sent, "client disconnected"),
                Err(FeedError::Write(e)) => debug!(%feed, error = %e, "stream ended on write failure"),
                Err(e) => warn!(%feed, error = %e, "stream aborted"),
            }
        })
}

/// Push one report per `period` until the client disconnects
///
/// The first report goes out one full period after the call. Frames sent by
/// the client are read only to notice a close; their content is ignored.
/// Returns the number of reports delivered when the client closes, or the
/// error that ended the stream.
pub async fn push_reports<R>(
    mut socket: WebSocket,
    source: &dyn ReportSource<R>,
    period: Duration,
) -> FeedResult<u64>
where
    R: Serialize,
{
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut sent = 0u64;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let json = serde_json::to_string(&source.next_report())?;
                socket
                    .send(Message::Text(json))
                    .await
                    .map_err(FeedError::Write)?;
                sent += 1;
            }

            incoming = socket.recv() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | None => return Ok(sent),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        debug!(error = %e, "read failed, closing stream");
                        return Ok(sent);
                    }
                }
            }
        }
    }
}
