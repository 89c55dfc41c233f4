//! Home page
//!
//! A single static document that opens a WebSocket to the configured feed
//! and dumps every message into a `<pre>` block.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode},
    response::{Html, IntoResponse, Response},
};

use super::websocket::AppState;
use crate::types::Feed;

/// Text shown before the first report arrives
pub const PLACEHOLDER: &str = "initial";

const HOME_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <title>Flight Feed</title>
    </head>
    <body>
        <pre id="fileData">{{data}}</pre>
        <script type="text/javascript">
            (function() {
                var data = document.getElementById("fileData");
                var conn = new WebSocket("ws://{{host}}{{path}}");
                conn.onclose = function(evt) {
                    data.textContent = 'Connection closed';
                }
                conn.onmessage = function(evt) {
                    console.log('{{feed}} updated');
                    data.textContent = evt.data;
                }
            })();
        </script>
    </body>
</html>
"#;

/// `GET /`
///
/// axum routes HEAD to GET handlers, so HEAD is refused here.
pub async fn serve_home(
    method: Method,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    if method != Method::GET {
        return (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response();
    }

    let fallback = state.config.addr.to_string();
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(&fallback);

    Html(render_home(host, state.config.home_feed)).into_response()
}

/// Fill the page template for a client that reached us via `host`
pub fn render_home(host: &str, feed: Feed) -> String {
    HOME_HTML
        .replace("{{data}}", PLACEHOLDER)
        .replace("{{host}}", &escape_js_string(host))
        .replace("{{path}}", feed.stream_path())
        .replace("{{feed}}", &feed.to_string())
}

/// Escape a value interpolated into a double-quoted JS string inside HTML
fn escape_js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '<' => out.push_str("\\u003C"),
            '>' => out.push_str("\\u003E"),
            '&' => out.push_str("\\u0026"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
