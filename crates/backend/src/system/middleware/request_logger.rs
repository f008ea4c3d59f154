use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::shared::format::format_number;

/// One line of the request log.
struct RequestLogLine<'a> {
    timestamp: DateTime<Utc>,
    duration: Duration,
    /// `None` when the body could not be read
    size: Option<u64>,
    status: StatusCode,
    method: &'a Method,
    path: &'a str,
}

impl RequestLogLine<'_> {
    /// `HH:MM:SS | duration | size | status method path`, time in cyan for 200 and yellow otherwise.
    fn render(&self) -> String {
        let color_code = if self.status == StatusCode::OK && self.size.is_some() {
            "36"
        } else {
            "33"
        };
        let size = match self.size {
            Some(n) => format_number(n),
            None => "error".to_string(),
        };
        format!(
            "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
            color_code,
            self.timestamp.format("%H:%M:%S"),
            self.duration.as_millis(),
            size,
            self.status.as_u16(),
            self.method.as_str(),
            self.path
        )
    }
}

/// Logs every HTTP request with its duration and response size.
///
/// The response body is buffered to report its real size, then passed on unchanged.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let (size, body) = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => (Some(bytes.len() as u64), Body::from(bytes)),
        Err(e) => {
            tracing::warn!("Cannot read response body for {} {}: {}", method, uri.path(), e);
            (None, Body::default())
        }
    };

    let line = RequestLogLine {
        timestamp: Utc::now(),
        duration: start.elapsed(),
        size,
        status: parts.status,
        method: &method,
        path: uri.path(),
    };
    println!("{}", line.render());

    Response::from_parts(parts, body)
}
