use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::{format_duration_ms, format_number};

/// One access-log line: `200 GET /api/jobs | 12ms | 4,096 B`
pub fn access_line(status: StatusCode, method: &Method, path: &str, ms: u128, size: Option<usize>) -> String {
    let size = size
        .map(|s| format!("{} B", format_number(s)))
        .unwrap_or_else(|| "body error".to_string());
    format!(
        "{} {} {} | {} | {}",
        status.as_u16(),
        method,
        path,
        format_duration_ms(ms),
        size
    )
}

/// Logs every request with status, latency and response size
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Buffer the body so its real size is known
    let (bytes, size) = match to_bytes(body, usize::MAX).await {
        Ok(b) => {
            let len = b.len();
            (b, Some(len))
        }
        Err(_) => (Default::default(), None),
    };

    let line = access_line(parts.status, &method, &path, start.elapsed().as_millis(), size);
    if parts.status.is_server_error() || size.is_none() {
        tracing::warn!("{}", line);
    } else {
        tracing::info!("{}", line);
    }

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_access_line() {
        let line = access_line(StatusCode::OK, &Method::GET, "/api/jobs", 12, Some(4096));
        assert_eq!(line, "200 GET /api/jobs | 12ms | 4,096 B");
    }

    #[test]
    fn marks_unreadable_body() {
        let line = access_line(StatusCode::BAD_GATEWAY, &Method::POST, "/x", 3, None);
        assert!(line.ends_with("body error"));
    }
}
