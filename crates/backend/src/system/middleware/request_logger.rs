use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Лог каждого HTTP запроса: статус, метод, путь, длительность
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis();
    if status < 400 {
        tracing::info!("{} {:>6} {} | {}ms", status, method, path, duration_ms);
    } else {
        tracing::warn!("{} {:>6} {} | {}ms", status, method, path, duration_ms);
    }

    response
}
