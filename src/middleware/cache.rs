use axum::{
    body::Body,
    http::{Request, Response, header},
    middleware::Next,
};

/// Middleware to set cache control headers
/// - Static files: cached for a year (the embedded tree is immutable)
/// - All other routes: no caching
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    // Clone the path before moving req
    let path = req.uri().path().to_string();
    let mut response = next.run(req).await;

    let is_static_file = path.starts_with("/static/");

    let headers = response.headers_mut();

    if is_static_file {
        headers.insert(
            header::CACHE_CONTROL,
            "public, max-age=31536000, immutable".parse().unwrap(),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            "no-store, no-cache, must-revalidate, proxy-revalidate"
                .parse()
                .unwrap(),
        );
        headers.insert(header::PRAGMA, "no-cache".parse().unwrap());
        headers.insert(header::EXPIRES, "0".parse().unwrap());
    }

    response
}
