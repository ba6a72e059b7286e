use axum::{body::Body, response::Response};
cfg_if::cfg_if! {
    if #[cfg(not(debug_assertions))] {
        use axum::{body::to_bytes, http::header};
        use std::sync::LazyLock;

        /// Configuration for HTML minification
        static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            minify_doctype: false,
            minify_css: true,
            ..Default::default()
        });
    }
}

/// Middleware to minify HTML responses
///
/// Intercepts `text/html` responses in release builds and rewrites the
/// body through minify-html. Debug builds pass everything through
/// untouched so templates stay readable during development.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    cfg_if::cfg_if! {
        if #[cfg(not(debug_assertions))] {
            let content_type = response
                .headers()
                .get(header::CONTENT_TYPE)
                .map(|h| h.to_str().unwrap_or_default())
                .unwrap_or_default();

            if content_type.contains("text/html") {
                let (parts, body) = response.into_parts();
                let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
                let minified = minify_html::minify(&bytes, &MINIFY_CFG);
                return Response::from_parts(parts, Body::from(minified));
            }
        }
    }

    response
}
