use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Interactive summarization form, embedded at compile time
#[derive(RustEmbed)]
#[folder = "static/"]
pub struct FormAssets;

/// Serve the form page
pub async fn serve_index() -> Response {
    serve_embedded::<FormAssets>("index.html")
}

/// Serve a form asset (script, stylesheet)
pub async fn serve_asset(Path(path): Path<String>) -> Response {
    serve_embedded::<FormAssets>(path.trim_start_matches('/'))
}

fn serve_embedded<E: RustEmbed>(path: &str) -> Response {
    match E::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

/// Names of the embedded assets (used by the CLI environment check)
pub fn embedded_assets() -> Vec<String> {
    FormAssets::iter().map(|name| name.to_string()).collect()
}
