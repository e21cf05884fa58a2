//! Static frontend file serving with SPA fallback.
//!
//! Serves the bundled single-page frontend from the configured directory.
//! Unmatched extension-less routes receive `index.html` so client-side
//! routing keeps working.

use axum::{
    body::Body,
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use crate::app::AppState;
use crate::error::ApiError;

/// Serve static files with SPA fallback.
///
/// Registered as the router fallback; only GET (and HEAD) reach the
/// filesystem.
pub async fn serve_frontend(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let base_dir = PathBuf::from(&state.config.frontend.dir);

    if !base_dir.exists() {
        warn!(dir = %base_dir.display(), "Frontend directory does not exist");
        return ApiError::ServiceUnavailable("Frontend not available".to_string()).into_response();
    }

    let path = uri.path().trim_start_matches('/');

    let file_path = if path.is_empty() {
        base_dir.join("index.html")
    } else {
        base_dir.join(path)
    };

    // Security: prevent path traversal
    if !is_safe_path(&base_dir, &file_path) {
        warn!(
            requested_path = %file_path.display(),
            base_dir = %base_dir.display(),
            "Path traversal attempt detected"
        );
        return StatusCode::FORBIDDEN.into_response();
    }

    // Try to serve the exact file
    if let Ok(response) = serve_file(&file_path).await {
        return response;
    }

    // SPA fallback: routes without file extensions get the entry document
    if !path.contains('.') {
        let index_path = base_dir.join("index.html");
        if let Ok(response) = serve_file(&index_path).await {
            return response;
        }
    }

    StatusCode::NOT_FOUND.into_response()
}

/// Serve a single file with its guessed content type.
async fn serve_file(path: &Path) -> Result<Response, std::io::Error> {
    let content = fs::read(path).await?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .body(Body::from(content))
        .unwrap())
}

/// Check if path is within base directory (prevent path traversal).
fn is_safe_path(base: &Path, path: &Path) -> bool {
    if path.exists() {
        match (base.canonicalize(), path.canonicalize()) {
            (Ok(canonical_base), Ok(canonical_path)) => canonical_path.starts_with(canonical_base),
            _ => false,
        }
    } else {
        // For non-existent files, compare normalized paths
        let normalized = normalize_path(path);
        let base_normalized = normalize_path(base);
        normalized.starts_with(base_normalized)
    }
}

/// Normalize a path by removing . and .. components
fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            std::path::Component::ParentDir => {
                result.pop();
            }
            std::path::Component::CurDir => {}
            component => {
                result.push(component);
            }
        }
    }
    result
}
