//! Static file serving module
//!
//! Maps request paths onto the document root: index files, directory
//! listings, conditional GET and MIME type detection.

use crate::config::FilesConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, response::escape_html};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tokio::fs;

const NOT_FOUND_MESSAGE: &str = "File not found";
const LISTING_DENIED_MESSAGE: &str = "No permission to list directory";

/// Serve the file or directory the request path names
pub async fn serve(
    ctx: &RequestContext<'_>,
    root: &Path,
    files: &FilesConfig,
) -> Response<Full<Bytes>> {
    let Some(relative) = translate_path(ctx.path) else {
        return http::build_404_response(NOT_FOUND_MESSAGE, ctx.is_head);
    };

    let root = match fs::canonicalize(root).await {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Document root not found or inaccessible '{}': {e}",
                root.display()
            ));
            return http::build_404_response(NOT_FOUND_MESSAGE, ctx.is_head);
        }
    };

    // File not found is common (404), no need to log
    let Some(resolved) = contained(&root, &root.join(&relative), ctx.path).await else {
        return http::build_404_response(NOT_FOUND_MESSAGE, ctx.is_head);
    };
    let Ok(metadata) = fs::metadata(&resolved).await else {
        return http::build_404_response(NOT_FOUND_MESSAGE, ctx.is_head);
    };

    if metadata.is_dir() {
        if !ctx.path.ends_with('/') {
            return http::build_301_response(&directory_location(ctx));
        }
        if let Some(index) = find_index(&root, &resolved, &files.index_files, ctx.path).await {
            return serve_file(ctx, &index).await;
        }
        if files.directory_listing {
            return list_directory(ctx, &resolved).await;
        }
        return http::build_404_response(NOT_FOUND_MESSAGE, ctx.is_head);
    }

    if ctx.path.ends_with('/') {
        return http::build_404_response(NOT_FOUND_MESSAGE, ctx.is_head);
    }

    serve_file(ctx, &resolved).await
}

/// Translate a raw request path into a path relative to the document root.
///
/// The path is percent-decoded and normalized lexically: empty and `.`
/// segments are dropped and `..` removes the previous segment, so the result
/// can never climb above the root. Returns `None` for undecodable paths.
pub fn translate_path(raw_path: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(raw_path).ok()?;
    if decoded.contains('\0') {
        return None;
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    Some(segments.into_iter().collect())
}

/// Canonicalize `candidate` and make sure symlinks did not lead out of `root`
async fn contained(root: &Path, candidate: &Path, request_path: &str) -> Option<PathBuf> {
    let canonical = fs::canonicalize(candidate).await.ok()?;
    if canonical.starts_with(root) {
        Some(canonical)
    } else {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {request_path} -> {}",
            canonical.display()
        ));
        None
    }
}

/// First configured index file present in `dir`
async fn find_index(
    root: &Path,
    dir: &Path,
    index_files: &[String],
    request_path: &str,
) -> Option<PathBuf> {
    for name in index_files {
        let Some(candidate) = contained(root, &dir.join(name), request_path).await else {
            continue;
        };
        if fs::metadata(&candidate).await.is_ok_and(|m| m.is_file()) {
            return Some(candidate);
        }
    }
    None
}

/// `Location` for a directory requested without its trailing slash
fn directory_location(ctx: &RequestContext<'_>) -> String {
    let mut location = format!("{}/", ctx.path);
    if let Some(query) = ctx.query {
        location.push('?');
        location.push_str(query);
    }
    location
}

async fn serve_file(ctx: &RequestContext<'_>, path: &Path) -> Response<Full<Bytes>> {
    let modified = match fs::metadata(path).await {
        Ok(metadata) => metadata.modified().ok(),
        Err(_) => return http::build_404_response(NOT_FOUND_MESSAGE, ctx.is_head),
    };

    // If-None-Match takes precedence, and no ETags are produced
    if !ctx.has_if_none_match {
        if let Some(modified) = modified {
            if cache::is_not_modified(ctx.if_modified_since, modified) {
                return http::build_304_response();
            }
        }
    }

    let content = match fs::read(path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_warning(&format!("Failed to read file '{}': {e}", path.display()));
            return http::build_404_response(NOT_FOUND_MESSAGE, ctx.is_head);
        }
    };

    let last_modified = cache::format_http_date(modified.unwrap_or_else(SystemTime::now));
    http::build_file_response(
        Bytes::from(content),
        mime::guess_content_type(path),
        &last_modified,
        ctx.is_head,
    )
}

struct ListingEntry {
    name: String,
    is_dir: bool,
    is_symlink: bool,
}

impl ListingEntry {
    /// Text shown for the entry and the (percent-encoded) link target
    fn display_and_link(&self) -> (String, String) {
        let encoded = urlencoding::encode(&self.name).into_owned();
        let (mut display, link) = if self.is_dir {
            (format!("{}/", self.name), format!("{encoded}/"))
        } else {
            (self.name.clone(), encoded)
        };
        if self.is_symlink {
            display = format!("{}@", self.name);
        }
        (display, link)
    }
}

async fn list_directory(ctx: &RequestContext<'_>, dir: &Path) -> Response<Full<Bytes>> {
    let mut reader = match fs::read_dir(dir).await {
        Ok(reader) => reader,
        Err(e) => {
            logger::log_warning(&format!("Cannot list '{}': {e}", dir.display()));
            return http::build_404_response(LISTING_DENIED_MESSAGE, ctx.is_head);
        }
    };

    let mut entries = Vec::new();
    while let Ok(Some(entry)) = reader.next_entry().await {
        let file_type = entry.file_type().await.ok();
        let is_symlink = file_type.is_some_and(|t| t.is_symlink());
        let is_dir = if is_symlink {
            fs::metadata(entry.path()).await.is_ok_and(|m| m.is_dir())
        } else {
            file_type.is_some_and(|t| t.is_dir())
        };
        entries.push(ListingEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
            is_symlink,
        });
    }
    entries.sort_by_key(|e| e.name.to_lowercase());

    let display_path = urlencoding::decode(ctx.path)
        .map_or_else(|_| ctx.path.to_string(), std::borrow::Cow::into_owned);
    http::build_html_response(render_listing(&display_path, &entries), ctx.is_head)
}

fn render_listing(display_path: &str, entries: &[ListingEntry]) -> String {
    let title = format!("Directory listing for {}", escape_html(display_path));
    let mut html = format!(
        "<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<hr>\n<ul>\n"
    );
    for entry in entries {
        let (display, link) = entry.display_and_link();
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&link),
            escape_html(&display)
        );
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}
