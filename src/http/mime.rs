//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

use std::path::Path;

/// Guess the Content-Type of a file from its extension (case-insensitive)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use storefront::http::mime::guess_content_type;
/// assert_eq!(guess_content_type(Path::new("index.html")), "text/html");
/// assert_eq!(guess_content_type(Path::new("LOGO.PNG")), "image/png");
/// assert_eq!(guess_content_type(Path::new("README")), "application/octet-stream");
/// ```
pub fn guess_content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        // Text
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("csv") => "text/csv",
        Some("xml") => "application/xml",

        // Scripts and data
        Some("js" | "mjs") => "text/javascript",
        Some("json" | "map") => "application/json",
        Some("webmanifest") => "application/manifest+json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",

        // Media
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mp3") => "audio/mpeg",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_assets() {
        assert_eq!(guess_content_type(Path::new("index.html")), "text/html");
        assert_eq!(guess_content_type(Path::new("css/style.css")), "text/css");
        assert_eq!(guess_content_type(Path::new("js/script.js")), "text/javascript");
        assert_eq!(guess_content_type(Path::new("img/hero.JPG")), "image/jpeg");
        assert_eq!(guess_content_type(Path::new("site.webmanifest")), "application/manifest+json");
    }

    #[test]
    fn test_text_types_carry_no_charset() {
        assert_eq!(guess_content_type(Path::new("about.HTM")), "text/html");
        assert_eq!(guess_content_type(Path::new("robots.txt")), "text/plain");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(guess_content_type(Path::new("data.xyz")), "application/octet-stream");
        assert_eq!(guess_content_type(Path::new("Makefile")), "application/octet-stream");
    }
}
