//! File name and MIME type resolution for remote images.

use percent_encoding::percent_decode_str;
use url::Url;

/// Display name and content type derived from a source URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub file_name: String,
    pub content_type: String,
}

/// Derive a file name and content type from a resource locator.
///
/// The file name is the last non-empty path segment, percent-decoded, without
/// query or fragment. Locators that do not parse as absolute URLs are treated
/// as plain paths. The content type is guessed from the extension and falls
/// back to `application/octet-stream`.
pub fn resolve(locator: &str) -> FileDescriptor {
    let file_name = match Url::parse(locator) {
        Ok(url) => file_name_from_url(&url),
        Err(_) => file_name_from_path(locator),
    };

    let content_type = mime_guess::from_path(&file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    FileDescriptor {
        file_name,
        content_type,
    }
}

fn file_name_from_url(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.rfind(|s| !s.is_empty()));

    match segment {
        Some(segment) => decode(segment),
        None => url.host_str().unwrap_or_default().to_string(),
    }
}

fn file_name_from_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segment = path
        .rsplit('/')
        .find(|s| !s.is_empty())
        .unwrap_or(path);
    decode(segment)
}

fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_url() {
        let resolved = resolve("https://images.example.com/img/cat.png");
        assert_eq!(resolved.file_name, "cat.png");
        assert_eq!(resolved.content_type, "image/png");
    }

    #[test]
    fn test_query_and_fragment_are_dropped() {
        let resolved = resolve("https://images.example.com/photos/beach.jpg?w=1200#top");
        assert_eq!(resolved.file_name, "beach.jpg");
        assert_eq!(resolved.content_type, "image/jpeg");
    }

    #[test]
    fn test_percent_encoded_name() {
        let resolved = resolve("https://cdn.example.com/my%20photo.webp");
        assert_eq!(resolved.file_name, "my photo.webp");
        assert_eq!(resolved.content_type, "image/webp");
    }

    #[test]
    fn test_trailing_slash_uses_last_segment() {
        let resolved = resolve("https://cdn.example.com/images/logo.svg/");
        assert_eq!(resolved.file_name, "logo.svg");
        assert_eq!(resolved.content_type, "image/svg+xml");
    }

    #[test]
    fn test_bare_host_falls_back_to_host() {
        let resolved = resolve("https://cdn.example.com/");
        assert_eq!(resolved.file_name, "cdn.example.com");
    }

    #[test]
    fn test_unknown_extension() {
        let resolved = resolve("https://cdn.example.com/blob.unknownext");
        assert_eq!(resolved.content_type, "application/octet-stream");
    }

    #[test]
    fn test_relative_path() {
        let resolved = resolve("/static/images/icon.gif?v=3");
        assert_eq!(resolved.file_name, "icon.gif");
        assert_eq!(resolved.content_type, "image/gif");
    }
}
