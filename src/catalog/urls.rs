//! URL construction for the public site and the YouTube thumbnail CDN.

use std::path::Path;

const THUMBNAIL_BASE_URL: &str = "https://i.ytimg.com/vi";
const SITE_BASE_URL: &str = "https://studionarwhal.com";

/// Maxres thumbnail URL for a YouTube video code.
pub fn thumbnail_url(code: &str) -> String {
    format!("{THUMBNAIL_BASE_URL}/{code}/maxresdefault.jpg")
}

/// Public page URL for a film directory. Path components are joined with
/// forward slashes regardless of the platform separator.
pub fn film_page_url(directory: &Path) -> String {
    let mut page_path = String::new();
    for component in directory.components() {
        if !page_path.is_empty() {
            page_path.push('/');
        }
        page_path.push_str(&component.as_os_str().to_string_lossy());
    }
    format!("{SITE_BASE_URL}/{page_path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_url_interpolates_video_code() {
        assert_eq!(
            thumbnail_url("abc123"),
            "https://i.ytimg.com/vi/abc123/maxresdefault.jpg"
        );
    }

    #[test]
    fn film_page_url_joins_components_with_forward_slashes() {
        assert_eq!(
            film_page_url(Path::new("films").join("category").join("my-film").as_path()),
            "https://studionarwhal.com/films/category/my-film"
        );
    }
}
