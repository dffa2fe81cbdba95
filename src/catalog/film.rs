//! Film sidecar schema and the derived listing records.
//! Sidecars are authored by hand next to each film; the catalog is derived from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sidecar filename expected inside every film directory.
pub const FILM_INFO_FILENAME: &str = "film-info.json";

/// Per-film sidecar record as authored in `film-info.json`.
/// `title`, `youtubeLink`, `profile` and `date` are required; a sidecar that
/// omits any of them is rejected at deserialization. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct FilmInfo {
    pub title: String,
    #[serde(rename = "youtubeLink")]
    pub youtube_link: String,
    pub profile: String,
    /// ISO-8601 calendar date, e.g. `2024-03-05`.
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub age: String,
}

/// One entry of the aggregate listing consumed by the site front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub title: String,
    pub thumbnail: String,
    pub url: String,
    pub profile: String,
    pub date: String,
    pub category: String,
    pub age: String,
}

/// Aggregate listing payload: `{ "videos": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoCatalog {
    pub videos: Vec<VideoRecord>,
}

/// Render an ISO calendar date (`2023-11-07`) for display (`Nov 07, 2023`).
pub fn display_date(iso: &str) -> Result<String, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d")?;
    Ok(date.format("%b %d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_renders_abbreviated_month() {
        assert_eq!(display_date("2023-11-07").unwrap(), "Nov 07, 2023");
        assert_eq!(display_date("2024-03-05").unwrap(), "Mar 05, 2024");
    }

    #[test]
    fn display_date_rejects_non_iso_input() {
        assert!(display_date("07/11/2023").is_err());
        assert!(display_date("2023-13-01").is_err());
        assert!(display_date("not a date").is_err());
    }

    #[test]
    fn film_info_defaults_optional_fields_to_empty() {
        let info: FilmInfo = serde_json::from_str(
            r#"{"title":"T","youtubeLink":"abc123","profile":"studio","date":"2023-11-07"}"#,
        )
        .unwrap();
        assert_eq!(info.category, "");
        assert_eq!(info.age, "");
    }

    #[test]
    fn film_info_rejects_missing_required_field() {
        let err = serde_json::from_str::<FilmInfo>(r#"{"title":"T"}"#).unwrap_err();
        assert!(err.to_string().contains("youtubeLink"));
    }
}
