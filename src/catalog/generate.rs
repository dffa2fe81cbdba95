//! Catalog generation: walk the film tree, load each sidecar, and write the
//! aggregate listing in one shot once the walk completes. A film directory
//! without a sidecar is skipped and reported; any malformed sidecar aborts
//! the run before anything is written.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::film::{display_date, FilmInfo, VideoCatalog, VideoRecord, FILM_INFO_FILENAME};
use crate::catalog::scan::collect_film_directories;
use crate::catalog::urls::{film_page_url, thumbnail_url};

pub const DEFAULT_FILMS_ROOT: &str = "films";
pub const DEFAULT_OUTPUT_PATH: &str = "js/recommended-videos.json";

#[derive(Debug)]
pub enum CatalogError {
    Scan(walkdir::Error),
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Date {
        path: PathBuf,
        value: String,
        source: chrono::ParseError,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scan(err) => write!(f, "failed to scan film tree: {err}"),
            Self::Read { path, source } => {
                write!(f, "failed to read '{}': {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse '{}': {source}", path.display())
            }
            Self::Date {
                path,
                value,
                source,
            } => write!(
                f,
                "invalid date '{value}' in '{}': {source}",
                path.display()
            ),
            Self::Write { path, source } => {
                write!(f, "failed to write '{}': {source}", path.display())
            }
        }
    }
}

/// Outcome of a generate run. `skipped` lists the film directories that
/// lacked a sidecar, in traversal order, for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output_path: String,
    pub records_written: usize,
    pub skipped: Vec<PathBuf>,
}

/// Rebuild the aggregate listing from every film directory under `root` and
/// overwrite `output_path`. All-or-nothing: the output file is only touched
/// after the entire tree has been processed successfully.
pub fn generate_catalog(root: &Path, output_path: &Path) -> Result<GenerateReport, CatalogError> {
    let mut videos = Vec::new();
    let mut skipped = Vec::new();

    for dir in collect_film_directories(root).map_err(CatalogError::Scan)? {
        let info_path = dir.join(FILM_INFO_FILENAME);
        if !info_path.exists() {
            skipped.push(dir);
            continue;
        }
        let info = load_film_info(&info_path)?;
        videos.push(video_record(&dir, info)?);
    }

    let catalog = VideoCatalog { videos };
    let payload = serde_json::to_string(&catalog).map_err(|source| CatalogError::Parse {
        path: output_path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| CatalogError::Write {
                path: output_path.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(output_path, payload).map_err(|source| CatalogError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    Ok(GenerateReport {
        output_path: output_path.display().to_string(),
        records_written: catalog.videos.len(),
        skipped,
    })
}

/// Read and parse one sidecar. Missing required fields surface as a `Parse`
/// error naming the sidecar path.
pub fn load_film_info(path: &Path) -> Result<FilmInfo, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn video_record(dir: &Path, info: FilmInfo) -> Result<VideoRecord, CatalogError> {
    let date = display_date(&info.date).map_err(|source| CatalogError::Date {
        path: dir.join(FILM_INFO_FILENAME),
        value: info.date.clone(),
        source,
    })?;
    Ok(VideoRecord {
        title: info.title,
        thumbnail: thumbnail_url(&info.youtube_link),
        url: film_page_url(dir),
        profile: info.profile,
        date,
        category: info.category,
        age: info.age,
    })
}
