//! Sidecar lint pass for content authors. Reports everything a generate run
//! would abort on, plus duplicate warnings, without writing anything.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::catalog::film::{display_date, FILM_INFO_FILENAME};
use crate::catalog::scan::collect_film_directories;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == ValidationSeverity::Error)
            .count()
    }
}

const REQUIRED_FIELDS: &[&str] = &["title", "youtubeLink", "profile", "date"];

/// Lint every film sidecar under `root`. Only the tree walk itself can fail;
/// every per-film problem lands in the report instead.
pub fn validate_films(root: &Path) -> Result<ValidationReport, walkdir::Error> {
    let mut report = ValidationReport::default();
    let mut seen_titles: HashMap<String, PathBuf> = HashMap::new();
    let mut seen_links: HashMap<String, PathBuf> = HashMap::new();

    for dir in collect_film_directories(root)? {
        let context = dir.display().to_string();
        let info_path = dir.join(FILM_INFO_FILENAME);
        if !info_path.exists() {
            report.push(
                ValidationSeverity::Info,
                context,
                "no film-info.json, excluded from the catalog",
            );
            continue;
        }

        let raw = match fs::read_to_string(&info_path) {
            Ok(raw) => raw,
            Err(err) => {
                report.push(
                    ValidationSeverity::Error,
                    context,
                    format!("unable to read film-info.json: {err}"),
                );
                continue;
            }
        };
        let payload: Value = match serde_json::from_str(&raw) {
            Ok(payload) => payload,
            Err(err) => {
                report.push(
                    ValidationSeverity::Error,
                    context,
                    format!("film-info.json is not valid JSON: {err}"),
                );
                continue;
            }
        };
        let Some(object) = payload.as_object() else {
            report.push(
                ValidationSeverity::Error,
                context,
                "film-info.json is not a JSON object",
            );
            continue;
        };

        for field in REQUIRED_FIELDS {
            match object.get(*field).and_then(Value::as_str) {
                Some(value) if !value.trim().is_empty() => {}
                _ => report.push(
                    ValidationSeverity::Error,
                    format!("{context}.{field}"),
                    format!("missing non-empty '{field}'"),
                ),
            }
        }

        if let Some(date) = object.get("date").and_then(Value::as_str) {
            if !date.trim().is_empty() && display_date(date).is_err() {
                report.push(
                    ValidationSeverity::Error,
                    format!("{context}.date"),
                    format!("'{date}' is not a valid ISO calendar date"),
                );
            }
        }

        if let Some(title) = object.get("title").and_then(Value::as_str) {
            if let Some(previous) = seen_titles.insert(title.to_string(), dir.clone()) {
                report.push(
                    ValidationSeverity::Warning,
                    format!("{context}.title"),
                    format!("duplicate title '{title}' (also in '{}')", previous.display()),
                );
            }
        }
        if let Some(link) = object.get("youtubeLink").and_then(Value::as_str) {
            if let Some(previous) = seen_links.insert(link.to_string(), dir.clone()) {
                report.push(
                    ValidationSeverity::Warning,
                    format!("{context}.youtubeLink"),
                    format!(
                        "duplicate youtubeLink '{link}' (also in '{}')",
                        previous.display()
                    ),
                );
            }
        }
    }

    Ok(report)
}
