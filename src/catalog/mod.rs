pub mod film;
pub mod generate;
pub mod scan;
pub mod urls;
pub mod validate;

pub use film::{display_date, FilmInfo, VideoCatalog, VideoRecord, FILM_INFO_FILENAME};
pub use generate::{
    generate_catalog, CatalogError, GenerateReport, DEFAULT_FILMS_ROOT, DEFAULT_OUTPUT_PATH,
};
pub use scan::{collect_film_directories, is_film_directory};
pub use urls::{film_page_url, thumbnail_url};
pub use validate::{
    validate_films, ValidationDiagnostic, ValidationReport, ValidationSeverity,
};
