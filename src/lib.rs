//! Build-time catalog tooling for the Studio Narwhal film site.
//! `generate` rebuilds the aggregate video listing the front-end renders;
//! `validate` lints every film sidecar before a rebuild.

pub mod catalog;
pub mod cli;
