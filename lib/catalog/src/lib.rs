//! # Sillage Catalog
//!
//! Loads the perfume catalog from the semicolon-delimited export and turns
//! each usable row into a validated [`sillage_core::Perfume`].
//!
//! Cleaning rules:
//!
//! - ratings accept a decimal comma (`3,97`)
//! - rows below the review threshold (default 100) are dropped
//! - notes are lowercased, deduplicated per tier, `unknown` means none
//! - rows without any note are dropped
//! - brands are title-cased, dashes in names become spaces
//!
//! [`CsvCatalog`] implements [`sillage_core::CatalogSource`], so it can be
//! handed straight to an [`sillage_core::Engine`].

pub mod clean;
pub mod error;
pub mod loader;

pub use error::{CatalogError, Result};
pub use loader::{CatalogConfig, CsvCatalog, LoadReport};
