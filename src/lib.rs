//! # Sillage
//!
//! Perfume recommendations from scent-note overlap.
//!
//! Every catalog perfume becomes a multi-hot vector over the catalog's
//! note vocabulary. A user's note selection is encoded the same way, the
//! catalog is optionally narrowed by gender and brand, and the candidates
//! are ranked by cosine similarity with a stable tie-break.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! sillage --catalog fra_cleaned.csv --http-port 5000
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use sillage::prelude::*;
//!
//! let engine = Engine::new(CsvCatalog::open("fra_cleaned.csv"));
//! engine.warm_up().unwrap();
//!
//! let results = engine
//!     .recommend(&["rose", "oud"], Some("unisex"), None, 8)
//!     .unwrap();
//! for r in results {
//!     println!("{} by {}: {}%", r.name, r.brand, r.score_pct);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `sillage-core` - Perfume record, vocabulary, matrix, filter, scorer, ranker, engine
//! - `sillage-catalog` - CSV catalog loader and cleaning rules
//! - `sillage-api` - REST API

// Re-export core types
pub use sillage_core::{
    CatalogFilter, CatalogSource, Engine, EngineConfig, Error, Gender, NoteIndex, NoteMatrix,
    NoteTiers, NoteVector, Perfume, Recommendation, Result, StaticCatalog, Stats, TierLimits,
    Vocabulary,
};

// Re-export catalog loading
pub use sillage_catalog::{CatalogConfig, CatalogError, CsvCatalog, LoadReport};

// Re-export API
pub use sillage_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CatalogConfig, CatalogSource, CsvCatalog, Engine, EngineConfig, Error, Gender, Perfume,
        Recommendation, RestApi, Result, StaticCatalog, Stats,
    };
}
