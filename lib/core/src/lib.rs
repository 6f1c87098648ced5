//! # Sillage Core
//!
//! Core library for the Sillage perfume recommender.
//!
//! Perfumes are encoded as multi-hot vectors over the catalog's note
//! vocabulary; a user's note selection is encoded the same way and every
//! candidate is scored by cosine similarity.
//!
//! - [`Perfume`] - A catalog record with its top/middle/base notes
//! - [`Vocabulary`] - Ordered set of distinct notes, the vector coordinates
//! - [`NoteMatrix`] - Binary feature matrix, one row per perfume
//! - [`CatalogFilter`] - Gender/brand pre-filter
//! - [`NoteIndex`] - Catalog, vocabulary and matrix built together
//! - [`Engine`] - Lazily built, cached index plus the request operations
//!
//! ## Example
//!
//! ```rust
//! use sillage_core::{Engine, Perfume};
//!
//! let engine = Engine::from_perfumes(vec![
//!     Perfume::new("A", "Maison").with_notes(&["rose", "musk"], &[], &[]),
//!     Perfume::new("B", "Maison").with_notes(&["rose", "vanilla"], &[], &[]),
//!     Perfume::new("C", "Atelier").with_notes(&["oud"], &[], &[]),
//! ]);
//!
//! let results = engine.recommend(&["rose", "musk"], None, None, 2).unwrap();
//! assert_eq!(results[0].name, "A");
//! assert_eq!(results[0].score_pct, 100.0);
//! assert_eq!(results[1].score_pct, 50.0);
//! ```

pub mod engine;
pub mod error;
pub mod filter;
pub mod index;
pub mod matrix;
pub mod perfume;
pub mod ranker;
pub mod scorer;
pub mod tiers;
pub mod vector;
pub mod vocabulary;

pub use engine::{CatalogSource, Engine, EngineConfig, StaticCatalog};
pub use error::{Error, Result};
pub use filter::{Candidates, CatalogFilter, Filter};
pub use index::{NoteIndex, Stats};
pub use matrix::NoteMatrix;
pub use perfume::{dedup_notes, Gender, Perfume};
pub use ranker::Recommendation;
pub use tiers::{NoteTiers, TierLimits};
pub use vector::NoteVector;
pub use vocabulary::Vocabulary;
