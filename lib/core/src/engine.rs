use crate::{
    ranker, scorer, CatalogFilter, Error, NoteIndex, NoteTiers, Perfume, Recommendation, Result,
    Stats, TierLimits,
};
use parking_lot::Mutex;
use std::sync::{Arc, OnceLock};
use std::time::Instant;
use tracing::{debug, info};

/// Supplies the catalog snapshot the engine indexes
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Vec<Perfume>>;
}

/// A catalog already held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    perfumes: Vec<Perfume>,
}

impl StaticCatalog {
    pub fn new(perfumes: Vec<Perfume>) -> Self {
        Self { perfumes }
    }
}

impl CatalogSource for StaticCatalog {
    fn load(&self) -> Result<Vec<Perfume>> {
        Ok(self.perfumes.clone())
    }
}

/// Configuration for an engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub default_top_n: usize,
    pub tier_limits: TierLimits,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_top_n: 8,
            tier_limits: TierLimits::default(),
        }
    }
}

/// Recommendation engine over a lazily built, cached note index.
///
/// The index is built on first use (or by [`Engine::warm_up`]) under a
/// build lock, so concurrent first callers trigger a single build. Once
/// published it is read without locking.
pub struct Engine {
    config: EngineConfig,
    source: Box<dyn CatalogSource>,
    index: OnceLock<Arc<NoteIndex>>,
    build_lock: Mutex<()>,
}

impl Engine {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self::with_config(source, EngineConfig::default())
    }

    pub fn with_config(source: impl CatalogSource + 'static, config: EngineConfig) -> Self {
        Self {
            config,
            source: Box::new(source),
            index: OnceLock::new(),
            build_lock: Mutex::new(()),
        }
    }

    /// Engine over an in-memory catalog
    pub fn from_perfumes(perfumes: Vec<Perfume>) -> Self {
        Self::new(StaticCatalog::new(perfumes))
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn is_built(&self) -> bool {
        self.index.get().is_some()
    }

    /// The cached index, building it if needed
    pub fn index(&self) -> Result<Arc<NoteIndex>> {
        if let Some(index) = self.index.get() {
            return Ok(index.clone());
        }

        let _guard = self.build_lock.lock();
        if let Some(index) = self.index.get() {
            return Ok(index.clone());
        }

        let started = Instant::now();
        let catalog = self.source.load()?;
        let index = Arc::new(NoteIndex::build(catalog)?);
        let stats = index.stats();
        info!(
            "Note index built: {} perfumes, {} notes in {:?}",
            stats.catalog_size,
            stats.vocabulary_size,
            started.elapsed()
        );

        let _ = self.index.set(index.clone());
        Ok(index)
    }

    /// Build the index now instead of on the first request
    pub fn warm_up(&self) -> Result<Stats> {
        Ok(self.index()?.stats())
    }

    /// Drop the cached index; the next call rebuilds from a fresh catalog
    pub fn invalidate(&mut self) {
        if self.index.take().is_some() {
            info!("Note index invalidated");
        }
    }

    /// Rank catalog perfumes by note overlap with `selected_notes`.
    ///
    /// `gender` and `brands` narrow the catalog before scoring; empty values
    /// mean no restriction. No candidates is an empty result, not an error.
    pub fn recommend<S: AsRef<str>>(
        &self,
        selected_notes: &[S],
        gender: Option<&str>,
        brands: Option<&[String]>,
        top_n: i64,
    ) -> Result<Vec<Recommendation>> {
        if top_n <= 0 {
            return Err(Error::InvalidTopN(top_n));
        }
        let top_n = usize::try_from(top_n).map_err(|_| Error::InvalidTopN(top_n))?;

        let index = self.index()?;
        let filter = CatalogFilter::new(gender, brands);
        let candidates = filter.apply(&index);
        if candidates.is_empty() {
            debug!("No candidates after filtering");
            return Ok(Vec::new());
        }

        let query = index.vocabulary().encode(selected_notes);
        let scores = scorer::score(&query, &candidates);
        let ranked = ranker::rank(&candidates, &scores, top_n);
        debug!(
            "Ranked {} of {} candidates ({} known notes selected)",
            ranked.len(),
            candidates.len(),
            query.count_ones()
        );

        Ok(ranked
            .into_iter()
            .map(|(perfume, score)| Recommendation::new(perfume, score, selected_notes))
            .collect())
    }

    /// [`Engine::recommend`] with the configured default `top_n`
    pub fn recommend_default<S: AsRef<str>>(
        &self,
        selected_notes: &[S],
        gender: Option<&str>,
        brands: Option<&[String]>,
    ) -> Result<Vec<Recommendation>> {
        let top_n = i64::try_from(self.config.default_top_n).unwrap_or(i64::MAX);
        self.recommend(selected_notes, gender, brands, top_n)
    }

    pub fn notes_for_ui(&self) -> Result<NoteTiers> {
        Ok(self.index()?.note_tiers(&self.config.tier_limits))
    }

    pub fn stats(&self) -> Result<Stats> {
        Ok(self.index()?.stats())
    }

    pub fn brands(&self) -> Result<Vec<String>> {
        Ok(self.index()?.brands())
    }
}
