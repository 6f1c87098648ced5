use crate::clean;
use crate::error::{CatalogError, Result};
use csv::{ByteRecord, ReaderBuilder};
use serde::{Deserialize, Serialize};
use sillage_core::{CatalogSource, Perfume};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Configuration for reading a catalog export
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub path: PathBuf,
    pub delimiter: u8,
    /// Perfumes with fewer reviews are dropped
    pub min_rating_count: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("fra_cleaned.csv"),
            delimiter: b';',
            min_rating_count: 100,
        }
    }
}

/// Counts from one load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub processed: usize,
    pub kept: usize,
    pub below_threshold: usize,
    pub without_notes: usize,
    pub malformed: usize,
}

/// Column positions resolved from the header row
struct Columns {
    name: usize,
    brand: usize,
    gender: Option<usize>,
    rating: usize,
    rating_count: usize,
    year: Option<usize>,
    top: usize,
    middle: usize,
    base: usize,
    url: usize,
}

impl Columns {
    fn resolve(headers: &ByteRecord) -> Result<Self> {
        let names: Vec<String> = headers
            .iter()
            .map(|h| clean::latin1(h).trim().to_lowercase())
            .collect();
        let find = |column: &str| names.iter().position(|h| h == &column.to_lowercase());
        let require = |column: &str| {
            find(column).ok_or_else(|| CatalogError::MissingColumn(column.to_string()))
        };

        Ok(Self {
            name: require("Perfume")?,
            brand: require("Brand")?,
            gender: find("Gender"),
            rating: require("Rating Value")?,
            rating_count: require("Rating Count")?,
            year: find("Year"),
            top: require("Top")?,
            middle: require("Middle")?,
            base: require("Base")?,
            url: require("url")?,
        })
    }
}

/// Catalog read from a semicolon-delimited, Latin-1 encoded export
#[derive(Debug, Clone, Default)]
pub struct CsvCatalog {
    config: CatalogConfig,
}

impl CsvCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Catalog at `path` with the default delimiter and threshold
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::new(CatalogConfig {
            path: path.as_ref().to_path_buf(),
            ..CatalogConfig::default()
        })
    }

    #[inline]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Read and clean the configured file
    pub fn load_with_report(&self) -> Result<(Vec<Perfume>, LoadReport)> {
        let file = File::open(&self.config.path)?;
        Self::read_from(file, &self.config)
    }

    /// Read and clean an export from any reader
    pub fn read_from<R: Read>(reader: R, config: &CatalogConfig) -> Result<(Vec<Perfume>, LoadReport)> {
        let mut reader = ReaderBuilder::new()
            .delimiter(config.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = Columns::resolve(reader.byte_headers()?)?;
        let mut report = LoadReport::default();
        let mut perfumes = Vec::new();
        let mut record = ByteRecord::new();

        while reader.read_byte_record(&mut record)? {
            report.processed += 1;
            let line = report.processed + 1;
            let field = |i: usize| record.get(i).map(clean::latin1).unwrap_or_default();

            let rating_count = clean::rating_count(&field(columns.rating_count));
            if rating_count < config.min_rating_count {
                report.below_threshold += 1;
                continue;
            }

            let Some(rating) = clean::rating(&field(columns.rating)) else {
                warn!("Line {}: unparseable rating {:?}, skipped", line, field(columns.rating));
                report.malformed += 1;
                continue;
            };

            let top = clean::notes(&field(columns.top));
            let middle = clean::notes(&field(columns.middle));
            let base = clean::notes(&field(columns.base));
            if top.is_empty() && middle.is_empty() && base.is_empty() {
                report.without_notes += 1;
                continue;
            }

            let perfume = Perfume::new(clean::name(&field(columns.name)), clean::brand(&field(columns.brand)))
                .with_gender(columns.gender.and_then(|i| clean::gender(&field(i))))
                .with_rating(rating, rating_count)
                .with_year(columns.year.and_then(|i| clean::year(&field(i))))
                .with_url(field(columns.url).trim())
                .with_notes(top.as_slice(), middle.as_slice(), base.as_slice());

            if let Err(e) = perfume.validate() {
                debug!("Line {}: {}", line, e);
                report.malformed += 1;
                continue;
            }

            perfumes.push(perfume);
        }

        report.kept = perfumes.len();
        Ok((perfumes, report))
    }
}

impl CatalogSource for CsvCatalog {
    fn load(&self) -> sillage_core::Result<Vec<Perfume>> {
        let (perfumes, report) = self.load_with_report()?;
        info!(
            "Catalog {:?}: kept {} of {} rows ({} below {} reviews, {} without notes, {} malformed)",
            self.config.path,
            report.kept,
            report.processed,
            report.below_threshold,
            self.config.min_rating_count,
            report.without_notes,
            report.malformed
        );
        Ok(perfumes)
    }
}
