//! Strain Catalog Loading and Records
//!
//! Loads the app-ready strain database CSV (one row per strain, one numeric
//! column per compound id) into typed records. Derived fields (total
//! terpene content, dominant terpene) are computed once here, never
//! recomputed per score.
//!
//! The catalog is the boundary with upstream ETL: raw lab-export parsing
//! happens elsewhere, and rows arriving here are assumed normalized apart
//! from the defensive clamping below.

use crate::compounds;
use anyhow::{Context, Result};
use polars::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Indica / Sativa / Hybrid catalog tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrainClass {
    Indica,
    Sativa,
    Hybrid,
}

impl StrainClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrainClass::Indica => "Indica",
            StrainClass::Sativa => "Sativa",
            StrainClass::Hybrid => "Hybrid",
        }
    }
}

impl FromStr for StrainClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Indica" => Ok(StrainClass::Indica),
            "Sativa" => Ok(StrainClass::Sativa),
            "Hybrid" => Ok(StrainClass::Hybrid),
            other => anyhow::bail!("unrecognized strain_type '{}'", other),
        }
    }
}

impl std::fmt::Display for StrainClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry with its measured chemical profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrainRecord {
    pub name: String,
    pub strain_class: StrainClass,
    /// Flat compound_id → measured value map. Missing key means 0.
    pub compound_values: FxHashMap<String, f64>,
    /// Sum of all known terpene values.
    pub total_terpenes: f64,
    /// Terpene id with the highest measured value, None when every terpene
    /// reads zero.
    pub dominant_terpene: Option<String>,
}

impl StrainRecord {
    /// Build a record and compute its derived fields.
    pub fn new(
        name: impl Into<String>,
        strain_class: StrainClass,
        compound_values: FxHashMap<String, f64>,
    ) -> Self {
        let mut record = StrainRecord {
            name: name.into(),
            strain_class,
            compound_values,
            total_terpenes: 0.0,
            dominant_terpene: None,
        };

        let mut best: Option<(&'static str, f64)> = None;
        for id in compounds::terpene_ids() {
            let v = record.value(id);
            record.total_terpenes += v;
            // Strictly-greater keeps table order on ties.
            if v > 0.0 && best.map_or(true, |(_, bv)| v > bv) {
                best = Some((id, v));
            }
        }
        record.dominant_terpene = best.map(|(id, _)| id.to_string());
        record
    }

    /// Measured value for a compound, 0 when absent.
    pub fn value(&self, compound_id: &str) -> f64 {
        self.compound_values.get(compound_id).copied().unwrap_or(0.0)
    }
}

/// Loaded strain collection.
pub struct StrainCatalog {
    pub strains: Vec<StrainRecord>,
}

impl StrainCatalog {
    /// Load a catalog from an app-ready CSV.
    ///
    /// Required columns: `strain_name`, `strain_type`. Every known compound
    /// id with a matching column is read; absent columns read as 0 for all
    /// strains. Negative readings are clamped to 0.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .with_context(|| format!("Failed to create CSV reader: {}", path.display()))?
            .finish()
            .with_context(|| format!("Failed to load strain catalog: {}", path.display()))?;

        Self::from_dataframe(&df)
            .with_context(|| format!("Failed to build strain records from {}", path.display()))
    }

    fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let names = df
            .column("strain_name")
            .context("Column 'strain_name' not found")?
            .str()
            .context("Column 'strain_name' is not string type")?;
        let classes = df
            .column("strain_type")
            .context("Column 'strain_type' not found")?
            .str()
            .context("Column 'strain_type' is not string type")?;

        // Only compound columns present in this export get read; the rest
        // fall back to the missing-is-zero policy.
        let compound_cols: Vec<(&'static str, &Column)> = compounds::COMPOUNDS
            .iter()
            .filter_map(|info| df.column(info.id).ok().map(|col| (info.id, col)))
            .collect();

        let mut strains = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let name = names
                .get(idx)
                .with_context(|| format!("Row {}: empty strain_name", idx))?;
            let class_str = classes
                .get(idx)
                .with_context(|| format!("Row {}: empty strain_type", idx))?;
            let strain_class = StrainClass::from_str(class_str)
                .with_context(|| format!("Row {} ('{}')", idx, name))?;

            let mut compound_values = FxHashMap::default();
            for &(id, col) in &compound_cols {
                if let Some(v) = numeric_value(col, idx) {
                    // Lab exports occasionally carry negative sentinel
                    // readings; measurements are non-negative by contract.
                    compound_values.insert(id.to_string(), v.max(0.0));
                }
            }

            strains.push(StrainRecord::new(name, strain_class, compound_values));
        }

        let catalog = StrainCatalog { strains };
        let (indica, sativa, hybrid) = catalog.class_counts();
        tracing::info!(
            strains = catalog.strains.len(),
            indica,
            sativa,
            hybrid,
            "strain catalog loaded"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.strains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strains.is_empty()
    }

    /// (indica, sativa, hybrid) counts, as shown on the stats bar.
    pub fn class_counts(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for strain in &self.strains {
            match strain.strain_class {
                StrainClass::Indica => counts.0 += 1,
                StrainClass::Sativa => counts.1 += 1,
                StrainClass::Hybrid => counts.2 += 1,
            }
        }
        counts
    }
}

/// Read a cell as f64, accepting integer-typed columns.
///
/// CSV inference can type an all-whole-number compound column as integers.
fn numeric_value(col: &Column, idx: usize) -> Option<f64> {
    if let Ok(f) = col.f64() {
        f.get(idx)
    } else if let Ok(i) = col.i64() {
        i.get(idx).map(|v| v as f64)
    } else if let Ok(i) = col.i32() {
        i.get(idx).map(|v| v as f64)
    } else {
        None
    }
}
