/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of drone-calc.
 *
 * drone-calc is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * drone-calc is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with drone-calc. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;
use std::path::Path;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utils::numeric::{is_non_negative, is_positive};

use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeEntry {
    #[serde(rename = "label")]
    gauge: String,
    /// Maximum current (A) the gauge can carry continuously
    rated_current: f64,
    /// Cross-sectional area (m²)
    thickness: f64
}

impl GaugeEntry {
    pub fn new(gauge: &str, rated_current: f64, thickness: f64) -> GaugeEntry {
        GaugeEntry { gauge: gauge.to_string(), rated_current, thickness }
    }

    pub fn gauge(&self) -> &str {
        &self.gauge
    }

    pub fn rated_current(&self) -> f64 {
        self.rated_current
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn can_carry(&self, current: f64) -> bool {
        self.rated_current >= current
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.gauge.trim().is_empty() {
            return Err(CatalogError::InvalidGauge(self.gauge.clone(), "label cannot be blank".to_string()));
        }
        if !is_non_negative(self.rated_current) {
            return Err(CatalogError::InvalidGauge(
                self.gauge.clone(),
                format!("rated current must be a finite value >= 0, got {}", self.rated_current)
            ));
        }
        if !is_positive(self.thickness) {
            return Err(CatalogError::InvalidGauge(
                self.gauge.clone(),
                format!("thickness must be a finite value > 0, got {}", self.thickness)
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(rename = "gauge")]
    gauges: Vec<GaugeEntry>
}

/// An ordered, read-only table of wire gauges.
///
/// The order of the entries is the order they were supplied in. It carries no meaning
/// for selection other than deciding between gauges of identical thickness.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeCatalog {
    entries: Vec<GaugeEntry>
}

impl GaugeCatalog {
    pub fn new(entries: Vec<GaugeEntry>) -> Result<GaugeCatalog, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        for entry in &entries {
            entry.validate()?;
        }
        if let Some(duplicate) = entries.iter().duplicates_by(|e| e.gauge.as_str()).next() {
            return Err(CatalogError::DuplicateGauge(duplicate.gauge.clone()));
        }
        Ok(GaugeCatalog { entries })
    }

    /// Standard AWG copper conductors
    pub fn awg_reference() -> GaugeCatalog {
        GaugeCatalog {
            entries: vec![
                GaugeEntry::new("000", 200.0, 8.5e-5),
                GaugeEntry::new("0", 150.0, 5.35e-5),
                GaugeEntry::new("3", 100.0, 2.67e-5),
                GaugeEntry::new("6", 55.0, 1.33e-5),
                GaugeEntry::new("8", 40.0, 8.37e-6),
                GaugeEntry::new("10", 30.0, 5.26e-6),
                GaugeEntry::new("12", 20.0, 3.31e-6),
                GaugeEntry::new("14", 15.0, 2.08e-6),
            ]
        }
    }

    pub fn from_toml_str(data: &str) -> Result<GaugeCatalog, CatalogError> {
        let file: CatalogFile = toml::from_str(data)?;
        GaugeCatalog::new(file.gauges)
    }

    pub fn from_path(path: &Path) -> Result<GaugeCatalog, CatalogError> {
        debug!("Loading gauge catalog from {}", path.display());
        let data = fs::read_to_string(path).map_err(|e| {
            CatalogError::FailedToLoad { path: path.display().to_string(), source: e }
        })?;
        let catalog = GaugeCatalog::from_toml_str(&data)?;
        info!("Loaded {} gauges from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn to_toml_string(&self) -> Result<String, CatalogError> {
        Ok(toml::to_string(&CatalogFile { gauges: self.entries.clone() })?)
    }

    pub fn get(&self, gauge: &str) -> Option<&GaugeEntry> {
        self.entries.iter().find(|e| e.gauge == gauge)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GaugeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_rated_current(&self) -> f64 {
        self.entries.iter().fold(0.0, |max, e| max.max(e.rated_current))
    }

    pub fn sorted_by_thickness(&self) -> Vec<&GaugeEntry> {
        self.entries.iter().sorted_by(|a, b| a.thickness.total_cmp(&b.thickness)).collect()
    }
}

impl Default for GaugeCatalog {
    fn default() -> Self {
        GaugeCatalog::awg_reference()
    }
}

impl<'a> IntoIterator for &'a GaugeCatalog {
    type Item = &'a GaugeEntry;
    type IntoIter = std::slice::Iter<'a, GaugeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;
    use crate::catalog::{GaugeCatalog, GaugeEntry};
    use crate::error::CatalogError;

    const TWO_GAUGES: &str = r#"
[[gauge]]
label = "A"
rated_current = 10.0
thickness = 1.0e-6

[[gauge]]
label = "B"
rated_current = 20.0
thickness = 2.0e-6
"#;

    #[test]
    fn reference_table_order() {
        let catalog = GaugeCatalog::awg_reference();
        let labels: Vec<&str> = catalog.iter().map(|e| e.gauge()).collect();
        assert_eq!(labels, vec!["000", "0", "3", "6", "8", "10", "12", "14"]);
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.max_rated_current(), 200.0);
    }

    #[test]
    fn reference_table_is_valid() {
        let reference = GaugeCatalog::awg_reference();
        let rebuilt = GaugeCatalog::new(reference.iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt, reference);
    }

    #[test]
    fn lookup_by_label() {
        let catalog = GaugeCatalog::awg_reference();
        let six = catalog.get("6").unwrap();
        assert_eq!(six.rated_current(), 55.0);
        assert_eq!(six.thickness(), 1.33e-5);
        assert!(catalog.get("7").is_none());
        assert!(catalog.get("06").is_none());
    }

    #[test]
    fn sorted_by_thickness() {
        let catalog = GaugeCatalog::awg_reference();
        let sorted: Vec<&str> = catalog.sorted_by_thickness().iter().map(|e| e.gauge()).collect();
        assert_eq!(sorted, vec!["14", "12", "10", "8", "6", "3", "0", "000"]);
    }

    #[test]
    fn load_from_toml() {
        let catalog = GaugeCatalog::from_toml_str(TWO_GAUGES).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("B").unwrap(), &GaugeEntry::new("B", 20.0, 2.0e-6));
    }

    #[test]
    fn toml_round_trip_keeps_order() {
        let catalog = GaugeCatalog::awg_reference();
        let encoded = catalog.to_toml_string().unwrap();
        assert_eq!(GaugeCatalog::from_toml_str(&encoded).unwrap(), catalog);
    }

    #[test]
    fn rejects_bad_catalogs() {
        assert!(matches!(GaugeCatalog::new(Vec::new()), Err(CatalogError::Empty)));
        assert!(matches!(
            GaugeCatalog::new(vec![GaugeEntry::new("A", 10.0, 1e-6), GaugeEntry::new("A", 20.0, 2e-6)]),
            Err(CatalogError::DuplicateGauge(label)) if label == "A"
        ));
        assert!(matches!(
            GaugeCatalog::new(vec![GaugeEntry::new("A", 10.0, 0.0)]),
            Err(CatalogError::InvalidGauge(..))
        ));
        assert!(matches!(
            GaugeCatalog::new(vec![GaugeEntry::new("A", -1.0, 1e-6)]),
            Err(CatalogError::InvalidGauge(..))
        ));
        assert!(matches!(
            GaugeCatalog::new(vec![GaugeEntry::new(" ", 1.0, 1e-6)]),
            Err(CatalogError::InvalidGauge(..))
        ));
        assert!(matches!(
            GaugeCatalog::from_toml_str("[[gauge]]\nlabel = \"A\"\n"),
            Err(CatalogError::DecodeError(_))
        ));
    }

    #[test]
    fn load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_GAUGES.as_bytes()).unwrap();
        let catalog = GaugeCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let missing = GaugeCatalog::from_path(Path::new("/definitely/not/a/catalog.toml"));
        assert!(matches!(missing, Err(CatalogError::FailedToLoad { .. })));
    }
}
