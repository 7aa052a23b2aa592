//! Single-cell feature tables.
//!
//! Rows follow the CellProfiler column convention: one record per segmented
//! object, keyed by field of view and object number.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// One segmented cell from a feature table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CellRecord {
    /// Field-of-view identifier, e.g. `s1`.
    #[serde(rename = "FOV")]
    pub fov: String,
    /// Object number; matches the cell's pixel value in the segmentation mask.
    #[serde(rename = "ObjectNumber")]
    pub object_number: u32,
    /// Called cell-type identity label.
    #[serde(rename = "Identity")]
    pub identity: String,
    /// Cell centroid row coordinate, in mask pixels.
    #[serde(rename = "Location_Center_X")]
    pub center_x: f64,
    /// Cell centroid column coordinate, in mask pixels.
    #[serde(rename = "Location_Center_Y")]
    pub center_y: f64,
}

/// Ordered collection of cell records, preserving source-file order.
#[derive(Debug, Clone, Default)]
pub struct CellTable {
    records: Vec<CellRecord>,
}

impl CellTable {
    pub fn from_records(records: Vec<CellRecord>) -> Self {
        Self { records }
    }

    /// Reads a comma-separated feature table with a header row.
    ///
    /// Columns beyond the ones named in [`CellRecord`] are ignored; missing
    /// required columns fail deserialization.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)?;

        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<CellRecord>, _>>()?;

        Ok(Self { records })
    }

    /// Rows whose FOV matches `fov` exactly, in table order.
    pub fn filter_fov(&self, fov: &str) -> Vec<&CellRecord> {
        self.records.iter().filter(|r| r.fov == fov).collect()
    }

    pub fn records(&self) -> &[CellRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CellRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_csv() -> &'static str {
        "ImageNumber,FOV,ObjectNumber,Identity,Location_Center_X,Location_Center_Y\n\
         1,s1,1,Tumor,10.5,20.25\n\
         1,s1,2,Stroma,30.0,40.0\n\
         1,s2,1,Microglia_Stroma,5.0,6.0\n"
    }

    fn write_sample_csv(name: &str) -> std::path::PathBuf {
        let path = common::test_utils::test_output_path(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(sample_csv().as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_from_csv_parses_headers() {
        let path = write_sample_csv("cells_parse.csv");
        let table = CellTable::from_csv_path(&path).unwrap();
        assert_eq!(table.len(), 3);

        let first = &table.records()[0];
        assert_eq!(first.fov, "s1");
        assert_eq!(first.object_number, 1);
        assert_eq!(first.identity, "Tumor");
        assert_eq!(first.center_x, 10.5);
        assert_eq!(first.center_y, 20.25);
    }

    #[test]
    fn test_from_csv_preserves_order() {
        let path = write_sample_csv("cells_order.csv");
        let table = CellTable::from_csv_path(&path).unwrap();
        let identities: Vec<&str> = table.iter().map(|r| r.identity.as_str()).collect();
        assert_eq!(identities, ["Tumor", "Stroma", "Microglia_Stroma"]);
    }

    #[test]
    fn test_from_csv_missing_column_fails() {
        let path = common::test_utils::test_output_path("cells_missing_column.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"FOV,ObjectNumber\ns1,1\n").unwrap();
        drop(f);

        assert!(CellTable::from_csv_path(&path).is_err());
    }

    #[test]
    fn test_filter_fov_exact_match() {
        let path = write_sample_csv("cells_filter.csv");
        let table = CellTable::from_csv_path(&path).unwrap();

        let s1 = table.filter_fov("s1");
        assert_eq!(s1.len(), 2);
        assert!(s1.iter().all(|r| r.fov == "s1"));

        // No prefix or partial matching
        assert!(table.filter_fov("s").is_empty());
        assert!(table.filter_fov("s3").is_empty());
    }
}
