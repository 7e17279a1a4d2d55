//! CSV Loader
//!
//! Reads the launch records file once at startup. Columns are matched by
//! header name, so extra columns in the export are ignored. Any bad row is
//! fatal.

use super::*;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Header names that must be present in the CSV
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "Booster Version Category",
    "class",
];

/// One CSV row before validation
#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    #[serde(rename = "class")]
    class: i64,
}

impl RawLaunchRow {
    fn validate(self, line: u64) -> DatasetResult<LaunchRecord> {
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(DatasetError::InvalidPayload {
                line,
                value: self.payload_mass_kg,
            });
        }

        let outcome = Outcome::from_class(self.class).ok_or(DatasetError::InvalidOutcome {
            line,
            value: self.class,
        })?;

        Ok(LaunchRecord {
            launch_site: self.launch_site,
            payload_mass_kg: self.payload_mass_kg,
            booster_version_category: self.booster_version_category,
            outcome,
        })
    }
}

impl Dataset {
    /// Load the dataset from a CSV file
    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file)?;

        tracing::info!(
            "Loaded {} launch records ({} sites) from {:?}",
            dataset.len(),
            dataset.sites().len(),
            path
        );

        Ok(dataset)
    }

    /// Load the dataset from any CSV source with a header row
    pub fn from_reader<R: Read>(source: R) -> DatasetResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn(column.to_string()));
            }
        }
        tracing::debug!("Dataset columns: {:?}", headers);

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let row: RawLaunchRow =
                record
                    .deserialize(Some(&headers))
                    .map_err(|e| DatasetError::Csv {
                        line,
                        message: e.to_string(),
                    })?;

            records.push(row.validate(line)?);
        }

        Ok(Dataset::new(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
4,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT";

    #[test]
    fn test_load_from_reader() {
        let dataset = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(
            dataset.records()[2],
            LaunchRecord::new("VAFB SLC-4E", 9600.0, "FT", Outcome::Success)
        );
        assert_eq!(
            dataset.sites(),
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.payload_bounds(), Some((0.0, 9600.0)));
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::load("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }

    #[test]
    fn test_missing_column() {
        let csv_data = "Launch Site,Payload Mass (kg),class
CCAFS LC-40,500.0,1";

        let err = Dataset::from_reader(csv_data.as_bytes()).unwrap_err();
        match err {
            DatasetError::MissingColumn(column) => assert_eq!(column, "Booster Version Category"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_outcome_class() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version Category,class
CCAFS LC-40,500.0,v1.0,1
KSC LC-39A,500.0,FT,2";

        let err = Dataset::from_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidOutcome { line: 3, value: 2 }
        ));
    }

    #[test]
    fn test_negative_payload() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version Category,class
CCAFS LC-40,-1.0,v1.0,1";

        let err = Dataset::from_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidPayload { line: 2, .. }));
    }

    #[test]
    fn test_unparseable_payload() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version Category,class
CCAFS LC-40,heavy,v1.0,1";

        let err = Dataset::from_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Csv { line: 2, .. }));
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version Category,class\n";

        let dataset = Dataset::from_reader(csv_data.as_bytes()).unwrap();
        assert!(dataset.is_empty());
    }
}
