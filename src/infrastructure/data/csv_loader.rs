use crate::domain::errors::DataError;
use crate::domain::market::observation::{Dataset, Observation};
use csv::StringRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Header names of the three columns the regression needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub open: String,
    pub close: String,
    pub turnover: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            open: "Open".to_string(),
            close: "Close".to_string(),
            turnover: "Turnover".to_string(),
        }
    }
}

/// Reads historical observations from a headed CSV file.
///
/// Columns other than the three configured ones are ignored.
pub struct CsvDataLoader {
    columns: ColumnNames,
}

impl CsvDataLoader {
    pub fn new(columns: ColumnNames) -> Self {
        Self { columns }
    }

    pub fn load_path(&self, path: &Path) -> Result<Dataset, DataError> {
        info!("Loading observations from {:?}", path);
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = self.load_reader(BufReader::new(file))?;
        info!("Loaded {} observations", dataset.len());
        Ok(dataset)
    }

    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Dataset, DataError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let open_idx = column_index(&headers, &self.columns.open)?;
        let close_idx = column_index(&headers, &self.columns.close)?;
        let turnover_idx = column_index(&headers, &self.columns.turnover)?;
        debug!(
            "Column indices: open={}, close={}, turnover={}",
            open_idx, close_idx, turnover_idx
        );

        let mut observations = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            let row = i + 1;
            observations.push(Observation {
                open: parse_cell(&record, open_idx, row, &self.columns.open)?,
                close: parse_cell(&record, close_idx, row, &self.columns.close)?,
                turnover: parse_cell(&record, turnover_idx, row, &self.columns.turnover)?,
            });
        }

        if observations.is_empty() {
            return Err(DataError::Empty);
        }

        Ok(Dataset::new(observations))
    }
}

impl Default for CsvDataLoader {
    fn default() -> Self {
        Self::new(ColumnNames::default())
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, DataError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| DataError::MissingColumn {
            column: name.to_string(),
        })
}

fn parse_cell(
    record: &StringRecord,
    idx: usize,
    row: usize,
    column: &str,
) -> Result<f64, DataError> {
    let raw = record.get(idx).unwrap_or("");
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DataError::InvalidValue {
            row,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HDFC_SAMPLE: &str = "\
Date,Symbol,Series,Prev Close,Open,High,Low,Last,Close,VWAP,Volume,Turnover
2000-01-03,HDFC,EQ,271.75,293.5,293.5,293.5,293.5,293.5,293.5,22744,667536400000.0
2000-01-04,HDFC,EQ,293.5,317.0,317.0,297.0,304.0,304.05,303.62,255251,7749972700000.0
2000-01-05,HDFC,EQ,304.05,290.0,303.9,285.0,295.0,292.8,294.53,269087,7925298300000.0
";

    #[test]
    fn test_loads_named_columns_and_ignores_others() {
        let dataset = CsvDataLoader::default()
            .load_reader(HDFC_SAMPLE.as_bytes())
            .unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(
            dataset.observations()[1],
            Observation::new(317.0, 304.05, 7_749_972_700_000.0)
        );
    }

    #[test]
    fn test_trims_headers_and_cells() {
        let csv = "Open , Close,Turnover\n 1.5 ,2.5 , 3e6\n";
        let dataset = CsvDataLoader::default().load_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.observations()[0], Observation::new(1.5, 2.5, 3e6));
    }

    #[test]
    fn test_missing_column() {
        let csv = "Open,Close,Volume\n1,2,3\n";
        let err = CsvDataLoader::default()
            .load_reader(csv.as_bytes())
            .unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { ref column } if column == "Turnover"));
    }

    #[test]
    fn test_invalid_value_reports_row_and_column() {
        let csv = "Open,Close,Turnover\n1,2,3\n4,five,6\n";
        let err = CsvDataLoader::default()
            .load_reader(csv.as_bytes())
            .unwrap_err();
        match err {
            DataError::InvalidValue { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Close");
                assert_eq!(value, "five");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_cells_are_rejected() {
        let csv = "Open,Close,Turnover\n1,2,3\n4,5,NaN\n";
        let err = CsvDataLoader::default()
            .load_reader(csv.as_bytes())
            .unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidValue { row: 2, ref column, ref value }
                if column == "Turnover" && value == "NaN"
        ));

        for cell in ["inf", "-infinity"] {
            let csv = format!("Open,Close,Turnover\n{},2,3\n", cell);
            let err = CsvDataLoader::default()
                .load_reader(csv.as_bytes())
                .unwrap_err();
            assert!(matches!(err, DataError::InvalidValue { ref column, .. } if column == "Open"));
        }
    }

    #[test]
    fn test_headers_only_is_empty() {
        let csv = "Open,Close,Turnover\n";
        let err = CsvDataLoader::default()
            .load_reader(csv.as_bytes())
            .unwrap_err();
        assert!(matches!(err, DataError::Empty));
    }

    #[test]
    fn test_custom_column_names() {
        let csv = "o,c,t\n1,2,3\n";
        let loader = CsvDataLoader::new(ColumnNames {
            open: "o".to_string(),
            close: "c".to_string(),
            turnover: "t".to_string(),
        });
        let dataset = loader.load_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.observations()[0], Observation::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CsvDataLoader::default()
            .load_path(Path::new("definitely/not/here.csv"))
            .unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
