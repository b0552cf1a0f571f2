use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::{AngleValue, Dataset, Reading, Side};

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// The two (and only two) ways ingesting a file can fail. Both abort the
/// whole load: no partial dataset is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input could not be read as tabular data, or a force cell is not
    /// a number.
    #[error("{side} file could not be parsed: {detail}")]
    Parse { side: Side, detail: String },

    /// The header lacks a required column (after trim + lowercase matching).
    #[error("{side} file is missing required column '{column}'")]
    Schema { side: Side, column: String },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load one side's recording from a CSV file on disk.
pub fn load_file(path: &Path, side: Side) -> Result<Dataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Parse {
        side,
        detail: e.to_string(),
    })?;
    load_reader(file, side)
}

/// Parse one side's recording from any reader.
///
/// Required columns (matched case-insensitively after trimming whitespace):
/// * `angle` – categorical trial condition
/// * the side's value column (`left` or `right`) – numeric force samples
///
/// All other columns are ignored. Row order is preserved; it is the implicit
/// 0.1 s time axis within each angle group.
pub fn load_reader<R: Read>(reader: R, side: Side) -> Result<Dataset, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers().map_err(|e| LoadError::Parse {
        side,
        detail: e.to_string(),
    })?;
    let normalized: Vec<String> = headers
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let angle_idx = find_column(&normalized, "angle", side)?;
    let value_idx = find_column(&normalized, side.column_name(), side)?;

    let mut readings = Vec::new();

    for (row_no, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| LoadError::Parse {
            side,
            detail: format!("row {row_no}: {e}"),
        })?;

        let angle_cell = record.get(angle_idx).unwrap_or("");
        let value_cell = record.get(value_idx).unwrap_or("").trim();

        let value = value_cell.parse::<f64>().map_err(|_| LoadError::Parse {
            side,
            detail: format!(
                "row {row_no}: '{value_cell}' in column '{}' is not a number",
                side.column_name()
            ),
        })?;

        readings.push(Reading {
            angle: AngleValue::parse(angle_cell),
            value,
        });
    }

    Ok(Dataset { side, readings })
}

fn find_column(normalized: &[String], name: &str, side: Side) -> Result<usize, LoadError> {
    normalized
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| LoadError::Schema {
            side,
            column: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load_left(csv_text: &str) -> Result<Dataset, LoadError> {
        load_reader(Cursor::new(csv_text.to_string()), Side::Left)
    }

    #[test]
    fn loads_basic_file_in_row_order() {
        let ds = load_left("angle,left\n10,5.0\n10,7.0\n20,3.5\n").unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.readings[0].value, 5.0);
        assert_eq!(ds.readings[1].value, 7.0);
        assert_eq!(ds.readings[2].angle.as_str(), "20");
    }

    #[test]
    fn header_matching_is_trimmed_and_case_insensitive() {
        let ds = load_left(" Angle , LEFT \n10,5.0\n").unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.readings[0].angle.as_str(), "10");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let ds = load_left("trial,angle,left\n1,10,5.0\n").unwrap();
        assert_eq!(ds.readings[0].value, 5.0);
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let ds = load_left("angle,left\n").unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn missing_angle_column_is_schema_error() {
        let err = load_left("tilt,left\n10,5.0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Schema { side: Side::Left, ref column } if column == "angle"
        ));
    }

    #[test]
    fn missing_value_column_is_schema_error() {
        let err = load_reader(Cursor::new("angle,left\n10,5.0\n"), Side::Right).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Schema { side: Side::Right, ref column } if column == "right"
        ));
    }

    #[test]
    fn ragged_row_is_parse_error() {
        let err = load_left("angle,left\n10,5.0,extra\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { side: Side::Left, .. }));
    }

    #[test]
    fn non_numeric_force_is_parse_error() {
        let err = load_left("angle,left\n10,heavy\n").unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(msg.contains("heavy"));
    }

    #[test]
    fn error_message_names_the_side() {
        let err = load_reader(Cursor::new("angle,oops\n"), Side::Right).unwrap_err();
        assert!(err.to_string().starts_with("Right file"));
    }
}
