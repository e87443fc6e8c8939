//! Input table parsing.
//!
//! Two formats are accepted: a three-column CSV with a header line, and a JSON
//! array of `{ "source", "target", "weight" }` objects. Both fail on the first
//! bad row; nothing is loaded partially.

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use serde_json::Value;

use super::error::{ArcDiagramError, Result};
use super::types::Row;

const COLUMNS: usize = 3;

/// Parse CSV text. Header names are read but only their count is checked.
pub fn parse_csv(text: &str) -> Result<Vec<Row>> {
	let mut reader = ReaderBuilder::new()
		.has_headers(true)
		.flexible(true)
		.trim(Trim::All)
		.from_reader(text.as_bytes());

	let columns = reader.headers()?.len();
	if columns != COLUMNS {
		return Err(ArcDiagramError::MalformedHeader { columns });
	}

	let mut rows = Vec::new();
	for (row, record) in reader.records().enumerate() {
		let record = record?;
		if record.len() != COLUMNS {
			return Err(ArcDiagramError::MalformedRow {
				row,
				reason: format!("expected {COLUMNS} fields, found {}", record.len()),
			});
		}

		let weight = record[2]
			.parse::<f64>()
			.map_err(|_| ArcDiagramError::MalformedRow {
				row,
				reason: format!("weight {:?} is not a number", &record[2]),
			})?;
		check_weight(row, weight)?;

		rows.push(Row::new(&record[0], &record[1], weight));
	}
	Ok(rows)
}

/// A JSON row before its weight is checked.
#[derive(Deserialize)]
struct RawRow {
	source: String,
	target: String,
	#[serde(default)]
	weight: Value,
}

/// Parse a JSON array of row objects.
///
/// Document and label errors surface as `Json`; a missing or non-numeric
/// weight is reported against its row.
pub fn parse_json(text: &str) -> Result<Vec<Row>> {
	let raw: Vec<RawRow> = serde_json::from_str(text)?;
	raw.into_iter()
		.enumerate()
		.map(|(row, r)| {
			let weight = r.weight.as_f64().ok_or_else(|| ArcDiagramError::MalformedRow {
				row,
				reason: format!("weight {} is not a number", r.weight),
			})?;
			check_weight(row, weight)?;
			Ok(Row::new(r.source, r.target, weight))
		})
		.collect()
}

fn check_weight(row: usize, weight: f64) -> Result<()> {
	if !weight.is_finite() || weight < 0.0 {
		return Err(ArcDiagramError::MalformedRow {
			row,
			reason: format!("weight {weight} must be a finite number >= 0"),
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn csv_rows_keep_file_order() {
		let rows = parse_csv("from,to,weight\nA, B, 2\nB,A,3.5\nA,C,1\n").unwrap();
		assert_eq!(
			rows,
			vec![
				Row::new("A", "B", 2.0),
				Row::new("B", "A", 3.5),
				Row::new("A", "C", 1.0),
			]
		);
	}

	#[test]
	fn csv_header_must_have_three_columns() {
		let err = parse_csv("from,to\nA,B\n").unwrap_err();
		assert!(matches!(err, ArcDiagramError::MalformedHeader { columns: 2 }));
	}

	#[test]
	fn csv_reports_index_of_short_row() {
		let err = parse_csv("s,t,w\nA,B,1\nA,C\n").unwrap_err();
		assert!(matches!(err, ArcDiagramError::MalformedRow { row: 1, .. }));
	}

	#[test]
	fn csv_rejects_non_numeric_weight() {
		let err = parse_csv("s,t,w\nA,B,heavy\n").unwrap_err();
		match err {
			ArcDiagramError::MalformedRow { row, reason } => {
				assert_eq!(row, 0);
				assert!(reason.contains("heavy"));
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn csv_rejects_negative_weight() {
		let err = parse_csv("s,t,w\nA,B,1\nB,C,-2\n").unwrap_err();
		assert!(matches!(err, ArcDiagramError::MalformedRow { row: 1, .. }));
	}

	#[test]
	fn csv_with_only_a_header_is_empty() {
		assert!(parse_csv("s,t,w\n").unwrap().is_empty());
	}

	#[test]
	fn json_rows_deserialize() {
		let rows = parse_json(r#"[{"source":"x","target":"y","weight":4}]"#).unwrap();
		assert_eq!(rows, vec![Row::new("x", "y", 4.0)]);
	}

	#[test]
	fn json_shape_errors_surface() {
		let err = parse_json(r#"[{"source":"x","weight":4}]"#).unwrap_err();
		assert!(matches!(err, ArcDiagramError::Json(_)));
		let err = parse_json(r#"[{"source":"x","target":"y","weight":1}"#).unwrap_err();
		assert!(matches!(err, ArcDiagramError::Json(_)));
	}

	#[test]
	fn json_non_numeric_weight_names_its_row() {
		let err = parse_json(
			r#"[{"source":"a","target":"b","weight":1},{"source":"a","target":"c","weight":"heavy"}]"#,
		)
		.unwrap_err();
		match err {
			ArcDiagramError::MalformedRow { row, reason } => {
				assert_eq!(row, 1);
				assert!(reason.contains("heavy"));
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn json_missing_or_negative_weight_names_its_row() {
		let err = parse_json(r#"[{"source":"a","target":"b"}]"#).unwrap_err();
		assert!(matches!(err, ArcDiagramError::MalformedRow { row: 0, .. }));
		let err = parse_json(r#"[{"source":"a","target":"b","weight":1},{"source":"b","target":"c","weight":-1}]"#)
			.unwrap_err();
		assert!(matches!(err, ArcDiagramError::MalformedRow { row: 1, .. }));
	}
}
