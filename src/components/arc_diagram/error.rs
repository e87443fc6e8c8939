//! Errors raised while loading a table or applying draw commands.

use thiserror::Error;

/// Everything that can go wrong between the input table and the canvas.
#[derive(Error, Debug)]
pub enum ArcDiagramError {
	/// Fewer than two nodes: every width divides by `max_position`, which is 0.
	#[error("graph has {nodes} node(s); at least 2 are needed to lay out arcs")]
	DegenerateGraph { nodes: usize },

	/// The CSV header does not have exactly three columns.
	#[error("table header has {columns} column(s), expected 3")]
	MalformedHeader { columns: usize },

	/// Data row `row` (0-based) has a bad field count or weight.
	#[error("row {row} is malformed: {reason}")]
	MalformedRow { row: usize, reason: String },

	/// A draw command addressed an arc or node that does not exist.
	#[error("{kind} {index} does not exist in the current diagram")]
	StaleReference { kind: &'static str, index: usize },

	/// The CSV reader failed.
	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),

	/// The JSON document is not an array of row objects.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result alias used throughout the arc diagram core.
pub type Result<T> = std::result::Result<T, ArcDiagramError>;
