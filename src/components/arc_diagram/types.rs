//! Data structures shared by the arc diagram core and its renderer.

use serde::{Deserialize, Serialize};

/// One row of the input table: an undirected, weighted node pair.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Row {
	/// Label of the first endpoint.
	pub source: String,
	/// Label of the second endpoint.
	pub target: String,
	/// Non-negative edge weight. Rows on the same pair are summed.
	pub weight: f64,
}

impl Row {
	/// Row on `source`–`target` with the given weight.
	pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			weight,
		}
	}
}

/// A node on the horizontal axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
	/// Label as it appears in the table.
	pub label: String,
	/// 0-based rank of `label` in lexicographic order; also its x coordinate.
	pub position: usize,
}

/// An aggregated edge: every row sharing the same unordered pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// Endpoint named by the source column of the first row on this pair.
	pub a: Node,
	/// Endpoint named by the target column of the first row on this pair.
	pub b: Node,
	/// Sum of the weights of every row on this pair.
	pub weight: f64,
	/// Index of first occurrence. Fixes z-order and arc identity.
	pub order: usize,
}

impl Edge {
	/// Whether either endpoint sits at `position`.
	pub fn touches(&self, position: usize) -> bool {
		self.a.position == position || self.b.position == position
	}
}

/// Semantic paint role. The theme decides the actual colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Tone {
	/// Resting colour of arcs, points and labels.
	#[default]
	Normal,
	/// Selected node and the arcs touching it.
	Selected,
	/// The arc picked by the last click.
	Picked,
	/// Painted in the background colour, i.e. hidden.
	Background,
}

/// Font weight of a text element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum FontWeight {
	/// Default text weight.
	#[default]
	Regular,
	/// Selected node labels and cleared arc labels.
	Bold,
}

/// A click already resolved into plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Click {
	/// Position along the node axis.
	pub x: f64,
	/// Height above the axis.
	pub y: f64,
}

impl Click {
	/// Click at plot coordinates `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}
