//! Closed-form arc geometry.
//!
//! Every edge is a semicircle above the axis, centred halfway between its two
//! endpoints. Widths are normalised by the largest node position, so a graph
//! with fewer than two nodes cannot be laid out.

use super::error::{ArcDiagramError, Result};
use super::graph::GraphData;
use super::types::{Edge, Row};

/// Scale of the hit-test stroke relative to `weight / max_position`.
pub const HIT_STROKE_FACTOR: f64 = 0.06;
/// Scale of the drawn stroke relative to `weight / max_position`.
pub const DISPLAY_STROKE_FACTOR: f64 = 2.0;

/// Geometry of one arc, indexed by edge order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcGeom {
	/// Order of the edge this arc draws.
	pub order: usize,
	/// x coordinate of the circle centre; its y is always 0.
	pub center: f64,
	/// Half the distance between the endpoints.
	pub radius: f64,
	/// Half the radial thickness used for hit testing.
	pub stroke_half_width: f64,
	/// Stroke width handed to the renderer.
	pub stroke_width: f64,
}

impl ArcGeom {
	/// Apex of the semicircle, where the weight label sits.
	pub fn apex(&self) -> (f64, f64) {
		(self.center, self.radius)
	}
}

/// Compute the arc for `edge`. `max_position` must be non-zero.
pub fn arc_geometry(edge: &Edge, max_position: usize) -> Result<ArcGeom> {
	if max_position == 0 {
		return Err(ArcDiagramError::DegenerateGraph {
			nodes: max_position + 1,
		});
	}
	let max = max_position as f64;
	let (p, q) = (edge.a.position as f64, edge.b.position as f64);

	Ok(ArcGeom {
		order: edge.order,
		center: (p + q) / 2.0,
		radius: (p - q).abs() / 2.0,
		stroke_half_width: HIT_STROKE_FACTOR * edge.weight / max / 2.0,
		stroke_width: edge.weight / max * DISPLAY_STROKE_FACTOR,
	})
}

/// Extent of the plot in data coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBounds {
	/// Left edge, one unit before the first node.
	pub x_min: f64,
	/// Right edge, one unit past the last node.
	pub x_max: f64,
	/// Bottom edge, leaving room for rotated labels.
	pub y_min: f64,
	/// Top edge, just above the tallest possible arc.
	pub y_max: f64,
}

impl PlotBounds {
	/// `x` in `[-1, N]`, `y` in `[-5, N/2 + 1]`.
	pub fn for_nodes(count: usize) -> Self {
		let n = count as f64;
		Self {
			x_min: -1.0,
			x_max: n,
			y_min: -5.0,
			y_max: n / 2.0 + 1.0,
		}
	}

	/// Horizontal extent.
	pub fn width(&self) -> f64 {
		self.x_max - self.x_min
	}

	/// Vertical extent.
	pub fn height(&self) -> f64 {
		self.y_max - self.y_min
	}
}

/// A loaded graph with one cached arc per aggregated edge.
///
/// Built once from the input rows and read-only afterwards.
#[derive(Clone, Debug)]
pub struct ArcLayout {
	graph: GraphData,
	arcs: Vec<ArcGeom>,
}

/// First row whose addition pushed its edge's running sum past `f64::MAX`.
fn overflowing_row(graph: &GraphData) -> Option<usize> {
	let mut sums = vec![0.0_f64; graph.edges().len()];
	graph.rows().iter().enumerate().find_map(|(row, r)| {
		let order = graph.edge_for_row(row)?;
		sums[order] += r.weight;
		(!sums[order].is_finite()).then_some(row)
	})
}

impl ArcLayout {
	/// Build the graph and cache every arc.
	///
	/// Fails with `DegenerateGraph` below two nodes, and with `MalformedRow`
	/// when summing a pair's weights overflows.
	pub fn build(rows: Vec<Row>) -> Result<Self> {
		let graph = GraphData::build(rows);
		if let Some(row) = overflowing_row(&graph) {
			return Err(ArcDiagramError::MalformedRow {
				row,
				reason: "aggregated weight overflows".to_string(),
			});
		}
		let max_position = match graph.max_position() {
			Some(max) if max > 0 => max,
			_ => {
				return Err(ArcDiagramError::DegenerateGraph {
					nodes: graph.node_count(),
				});
			}
		};

		let arcs = graph
			.edges()
			.iter()
			.map(|edge| arc_geometry(edge, max_position))
			.collect::<Result<Vec<_>>>()?;

		Ok(Self { graph, arcs })
	}

	/// Nodes, edges and rows the arcs were built from.
	pub fn graph(&self) -> &GraphData {
		&self.graph
	}

	/// Arcs in draw order.
	pub fn arcs(&self) -> &[ArcGeom] {
		&self.arcs
	}

	/// Arc of the edge with the given order.
	pub fn arc(&self, order: usize) -> Option<&ArcGeom> {
		self.arcs.get(order)
	}

	/// Arcs of [`GraphData::incident_edges`], in the same order.
	pub fn incident_arcs(&self, position: usize) -> impl Iterator<Item = &ArcGeom> + '_ {
		// One arc per edge, so every edge order indexes `arcs`.
		self.graph
			.incident_edges(position)
			.into_iter()
			.map(move |order| &self.arcs[order])
	}

	/// `N`, the number of nodes on the axis.
	pub fn node_count(&self) -> usize {
		self.graph.node_count()
	}

	/// Plot extent for this layout's node count.
	pub fn bounds(&self) -> PlotBounds {
		PlotBounds::for_nodes(self.node_count())
	}
}
