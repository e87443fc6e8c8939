//! Node ordering and edge aggregation.
//!
//! Two index spaces live here and are kept apart: the row index of the input
//! table, and the order of the aggregated edge each row was folded into.
//! `row_edges` maps the first onto the second; they only coincide when no pair
//! appears twice.

use std::collections::{BTreeSet, HashMap};

use super::types::{Edge, Node, Row};

/// Deduplicated nodes, aggregated edges and the rows they came from.
#[derive(Clone, Debug, Default)]
pub struct GraphData {
	rows: Vec<Row>,
	nodes: Vec<Node>,
	positions: HashMap<String, usize>,
	edges: Vec<Edge>,
	row_edges: Vec<usize>,
}

/// Union of all labels, sorted, ranked from 0.
pub fn build_nodes(rows: &[Row]) -> Vec<Node> {
	let labels: BTreeSet<&str> = rows
		.iter()
		.flat_map(|r| [r.source.as_str(), r.target.as_str()])
		.collect();

	labels
		.into_iter()
		.enumerate()
		.map(|(position, label)| Node {
			label: label.to_string(),
			position,
		})
		.collect()
}

fn position_map(nodes: &[Node]) -> HashMap<String, usize> {
	nodes.iter().map(|n| (n.label.clone(), n.position)).collect()
}

/// Fold rows into one edge per unordered pair, in first-occurrence order.
///
/// Returns the edges together with the edge order each row landed in.
pub fn build_edges(rows: &[Row]) -> (Vec<Edge>, Vec<usize>) {
	fold_edges(rows, &position_map(&build_nodes(rows)))
}

/// `positions` must hold every label in `rows`, as the map from
/// [`build_nodes`] over the same rows does.
fn fold_edges(rows: &[Row], positions: &HashMap<String, usize>) -> (Vec<Edge>, Vec<usize>) {
	let mut edges: Vec<Edge> = Vec::new();
	let mut by_pair: HashMap<(usize, usize), usize> = HashMap::new();
	let mut row_edges = Vec::with_capacity(rows.len());

	for row in rows {
		let a = positions[&row.source];
		let b = positions[&row.target];
		let key = (a.min(b), a.max(b));

		let order = *by_pair.entry(key).or_insert_with(|| {
			let order = edges.len();
			edges.push(Edge {
				a: Node {
					label: row.source.clone(),
					position: a,
				},
				b: Node {
					label: row.target.clone(),
					position: b,
				},
				weight: 0.0,
				order,
			});
			order
		});
		edges[order].weight += row.weight;
		row_edges.push(order);
	}

	(edges, row_edges)
}

impl GraphData {
	/// Rank the labels and fold the rows into edges.
	pub fn build(rows: Vec<Row>) -> Self {
		let nodes = build_nodes(&rows);
		let positions = position_map(&nodes);
		let (edges, row_edges) = fold_edges(&rows, &positions);

		Self {
			rows,
			nodes,
			positions,
			edges,
			row_edges,
		}
	}

	/// Input rows in table order.
	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	/// Nodes, indexed by position.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Aggregated edges, indexed by their order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// `N`, the number of distinct labels.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Largest node position, `None` for an empty graph.
	pub fn max_position(&self) -> Option<usize> {
		self.nodes.len().checked_sub(1)
	}

	/// Position of `label`, if it appears in any row.
	pub fn position_of(&self, label: &str) -> Option<usize> {
		self.positions.get(label).copied()
	}

	/// Label of the node at `position`.
	pub fn label_at(&self, position: usize) -> Option<&str> {
		self.nodes.get(position).map(|n| n.label.as_str())
	}

	/// Order of the edge that input row `row` was folded into.
	pub fn edge_for_row(&self, row: usize) -> Option<usize> {
		self.row_edges.get(row).copied()
	}

	/// Row indices whose source or target is the node at `position`.
	pub fn incident_rows(&self, position: usize) -> impl Iterator<Item = usize> + '_ {
		let label = self.label_at(position);
		self.rows
			.iter()
			.enumerate()
			.filter(move |(_, r)| Some(r.source.as_str()) == label || Some(r.target.as_str()) == label)
			.map(|(i, _)| i)
	}

	/// Edge orders reached through [`Self::incident_rows`], each listed once.
	pub fn incident_edges(&self, position: usize) -> Vec<usize> {
		let mut seen = BTreeSet::new();
		self.incident_rows(position)
			.map(|row| self.row_edges[row])
			.filter(|order| seen.insert(*order))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scenario() -> GraphData {
		GraphData::build(vec![
			Row::new("A", "B", 2.0),
			Row::new("B", "A", 3.0),
			Row::new("A", "C", 1.0),
		])
	}

	#[test]
	fn nodes_are_sorted_and_ranked() {
		let graph = scenario();
		let labels: Vec<_> = graph.nodes().iter().map(|n| n.label.as_str()).collect();
		assert_eq!(labels, ["A", "B", "C"]);
		assert_eq!(graph.position_of("A"), Some(0));
		assert_eq!(graph.position_of("B"), Some(1));
		assert_eq!(graph.position_of("C"), Some(2));
		assert_eq!(graph.max_position(), Some(2));
	}

	#[test]
	fn positions_round_trip_through_labels() {
		let graph = GraphData::build(vec![
			Row::new("zeta", "alpha", 1.0),
			Row::new("mu", "beta", 1.0),
			Row::new("beta", "zeta", 1.0),
		]);
		let mut seen: Vec<_> = graph.nodes().iter().map(|n| n.position).collect();
		seen.sort_unstable();
		assert_eq!(seen, (0..graph.node_count()).collect::<Vec<_>>());

		for node in graph.nodes() {
			let label = graph.label_at(node.position).unwrap();
			assert_eq!(graph.position_of(label), Some(node.position));
		}
	}

	#[test]
	fn reversed_pair_aggregates_into_first_occurrence() {
		let graph = scenario();
		let edges = graph.edges();
		assert_eq!(edges.len(), 2);

		assert_eq!(edges[0].order, 0);
		assert_eq!(edges[0].a.label, "A");
		assert_eq!(edges[0].b.label, "B");
		assert_eq!(edges[0].weight, 5.0);

		assert_eq!(edges[1].order, 1);
		assert_eq!(edges[1].weight, 1.0);
	}

	#[test]
	fn rows_map_onto_edge_orders() {
		let graph = scenario();
		assert_eq!(graph.edge_for_row(0), Some(0));
		assert_eq!(graph.edge_for_row(1), Some(0));
		assert_eq!(graph.edge_for_row(2), Some(1));
		assert_eq!(graph.edge_for_row(3), None);
	}

	#[test]
	fn incidence_runs_over_rows_then_collapses_to_edges() {
		let graph = scenario();
		assert_eq!(graph.incident_rows(0).collect::<Vec<_>>(), [0, 1, 2]);
		assert_eq!(graph.incident_edges(0), [0, 1]);
		assert_eq!(graph.incident_rows(1).collect::<Vec<_>>(), [0, 1]);
		assert_eq!(graph.incident_edges(1), [0]);
		assert_eq!(graph.incident_edges(2), [1]);
		assert!(graph.incident_edges(7).is_empty());
		for position in 0..graph.node_count() {
			for order in graph.incident_edges(position) {
				assert!(graph.edges()[order].touches(position));
			}
		}
	}

	#[test]
	fn build_edges_stands_alone() {
		let rows = vec![
			Row::new("A", "B", 2.0),
			Row::new("B", "A", 3.0),
			Row::new("A", "C", 1.0),
		];
		let (edges, row_edges) = build_edges(&rows);
		assert_eq!(edges.len(), 2);
		assert_eq!(edges[0].weight, 5.0);
		assert_eq!((edges[1].a.position, edges[1].b.position), (0, 2));
		assert_eq!(row_edges, [0, 0, 1]);

		let (edges, row_edges) = build_edges(&[]);
		assert!(edges.is_empty() && row_edges.is_empty());
	}

	#[test]
	fn empty_rows_give_empty_graph() {
		let graph = GraphData::build(Vec::new());
		assert_eq!(graph.node_count(), 0);
		assert!(graph.edges().is_empty());
		assert_eq!(graph.max_position(), None);
	}
}
