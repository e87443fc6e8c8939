//! Point-in-arc and point-on-node tests in plot coordinates.

use super::geometry::{ArcGeom, ArcLayout};

/// First arc, in draw order, whose stroke annulus contains `(x, y)`.
///
/// Arcs only occupy the upper half-plane, so any `y < 0` misses. Earlier arcs
/// win ties, matching the order they were stroked in.
pub fn locate_arc(arcs: &[ArcGeom], x: f64, y: f64) -> Option<usize> {
	if y < 0.0 {
		return None;
	}
	arcs.iter()
		.find(|arc| {
			let value = y * y + (x - arc.center).powi(2);
			let inner = arc.radius - arc.stroke_half_width;
			let outer = arc.radius + arc.stroke_half_width;
			inner * inner < value && value < outer * outer
		})
		.map(|arc| arc.order)
}

/// Round through the decimal expansion of `value`, ties to even.
///
/// Works on the exact binary value, so `0.95` (stored just below) rounds to
/// `0.9` rather than `1.0`.
fn round_decimal(value: f64, digits: usize) -> Option<f64> {
	format!("{value:.digits$}").parse().ok()
}

/// Node position under `(x, y)`, if any.
///
/// `y` must round to 0 and `x`, rounded to one decimal, must be a whole
/// number naming an existing position.
pub fn locate_node(node_count: usize, x: f64, y: f64) -> Option<usize> {
	if !x.is_finite() || !y.is_finite() || round_decimal(y, 0)? != 0.0 {
		return None;
	}
	let position = round_decimal(x, 1)?;
	if position.fract() != 0.0 {
		return None;
	}
	(position >= 0.0 && position < node_count as f64).then_some(position as usize)
}

impl ArcLayout {
	/// [`locate_arc`] over this layout's arcs.
	pub fn locate_arc(&self, x: f64, y: f64) -> Option<usize> {
		locate_arc(self.arcs(), x, y)
	}

	/// [`locate_node`] over this layout's nodes.
	pub fn locate_node(&self, x: f64, y: f64) -> Option<usize> {
		locate_node(self.node_count(), x, y)
	}
}
