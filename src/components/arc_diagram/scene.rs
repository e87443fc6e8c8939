//! Retained display state between redraws.
//!
//! The scene is what the renderer paints. It only changes through
//! [`DrawCommand`]s, and refuses commands that name an arc or node the loaded
//! layout does not have.

use super::error::{ArcDiagramError, Result};
use super::geometry::{ArcGeom, ArcLayout};
use super::selection::DrawCommand;
use super::types::{FontWeight, Tone};

/// Display state of one arc.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSprite {
	/// Cached geometry from the layout.
	pub geom: ArcGeom,
	/// Stroke colour.
	pub tone: Tone,
	/// Current drawn width.
	pub stroke_width: f64,
	/// Edge weight shown above the apex.
	pub weight: f64,
	/// Colour of the weight label; `Background` hides it.
	pub label_tone: Tone,
	/// Font weight of the weight label.
	pub label_weight: FontWeight,
}

/// Display state of a node label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelSprite {
	/// Node label.
	pub text: String,
	/// Text colour.
	pub tone: Tone,
	/// Font weight.
	pub weight: FontWeight,
}

/// Contents of the info box in the top-left corner.
///
/// The default value is the cleared box: empty labels, weight 0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InfoBox {
	/// First endpoint label of the picked arc.
	pub source: String,
	/// Second endpoint label of the picked arc.
	pub target: String,
	/// Aggregated weight of the picked arc.
	pub weight: f64,
}

impl InfoBox {
	/// The two text lines drawn in the box.
	pub fn lines(&self) -> [String; 2] {
		[
			format!("Nodes  :- {} - {}", self.source, self.target),
			format!("Weight :- {}", self.weight),
		]
	}
}

/// Everything the renderer paints, indexed like the layout it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
	/// One sprite per arc, by edge order.
	pub arcs: Vec<ArcSprite>,
	/// Point colour per node position.
	pub points: Vec<Tone>,
	/// Label per node position.
	pub labels: Vec<LabelSprite>,
	/// Info box contents; `None` draws the cleared box.
	pub info: Option<InfoBox>,
	/// Node under the pointer, shown with a tooltip.
	pub hover: Option<usize>,
}

impl Scene {
	/// Resting state: everything `Normal`, arc labels hidden, no info box.
	pub fn new(layout: &ArcLayout) -> Self {
		let arcs = layout
			.arcs()
			.iter()
			.zip(layout.graph().edges())
			.map(|(geom, edge)| ArcSprite {
				geom: *geom,
				tone: Tone::Normal,
				stroke_width: geom.stroke_width,
				weight: edge.weight,
				label_tone: Tone::Background,
				label_weight: FontWeight::Regular,
			})
			.collect();

		let labels = layout
			.graph()
			.nodes()
			.iter()
			.map(|n| LabelSprite {
				text: n.label.clone(),
				tone: Tone::Normal,
				weight: FontWeight::Regular,
			})
			.collect();

		Self {
			arcs,
			points: vec![Tone::Normal; layout.node_count()],
			labels,
			info: None,
			hover: None,
		}
	}

	fn arc_mut(&mut self, order: usize) -> Result<&mut ArcSprite> {
		self.arcs
			.get_mut(order)
			.ok_or(ArcDiagramError::StaleReference { kind: "arc", index: order })
	}

	fn check_node(&self, position: usize) -> Result<()> {
		if position < self.points.len() {
			Ok(())
		} else {
			Err(ArcDiagramError::StaleReference {
				kind: "node",
				index: position,
			})
		}
	}

	/// Apply one command. On error the scene is left as it was.
	pub fn apply(&mut self, command: &DrawCommand) -> Result<()> {
		match command {
			DrawCommand::DrawPoint { position, tone } => {
				self.check_node(*position)?;
				self.points[*position] = *tone;
			}
			DrawCommand::DrawLabel {
				position,
				tone,
				weight,
			} => {
				self.check_node(*position)?;
				let label = &mut self.labels[*position];
				label.tone = *tone;
				label.weight = *weight;
			}
			DrawCommand::DrawArc { order, tone } => {
				self.arc_mut(*order)?.tone = *tone;
			}
			DrawCommand::SetArcStrokeWidth { order, width } => {
				self.arc_mut(*order)?.stroke_width = *width;
			}
			DrawCommand::DrawArcLabel {
				order,
				tone,
				weight,
			} => {
				let arc = self.arc_mut(*order)?;
				arc.label_tone = *tone;
				arc.label_weight = *weight;
			}
			DrawCommand::ShowInfoBox {
				source,
				target,
				weight,
			} => {
				self.info = Some(InfoBox {
					source: source.clone(),
					target: target.clone(),
					weight: *weight,
				});
			}
			DrawCommand::ClearInfoBox => self.info = None,
		}
		Ok(())
	}

	/// Apply commands in order, stopping at the first stale one.
	pub fn apply_all<'a>(&mut self, commands: impl IntoIterator<Item = &'a DrawCommand>) -> Result<()> {
		commands.into_iter().try_for_each(|c| self.apply(c))
	}

	/// Returns whether the hovered node changed.
	pub fn set_hover(&mut self, hover: Option<usize>) -> bool {
		let hover = hover.filter(|p| *p < self.points.len());
		if self.hover == hover {
			return false;
		}
		self.hover = hover;
		true
	}
}
