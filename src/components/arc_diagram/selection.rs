//! Click handling: node selection and arc selection.
//!
//! Both state machines see every click and run back to back, node first. Each
//! one appends the draw commands for its transition; nothing is drawn here.

use log::debug;
use serde::Serialize;

use super::geometry::ArcLayout;
use super::types::{Click, FontWeight, Tone};

/// What the renderer is asked to change.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[allow(missing_docs)]
pub enum DrawCommand {
	/// Recolour the point at a node position.
	DrawPoint { position: usize, tone: Tone },
	/// Restyle the label under a node.
	DrawLabel {
		position: usize,
		tone: Tone,
		weight: FontWeight,
	},
	/// Recolour an arc.
	DrawArc { order: usize, tone: Tone },
	/// Restore or change the drawn stroke width of an arc.
	SetArcStrokeWidth { order: usize, width: f64 },
	/// Edge weight printed above the apex of an arc.
	DrawArcLabel {
		order: usize,
		tone: Tone,
		weight: FontWeight,
	},
	/// Describe the picked arc in the info box.
	ShowInfoBox {
		source: String,
		target: String,
		weight: f64,
	},
	/// Reset the info box to its empty contents.
	ClearInfoBox,
}

/// Selection owned by the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
	/// Node whose incident arcs are highlighted. Starts at 0.
	pub selected_node_position: usize,
	/// Arc drawn as picked, if the last click hit one.
	pub selected_arc_order: Option<usize>,
}

/// Run both transitions for one click.
pub fn handle_click(
	layout: &ArcLayout,
	state: SelectionState,
	click: Click,
) -> (SelectionState, Vec<DrawCommand>) {
	let mut commands = Vec::new();
	let state = select_node(layout, state, click, &mut commands);
	let state = select_arc(layout, state, click, &mut commands);
	(state, commands)
}

fn clear_incident(layout: &ArcLayout, position: usize, commands: &mut Vec<DrawCommand>) {
	for arc in layout.incident_arcs(position) {
		commands.extend([
			DrawCommand::DrawArc {
				order: arc.order,
				tone: Tone::Normal,
			},
			DrawCommand::SetArcStrokeWidth {
				order: arc.order,
				width: arc.stroke_width,
			},
			DrawCommand::DrawArcLabel {
				order: arc.order,
				tone: Tone::Background,
				weight: FontWeight::Bold,
			},
		]);
	}
}

fn highlight_incident(layout: &ArcLayout, position: usize, commands: &mut Vec<DrawCommand>) {
	for order in layout.graph().incident_edges(position) {
		commands.push(DrawCommand::DrawArc {
			order,
			tone: Tone::Selected,
		});
		commands.push(DrawCommand::DrawArcLabel {
			order,
			tone: Tone::Selected,
			weight: FontWeight::Regular,
		});
	}
}

/// Node selection transition.
///
/// A click off the axis resets the visuals of the current node but keeps it
/// selected; the next node click still clears from that position.
pub fn select_node(
	layout: &ArcLayout,
	state: SelectionState,
	click: Click,
	commands: &mut Vec<DrawCommand>,
) -> SelectionState {
	let previous = state.selected_node_position;
	clear_incident(layout, previous, commands);

	let Some(position) = layout.locate_node(click.x, click.y) else {
		commands.push(DrawCommand::DrawLabel {
			position: previous,
			tone: Tone::Normal,
			weight: FontWeight::Regular,
		});
		commands.push(DrawCommand::DrawPoint {
			position: previous,
			tone: Tone::Normal,
		});
		return state;
	};

	highlight_incident(layout, position, commands);
	commands.extend([
		DrawCommand::DrawPoint {
			position: previous,
			tone: Tone::Normal,
		},
		DrawCommand::DrawPoint {
			position,
			tone: Tone::Selected,
		},
		DrawCommand::DrawLabel {
			position: previous,
			tone: Tone::Normal,
			weight: FontWeight::Regular,
		},
		DrawCommand::DrawLabel {
			position,
			tone: Tone::Selected,
			weight: FontWeight::Bold,
		},
	]);

	debug!("arc-diagram: node {previous} -> {position}");
	SelectionState {
		selected_node_position: position,
		..state
	}
}

/// Arc selection transition.
pub fn select_arc(
	layout: &ArcLayout,
	state: SelectionState,
	click: Click,
	commands: &mut Vec<DrawCommand>,
) -> SelectionState {
	if let Some(order) = state.selected_arc_order {
		commands.push(DrawCommand::DrawArc {
			order,
			tone: Tone::Normal,
		});
	}

	let picked = layout.locate_arc(click.x, click.y);
	let edge = picked.and_then(|order| layout.graph().edges().get(order));
	match edge {
		Some(edge) => {
			commands.push(DrawCommand::DrawArc {
				order: edge.order,
				tone: Tone::Picked,
			});
			commands.push(DrawCommand::ShowInfoBox {
				source: edge.a.label.clone(),
				target: edge.b.label.clone(),
				weight: edge.weight,
			});
			debug!("arc-diagram: picked arc {}", edge.order);
		}
		None => commands.push(DrawCommand::ClearInfoBox),
	}

	SelectionState {
		selected_arc_order: edge.map(|e| e.order),
		..state
	}
}

/// Owns a layout and the selection state mutated by clicks on it.
#[derive(Clone, Debug)]
pub struct SelectionController {
	layout: ArcLayout,
	state: SelectionState,
}

impl SelectionController {
	/// Start with node 0 selected and no arc picked.
	pub fn new(layout: ArcLayout) -> Self {
		Self {
			layout,
			state: SelectionState::default(),
		}
	}

	/// Layout clicks are resolved against.
	pub fn layout(&self) -> &ArcLayout {
		&self.layout
	}

	/// Current selection.
	pub fn state(&self) -> SelectionState {
		self.state
	}

	/// Apply one click and return the commands it produced, in order.
	pub fn click(&mut self, click: Click) -> Vec<DrawCommand> {
		let (state, commands) = handle_click(&self.layout, self.state, click);
		self.state = state;
		commands
	}
}

#[cfg(test)]
mod tests {
	use super::super::types::Row;
	use super::*;

	fn scenario() -> SelectionController {
		SelectionController::new(
			ArcLayout::build(vec![
				Row::new("A", "B", 2.0),
				Row::new("B", "A", 3.0),
				Row::new("A", "C", 1.0),
			])
			.unwrap(),
		)
	}

	fn arcs_toned(commands: &[DrawCommand], wanted: Tone) -> Vec<usize> {
		commands
			.iter()
			.filter_map(|c| match c {
				DrawCommand::DrawArc { order, tone } if *tone == wanted => Some(*order),
				_ => None,
			})
			.collect()
	}

	#[test]
	fn starts_on_first_node_without_arc() {
		let controller = scenario();
		assert_eq!(controller.state(), SelectionState::default());
		assert_eq!(controller.state().selected_node_position, 0);
		assert_eq!(controller.state().selected_arc_order, None);
	}

	#[test]
	fn clicking_a_node_moves_selection_and_highlights_its_arcs() {
		let mut controller = scenario();
		let commands = controller.click(Click::new(2.0, 0.0));

		assert_eq!(controller.state().selected_node_position, 2);
		assert_eq!(arcs_toned(&commands, Tone::Normal), [0, 1]);
		assert_eq!(arcs_toned(&commands, Tone::Selected), [1]);
		assert!(commands.contains(&DrawCommand::DrawPoint {
			position: 2,
			tone: Tone::Selected
		}));
		assert!(commands.contains(&DrawCommand::DrawLabel {
			position: 2,
			tone: Tone::Selected,
			weight: FontWeight::Bold
		}));
		assert!(commands.contains(&DrawCommand::DrawPoint {
			position: 0,
			tone: Tone::Normal
		}));
	}

	#[test]
	fn node_commands_come_in_clear_highlight_restyle_order() {
		let layout = ArcLayout::build(vec![Row::new("A", "B", 1.0), Row::new("B", "C", 2.0)]).unwrap();
		let mut commands = Vec::new();
		select_node(&layout, SelectionState::default(), Click::new(1.0, 0.0), &mut commands);

		assert_eq!(
			commands,
			vec![
				DrawCommand::DrawArc {
					order: 0,
					tone: Tone::Normal
				},
				DrawCommand::SetArcStrokeWidth { order: 0, width: 1.0 },
				DrawCommand::DrawArcLabel {
					order: 0,
					tone: Tone::Background,
					weight: FontWeight::Bold
				},
				DrawCommand::DrawArc {
					order: 0,
					tone: Tone::Selected
				},
				DrawCommand::DrawArcLabel {
					order: 0,
					tone: Tone::Selected,
					weight: FontWeight::Regular
				},
				DrawCommand::DrawArc {
					order: 1,
					tone: Tone::Selected
				},
				DrawCommand::DrawArcLabel {
					order: 1,
					tone: Tone::Selected,
					weight: FontWeight::Regular
				},
				DrawCommand::DrawPoint {
					position: 0,
					tone: Tone::Normal
				},
				DrawCommand::DrawPoint {
					position: 1,
					tone: Tone::Selected
				},
				DrawCommand::DrawLabel {
					position: 0,
					tone: Tone::Normal,
					weight: FontWeight::Regular
				},
				DrawCommand::DrawLabel {
					position: 1,
					tone: Tone::Selected,
					weight: FontWeight::Bold
				},
			]
		);
	}

	#[test]
	fn clearing_restores_the_width_of_every_released_arc() {
		let layout = scenario().layout().clone();
		let mut commands = Vec::new();
		select_node(&layout, SelectionState::default(), Click::new(1.5, 3.0), &mut commands);

		let released = arcs_toned(&commands, Tone::Normal);
		assert_eq!(released, layout.graph().incident_edges(0));
		for order in released {
			let at = commands
				.iter()
				.position(|c| *c == DrawCommand::DrawArc { order, tone: Tone::Normal })
				.unwrap();
			assert_eq!(
				commands[at + 1],
				DrawCommand::SetArcStrokeWidth {
					order,
					width: layout.arcs()[order].stroke_width,
				}
			);
		}
	}

	#[test]
	fn reselecting_the_same_node_is_idempotent() {
		let mut controller = scenario();
		let first = controller.click(Click::new(1.0, 0.0));
		let state = controller.state();
		let second = controller.click(Click::new(1.0, 0.0));

		assert_eq!(controller.state(), state);
		assert_eq!(controller.state().selected_node_position, 1);
		assert_eq!(arcs_toned(&second, Tone::Selected), [0]);
		assert_eq!(second, controller.click(Click::new(1.0, 0.0)));
		assert_eq!(arcs_toned(&first, Tone::Selected), arcs_toned(&second, Tone::Selected));
	}

	#[test]
	fn off_axis_click_resets_visuals_but_keeps_node() {
		let controller = scenario();
		let state = SelectionState {
			selected_node_position: 2,
			selected_arc_order: None,
		};
		let mut commands = Vec::new();
		let after = select_node(controller.layout(), state, Click::new(-0.8, -3.0), &mut commands);

		assert_eq!(after, state);
		assert_eq!(arcs_toned(&commands, Tone::Normal), [1]);
		assert!(arcs_toned(&commands, Tone::Selected).is_empty());
		assert_eq!(
			&commands[commands.len() - 2..],
			[
				DrawCommand::DrawLabel {
					position: 2,
					tone: Tone::Normal,
					weight: FontWeight::Regular
				},
				DrawCommand::DrawPoint {
					position: 2,
					tone: Tone::Normal
				},
			]
		);
	}

	#[test]
	fn clicking_an_arc_picks_it_and_fills_the_info_box() {
		let mut controller = scenario();
		let commands = controller.click(Click::new(0.5, 0.5));

		assert_eq!(controller.state().selected_arc_order, Some(0));
		assert_eq!(arcs_toned(&commands, Tone::Picked), [0]);
		assert_eq!(
			commands.last(),
			Some(&DrawCommand::ShowInfoBox {
				source: "A".into(),
				target: "B".into(),
				weight: 5.0
			})
		);
	}

	#[test]
	fn missing_every_arc_clears_the_previous_pick() {
		let mut controller = scenario();
		controller.click(Click::new(0.5, 0.5));
		let commands = controller.click(Click::new(1.5, 2.0));

		assert_eq!(controller.state().selected_arc_order, None);
		assert!(commands.contains(&DrawCommand::DrawArc {
			order: 0,
			tone: Tone::Normal
		}));
		assert_eq!(commands.last(), Some(&DrawCommand::ClearInfoBox));
	}

	#[test]
	fn first_arc_is_released_like_any_other() {
		let controller = scenario();
		let state = SelectionState {
			selected_node_position: 0,
			selected_arc_order: Some(0),
		};
		let mut commands = Vec::new();
		let after = select_arc(controller.layout(), state, Click::new(1.0, 1.0), &mut commands);

		assert_eq!(after.selected_arc_order, Some(1));
		assert_eq!(
			commands,
			vec![
				DrawCommand::DrawArc {
					order: 0,
					tone: Tone::Normal
				},
				DrawCommand::DrawArc {
					order: 1,
					tone: Tone::Picked
				},
				DrawCommand::ShowInfoBox {
					source: "A".into(),
					target: "C".into(),
					weight: 1.0
				},
			]
		);
	}

	#[test]
	fn one_click_can_move_both_selections() {
		let mut controller = scenario();
		let commands = controller.click(Click::new(2.0, 0.0));

		assert_eq!(
			controller.state(),
			SelectionState {
				selected_node_position: 2,
				selected_arc_order: Some(1),
			}
		);
		assert_eq!(arcs_toned(&commands, Tone::Picked), [1]);
	}

	#[test]
	fn pure_transition_leaves_input_state_alone() {
		let controller = scenario();
		let before = controller.state();
		let (after, _) = handle_click(controller.layout(), before, Click::new(1.0, 0.0));
		assert_eq!(before, SelectionState::default());
		assert_eq!(after.selected_node_position, 1);
	}
}
