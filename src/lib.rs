//! arc-diagram: Interactive arc diagram of a weighted node-pair graph.
//!
//! This crate provides a WASM-based visualization component that lays nodes
//! out on a single axis, draws edges as semicircular arcs sized by weight, and
//! highlights arcs and nodes on click.

use leptos::either::Either;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::arc_diagram::{
	ArcDiagramCanvas, ArcDiagramError, ArcLayout, DrawCommand, Row, SelectionController, parse_csv,
	parse_json,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("arc-diagram: logging initialized");
}

/// Parse table text according to the script element's `type` attribute.
pub fn parse_table(kind: &str, text: &str) -> Result<Vec<Row>, ArcDiagramError> {
	if kind.eq_ignore_ascii_case("application/json") {
		parse_json(text)
	} else {
		parse_csv(text)
	}
}

/// Read the edge table from a script element with id="graph-data".
/// `type="application/json"` selects JSON rows; anything else is CSV.
fn load_table() -> Option<(String, String)> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("graph-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	Some((script.type_(), script.text().ok()?))
}

/// Load and lay out the graph, or describe why it cannot be drawn.
fn load_layout() -> Result<ArcLayout, String> {
	let (kind, text) = load_table().ok_or_else(|| "no #graph-data element found".to_string())?;
	let layout = parse_table(&kind, &text)
		.and_then(ArcLayout::build)
		.map_err(|e| e.to_string())?;

	info!(
		"arc-diagram: loaded {} nodes, {} arcs from {} rows",
		layout.node_count(),
		layout.arcs().len(),
		layout.graph().rows().len()
	);
	Ok(layout)
}

/// Main application component.
/// Loads the edge table from the DOM and renders the arc diagram.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let body = match load_layout() {
		Ok(layout) => Either::Left(view! { <ArcDiagramCanvas layout=layout fullscreen=true /> }),
		Err(reason) => {
			warn!("arc-diagram: cannot draw graph: {}", reason);
			Either::Right(view! { <p class="graph-error">{reason}</p> })
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Arc diagram" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			{body}
			<div class="graph-overlay">
				<h1>"Arc diagram"</h1>
				<p class="subtitle">"Click a node to highlight its arcs. Click an arc to see its weight."</p>
			</div>
		</div>
	}
}
