//! Leptos component wrapping the arc diagram canvas.
//!
//! The component creates an HTML canvas element and wires click and hover
//! handlers to the selection controller. There is no animation loop: the
//! canvas is repainted whenever a click or hover changes the scene.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::geometry::ArcLayout;
use super::render;
use super::scale::PlotTransform;
use super::scene::Scene;
use super::selection::SelectionController;
use super::theme::Theme;
use super::types::Click;

/// Bundles the controller with everything needed to repaint.
struct DiagramContext {
	controller: SelectionController,
	scene: Scene,
	transform: PlotTransform,
	theme: Theme,
	ctx: CanvasRenderingContext2d,
}

impl DiagramContext {
	fn redraw(&self) {
		render::render(&self.scene, &self.ctx, &self.transform, &self.theme);
	}

	fn click(&mut self, sx: f64, sy: f64) {
		let (x, y) = self.transform.screen_to_plot(sx, sy);
		let commands = self.controller.click(Click::new(x, y));
		debug!(
			"arc-diagram: click ({x:.2}, {y:.2}) -> {}",
			serde_json::to_string(&commands).unwrap_or_default()
		);
		if let Err(e) = self.scene.apply_all(&commands) {
			warn!("arc-diagram: {e}");
		}
		self.redraw();
	}

	fn hover(&mut self, sx: f64, sy: f64) {
		let (x, y) = self.transform.screen_to_plot(sx, sy);
		let node = self.controller.layout().locate_node(x, y);
		if self.scene.set_hover(node) {
			self.redraw();
		}
	}
}

fn event_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Renders an interactive arc diagram on a canvas element.
///
/// The component sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and resize with the window.
/// Explicit `width`/`height` override automatic sizing.
#[component]
pub fn ArcDiagramCanvas(
	layout: ArcLayout,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<DiagramContext>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, resize_cb_init) = (context.clone(), resize_cb.clone());
	let layout = RefCell::new(Some(layout));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(layout) = layout.borrow_mut().take() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into().ok())
		{
			Some(ctx) => ctx,
			None => {
				warn!("arc-diagram: canvas has no 2d context");
				return;
			}
		};

		let transform = PlotTransform::new(layout.bounds(), w, h);
		let diagram = DiagramContext {
			scene: Scene::new(&layout),
			controller: SelectionController::new(layout),
			transform,
			theme: Theme::default(),
			ctx,
		};
		diagram.redraw();
		*context_init.borrow_mut() = Some(diagram);

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.transform.resize(nw, nh);
					c.redraw();
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});

	let context_click = context.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = event_position(&canvas.into(), &ev);
		if let Some(ref mut c) = *context_click.borrow_mut() {
			c.click(x, y);
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = event_position(&canvas.into(), &ev);
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.hover(x, y);
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			if c.scene.set_hover(None) {
				c.redraw();
			}
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="arc-diagram-canvas"
			on:click=on_click
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block; cursor: crosshair;"
		/>
	}
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}
