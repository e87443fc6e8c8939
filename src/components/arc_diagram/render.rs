//! Canvas rendering for the arc diagram.
//!
//! Paints a [`Scene`] in passes, back to front:
//! 1. Background
//! 2. Arcs in edge order, so later arcs sit on top
//! 3. Weight labels of highlighted arcs
//! 4. Node markers and their rotated labels
//! 5. Hover tooltip and the info box (screen space)

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scale::PlotTransform;
use super::scene::{ArcSprite, InfoBox, Scene};
use super::theme::Theme;
use super::types::Tone;

/// Renders the complete scene to the canvas.
pub fn render(scene: &Scene, ctx: &CanvasRenderingContext2d, transform: &PlotTransform, theme: &Theme) {
	draw_background(ctx, transform, theme);

	for arc in &scene.arcs {
		draw_arc(ctx, transform, theme, arc);
	}
	for arc in &scene.arcs {
		draw_arc_label(ctx, transform, theme, arc);
	}

	draw_nodes(scene, ctx, transform, theme);

	if let Some(position) = scene.hover {
		draw_tooltip(scene, ctx, transform, theme, position);
	}
	draw_info_box(ctx, theme, scene.info.as_ref());
}

fn draw_background(ctx: &CanvasRenderingContext2d, transform: &PlotTransform, theme: &Theme) {
	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, transform.width, transform.height);
}

fn draw_arc(ctx: &CanvasRenderingContext2d, transform: &PlotTransform, theme: &Theme, arc: &ArcSprite) {
	let radius = transform.scale(arc.geom.radius);
	if radius < 0.5 {
		return;
	}
	let (cx, cy) = transform.plot_to_screen(arc.geom.center, 0.0);

	ctx.set_stroke_style_str(&theme.color(arc.tone).to_css());
	ctx.set_line_width((arc.stroke_width * theme.stroke_scale).max(0.5));
	ctx.begin_path();
	// Screen y points down, so PI..2PI clockwise is the upper half.
	let _ = ctx.arc(cx, cy, radius, PI, 2.0 * PI);
	ctx.stroke();
}

fn draw_arc_label(ctx: &CanvasRenderingContext2d, transform: &PlotTransform, theme: &Theme, arc: &ArcSprite) {
	if arc.label_tone == Tone::Background {
		return;
	}
	let (x, y) = arc.geom.apex();
	let (sx, sy) = transform.plot_to_screen(x, y);

	ctx.set_fill_style_str(&theme.color(arc.label_tone).to_css());
	ctx.set_font(&theme.font(arc.label_weight));
	ctx.set_text_align("left");
	ctx.set_text_baseline("bottom");
	let _ = ctx.fill_text(&arc.weight.to_string(), sx, sy - 6.0);
}

fn draw_nodes(scene: &Scene, ctx: &CanvasRenderingContext2d, transform: &PlotTransform, theme: &Theme) {
	for (position, tone) in scene.points.iter().enumerate() {
		let (sx, sy) = transform.plot_to_screen(position as f64, 0.0);
		ctx.begin_path();
		let _ = ctx.arc(sx, sy, theme.point_radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&theme.color(*tone).to_css());
		ctx.fill();
	}

	for (position, label) in scene.labels.iter().enumerate() {
		let (sx, sy) = transform.plot_to_screen(position as f64, 0.0);
		ctx.save();
		let _ = ctx.translate(sx, sy + theme.point_radius + 4.0);
		let _ = ctx.rotate(-PI / 2.0);
		ctx.set_fill_style_str(&theme.color(label.tone).to_css());
		ctx.set_font(&theme.font(label.weight));
		ctx.set_text_align("right");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&label.text, 0.0, 0.0);
		ctx.restore();
	}
}

fn draw_tooltip(
	scene: &Scene,
	ctx: &CanvasRenderingContext2d,
	transform: &PlotTransform,
	theme: &Theme,
	position: usize,
) {
	let Some(label) = scene.labels.get(position) else {
		return;
	};
	let (sx, sy) = transform.plot_to_screen(position as f64, 0.0);
	let (x, y) = (sx + theme.point_radius + 6.0, sy - theme.point_radius - 6.0);
	let width = label.text.chars().count() as f64 * theme.font_size * 0.6 + 2.0 * theme.info.padding;
	let height = theme.font_size + 2.0 * theme.info.padding;

	ctx.set_fill_style_str(&theme.info.fill.with_alpha(0.9).to_css());
	ctx.fill_rect(x, y - height, width, height);
	ctx.set_stroke_style_str(&theme.info.border.to_css());
	ctx.set_line_width(1.0);
	ctx.stroke_rect(x, y - height, width, height);

	ctx.set_fill_style_str(&theme.info.text.to_css());
	ctx.set_font(&theme.font(label.weight));
	ctx.set_text_align("left");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(&label.text, x + theme.info.padding, y - height / 2.0);
}

/// Draws the info box; `None` draws the cleared box.
fn draw_info_box(ctx: &CanvasRenderingContext2d, theme: &Theme, info: Option<&InfoBox>) {
	let cleared = InfoBox::default();
	let lines = info.unwrap_or(&cleared).lines();
	let style = &theme.info;

	let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
	let width = longest as f64 * theme.font_size * 0.6 + 2.0 * style.padding;
	let height = lines.len() as f64 * style.line_height + 2.0 * style.padding;

	ctx.set_fill_style_str(&style.fill.to_css());
	ctx.fill_rect(style.inset, style.inset, width, height);
	ctx.set_stroke_style_str(&style.border.to_css());
	ctx.set_line_width(1.0);
	ctx.stroke_rect(style.inset, style.inset, width, height);

	ctx.set_fill_style_str(&style.text.to_css());
	ctx.set_font(&theme.font(Default::default()));
	ctx.set_text_align("left");
	ctx.set_text_baseline("top");
	for (i, line) in lines.iter().enumerate() {
		let _ = ctx.fill_text(
			line,
			style.inset + style.padding,
			style.inset + style.padding + i as f64 * style.line_height,
		);
	}
}
