//! Visual theming for the arc diagram.
//!
//! Maps the semantic [`Tone`]s the core emits onto concrete colours, and holds
//! the remaining style constants the renderer needs.

use super::types::{FontWeight, Tone};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	/// Opaque colour.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Colour with alpha in `[0, 1]`.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same colour, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Hex for opaque colours, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colours bound to each tone.
#[derive(Clone, Debug)]
pub struct ToneColors {
	/// [`Tone::Normal`].
	pub normal: Color,
	/// [`Tone::Selected`].
	pub selected: Color,
	/// [`Tone::Picked`].
	pub picked: Color,
}

/// Info box style.
#[derive(Clone, Debug)]
pub struct InfoBoxStyle {
	/// Box background.
	pub fill: Color,
	/// Box outline.
	pub border: Color,
	/// Text colour.
	pub text: Color,
	/// Offset of the box from the top-left corner, in pixels.
	pub inset: f64,
	/// Space between border and text, in pixels.
	pub padding: f64,
	/// Distance between text baselines, in pixels.
	pub line_height: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Preset name, for logs.
	pub name: &'static str,
	/// Canvas fill; also what [`Tone::Background`] paints with.
	pub background: Color,
	/// Colours of the other tones.
	pub tones: ToneColors,
	/// Info box style.
	pub info: InfoBoxStyle,
	/// Node marker radius in pixels.
	pub point_radius: f64,
	/// Pixels per unit of arc display width.
	pub stroke_scale: f64,
	/// Font size in pixels for labels and the info box.
	pub font_size: f64,
	/// CSS font family for all text.
	pub font_family: &'static str,
}

impl Theme {
	/// Blue arcs on white, red selection, green picked arc.
	pub fn classic() -> Self {
		Self {
			name: "classic",
			background: Color::rgb(255, 255, 255),
			tones: ToneColors {
				normal: Color::rgb(0, 0, 255),
				selected: Color::rgb(255, 0, 0),
				picked: Color::rgb(0, 128, 0),
			},
			info: InfoBoxStyle {
				fill: Color::rgba(176, 196, 222, 0.5),
				border: Color::rgb(0, 0, 128),
				text: Color::rgb(0, 0, 0),
				inset: 12.0,
				padding: 8.0,
				line_height: 16.0,
			},
			point_radius: 4.0,
			stroke_scale: 1.5,
			font_size: 12.0,
			font_family: "sans-serif",
		}
	}

	/// Concrete colour of `tone`.
	pub fn color(&self, tone: Tone) -> Color {
		match tone {
			Tone::Normal => self.tones.normal,
			Tone::Selected => self.tones.selected,
			Tone::Picked => self.tones.picked,
			Tone::Background => self.background,
		}
	}

	/// CSS font shorthand for the given weight.
	pub fn font(&self, weight: FontWeight) -> String {
		let weight = match weight {
			FontWeight::Regular => "normal",
			FontWeight::Bold => "bold",
		};
		format!("{} {}px {}", weight, self.font_size, self.font_family)
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::classic()
	}
}
