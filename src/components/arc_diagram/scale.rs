//! Mapping between plot coordinates and canvas pixels.
//!
//! # Coordinate Spaces
//!
//! - **Plot space**: node positions on the x axis, arcs bulging into positive
//!   y. This is the space clicks are resolved in before reaching the core.
//! - **Screen space**: canvas pixels, y pointing down.
//!
//! Both axes share one scale factor so semicircles stay round; the plot is
//! centred in whichever direction has room to spare.

use super::geometry::PlotBounds;

/// Uniform plot-to-screen transform for a canvas of a given size.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotTransform {
	/// Plot extent being mapped.
	pub bounds: PlotBounds,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Pixels per plot unit.
	pub k: f64,
	/// Screen x of plot x = `bounds.x_min`.
	origin_x: f64,
	/// Screen y of plot y = `bounds.y_max`.
	origin_y: f64,
}

impl PlotTransform {
	/// Fit `bounds` into a `width` x `height` canvas.
	pub fn new(bounds: PlotBounds, width: f64, height: f64) -> Self {
		let k = (width / bounds.width()).min(height / bounds.height()).max(f64::MIN_POSITIVE);
		Self {
			bounds,
			width,
			height,
			k,
			origin_x: (width - bounds.width() * k) / 2.0,
			origin_y: (height - bounds.height() * k) / 2.0,
		}
	}

	/// Refit the same bounds to a new canvas size.
	pub fn resize(&mut self, width: f64, height: f64) {
		*self = Self::new(self.bounds, width, height);
	}

	/// Plot coordinates to canvas pixels.
	pub fn plot_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
		(
			self.origin_x + (x - self.bounds.x_min) * self.k,
			self.origin_y + (self.bounds.y_max - y) * self.k,
		)
	}

	/// Canvas pixels to plot coordinates.
	pub fn screen_to_plot(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			self.bounds.x_min + (sx - self.origin_x) / self.k,
			self.bounds.y_max - (sy - self.origin_y) / self.k,
		)
	}

	/// Length in pixels of `len` plot units.
	pub fn scale(&self, len: f64) -> f64 {
		len * self.k
	}
}
