//! Arc diagram visualization component.
//!
//! Places the nodes of a weighted, undirected graph on one horizontal axis and
//! draws every edge as a semicircle above it, stroked in proportion to its
//! weight:
//! - Nodes ordered lexicographically, duplicate pairs summed into one arc
//! - Click a node to highlight every arc touching it
//! - Click an arc to show its endpoints and weight in the info box
//!
//! The core (`graph`, `geometry`, `hit`, `selection`, `scene`) is pure and
//! testable without a browser. `render` and [`ArcDiagramCanvas`] bind it to a
//! 2D canvas.
//!
//! # Example
//!
//! ```ignore
//! use arc_diagram::{ArcDiagramCanvas, ArcLayout, parse_csv};
//!
//! let rows = parse_csv("source,target,weight\nA,B,2\nB,C,1\n")?;
//! let layout = ArcLayout::build(rows)?;
//!
//! view! { <ArcDiagramCanvas layout=layout fullscreen=true /> }
//! ```

mod component;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod hit;
mod render;
pub mod scale;
pub mod scene;
pub mod selection;
pub mod table;
pub mod theme;
mod types;

pub use component::ArcDiagramCanvas;
pub use error::{ArcDiagramError, Result};
pub use geometry::{ArcGeom, ArcLayout, PlotBounds};
pub use graph::GraphData;
pub use scene::Scene;
pub use selection::{DrawCommand, SelectionController, SelectionState, handle_click};
pub use table::{parse_csv, parse_json};
pub use theme::Theme;
pub use types::{Click, Edge, FontWeight, Node, Row, Tone};
