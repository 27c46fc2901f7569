// File: crates/sentinel-chart/src/lib.rs
// Summary: Renderer library entry point; exports the chart model and raster rendering API.

pub mod annotation;
pub mod axis;
pub mod chart;
pub mod downsample;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use annotation::{AnnotationLabel, HLineAnnotation, LabelPosition};
pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use downsample::lttb;
pub use series::{LineStyle, Series};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{ColorParseError, Insets, Rgba};
pub use view::ViewState;
