//! Escape-time rendering of the Mandelbrot set with drag-to-zoom viewports.
//!
//! The pipeline is `Viewport` -> sample grid -> iteration grid -> RGB image.
//! Platform code drives it through [`compute_image`], [`screen_to_plane`] and
//! [`next_viewport`], or through the [`ExplorerSession`] and
//! [`InteractiveController`] controllers.

mod controllers;
mod core;

pub use controllers::interactive::data::frame_data::FrameData;
pub use controllers::interactive::errors::render_error::RenderError;
pub use controllers::interactive::{
    InteractiveController, InteractiveControllerPresenterPort, RenderEvent,
};
pub use controllers::session::explorer_session::{ExplorerSession, SessionError};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::colourize::colourize::{colourize, colourize_cancelable, ColourizeError};
pub use crate::core::actions::colourize::ports::colour_map::ColourMap;
pub use crate::core::actions::compute_escape_times::compute_escape_times::{
    compute_escape_times, compute_escape_times_cancelable, inside_value, ESCAPE_RADIUS_SQUARED,
};
pub use crate::core::actions::compute_escape_times::ports::iteration_formula::IterationFormula;
pub use crate::core::actions::compute_image::{compute_image, compute_image_with, ComputeImageError};
pub use crate::core::actions::next_viewport::{
    next_viewport, next_viewport_with_increment, DEFAULT_ZOOM_ITERATION_INCREMENT,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid_point::GridPoint;
pub use crate::core::data::iteration_grid::{IterationGrid, IterationGridError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::colour_map::ModularShadeColourMap;
pub use crate::core::fractals::mandelbrot::formula::{QuadraticMandelbrot, QuadraticOffset};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{
    Bounds, MandelbrotConfig, DEFAULT_BOUNDS, DEFAULT_MAX_ITERATIONS, DEFAULT_RESOLUTION,
};
pub use crate::core::util::build_complex_grid::{build_complex_grid, grid_cell_for};
pub use crate::core::util::screen_to_plane::screen_to_plane;
