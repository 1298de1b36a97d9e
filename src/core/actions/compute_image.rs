use std::error::Error;
use std::fmt;
use std::time::Instant;

use log::debug;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::colourize::colourize::{ColourizeError, colourize_cancelable};
use crate::core::actions::colourize::ports::colour_map::ColourMap;
use crate::core::actions::compute_escape_times::compute_escape_times::compute_escape_times_cancelable;
use crate::core::actions::compute_escape_times::ports::iteration_formula::IterationFormula;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_map::ModularShadeColourMap;
use crate::core::fractals::mandelbrot::formula::QuadraticMandelbrot;

#[derive(Debug, Clone, PartialEq)]
pub enum ComputeImageError {
    Cancelled(Cancelled),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for ComputeImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for ComputeImageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<Cancelled> for ComputeImageError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

impl From<ColourizeError> for ComputeImageError {
    fn from(err: ColourizeError) -> Self {
        match err {
            ColourizeError::Cancelled(c) => Self::Cancelled(c),
            ColourizeError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

/// Renders the Mandelbrot set over `viewport`.
pub fn compute_image(viewport: &Viewport) -> Result<PixelBuffer, ComputeImageError> {
    compute_image_with(viewport, &QuadraticMandelbrot, &ModularShadeColourMap, &NeverCancel)
}

/// Renders `viewport` with a chosen recurrence and palette.
///
/// Nothing partial escapes a cancelled render: either the whole image is
/// returned or [`ComputeImageError::Cancelled`].
pub fn compute_image_with<F, CMap, C>(
    viewport: &Viewport,
    formula: &F,
    colour_map: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, ComputeImageError>
where
    F: IterationFormula,
    CMap: ColourMap,
    C: CancelToken,
{
    let start = Instant::now();

    let grid = compute_escape_times_cancelable(viewport, formula, cancel)?;
    let image = colourize_cancelable(&grid, colour_map, cancel)?;

    debug!(
        "rendered {}x{} image with {} colours in {:?}",
        image.resolution(),
        image.resolution(),
        colour_map.display_name(),
        start.elapsed()
    );

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::next_viewport::next_viewport;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::data::viewport::ViewportError;
    use crate::core::util::build_complex_grid::grid_cell_for;
    use crate::core::util::screen_to_plane::screen_to_plane;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn default_viewport() -> Viewport {
        Viewport::new(-2.0, 0.5, -1.25, 1.25, 600, 150).unwrap()
    }

    #[test]
    fn test_default_view_produces_full_image() {
        let image = compute_image(&default_viewport()).unwrap();

        assert_eq!(image.resolution(), 600);
        assert_eq!(image.buffer_size(), 600 * 600 * 3);
    }

    #[test]
    fn test_interior_pixel_has_inside_colour() {
        let viewport = default_viewport();
        let image = compute_image(&viewport).unwrap();

        let (x, y) = grid_cell_for(&viewport, Complex::new(-1.0, 0.0)).unwrap();
        let colour = image.pixel(Point { x: x as i32, y: y as i32 }).unwrap();

        assert_eq!(colour, ModularShadeColourMap.map(151));
    }

    #[test]
    fn test_renders_are_byte_identical() {
        let viewport = Viewport::new(-0.8, -0.7, 0.05, 0.15, 64, 200).unwrap();

        let first = compute_image(&viewport).unwrap();
        let second = compute_image(&viewport).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_click_without_drag_never_reaches_the_engine() {
        let viewport = default_viewport();
        let press = screen_to_plane(&viewport, Point { x: 300, y: 300 });

        let result = next_viewport(&viewport, press, press).map(|next| compute_image(&next));

        assert!(matches!(result, Err(ViewportError::InvalidViewport { .. })));
    }

    #[test]
    fn test_zoom_then_render() {
        let viewport = default_viewport();
        let press = screen_to_plane(&viewport, Point { x: 200, y: 250 });
        let release = screen_to_plane(&viewport, Point { x: 260, y: 290 });

        let next = next_viewport(&viewport, press, release).unwrap();
        let image = compute_image(&next).unwrap();

        assert_eq!(next.max_iterations(), 165);
        assert_eq!(image.resolution(), 600);
    }

    #[test]
    fn test_cancelled_render_returns_cancelled() {
        let cancel = || true;

        let result = compute_image_with(
            &default_viewport(),
            &QuadraticMandelbrot,
            &ModularShadeColourMap,
            &cancel,
        );

        assert_eq!(result, Err(ComputeImageError::Cancelled(Cancelled)));
    }

    #[test]
    fn test_cancelled_after_escape_pass_returns_cancelled() {
        // every point escapes on the first round, so the escape pass polls
        // once and the colourizer's first poll cancels
        let viewport = Viewport::new(3.0, 4.0, 3.0, 4.0, 8, 10).unwrap();
        let polls = AtomicUsize::new(0);
        let cancel = || polls.fetch_add(1, Ordering::Relaxed) >= 1;

        let result = compute_image_with(&viewport, &QuadraticMandelbrot, &ModularShadeColourMap, &cancel);

        assert_eq!(result, Err(ComputeImageError::Cancelled(Cancelled)));
    }
}
