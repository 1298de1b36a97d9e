use log::debug;

use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};

/// Iterations added to the cap on every zoom.
pub const DEFAULT_ZOOM_ITERATION_INCREMENT: u32 = 15;

/// Derives the viewport selected by a drag from `press` to `release`, both
/// already in plane coordinates, raising the cap by the default increment.
pub fn next_viewport(
    viewport: &Viewport,
    press: Complex,
    release: Complex,
) -> Result<Viewport, ViewportError> {
    next_viewport_with_increment(viewport, press, release, DEFAULT_ZOOM_ITERATION_INCREMENT)
}

/// Derives the viewport selected by a drag from `press` to `release`.
///
/// The new region is a square anchored at the lower corner of the drag's
/// bounding box whose side is the length of the drag's diagonal, whatever the
/// drag's own aspect ratio. Resolution is kept and the cap grows by
/// `iteration_increment`.
///
/// A click without movement selects a zero-area square and fails with
/// [`ViewportError::InvalidViewport`]; the caller keeps its current viewport.
pub fn next_viewport_with_increment(
    viewport: &Viewport,
    press: Complex,
    release: Complex,
    iteration_increment: u32,
) -> Result<Viewport, ViewportError> {
    let xmin = press.real.min(release.real);
    let ymin = press.imag.min(release.imag);
    let side = (press.real - release.real).hypot(press.imag - release.imag);

    let next = Viewport::new(
        xmin,
        xmin + side,
        ymin,
        ymin + side,
        viewport.resolution(),
        viewport.max_iterations().saturating_add(iteration_increment),
    )?;

    debug!(
        "zoom to x: [{}, {}], y: [{}, {}], {} iterations",
        next.xmin(),
        next.xmax(),
        next.ymin(),
        next.ymax(),
        next.max_iterations()
    );

    Ok(next)
}
