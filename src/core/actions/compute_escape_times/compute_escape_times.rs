use std::time::Instant;

use log::{debug, trace};
use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::compute_escape_times::ports::iteration_formula::IterationFormula;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_grid::{IterationGrid, UNSET};
use crate::core::data::viewport::Viewport;
use crate::core::util::build_complex_grid::build_complex_grid;

/// `|z| > 4` compared without the square root.
pub const ESCAPE_RADIUS_SQUARED: f64 = 16.0;

// Below this many active points per rayon job the update runs inline.
const PARALLEL_MIN_LEN: usize = 2048;

/// The grid value for points that never escaped.
///
/// One past the cap, so it can never collide with a real escape iteration,
/// which is at most `max_iterations`.
#[must_use]
pub fn inside_value(max_iterations: u32) -> u32 {
    max_iterations.saturating_add(1)
}

#[derive(Debug, Copy, Clone)]
struct ActivePoint {
    c: Complex,
    z: Complex,
    cell: usize,
}

/// Runs the escape-time pass over every sample point of `viewport`.
///
/// For cancel-aware computation, use [`compute_escape_times_cancelable`].
pub fn compute_escape_times<F: IterationFormula>(viewport: &Viewport, formula: &F) -> IterationGrid {
    match compute_escape_times_cancelable(viewport, formula, &NeverCancel) {
        Ok(grid) => grid,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Runs the escape-time pass with progressive pruning.
///
/// Every round applies `formula` to the still-active points, records
/// `round + 1` for each point whose orbit left the escape radius and drops it
/// from the active set. The active set is a single buffer whose live prefix
/// shrinks: escaped entries are swapped past the end of the prefix, so the
/// total work is proportional to the summed escape iterations rather than
/// `resolution² * max_iterations`.
///
/// The token is polled once per round. On cancellation the partially filled
/// grid is dropped.
pub fn compute_escape_times_cancelable<F, C>(
    viewport: &Viewport,
    formula: &F,
    cancel: &C,
) -> Result<IterationGrid, Cancelled>
where
    F: IterationFormula,
    C: CancelToken,
{
    let start = Instant::now();
    let n = viewport.resolution() as usize;
    let mut cells = vec![UNSET; n * n];

    let mut active: Vec<ActivePoint> = build_complex_grid(viewport)
        .into_iter()
        .map(|point| ActivePoint {
            c: point.c,
            z: point.c,
            cell: point.ix as usize * n + point.iy as usize,
        })
        .collect();
    let mut active_len = active.len();

    for round in 0..viewport.max_iterations() {
        if active_len == 0 {
            break;
        }

        cancel.check()?;

        active[..active_len]
            .par_iter_mut()
            .with_min_len(PARALLEL_MIN_LEN)
            .for_each(|point| point.z = formula.next(point.z, point.c));

        let mut k = 0;
        while k < active_len {
            if active[k].z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                cells[active[k].cell] = round + 1;
                active_len -= 1;
                active.swap(k, active_len);
            } else {
                k += 1;
            }
        }

        trace!("round {}: {} points still active", round + 1, active_len);
    }

    let inside = inside_value(viewport.max_iterations());
    for cell in cells.iter_mut().filter(|cell| **cell == UNSET) {
        *cell = inside;
    }

    debug!(
        "escape times for {}x{} grid, {} iterations: {} inside, took {:?}",
        n,
        n,
        viewport.max_iterations(),
        active_len,
        start.elapsed()
    );

    Ok(IterationGrid::from_parts(viewport.resolution(), inside, cells))
}
