use crate::core::data::complex::Complex;
use crate::core::data::grid_point::GridPoint;
use crate::core::data::viewport::Viewport;
use crate::core::util::lerp::lerp;

fn axis_fraction(index: u32, resolution: u32) -> f64 {
    if resolution == 1 {
        0.0
    } else {
        f64::from(index) / f64::from(resolution - 1)
    }
}

fn axis_samples(lo: f64, hi: f64, resolution: u32) -> Vec<f64> {
    (0..resolution)
        .map(|i| lerp(lo, hi, axis_fraction(i, resolution)))
        .collect()
}

/// Builds the `n x n` sample grid for a viewport, `n` being its resolution.
///
/// Both axes are spaced so the first sample sits on the lower bound and the
/// last on the upper bound. Points come out with `ix` outermost.
#[must_use]
pub fn build_complex_grid(viewport: &Viewport) -> Vec<GridPoint> {
    let n = viewport.resolution();
    let reals = axis_samples(viewport.xmin(), viewport.xmax(), n);
    let imags = axis_samples(viewport.ymin(), viewport.ymax(), n);

    (0..n)
        .flat_map(|ix| {
            let real = reals[ix as usize];
            imags.iter().enumerate().map(move |(iy, &imag)| GridPoint {
                ix,
                iy: iy as u32,
                c: Complex { real, imag },
            })
        })
        .collect()
}

/// Returns the grid cell whose sample lies nearest to `c`, or `None` when `c`
/// is outside the viewport.
#[must_use]
pub fn grid_cell_for(viewport: &Viewport, c: Complex) -> Option<(u32, u32)> {
    let n = viewport.resolution();
    let within = viewport.xmin() <= c.real
        && c.real <= viewport.xmax()
        && viewport.ymin() <= c.imag
        && c.imag <= viewport.ymax();

    if !within {
        return None;
    }

    let last = f64::from(n - 1);
    let ix = ((c.real - viewport.xmin()) / viewport.width() * last).round();
    let iy = ((c.imag - viewport.ymin()) / viewport.height() * last).round();

    Some((ix as u32, iy as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_has_one_point_per_cell() {
        let viewport = Viewport::new(-2.0, 0.5, -1.25, 1.25, 7, 10).unwrap();

        let grid = build_complex_grid(&viewport);

        assert_eq!(grid.len(), 49);
    }

    #[test]
    fn test_grid_corners_hit_bounds_exactly() {
        let viewport = Viewport::new(0.1, 0.7, -0.3, 0.3, 9, 10).unwrap();

        let grid = build_complex_grid(&viewport);
        let first = grid.first().unwrap();
        let last = grid.last().unwrap();

        assert_eq!((first.ix, first.iy), (0, 0));
        assert_eq!(first.c, Complex::new(0.1, -0.3));
        assert_eq!((last.ix, last.iy), (8, 8));
        assert_eq!(last.c, Complex::new(0.7, 0.3));
    }

    #[test]
    fn test_grid_is_linearly_spaced_with_x_outermost() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0, 5, 10).unwrap();

        let grid = build_complex_grid(&viewport);

        assert_eq!(grid[1].ix, 0);
        assert_eq!(grid[1].iy, 1);
        assert_eq!(grid[1].c, Complex::new(-2.0, -1.0));
        assert_eq!(grid[5].ix, 1);
        assert_eq!(grid[5].iy, 0);
        assert_eq!(grid[5].c, Complex::new(-1.0, -2.0));
        assert_eq!(grid[12].c, Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_single_cell_grid_sits_on_lower_bounds() {
        let viewport = Viewport::new(-1.0, 1.0, -3.0, 3.0, 1, 10).unwrap();

        let grid = build_complex_grid(&viewport);

        assert_eq!(
            grid,
            vec![GridPoint {
                ix: 0,
                iy: 0,
                c: Complex::new(-1.0, -3.0)
            }]
        );
    }

    #[test]
    fn test_grid_is_deterministic() {
        let viewport = Viewport::new(-0.75, -0.74, 0.1, 0.11, 16, 10).unwrap();

        assert_eq!(build_complex_grid(&viewport), build_complex_grid(&viewport));
    }

    #[test]
    fn test_grid_cell_for_round_trips_samples() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0, 5, 10).unwrap();

        for point in build_complex_grid(&viewport) {
            assert_eq!(grid_cell_for(&viewport, point.c), Some((point.ix, point.iy)));
        }
    }

    #[test]
    fn test_grid_cell_for_outside_viewport() {
        let viewport = Viewport::new(-2.0, 0.5, -1.25, 1.25, 600, 150).unwrap();

        assert_eq!(grid_cell_for(&viewport, Complex::new(1.0, 1.0)), None);
    }
}
