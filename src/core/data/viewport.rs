use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidViewport {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },
    InvalidConfiguration {
        resolution: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport {
                xmin,
                xmax,
                ymin,
                ymax,
            } => {
                write!(
                    f,
                    "viewport must have positive area: x: [{}, {}], y: [{}, {}]",
                    xmin, xmax, ymin, ymax
                )
            }
            Self::InvalidConfiguration {
                resolution,
                max_iterations,
            } => {
                write!(
                    f,
                    "resolution and max iterations must be greater than zero: resolution {}, max iterations {}",
                    resolution, max_iterations
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The region of the complex plane mapped onto an `n x n` pixel grid, plus
/// the iteration cap used for that region.
///
/// A `Viewport` can only be obtained through [`Viewport::new`], so every
/// value in circulation has positive area and non-zero resolution and cap.
/// Zooming produces a new value rather than mutating an existing one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    resolution: u32,
    max_iterations: u32,
}

impl Viewport {
    pub fn new(
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        resolution: u32,
        max_iterations: u32,
    ) -> Result<Self, ViewportError> {
        if resolution == 0 || max_iterations == 0 {
            return Err(ViewportError::InvalidConfiguration {
                resolution,
                max_iterations,
            });
        }

        // written negated so NaN bounds are rejected too
        if !(xmin < xmax) || !(ymin < ymax) {
            return Err(ViewportError::InvalidViewport {
                xmin,
                xmax,
                ymin,
                ymax,
            });
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
            resolution,
            max_iterations,
        })
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(-2.0, 0.5, -1.25, 1.25, 600, 150).unwrap();

        assert_eq!(viewport.xmin(), -2.0);
        assert_eq!(viewport.xmax(), 0.5);
        assert_eq!(viewport.ymin(), -1.25);
        assert_eq!(viewport.ymax(), 1.25);
        assert_eq!(viewport.resolution(), 600);
        assert_eq!(viewport.max_iterations(), 150);
        assert_eq!(viewport.width(), 2.5);
        assert_eq!(viewport.height(), 2.5);
    }

    #[test]
    fn test_viewport_bounds_must_have_positive_area() {
        let zero_width = Viewport::new(1.0, 1.0, 0.0, 1.0, 10, 10);
        let negative_height = Viewport::new(0.0, 1.0, 1.0, -1.0, 10, 10);

        assert_eq!(
            zero_width,
            Err(ViewportError::InvalidViewport {
                xmin: 1.0,
                xmax: 1.0,
                ymin: 0.0,
                ymax: 1.0
            })
        );
        assert_eq!(
            negative_height,
            Err(ViewportError::InvalidViewport {
                xmin: 0.0,
                xmax: 1.0,
                ymin: 1.0,
                ymax: -1.0
            })
        );
    }

    #[test]
    fn test_viewport_rejects_nan_bounds() {
        let result = Viewport::new(f64::NAN, 1.0, 0.0, 1.0, 10, 10);

        assert!(matches!(result, Err(ViewportError::InvalidViewport { .. })));
    }

    #[test]
    fn test_viewport_rejects_zero_resolution_or_iterations() {
        assert_eq!(
            Viewport::new(0.0, 1.0, 0.0, 1.0, 0, 10),
            Err(ViewportError::InvalidConfiguration {
                resolution: 0,
                max_iterations: 10
            })
        );
        assert_eq!(
            Viewport::new(0.0, 1.0, 0.0, 1.0, 10, 0),
            Err(ViewportError::InvalidConfiguration {
                resolution: 10,
                max_iterations: 0
            })
        );
    }

    #[test]
    fn test_configuration_is_checked_before_bounds() {
        let result = Viewport::new(1.0, 1.0, 1.0, 1.0, 0, 0);

        assert!(matches!(
            result,
            Err(ViewportError::InvalidConfiguration { .. })
        ));
    }
}
