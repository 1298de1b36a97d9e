use crate::core::actions::next_viewport::DEFAULT_ZOOM_ITERATION_INCREMENT;
use crate::core::data::viewport::{Viewport, ViewportError};

pub const DEFAULT_RESOLUTION: u32 = 600;
pub const DEFAULT_MAX_ITERATIONS: u32 = 150;
pub const DEFAULT_BOUNDS: Bounds = Bounds {
    xmin: -2.0,
    xmax: 0.5,
    ymin: -1.25,
    ymax: 1.25,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

/// Startup settings supplied by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub resolution: u32,
    pub initial_bounds: Bounds,
    pub initial_max_iterations: u32,
    pub zoom_iteration_increment: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            initial_bounds: DEFAULT_BOUNDS,
            initial_max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom_iteration_increment: DEFAULT_ZOOM_ITERATION_INCREMENT,
        }
    }
}

impl MandelbrotConfig {
    pub fn initial_viewport(&self) -> Result<Viewport, ViewportError> {
        let Bounds {
            xmin,
            xmax,
            ymin,
            ymax,
        } = self.initial_bounds;

        Viewport::new(
            xmin,
            xmax,
            ymin,
            ymax,
            self.resolution,
            self.initial_max_iterations,
        )
    }
}
