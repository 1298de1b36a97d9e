use std::error::Error;
use std::fmt;

use log::{info, warn};

use crate::core::actions::compute_image::{ComputeImageError, compute_image};
use crate::core::actions::next_viewport::next_viewport_with_increment;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::util::screen_to_plane::screen_to_plane;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    NoPendingPress,
    Viewport(ViewportError),
    ComputeImage(ComputeImageError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPendingPress => write!(f, "release without a matching press"),
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::ComputeImage(err) => write!(f, "render error: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoPendingPress => None,
            Self::Viewport(err) => Some(err),
            Self::ComputeImage(err) => Some(err),
        }
    }
}

impl From<ViewportError> for SessionError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<ComputeImageError> for SessionError {
    fn from(err: ComputeImageError) -> Self {
        Self::ComputeImage(err)
    }
}

/// Synchronous zoom-by-drag exploration.
///
/// Holds the committed viewport, the image rendered for it and the plane
/// point of a pending press. A zoom only replaces viewport and image once the
/// new image has been rendered, so a failed zoom leaves the session exactly
/// as it was.
#[derive(Debug)]
pub struct ExplorerSession {
    config: MandelbrotConfig,
    viewport: Viewport,
    image: PixelBuffer,
    pending_press: Option<Complex>,
}

impl ExplorerSession {
    pub fn new(config: MandelbrotConfig) -> Result<Self, SessionError> {
        let viewport = config.initial_viewport()?;
        let image = compute_image(&viewport)?;

        info!(
            "session started at {}x{}, {} iterations",
            viewport.resolution(),
            viewport.resolution(),
            viewport.max_iterations()
        );

        Ok(Self {
            config,
            viewport,
            image,
            pending_press: None,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn image(&self) -> &PixelBuffer {
        &self.image
    }

    #[must_use]
    pub fn has_pending_press(&self) -> bool {
        self.pending_press.is_some()
    }

    /// Plane coordinate under the pointer.
    #[must_use]
    pub fn hover(&self, pixel: Point) -> Complex {
        screen_to_plane(&self.viewport, pixel)
    }

    pub fn press(&mut self, pixel: Point) {
        self.pending_press = Some(screen_to_plane(&self.viewport, pixel));
    }

    /// Completes a drag started by [`ExplorerSession::press`].
    ///
    /// The pending press is consumed whether or not the zoom succeeds.
    pub fn release(&mut self, pixel: Point) -> Result<&PixelBuffer, SessionError> {
        let press = self.pending_press.take().ok_or(SessionError::NoPendingPress)?;
        let release = screen_to_plane(&self.viewport, pixel);

        let next = next_viewport_with_increment(
            &self.viewport,
            press,
            release,
            self.config.zoom_iteration_increment,
        )
        .inspect_err(|err| warn!("zoom rejected, keeping current view: {}", err))?;

        self.commit(next)
    }

    pub fn reset(&mut self) -> Result<&PixelBuffer, SessionError> {
        self.pending_press = None;
        let initial = self.config.initial_viewport()?;

        self.commit(initial)
    }

    fn commit(&mut self, viewport: Viewport) -> Result<&PixelBuffer, SessionError> {
        let image = compute_image(&viewport)
            .inspect_err(|err| warn!("render failed, keeping current view: {}", err))?;

        info!(
            "view x: [{}, {}], y: [{}, {}], {} iterations",
            viewport.xmin(),
            viewport.xmax(),
            viewport.ymin(),
            viewport.ymax(),
            viewport.max_iterations()
        );

        self.viewport = viewport;
        self.image = image;

        Ok(&self.image)
    }
}
