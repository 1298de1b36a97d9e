use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, IntervalPoller, NeverCancel,
};
use crate::core::actions::colourize::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use std::error::Error;
use std::fmt;

/// Error type for cancelable colourizing.
#[derive(Debug, Clone, PartialEq)]
pub enum ColourizeError {
    /// The operation was cancelled before completion.
    Cancelled(Cancelled),
    /// The emitted bytes did not fit the image size.
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for ColourizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for ColourizeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<Cancelled> for ColourizeError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

impl From<PixelBufferError> for ColourizeError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Turns an iteration grid into an RGB image.
///
/// For cancel-aware colourizing, use [`colourize_cancelable`].
pub fn colourize<CMap: ColourMap>(
    grid: &IterationGrid,
    mapper: &CMap,
) -> Result<PixelBuffer, PixelBufferError> {
    colourize_cancelable(grid, mapper, &NeverCancel).map_err(|e| match e {
        ColourizeError::PixelBuffer(err) => err,
        ColourizeError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Turns an iteration grid into an RGB image, polling `cancel` every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
///
/// The image is emitted row-major by screen position, and screen pixel
/// `(x, y)` takes its colour from grid cell `(x, y)`. Since the grid keeps its
/// x axis outermost this is a transpose of the grid's storage order.
pub fn colourize_cancelable<CMap, C>(
    grid: &IterationGrid,
    mapper: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, ColourizeError>
where
    CMap: ColourMap,
    C: CancelToken,
{
    let n = grid.resolution();
    let mut buffer: PixelBufferData = Vec::with_capacity(n as usize * n as usize * 3);

    let mut poller = IntervalPoller::new(cancel, CANCEL_CHECK_INTERVAL_PIXELS);
    let screen_order = (0..n).flat_map(|y| (0..n).map(move |x| (x, y)));

    for (x, y) in screen_order {
        poller.poll()?;

        let Colour { r, g, b } = mapper.map(grid.get(x, y));

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(PixelBuffer::from_data(n, buffer)?)
}
