use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::lerp::lerp;

/// Maps a screen pixel to the complex plane.
///
/// Pixel `0` sits on the lower bound and pixel `resolution` on the upper
/// bound of each axis. Coordinates outside the screen are extrapolated along
/// the same line, which keeps hover reports meaningful while dragging off the
/// edge of the window.
#[must_use]
pub fn screen_to_plane(viewport: &Viewport, pixel: Point) -> Complex {
    let resolution = f64::from(viewport.resolution());
    let tx = f64::from(pixel.x) / resolution;
    let ty = f64::from(pixel.y) / resolution;

    Complex {
        real: lerp(viewport.xmin(), viewport.xmax(), tx),
        imag: lerp(viewport.ymin(), viewport.ymax(), ty),
    }
}
