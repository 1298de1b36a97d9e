use crate::core::data::complex::Complex;

/// A sample point of the complex grid together with the grid cell it came from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridPoint {
    pub ix: u32,
    pub iy: u32,
    pub c: Complex,
}
