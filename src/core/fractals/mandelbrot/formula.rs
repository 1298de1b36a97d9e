use crate::core::actions::compute_escape_times::ports::iteration_formula::IterationFormula;
use crate::core::data::complex::Complex;

/// `z -> z² + c`
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct QuadraticMandelbrot;

impl IterationFormula for QuadraticMandelbrot {
    #[inline]
    fn next(&self, z: Complex, c: Complex) -> Complex {
        z * z + c
    }
}

/// `z -> z² + k` for a fixed `k`, ignoring the sample point after seeding
/// the orbit with it. Gives Julia-style pictures, e.g. `k = -1`,
/// `k = 0.28 + 0.0113i` or `k = i`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadraticOffset {
    pub constant: Complex,
}

impl IterationFormula for QuadraticOffset {
    #[inline]
    fn next(&self, z: Complex, _c: Complex) -> Complex {
        z * z + self.constant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandelbrot_step() {
        let c = Complex::new(1.0, 1.0);

        assert_eq!(QuadraticMandelbrot.next(c, c), Complex::new(1.0, 3.0));
    }

    #[test]
    fn test_offset_step_ignores_sample_point() {
        let formula = QuadraticOffset {
            constant: Complex::new(0.0, 1.0),
        };

        let a = formula.next(Complex::new(1.0, 0.0), Complex::new(5.0, 5.0));
        let b = formula.next(Complex::new(1.0, 0.0), Complex::new(-3.0, 0.5));

        assert_eq!(a, Complex::new(1.0, 1.0));
        assert_eq!(a, b);
    }
}
