use crate::core::data::complex::Complex;

/// The recurrence applied to every active point once per round.
///
/// Implementations only describe `f(z, c)`; pruning and bookkeeping stay in
/// the escape-time pass. Every orbit starts at `z = c`.
pub trait IterationFormula: Send + Sync {
    fn next(&self, z: Complex, c: Complex) -> Complex;
}
