use std::error::Error;
use std::fmt;

/// Value held by a cell before the escape-time pass has classified it.
pub const UNSET: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationGridError {
    CellCountMismatch { expected: usize, actual: usize },
    ZeroResolution,
}

impl fmt::Display for IterationGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "expected {} cells, got {}", expected, actual)
            }
            Self::ZeroResolution => write!(f, "iteration grid resolution must be greater than zero"),
        }
    }
}

impl Error for IterationGridError {}

/// Per-pixel escape iterations for one computed viewport.
///
/// Cells are stored with the x axis outermost: cell `(ix, iy)` lives at
/// `ix * resolution + iy`. A cell holds either the 1-based iteration at which
/// its point escaped, or [`IterationGrid::inside_value`] when it never did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationGrid {
    resolution: u32,
    inside_value: u32,
    cells: Vec<u32>,
}

impl IterationGrid {
    pub fn from_cells(
        resolution: u32,
        inside_value: u32,
        cells: Vec<u32>,
    ) -> Result<Self, IterationGridError> {
        if resolution == 0 {
            return Err(IterationGridError::ZeroResolution);
        }

        let expected = resolution as usize * resolution as usize;

        if cells.len() != expected {
            return Err(IterationGridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self {
            resolution,
            inside_value,
            cells,
        })
    }

    // for producers that build `cells` at exactly `resolution²` entries
    pub(crate) fn from_parts(resolution: u32, inside_value: u32, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), resolution as usize * resolution as usize);

        Self {
            resolution,
            inside_value,
            cells,
        }
    }

    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// The sentinel meaning "did not escape within the iteration cap".
    #[must_use]
    pub fn inside_value(&self) -> u32 {
        self.inside_value
    }

    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// # Panics
    /// Panics if `ix` or `iy` is not below the grid resolution.
    #[must_use]
    pub fn get(&self, ix: u32, iy: u32) -> u32 {
        assert!(
            ix < self.resolution && iy < self.resolution,
            "cell ({}, {}) outside {}x{} grid",
            ix,
            iy,
            self.resolution,
            self.resolution
        );

        self.cells[ix as usize * self.resolution as usize + iy as usize]
    }

    #[must_use]
    pub fn is_inside(&self, ix: u32, iy: u32) -> bool {
        self.get(ix, iy) == self.inside_value
    }
}
