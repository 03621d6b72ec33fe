#![forbid(unsafe_code)]

//! Buffer diffing.
//!
//! [`BufferDiff`] lists the horizontal runs of cells that differ between two
//! buffers of the same size, so the presenter moves the cursor once per run
//! instead of once per cell.

use crate::buffer::Buffer;

/// A contiguous run of changed cells on one row, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeRun {
    /// Row.
    pub y: u16,
    /// First changed column.
    pub x0: u16,
    /// Last changed column.
    pub x1: u16,
}

impl ChangeRun {
    /// Number of cells in the run.
    #[inline]
    pub const fn len(&self) -> u16 {
        self.x1 - self.x0 + 1
    }

    /// Runs are never empty; provided for API symmetry with `len`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Changed runs between two buffers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferDiff {
    runs: Vec<ChangeRun>,
}

impl BufferDiff {
    /// Diff `old` against `new`.
    ///
    /// When the sizes differ every row of `new` is reported as changed.
    pub fn compute(old: &Buffer, new: &Buffer) -> Self {
        if old.width() != new.width() || old.height() != new.height() {
            return Self::full(new);
        }

        let mut runs = Vec::new();
        for y in 0..new.height() {
            let old_row = old.row_cells(y);
            let new_row = new.row_cells(y);
            let mut start: Option<u16> = None;
            for x in 0..new.width() {
                let changed = old_row[x as usize] != new_row[x as usize];
                match (changed, start) {
                    (true, None) => start = Some(x),
                    (false, Some(x0)) => {
                        runs.push(ChangeRun { y, x0, x1: x - 1 });
                        start = None;
                    }
                    _ => {}
                }
            }
            if let Some(x0) = start {
                runs.push(ChangeRun {
                    y,
                    x0,
                    x1: new.width() - 1,
                });
            }
        }
        Self { runs }
    }

    /// Every row of `buffer` as one run.
    pub fn full(buffer: &Buffer) -> Self {
        if buffer.width() == 0 {
            return Self::default();
        }
        let runs = (0..buffer.height())
            .map(|y| ChangeRun {
                y,
                x0: 0,
                x1: buffer.width() - 1,
            })
            .collect();
        Self { runs }
    }

    /// The changed runs, in row-major order.
    #[inline]
    pub fn runs(&self) -> &[ChangeRun] {
        &self.runs
    }

    /// Total number of changed cells.
    pub fn len(&self) -> usize {
        self.runs.iter().map(|r| r.len() as usize).sum()
    }

    /// Whether nothing changed.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
