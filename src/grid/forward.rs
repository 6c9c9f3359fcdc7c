//! Forward lookup: pixel index -> world coordinate of the pixel's leading edge.

use ndarray::{Array1, ArrayView1};
use num_traits::PrimInt;

use super::EdgeGrid;
use crate::error::GridError;

impl EdgeGrid {
    /// Leading edge of pixel `index`, or `None` if the pixel is not on this axis.
    pub fn edge(&self, index: usize) -> Option<f64> {
        if index < self.pixel_count() {
            Some(self.edges[index])
        } else {
            None
        }
    }
}

/// Map pixel indices to the world coordinate of each pixel's leading edge.
///
/// This is a direct gather from the edge table: no rounding, no clamping.
/// Every index must satisfy `0 <= index < grid.pixel_count()`; the first
/// one that doesn't is reported as [`GridError::Range`].
pub fn pixel_to_world<I>(indices: ArrayView1<'_, I>, grid: &EdgeGrid) -> Result<Array1<f64>, GridError>
where
    I: PrimInt,
{
    let mut out = Vec::with_capacity(indices.len());
    for &idx in indices.iter() {
        let edge = idx
            .to_usize()
            .and_then(|i| grid.edge(i))
            .ok_or_else(|| GridError::Range {
                index: idx.to_i64().unwrap_or(i64::MAX),
                pixel_count: grid.pixel_count(),
            })?;
        out.push(edge);
    }
    Ok(Array1::from(out))
}
