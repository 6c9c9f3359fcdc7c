//! Pixel-edge grids: the lookup tables behind exact pixel <-> world mapping.
//!
//! An [`EdgeGrid`] holds the `N + 1` world coordinates bounding the `N`
//! pixels along one axis. Pixel `i` owns the half-open interval
//! `[edge_i, edge_{i+1})` measured in the grid's own direction of travel,
//! except the last pixel, which also owns the final edge.

pub mod forward;
pub mod inverse;

use ndarray::ArrayView1;
use tracing::{debug, warn};

use crate::affine::Affine;
use crate::error::GridError;

/// Direction in which edge coordinates travel with increasing pixel index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Ascending,
    Descending,
}

/// Ordered world coordinates of the pixel edges along one raster axis.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeGrid {
    edges: Vec<f64>,
    orientation: Orientation,
}

impl EdgeGrid {
    /// Wrap an existing edge sequence.
    ///
    /// The sequence must hold at least two finite values and be strictly
    /// increasing or strictly decreasing.
    pub fn from_edges(edges: Vec<f64>) -> Result<Self, GridError> {
        match check_edges(&edges) {
            Ok(orientation) => Ok(Self { edges, orientation }),
            Err(e) => {
                warn!(len = edges.len(), error = %e, "Rejected edge sequence");
                Err(e)
            }
        }
    }

    /// Edges for `pixel_count` pixels starting at `origin`, `step` apart.
    fn along_axis(pixel_count: usize, step: f64, origin: f64) -> Result<Self, GridError> {
        let edges: Vec<f64> = (0..=pixel_count)
            .map(|i| i as f64 * step + origin)
            .collect();
        let orientation = check_edges(&edges).map_err(|_| {
            GridError::Configuration(format!(
                "step {step} does not separate edges from origin {origin} in f64"
            ))
        })?;
        Ok(Self { edges, orientation })
    }

    pub fn edges(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(self.edges.as_slice())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.edges
    }

    /// Number of pixels along this axis (one less than the edge count).
    pub fn pixel_count(&self) -> usize {
        self.edges.len() - 1
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Outer edge of pixel 0.
    pub fn first(&self) -> f64 {
        self.edges[0]
    }

    /// Outer edge of the last pixel.
    pub fn last(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// (min, max) world coordinate covered by the axis, both inclusive.
    pub fn extent(&self) -> (f64, f64) {
        match self.orientation {
            Orientation::Ascending => (self.first(), self.last()),
            Orientation::Descending => (self.last(), self.first()),
        }
    }

    pub fn contains(&self, coord: f64) -> bool {
        let (lo, hi) = self.extent();
        coord >= lo && coord <= hi
    }
}

fn check_edges(edges: &[f64]) -> Result<Orientation, GridError> {
    if edges.len() < 2 {
        return Err(GridError::Configuration(format!(
            "edge grid needs at least 2 edges, got {}",
            edges.len()
        )));
    }
    if let Some(bad) = edges.iter().find(|v| !v.is_finite()) {
        return Err(GridError::Configuration(format!(
            "edge grid contains non-finite value {bad}"
        )));
    }

    let orientation = if edges[1] < edges[0] {
        Orientation::Descending
    } else {
        Orientation::Ascending
    };
    let monotonic = edges.windows(2).all(|w| match orientation {
        Orientation::Ascending => w[0] < w[1],
        Orientation::Descending => w[0] > w[1],
    });
    if !monotonic {
        return Err(GridError::Configuration(
            "edge grid is not strictly monotonic".into(),
        ));
    }
    Ok(orientation)
}

/// Build the x-axis and y-axis edge grids for a `width` x `height` raster.
///
/// Edge `i` along x is `i * a + c`. Along y it is `i * (-e) + f`: the
/// transform places its origin at the top edge of row 0, and the vertical
/// scale is negated so both polarities of `e` produce a grid whose index
/// runs with the row index.
pub fn build_edge_grid(
    width: usize,
    height: usize,
    transform: &Affine,
) -> Result<(EdgeGrid, EdgeGrid), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::Configuration(format!(
            "raster dimensions must be positive, got {width}x{height}"
        )));
    }
    if !transform.is_rectilinear() {
        return Err(GridError::Configuration(format!(
            "transform is not rectilinear (shear b={}, d={})",
            transform.b, transform.d
        )));
    }
    let (a, _, c, _, e, f) = transform.to_tuple();
    if [a, c, e, f].iter().any(|v| !v.is_finite()) {
        return Err(GridError::Configuration(format!(
            "transform has non-finite coefficients {:?}",
            transform.to_tuple()
        )));
    }
    if a == 0.0 || e == 0.0 {
        return Err(GridError::Configuration(format!(
            "axis scale must be nonzero (x={a}, y={e})"
        )));
    }

    let x = EdgeGrid::along_axis(width, a, c)?;
    let y = EdgeGrid::along_axis(height, -e, f)?;

    debug!(
        width,
        height,
        x_orientation = ?x.orientation(),
        y_orientation = ?y.orientation(),
        "Built edge grids"
    );
    Ok((x, y))
}
