//! Paired x/y edge grids for one raster, with 2D point lookups.

use ndarray::{Array1, ArrayView1};

use crate::affine::Affine;
use crate::error::GridError;
use crate::grid::forward::pixel_to_world;
use crate::grid::inverse::{world_to_pixel, world_to_pixel_masked};
use crate::grid::{build_edge_grid, EdgeGrid};

/// Column (x) and row (y) edge grids derived from one geotransform.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterGrid {
    x: EdgeGrid,
    y: EdgeGrid,
}

impl RasterGrid {
    pub fn new(width: usize, height: usize, transform: &Affine) -> Result<Self, GridError> {
        let (x, y) = build_edge_grid(width, height, transform)?;
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &EdgeGrid {
        &self.x
    }

    pub fn y(&self) -> &EdgeGrid {
        &self.y
    }

    pub fn width(&self) -> usize {
        self.x.pixel_count()
    }

    pub fn height(&self) -> usize {
        self.y.pixel_count()
    }

    /// World extent as (xmin, ymin, xmax, ymax), inclusive on all sides.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let (xmin, xmax) = self.x.extent();
        let (ymin, ymax) = self.y.extent();
        (xmin, ymin, xmax, ymax)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x.contains(x) && self.y.contains(y)
    }

    /// Leading-edge world coordinates for (col, row) pairs.
    pub fn pixel_to_world(
        &self,
        cols: ArrayView1<'_, i64>,
        rows: ArrayView1<'_, i64>,
    ) -> Result<(Array1<f64>, Array1<f64>), GridError> {
        check_lengths(cols.len(), rows.len())?;
        Ok((pixel_to_world(cols, &self.x)?, pixel_to_world(rows, &self.y)?))
    }

    /// (col, row) indices for world points. A point is rejected if either
    /// of its coordinates falls outside the corresponding axis.
    pub fn world_to_pixel(
        &self,
        xs: ArrayView1<'_, f64>,
        ys: ArrayView1<'_, f64>,
    ) -> Result<(Array1<usize>, Array1<usize>), GridError> {
        check_lengths(xs.len(), ys.len())?;
        Ok((world_to_pixel(xs, &self.x)?, world_to_pixel(ys, &self.y)?))
    }

    /// Per-point (col, row), `None` for points outside the raster.
    pub fn world_to_pixel_masked(
        &self,
        xs: ArrayView1<'_, f64>,
        ys: ArrayView1<'_, f64>,
    ) -> Result<Vec<Option<(usize, usize)>>, GridError> {
        check_lengths(xs.len(), ys.len())?;
        let cols = world_to_pixel_masked(xs, &self.x);
        let rows = world_to_pixel_masked(ys, &self.y);
        Ok(cols
            .into_iter()
            .zip(rows)
            .map(|(c, r)| c.zip(r))
            .collect())
    }
}

fn check_lengths(x_len: usize, y_len: usize) -> Result<(), GridError> {
    if x_len != y_len {
        return Err(GridError::Shape { x_len, y_len });
    }
    Ok(())
}
