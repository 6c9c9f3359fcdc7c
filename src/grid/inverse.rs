//! Inverse lookup: world coordinate -> index of the pixel that contains it.
//!
//! Resolution is an ordered search over the edge table, so a coordinate
//! produced by [`pixel_to_world`](super::forward::pixel_to_world) always
//! lands back on the pixel it came from.

use ndarray::{Array1, ArrayView1, Zip};
use tracing::debug;

use super::{EdgeGrid, Orientation};
use crate::error::GridError;

impl EdgeGrid {
    /// Index of the pixel containing `coord`, or `None` outside the extent.
    ///
    /// Interior edges belong to the pixel they lead. The final edge belongs
    /// to the last pixel, closing the extent at that one point.
    pub fn locate(&self, coord: f64) -> Option<usize> {
        if !coord.is_finite() {
            return None;
        }
        if coord == self.last() {
            return Some(self.pixel_count() - 1);
        }

        // Number of edges at or before `coord` in the direction of travel.
        let passed = match self.orientation {
            Orientation::Ascending => self.edges.partition_point(|&e| e <= coord),
            Orientation::Descending => self.edges.partition_point(|&e| e >= coord),
        };
        let idx = passed.checked_sub(1)?;
        (idx < self.pixel_count()).then_some(idx)
    }
}

/// Map world coordinates to pixel indices along one axis.
///
/// Fails as a whole if any coordinate lies outside the axis extent; the
/// error carries every offending coordinate in input order.
pub fn world_to_pixel(coords: ArrayView1<'_, f64>, grid: &EdgeGrid) -> Result<Array1<usize>, GridError> {
    let located = coords.iter().map(|&c| grid.locate(c));
    collect_located(coords, located, grid)
}

/// Parallel [`world_to_pixel`]: each coordinate is resolved on the rayon pool.
pub fn world_to_pixel_par(
    coords: ArrayView1<'_, f64>,
    grid: &EdgeGrid,
) -> Result<Array1<usize>, GridError> {
    let mut located = Array1::<Option<usize>>::from_elem(coords.len(), None);
    Zip::from(&mut located)
        .and(&coords)
        .par_for_each(|out, &c| *out = grid.locate(c));
    collect_located(coords, located.iter().copied(), grid)
}

/// Per-coordinate lookup that marks out-of-extent points with `None`
/// instead of failing the batch.
pub fn world_to_pixel_masked(coords: ArrayView1<'_, f64>, grid: &EdgeGrid) -> Vec<Option<usize>> {
    coords.iter().map(|&c| grid.locate(c)).collect()
}

fn collect_located<L>(
    coords: ArrayView1<'_, f64>,
    located: L,
    grid: &EdgeGrid,
) -> Result<Array1<usize>, GridError>
where
    L: IntoIterator<Item = Option<usize>>,
{
    let mut out = Vec::with_capacity(coords.len());
    let mut rejected = Vec::new();
    for (&c, loc) in coords.iter().zip(located) {
        match loc {
            Some(idx) => out.push(idx),
            None => rejected.push(c),
        }
    }

    if !rejected.is_empty() {
        debug!(
            rejected = rejected.len(),
            total = coords.len(),
            "Coordinates outside raster extent"
        );
        let (lower, upper) = grid.extent();
        return Err(GridError::OutOfBounds {
            coords: rejected,
            lower,
            upper,
        });
    }
    Ok(Array1::from(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affine::Affine;
    use crate::grid::build_edge_grid;
    use crate::grid::forward::pixel_to_world;
    use ndarray::array;

    fn unit_grids() -> (EdgeGrid, EdgeGrid) {
        let aff = Affine::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0);
        build_edge_grid(3, 2, &aff).unwrap()
    }

    #[test]
    fn test_unit_scenario() {
        let (x, _) = unit_grids();
        let idx = world_to_pixel(array![0.0, 2.5, 3.0].view(), &x).unwrap();
        assert_eq!(idx, array![0usize, 2, 2]);

        let err = world_to_pixel(array![3.1].view(), &x).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                coords: vec![3.1],
                lower: 0.0,
                upper: 3.0
            }
        );
    }

    #[test]
    fn test_interior_edges_are_half_open() {
        let (x, _) = unit_grids();
        let idx = world_to_pixel(array![0.999, 1.0, 1.999, 2.0].view(), &x).unwrap();
        assert_eq!(idx, array![0usize, 1, 1, 2]);
    }

    #[test]
    fn test_descending_grid() {
        // edges [0, -1, -2]
        let (_, y) = unit_grids();
        let idx = world_to_pixel(array![0.0, -0.5, -1.0, -1.5, -2.0].view(), &y).unwrap();
        assert_eq!(idx, array![0usize, 0, 1, 1, 1]);
    }

    #[test]
    fn test_out_of_bounds_both_ends() {
        let (x, y) = unit_grids();
        assert!(world_to_pixel(array![-1.0].view(), &x).unwrap_err().is_out_of_bounds());
        assert!(world_to_pixel(array![4.0].view(), &x).unwrap_err().is_out_of_bounds());
        assert!(world_to_pixel(array![1.0].view(), &y).unwrap_err().is_out_of_bounds());
        assert!(world_to_pixel(array![-3.0].view(), &y).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_batch_fails_whole_and_lists_offenders() {
        let (x, _) = unit_grids();
        let err = world_to_pixel(array![0.5, -0.5, 1.5, 9.0].view(), &x).unwrap_err();
        match err {
            GridError::OutOfBounds { coords, lower, upper } => {
                assert_eq!(coords, vec![-0.5, 9.0]);
                assert_eq!((lower, upper), (0.0, 3.0));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let (x, _) = unit_grids();
        for c in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(x.locate(c).is_none());
        }
    }

    #[test]
    fn test_boundary_closure_on_final_edge() {
        for &(a, e) in &[(2.0, -3.0), (-2.0, 3.0)] {
            let aff = Affine::new(a, 0.0, 100.0, 0.0, e, -50.0);
            let (x, y) = build_edge_grid(7, 5, &aff).unwrap();
            assert_eq!(x.locate(x.last()), Some(6));
            assert_eq!(y.locate(y.last()), Some(4));
            assert_eq!(x.locate(x.first()), Some(0));
            assert_eq!(y.locate(y.first()), Some(0));
        }
    }

    #[test]
    fn test_round_trip_pixel_world_pixel() {
        let transforms = [
            Affine::new(10.0, 0.0, 500000.0, 0.0, -10.0, 6000000.0),
            Affine::new(-0.1, 0.0, 151.3, 0.0, 0.1, -33.9),
            Affine::new(0.000833, 0.0, 112.9, 0.0, -0.000833, -10.0),
            Affine::new(-25.0, 0.0, 0.0, 0.0, 25.0, 0.0),
        ];
        for aff in &transforms {
            let (x, y) = build_edge_grid(97, 61, aff).unwrap();
            for grid in [&x, &y] {
                let pixels: Array1<i64> = (0..grid.pixel_count() as i64).collect();
                let world = pixel_to_world(pixels.view(), grid).unwrap();
                let back = world_to_pixel(world.view(), grid).unwrap();
                let expected: Array1<usize> = (0..grid.pixel_count()).collect();
                assert_eq!(back, expected, "round trip failed for {aff:?}");
            }
        }
    }

    #[test]
    fn test_round_trip_world_pixel_world() {
        let (x, _) = unit_grids();
        let world = array![0.0, 1.0, 2.0];
        let idx = world_to_pixel(world.view(), &x).unwrap();
        let idx_i64 = idx.mapv(|i| i as i64);
        assert_eq!(pixel_to_world(idx_i64.view(), &x).unwrap(), world);
    }

    #[test]
    fn test_orientation_symmetry() {
        // Same physical cells covering [0, 8], numbered from opposite ends.
        let n = 8;
        let asc = build_edge_grid(n, 1, &Affine::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0))
            .unwrap()
            .0;
        let desc = build_edge_grid(n, 1, &Affine::new(-1.0, 0.0, 8.0, 0.0, 1.0, 0.0))
            .unwrap()
            .0;
        let queries = array![0.25, 1.5, 2.75, 3.5, 4.25, 5.5, 6.75, 7.5];
        let a = world_to_pixel(queries.view(), &asc).unwrap();
        let d = world_to_pixel(queries.view(), &desc).unwrap();
        for (ia, id) in a.iter().zip(d.iter()) {
            assert_eq!(*id, n - 1 - ia);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let aff = Affine::new(0.5, 0.0, -100.0, 0.0, 0.5, 100.0);
        let (x, y) = build_edge_grid(1000, 800, &aff).unwrap();
        for grid in [&x, &y] {
            let (lo, hi) = grid.extent();
            let queries: Array1<f64> = (0..5000)
                .map(|i| lo + (hi - lo) * (i as f64 / 4999.0))
                .collect();
            let seq = world_to_pixel(queries.view(), grid).unwrap();
            let par = world_to_pixel_par(queries.view(), grid).unwrap();
            assert_eq!(seq, par);
        }

        let err = world_to_pixel_par(array![1000.0, -100.0, -200.0].view(), &x).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                coords: vec![1000.0, -200.0],
                lower: -100.0,
                upper: 400.0
            }
        );
    }

    #[test]
    fn test_masked_lookup() {
        let (x, _) = unit_grids();
        let masked = world_to_pixel_masked(array![-0.1, 0.0, 3.0, 3.1, f64::NAN].view(), &x);
        assert_eq!(masked, vec![None, Some(0), Some(2), None, None]);
    }

    #[test]
    fn test_single_pixel_axis() {
        let grid = EdgeGrid::from_edges(vec![5.0, 4.0]).unwrap();
        assert_eq!(grid.locate(5.0), Some(0));
        assert_eq!(grid.locate(4.5), Some(0));
        assert_eq!(grid.locate(4.0), Some(0));
        assert_eq!(grid.locate(5.5), None);
        assert_eq!(grid.locate(3.5), None);
    }
}
