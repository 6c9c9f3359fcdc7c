//! PyO3 bindings for edge-grid construction and lookups.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::affine::Affine;
use crate::error::GridError;
use crate::grid::{self, forward, inverse, EdgeGrid};

fn to_py_err(e: GridError) -> PyErr {
    match e {
        GridError::Range { .. } => PyIndexError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

/// Build the pixel-edge coordinate arrays for a raster.
///
/// Args:
///     width: Raster width in pixels.
///     height: Raster height in pixels.
///     transform: Affine transform as 6-element tuple (a, b, c, d, e, f)
///         in rasterio convention: (pixel_width, rot_x, x_origin, rot_y, -pixel_height, y_origin).
///
/// Returns:
///     Tuple of (edges_x, edges_y) float64 arrays of length width+1 and height+1.
#[pyfunction]
#[pyo3(signature = (width, height, transform))]
#[allow(clippy::type_complexity)]
pub fn build_edge_grid<'py>(
    py: Python<'py>,
    width: usize,
    height: usize,
    transform: [f64; 6],
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let [a, b, c, d, e, f] = transform;
    let aff = Affine::new(a, b, c, d, e, f);
    let (x, y) = grid::build_edge_grid(width, height, &aff).map_err(to_py_err)?;
    Ok((
        PyArray1::from_slice(py, x.as_slice()),
        PyArray1::from_slice(py, y.as_slice()),
    ))
}

/// Look up the leading-edge world coordinate of each pixel index.
///
/// Raises IndexError if any index is outside the image.
#[pyfunction]
pub fn pixel_to_world<'py>(
    py: Python<'py>,
    indices: PyReadonlyArray1<'py, i64>,
    edges: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let grid = EdgeGrid::from_edges(edges.as_array().to_vec()).map_err(to_py_err)?;
    let world = forward::pixel_to_world(indices.as_array(), &grid).map_err(to_py_err)?;
    Ok(PyArray1::from_owned_array(py, world))
}

/// Find the pixel index containing each world coordinate.
///
/// Raises ValueError if any coordinate lies outside the image.
#[pyfunction]
pub fn world_to_pixel<'py>(
    py: Python<'py>,
    points: PyReadonlyArray1<'py, f64>,
    edges: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyArray1<i64>>> {
    let grid = EdgeGrid::from_edges(edges.as_array().to_vec()).map_err(to_py_err)?;
    let points = points.as_array().to_owned();

    let idx = py
        .allow_threads(move || inverse::world_to_pixel_par(points.view(), &grid))
        .map_err(to_py_err)?;
    Ok(PyArray1::from_owned_array(py, idx.mapv(|i| i as i64)))
}
