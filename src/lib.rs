//! Exact, lossless conversion between raster pixel indices and world
//! coordinates for rectilinear affine geotransforms.
//!
//! ```
//! use edge_grid::{build_edge_grid, pixel_to_world, world_to_pixel, Affine};
//! use ndarray::array;
//!
//! let aff = Affine::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0);
//! let (x, _y) = build_edge_grid(3, 2, &aff)?;
//! assert_eq!(pixel_to_world(array![0i64, 1, 2].view(), &x)?, array![0.0, 1.0, 2.0]);
//! assert_eq!(world_to_pixel(array![0.0, 2.5, 3.0].view(), &x)?, array![0usize, 2, 2]);
//! assert!(world_to_pixel(array![3.1].view(), &x).is_err());
//! # Ok::<(), edge_grid::GridError>(())
//! ```

pub mod affine;
pub mod error;
pub mod grid;
pub mod raster;
#[cfg(feature = "python")]
mod py;

pub use affine::Affine;
pub use error::GridError;
pub use grid::forward::pixel_to_world;
pub use grid::inverse::{world_to_pixel, world_to_pixel_masked, world_to_pixel_par};
pub use grid::{build_edge_grid, EdgeGrid, Orientation};
pub use raster::RasterGrid;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
