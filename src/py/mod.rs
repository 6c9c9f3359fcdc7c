use pyo3::prelude::*;

mod grid;

/// Register all Python-visible functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(grid::build_edge_grid, m)?)?;
    m.add_function(wrap_pyfunction!(grid::pixel_to_world, m)?)?;
    m.add_function(wrap_pyfunction!(grid::world_to_pixel, m)?)?;
    Ok(())
}
