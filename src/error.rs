use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Invalid grid configuration: {0}")]
    Configuration(String),

    #[error("Pixel index {index} outside valid range [0, {pixel_count})")]
    Range { index: i64, pixel_count: usize },

    #[error(
        "{} coordinate(s) outside image extent [{lower}, {upper}]: {coords:?}",
        .coords.len()
    )]
    OutOfBounds {
        coords: Vec<f64>,
        lower: f64,
        upper: f64,
    },

    #[error("Coordinate arrays differ in length: x has {x_len}, y has {y_len}")]
    Shape { x_len: usize, y_len: usize },
}

impl GridError {
    /// True for rejections that are expected in normal operation (points
    /// falling outside raster coverage), as opposed to caller bugs.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, GridError::OutOfBounds { .. })
    }
}
