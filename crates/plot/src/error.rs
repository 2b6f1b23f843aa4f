use thiserror::Error;

/// Errors produced while building or showing a plot.
#[derive(Debug, Error)]
pub enum Error {
    #[error("series {name:?} has {x} x values but {y} y values")]
    LengthMismatch { name: String, x: usize, y: usize },

    #[error("failed to open the plot window")]
    Display(#[from] eframe::Error),
}
