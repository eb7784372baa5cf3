use crate::window::DisplayModel;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelectError {
    /// Raw keyboard control could not be acquired; nothing was drawn.
    #[error("interactive selection unavailable: {0}")]
    Unavailable(String),
    #[error("selector I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// One way of letting the user choose a row. Returns the committed index
/// into `model.items()`.
pub trait Selector {
    fn select(&mut self, header: &str, model: &DisplayModel) -> Result<usize, SelectError>;
}
