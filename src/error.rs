//! Crate-level error type.

use thiserror::Error;

use crate::export::MaskExportError;
use crate::grid::GridError;
use crate::land::DataSourceError;

/// Any error produced by land loading, grid generation or mask export.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Export(#[from] MaskExportError),
}
