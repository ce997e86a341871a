//! Export module for saving classified grids as land masks.
//!
//! Supports 8-bit PNG for quick viewing in image and map tools, and
//! headerless RAW bytes for simulation inputs.

mod mask;

pub use mask::{export_grid_mask_png, export_grid_mask_raw, MaskExportError, MaskExportOptions};
