//! Land mask export for classified world grids.
//!
//! Images are laid out like an equirectangular map: column 0 is the western
//! edge at -180°, row 0 is the northernmost latitude band.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Luma};
use thiserror::Error;

use crate::grid::WorldGrid;

/// Errors that can occur during mask export.
#[derive(Error, Debug)]
pub enum MaskExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid output dimensions: {0}x{1}")]
    InvalidDimensions(usize, usize),
}

/// Options for PNG mask export.
#[derive(Debug, Clone)]
pub struct MaskExportOptions {
    /// Gray level written for land cells.
    pub land_value: u8,
    /// Gray level written for ocean cells.
    pub ocean_value: u8,
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for MaskExportOptions {
    fn default() -> Self {
        Self {
            land_value: 255,
            ocean_value: 0,
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

fn image_dims(grid: &WorldGrid) -> Result<(u32, u32), MaskExportError> {
    let (cols, rows) = (grid.cols(), grid.rows());
    match (u32::try_from(cols), u32::try_from(rows)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(MaskExportError::InvalidDimensions(cols, rows)),
    }
}

/// Exports the grid as an 8-bit grayscale PNG, one pixel per cell.
pub fn export_grid_mask_png(
    grid: &WorldGrid,
    path: &Path,
    options: &MaskExportOptions,
) -> Result<(), MaskExportError> {
    let (width, height) = image_dims(grid)?;
    let rows = grid.rows();

    let img: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
        // Image rows run north to south, grid rows south to north.
        let row = rows - 1 - y as usize;
        let value = if grid.is_land_at(row, x as usize) {
            options.land_value
        } else {
            options.ocean_value
        };
        Luma([value])
    });

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(img.as_raw(), width, height, image::ExtendedColorType::L8)?;

    Ok(())
}

/// Exports the grid as headerless bytes: 1 for land, 0 for ocean.
///
/// Rows are written north to south, `cols` bytes each.
pub fn export_grid_mask_raw(grid: &WorldGrid, path: &Path) -> Result<(), MaskExportError> {
    image_dims(grid)?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let mut line = vec![0u8; grid.cols()];

    for row in (0..grid.rows()).rev() {
        for (col, byte) in line.iter_mut().enumerate() {
            *byte = grid.is_land_at(row, col) as u8;
        }
        writer.write_all(&line)?;
    }

    writer.flush()?;
    Ok(())
}
