use std::io::{Read, Seek};

use bon::Builder;
use tracing::{debug, warn};

use crate::Error;

// Field offsets within the fixed raster header, from the start of the file.
// The two signature bytes at offset 0 are skipped, not checked.
const FILE_SIZE_OFFSET: usize = 2;
const PIXEL_OFFSET_OFFSET: usize = 10;
const HEADER_SIZE_OFFSET: usize = 14;
const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;

/// Total bytes that must be readable before any field can be decoded
const HEADER_MIN_LEN: usize = 26;

/// Fixed-offset header of an uncompressed 8-bit indexed raster
///
/// All fields are stored little-endian in the source. The header is read
/// once and immutable afterwards; pixel data begins at [`Self::pixel_offset`],
/// one byte per pixel, rows stored bottom-to-top with no row padding.
#[derive(Builder, Debug, Eq, PartialEq, Copy, Clone)]
#[non_exhaustive]
pub struct RasterHeader {
    /// Total size of the raster file in bytes
    pub file_size: u32,
    /// Offset from the start of the source to the first pixel byte
    pub pixel_offset: u32,
    /// Size of the raster's info header in bytes
    pub header_size: u32,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

fn u32_at(raw: &[u8; HEADER_MIN_LEN], at: usize) -> u32 {
    u32::from_le_bytes([raw[at], raw[at + 1], raw[at + 2], raw[at + 3]])
}

impl RasterHeader {
    /// Reads a [`RasterHeader`] from the start of `r`
    ///
    /// The container signature is not validated; fields are taken at their
    /// fixed offsets regardless of what precedes them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedHeader`] if fewer than 26 bytes are
    /// available.
    pub fn from_reader(r: &mut (impl Read + Seek)) -> Result<Self, Error> {
        match r.stream_position().map_err(Error::MalformedHeader)? {
            0 => {}
            _ => r.rewind().map_err(Error::MalformedHeader)?,
        }
        let mut raw = [0u8; HEADER_MIN_LEN];
        r.read_exact(&mut raw).map_err(Error::MalformedHeader)?;

        let file_size = u32_at(&raw, FILE_SIZE_OFFSET);
        debug!("raster size: {file_size} bytes");
        let pixel_offset = u32_at(&raw, PIXEL_OFFSET_OFFSET);
        debug!("raster pixel offset: {pixel_offset} bytes");
        let header_size = u32_at(&raw, HEADER_SIZE_OFFSET);
        debug!("raster header size: {header_size} bytes");
        let width = u32_at(&raw, WIDTH_OFFSET);
        debug!("raster width: {width} px");
        let height = u32_at(&raw, HEIGHT_OFFSET);
        debug!("raster height: {height} px");

        let header = Self {
            file_size,
            pixel_offset,
            header_size,
            width,
            height,
        };
        let expected_end =
            u64::from(pixel_offset) + u64::from(width) * u64::from(height);
        if expected_end > u64::from(file_size) {
            // The legacy tool never checks this either; padded or truncated
            // sources surface later as TruncatedData.
            warn!(
                "pixel data runs past declared file size ({expected_end} > {file_size})"
            );
        }
        Ok(header)
    }

    /// Source offset of the stored row that holds display row `y`
    ///
    /// Rows are stored bottom-to-top, so display row `y` lives in stored row
    /// `height - 1 - y`.
    #[must_use]
    pub const fn row_offset(&self, y: u32) -> u64 {
        self.pixel_offset as u64 + (self.height - 1 - y) as u64 * self.width as u64
    }

    /// Number of pixels the raster holds
    #[must_use]
    pub const fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}
