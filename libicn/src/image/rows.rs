use std::io::{Read, Seek, SeekFrom};

use tracing::trace;

use super::header::RasterHeader;
use crate::Error;

/// Lazy iterator over the display rows of an indexed raster
///
/// The source stores rows bottom-to-top; iteration yields them in display
/// order (top row first) by seeking backwards through the source one row at
/// a time. Traversal is restartable only by asking the owning
/// [`super::IndexedRaster`] for a fresh iterator.
pub struct Rows<'a, R> {
    reader: &'a mut R,
    header: RasterHeader,
    y: u32,
}

impl<'a, R: Read + Seek> Rows<'a, R> {
    pub(crate) fn new(reader: &'a mut R, header: RasterHeader) -> Self {
        Self { reader, header, y: 0 }
    }

    fn read_row(&mut self, y: u32) -> Result<Vec<u8>, Error> {
        let offset = self.header.row_offset(y);
        trace!("display row {y} at source offset {offset}");
        self.reader
            .seek(SeekFrom::Start(offset))
            .map_err(|source| Error::TruncatedData { row: y, source })?;
        let mut row = vec![0u8; self.header.width as usize];
        self.reader
            .read_exact(&mut row)
            .map_err(|source| Error::TruncatedData { row: y, source })?;
        Ok(row)
    }
}

impl<R: Read + Seek> Iterator for Rows<'_, R> {
    type Item = Result<Vec<u8>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        // Degenerate dimensions yield zero rows, not an error.
        if self.header.width == 0 || self.y >= self.header.height {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.read_row(y))
    }
}
