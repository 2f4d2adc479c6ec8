#![allow(clippy::module_name_repetitions)]

pub(crate) mod header;
pub(crate) mod pack;
pub(crate) mod rows;

pub use header::RasterHeader;
pub use pack::{BitPacker, PixelConsumer, Plane};
pub use rows::Rows;

use std::{
    fmt::Display,
    fs::File,
    io::{BufReader, Read, Seek},
    path::Path,
};

use tracing::debug;

use crate::Error;

#[derive(Default, Debug, Eq, PartialEq, PartialOrd, Ord, Copy, Clone)]
/// Output pixel depth
/// Icon planes are packed at either 1 or 4 bits per pixel
pub enum Depth {
    /// Depth 1: the monochrome icon plane and the opacity mask
    #[default]
    One,
    /// Depth 4: the 16-color icon plane
    Four,
}

/// An open 8-bit indexed raster source
///
/// Holds the parsed [`RasterHeader`] together with the reader it came from.
/// Pixel data stays in the source until traversed; traversal is restartable
/// because every row seeks from the header's pixel offset, so the same
/// source can feed several packers in sequence.
#[derive(Debug)]
pub struct IndexedRaster<R> {
    reader: R,
    header: RasterHeader,
}

impl<R: Read + Seek> IndexedRaster<R> {
    /// Parses the fixed-offset header and wraps the reader
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedHeader`] if the source holds fewer than the
    /// 26 bytes the header occupies.
    pub fn from_reader(mut reader: R) -> Result<Self, Error> {
        let header = RasterHeader::from_reader(&mut reader)?;
        debug!("parsed raster header: {header:?}");
        Ok(Self { reader, header })
    }

    /// Returns a reference to the parsed [`RasterHeader`]
    #[must_use]
    pub const fn header(&self) -> &RasterHeader {
        &self.header
    }

    /// Returns the image width
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.header.width
    }

    /// Returns the image height
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.header.height
    }

    /// Returns a lazy iterator over display rows, top row first
    pub fn rows(&mut self) -> Rows<'_, R> {
        Rows::new(&mut self.reader, self.header)
    }

    /// Drives `consumer` over every pixel in display order
    ///
    /// `accept_pixel` fires once per pixel, left-to-right; `end_row` fires
    /// after the last pixel of each display row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TruncatedData`] if the source runs out mid-row.
    pub fn feed(&mut self, consumer: &mut impl PixelConsumer) -> Result<(), Error> {
        let mut y = 0u32;
        for row in self.rows() {
            let row = row?;
            for &px in &row {
                consumer.accept_pixel(px);
            }
            consumer.end_row(y);
            y += 1;
        }
        Ok(())
    }

    /// Packs the whole raster at `depth` with fresh accumulators
    ///
    /// # Errors
    ///
    /// Returns [`Error::TruncatedData`] if the source runs out mid-row.
    pub fn pack(&mut self, depth: Depth) -> Result<(Plane, Plane), Error> {
        let mut packer = BitPacker::new(depth);
        self.feed(&mut packer)?;
        Ok(packer.finish())
    }
}

impl IndexedRaster<BufReader<File>> {
    /// Tries to open and parse a raster file
    ///
    /// # Errors
    ///
    /// This function will error if the file cannot be opened or holds fewer
    /// bytes than the header occupies. See [`Self::from_reader`].
    pub fn from_file<P: AsRef<Path>>(filename: P) -> anyhow::Result<Self> {
        let file = File::open(filename)?;
        Ok(Self::from_reader(BufReader::new(file))?)
    }
}

impl From<Depth> for u8 {
    fn from(value: Depth) -> Self {
        match value {
            Depth::One => 1,
            Depth::Four => 4,
        }
    }
}

impl From<&Depth> for u8 {
    fn from(value: &Depth) -> Self {
        match value {
            Depth::One => 1,
            Depth::Four => 4,
        }
    }
}

impl Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u8::from(self))
    }
}

impl TryFrom<u8> for Depth {
    type Error = &'static str;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            4 => Ok(Self::Four),
            _ => Err("Only 1 and 4 are valid icon plane depths"),
        }
    }
}
