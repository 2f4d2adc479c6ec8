use tracing::{debug, trace};

use super::Depth;

/// Consumer of pixel indexes in display order
///
/// [`BitPacker`] is the packing implementation; anything else that wants to
/// observe the same traversal (a debug printer, a histogram) can implement
/// this instead without touching the decoder.
pub trait PixelConsumer {
    /// Called once per pixel, left-to-right within a row
    fn accept_pixel(&mut self, index: u8);
    /// Called after the last pixel of display row `y`
    fn end_row(&mut self, y: u32);
}

/// A completed plane of packed bytes
///
/// Append-only while its [`BitPacker`] runs, read-only once handed out by
/// [`BitPacker::finish`].
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Plane(Vec<u8>);

impl Plane {
    /// Returns the packed bytes
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the number of completed bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no byte ever completed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Sub-byte accumulator for one plane, MSB-first
#[derive(Debug)]
struct Accumulator {
    register: u8,
    filled: u8,
    /// Bits contributed per pixel (1 or 4)
    width: u8,
}

impl Accumulator {
    const fn new(width: u8) -> Self {
        Self {
            register: 0,
            filled: 0,
            width,
        }
    }

    fn push(&mut self, bits: u8, plane: &mut Vec<u8>) {
        self.register = (self.register << self.width) | bits;
        self.filled += self.width;
        if self.filled == 8 {
            plane.push(self.register);
            self.register = 0;
            self.filled = 0;
        }
    }
}

/// Folds a stream of pixel indexes into a packed color/index plane and a
/// parallel 1-bit opacity mask plane
///
/// At [`Depth::One`] the color plane holds one bit per pixel, set only for
/// palette index 1 (the single foreground color of the 2-color icon). At
/// [`Depth::Four`] the low nibble of each index passes through verbatim.
/// The mask plane always holds one bit per pixel, set for any nonzero
/// index; index 0 is the sole transparent value.
pub struct BitPacker {
    depth: Depth,
    color: Accumulator,
    mask: Accumulator,
    color_plane: Vec<u8>,
    mask_plane: Vec<u8>,
}

impl BitPacker {
    /// Creates a packer producing a color plane at `depth` and a 1-bit mask
    #[must_use]
    pub fn new(depth: Depth) -> Self {
        Self {
            depth,
            color: Accumulator::new(depth.into()),
            mask: Accumulator::new(1),
            color_plane: Vec::new(),
            mask_plane: Vec::new(),
        }
    }

    /// Returns the completed (color, mask) planes
    ///
    /// Bits accumulated past the last full byte are dropped, never flushed.
    /// An image whose pixel count is not a multiple of `8 / depth` loses its
    /// final partial byte per plane; legacy resource compilers expect this
    /// truncation, so it is preserved rather than padded.
    #[must_use]
    pub fn finish(self) -> (Plane, Plane) {
        debug!(
            "packed {} color bytes, {} mask bytes at depth {}",
            self.color_plane.len(),
            self.mask_plane.len(),
            self.depth
        );
        (Plane(self.color_plane), Plane(self.mask_plane))
    }
}

impl PixelConsumer for BitPacker {
    fn accept_pixel(&mut self, index: u8) {
        let color_bits = match self.depth {
            // Index 1 is the sole foreground color; every other index packs
            // as background in the 1-bit plane.
            Depth::One => u8::from(index == 1),
            Depth::Four => index & 0x0F,
        };
        self.color.push(color_bits, &mut self.color_plane);
        self.mask.push(u8::from(index > 0), &mut self.mask_plane);
    }

    fn end_row(&mut self, y: u32) {
        trace!("packed display row {y}");
    }
}
