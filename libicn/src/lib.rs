//! # libicn
//!
//!
//! This library converts uncompressed, palette-indexed raster images into the
//! bit-packed icon resources used by the classic Mac OS resource fork: the
//! 1-bit `'ICN#'` icon-plus-mask pair and the optional 4-bit `'icl4'` color
//! icon. Output is either raw packed bytes or the quoted-hex blocks of a
//! resource-definition (Rez) source file.
//!
//! The pipeline has three pieces: a minimal raster decoder that yields
//! palette indexes in display order from a bottom-to-top stored raster, a
//! bit packer that folds those indexes into packed planes while deriving a
//! 1-bit opacity mask, and a serializer for the resource output grammar.
//!
//! ### Limitations
//!
//! The decoder is deliberately as narrow as the legacy tooling it replaces:
//! it reads **uncompressed 8-bit indexed** rasters only, assumes **no row
//! padding** (in practice the image width must be a multiple of 4), and does
//! not validate the container signature. Compressed sources, other input
//! bit depths, and palette-to-RGB translation are out of scope.
//!
//! Pixel counts that do not land on a byte boundary lose their trailing
//! partial byte per plane; see [`BitPacker::finish`]. This mirrors the
//! legacy converter and is relied on by existing resource files.
//!
//! ### Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use libicn::{Depth, IndexedRaster, ResourceType, RezConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     // A 4x2 indexed raster, rows stored bottom-to-top.
//!     let mut bmp = vec![0u8; 26];
//!     bmp[0] = b'B';
//!     bmp[1] = b'M';
//!     bmp[2..6].copy_from_slice(&34u32.to_le_bytes());
//!     bmp[10..14].copy_from_slice(&26u32.to_le_bytes());
//!     bmp[14..18].copy_from_slice(&12u32.to_le_bytes());
//!     bmp[18..22].copy_from_slice(&4u32.to_le_bytes());
//!     bmp[22..26].copy_from_slice(&2u32.to_le_bytes());
//!     bmp.extend([0, 1, 0, 1, 1, 0, 1, 0]);
//!
//!     let mut raster = IndexedRaster::from_reader(Cursor::new(bmp))?;
//!     let (color, mask) = raster.pack(Depth::One)?;
//!     assert_eq!(color.bytes(), &[0b1010_0101]);
//!
//!     let config = RezConfig::builder()
//!         .textual(true)
//!         .resource_wrapper(true)
//!         .resource_type(ResourceType::MonoIconAndMask)
//!         .build();
//!     let mut out = Vec::new();
//!     libicn::write_icon(&mut out, &color, &mask, &config)?;
//!     assert!(out.starts_with(b"resource 'ICN#' (128) {\n"));
//!     Ok(())
//! }
//! ```
//!

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]

mod error;
/// Module containing types for indexed raster sources and bit packing
pub mod image;
/// Module containing the icon resource serializer
pub mod rez;

pub use error::Error;
pub use image::BitPacker;
pub use image::Depth;
pub use image::IndexedRaster;
pub use image::PixelConsumer;
pub use image::Plane;
pub use image::RasterHeader;
pub use rez::{write_icon, write_plane, ResourceType, RezConfig};
