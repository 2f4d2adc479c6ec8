use std::{fs::File, io::Cursor};

mod common;
use common::synth_bmp;
use itertools::Itertools;
use libicn::{
    BitPacker, Depth, Error, IndexedRaster, PixelConsumer, Plane, ResourceType, RezConfig,
};
use mktemp::Temp;

/// Packs arbitrary bytes into a [`Plane`] by splitting each byte into two
/// 4-bit pixels.
fn plane_from_bytes(bytes: &[u8]) -> Plane {
    let mut packer = BitPacker::new(Depth::Four);
    for b in bytes {
        packer.accept_pixel(b >> 4);
        packer.accept_pixel(b & 0x0F);
    }
    packer.finish().0
}

#[test]
fn header_fields_read_at_fixed_offsets() -> anyhow::Result<()> {
    let bmp = synth_bmp(4, 2, &[0; 8]);
    let raster = IndexedRaster::from_reader(Cursor::new(bmp))?;
    let header = raster.header();
    assert_eq!(header.file_size, 34);
    assert_eq!(header.pixel_offset, 26);
    assert_eq!(header.header_size, 12);
    assert_eq!(header.width, 4);
    assert_eq!(header.height, 2);
    Ok(())
}

#[test]
fn stored_rows_decode_in_display_order() -> anyhow::Result<()> {
    // 2x2, stored bottom-to-top: bottom row [2, 3], top row [1, 0]
    let bmp = synth_bmp(2, 2, &[2, 3, 1, 0]);
    let mut raster = IndexedRaster::from_reader(Cursor::new(bmp))?;
    let rows = raster.rows().collect::<Result<Vec<_>, _>>()?;
    assert_eq!(rows, vec![vec![1, 0], vec![2, 3]]);
    Ok(())
}

struct Recorder {
    pixels: Vec<u8>,
    row_ends: Vec<u32>,
}

impl PixelConsumer for Recorder {
    fn accept_pixel(&mut self, index: u8) {
        self.pixels.push(index);
    }

    fn end_row(&mut self, y: u32) {
        self.row_ends.push(y);
    }
}

#[test]
fn feed_visits_every_pixel_and_row_once() -> anyhow::Result<()> {
    let stored: Vec<u8> = (0..12).collect();
    let bmp = synth_bmp(4, 3, &stored);
    let mut raster = IndexedRaster::from_reader(Cursor::new(bmp))?;
    let mut recorder = Recorder {
        pixels: Vec::new(),
        row_ends: Vec::new(),
    };
    raster.feed(&mut recorder)?;
    assert_eq!(recorder.pixels.len(), 12);
    assert_eq!(recorder.row_ends, vec![0, 1, 2]);
    // display row 0 is the last stored row
    assert_eq!(&recorder.pixels[..4], &[8, 9, 10, 11]);
    Ok(())
}

#[test]
fn empty_dimensions_yield_no_rows() -> anyhow::Result<()> {
    let mut raster = IndexedRaster::from_reader(Cursor::new(synth_bmp(0, 3, &[])))?;
    assert_eq!(raster.rows().count(), 0);
    let mut raster = IndexedRaster::from_reader(Cursor::new(synth_bmp(3, 0, &[])))?;
    assert_eq!(raster.rows().count(), 0);
    Ok(())
}

#[test]
fn short_source_is_a_malformed_header() {
    let err = IndexedRaster::from_reader(Cursor::new(vec![0u8; 10])).unwrap_err();
    assert!(matches!(err, Error::MalformedHeader(_)));
}

#[test]
fn missing_pixel_data_truncates_at_first_row() -> anyhow::Result<()> {
    // header promises 4x4 but the source carries a single row of pixels
    let mut bmp = synth_bmp(4, 1, &[1, 2, 3, 4]);
    bmp[22..26].copy_from_slice(&4u32.to_le_bytes());
    let mut raster = IndexedRaster::from_reader(Cursor::new(bmp))?;
    let err = raster.rows().next().unwrap().unwrap_err();
    assert!(matches!(err, Error::TruncatedData { row: 0, .. }));
    Ok(())
}

#[test]
fn depth_conversions_round_trip() {
    assert_eq!(u8::from(Depth::One), 1);
    assert_eq!(Depth::try_from(4).unwrap(), Depth::Four);
    assert!(Depth::try_from(7).is_err());
    assert_eq!(Depth::Four.to_string(), "4");
}

#[test]
fn packs_alternating_mono_pixels() {
    let mut packer = BitPacker::new(Depth::One);
    for px in [1, 0, 1, 0, 1, 0, 1, 0] {
        packer.accept_pixel(px);
    }
    let (color, mask) = packer.finish();
    assert_eq!(color.bytes(), &[0xAA]);
    assert_eq!(mask.bytes(), &[0xAA]);
}

#[test]
fn only_index_one_is_mono_foreground() {
    // nonzero indexes other than 1 pack as background in the bitmap but
    // stay opaque in the mask
    let mut packer = BitPacker::new(Depth::One);
    for px in [1, 2, 3, 0, 255, 1, 0, 9] {
        packer.accept_pixel(px);
    }
    let (color, mask) = packer.finish();
    assert_eq!(color.bytes(), &[0b1000_0100]);
    assert_eq!(mask.bytes(), &[0b1110_1101]);
}

#[test]
fn packs_two_nibbles_per_byte() {
    let mut packer = BitPacker::new(Depth::Four);
    packer.accept_pixel(0x3);
    packer.accept_pixel(0x5);
    let (color, mask) = packer.finish();
    assert_eq!(color.bytes(), &[0x35]);
    // two mask bits never complete a byte
    assert!(mask.is_empty());
}

#[test]
fn high_indexes_pass_low_nibble_only() {
    let mut packer = BitPacker::new(Depth::Four);
    packer.accept_pixel(0xAB);
    packer.accept_pixel(0x0F);
    let (color, _) = packer.finish();
    assert_eq!(color.bytes(), &[0xBF]);
}

#[test]
fn trailing_bits_are_dropped() {
    let mut packer = BitPacker::new(Depth::One);
    for px in [1, 1, 1, 1, 1] {
        packer.accept_pixel(px);
    }
    let (color, mask) = packer.finish();
    assert!(color.is_empty());
    assert!(mask.is_empty());
}

#[test]
fn hex_block_wraps_after_twenty_bytes() {
    let plane = plane_from_bytes(&(0..25).collect::<Vec<u8>>());
    let config = RezConfig::builder()
        .textual(true)
        .resource_type(ResourceType::ColorIcon4)
        .build();
    let mut out = Vec::new();
    libicn::write_plane(&plane, &mut out, &config).unwrap();
    let expected =
        "$\"0001 0203 0405 0607 0809 0a0b 0c0d 0e0f 1011 1213\"\n$\"1415 1617 18\"\n";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn trailing_comma_follows_closing_quote() {
    let plane = plane_from_bytes(&[0x84]);
    let config = RezConfig::builder()
        .textual(true)
        .trailing_comma(true)
        .resource_type(ResourceType::MonoIconAndMask)
        .build();
    let mut out = Vec::new();
    libicn::write_plane(&plane, &mut out, &config).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "$\"84\",\n");
}

#[test]
fn hex_text_decodes_to_the_raw_bytes() {
    let bytes: Vec<u8> = (0u8..47).map(|i| i.wrapping_mul(5)).collect();
    let plane = plane_from_bytes(&bytes);
    let textual = RezConfig::builder()
        .textual(true)
        .resource_type(ResourceType::ColorIcon4)
        .build();
    let raw = RezConfig::builder()
        .resource_type(ResourceType::ColorIcon4)
        .build();
    let (mut text, mut bin) = (Vec::new(), Vec::new());
    libicn::write_plane(&plane, &mut text, &textual).unwrap();
    libicn::write_plane(&plane, &mut bin, &raw).unwrap();

    let decoded: Vec<u8> = String::from_utf8(text)
        .unwrap()
        .chars()
        .filter(char::is_ascii_hexdigit)
        .tuples()
        .map(|(hi, lo)| {
            u8::try_from(hi.to_digit(16).unwrap() * 16 + lo.to_digit(16).unwrap()).unwrap()
        })
        .collect();
    assert_eq!(decoded, bin);
}

#[test]
fn mono_icon_resource_block() -> anyhow::Result<()> {
    // display rows [1,0,2,3] and [0,1,0,15], stored bottom-to-top
    let bmp = synth_bmp(4, 2, &[0, 1, 0, 15, 1, 0, 2, 3]);
    let mut raster = IndexedRaster::from_reader(Cursor::new(bmp))?;
    let (color, mask) = raster.pack(Depth::One)?;
    let config = RezConfig::builder()
        .textual(true)
        .resource_wrapper(true)
        .resource_type(ResourceType::MonoIconAndMask)
        .build();
    let mut out = Vec::new();
    libicn::write_icon(&mut out, &color, &mask, &config)?;
    let expected = "resource 'ICN#' (128) {\n{\n$\"84\",\n$\"b5\"\n}\n};\n\n";
    assert_eq!(String::from_utf8(out)?, expected);
    Ok(())
}

#[test]
fn color_icon_resource_block() -> anyhow::Result<()> {
    let bmp = synth_bmp(4, 2, &[0, 1, 0, 15, 1, 0, 2, 3]);
    let mut raster = IndexedRaster::from_reader(Cursor::new(bmp))?;
    let (color, mask) = raster.pack(Depth::Four)?;
    let config = RezConfig::builder()
        .textual(true)
        .resource_wrapper(true)
        .resource_type(ResourceType::ColorIcon4)
        .build();
    let mut out = Vec::new();
    libicn::write_icon(&mut out, &color, &mask, &config)?;
    // display nibbles 1,0,2,3,0,1,0,f; the mask plane is not written
    let expected = "resource 'icl4' (128) {\n$\"1023 010f\"\n};\n\n";
    assert_eq!(String::from_utf8(out)?, expected);
    Ok(())
}

#[test]
fn raw_mode_concatenates_icon_then_mask() -> anyhow::Result<()> {
    let bmp = synth_bmp(8, 1, &[1, 0, 2, 3, 0, 1, 0, 9]);
    let mut raster = IndexedRaster::from_reader(Cursor::new(bmp))?;
    let (color, mask) = raster.pack(Depth::One)?;
    let config = RezConfig::builder()
        .resource_type(ResourceType::MonoIconAndMask)
        .build();
    let mut out = Vec::new();
    libicn::write_icon(&mut out, &color, &mask, &config)?;
    assert_eq!(out, vec![0x84, 0xB5]);
    Ok(())
}

#[test]
fn file_round_trip_produces_identical_planes() -> anyhow::Result<()> {
    let stored: Vec<u8> = (0..16).map(|i| i % 3).collect();
    let bmp = synth_bmp(4, 4, &stored);
    let tmp_bmp = Temp::new_file()?;
    std::fs::write(&tmp_bmp, &bmp)?;

    let mut raster = IndexedRaster::from_file(&tmp_bmp)?;
    let (color, mask) = raster.pack(Depth::One)?;
    // traversal restarts from the pixel offset, so a second pass over the
    // same source packs identical planes
    let (color_2, mask_2) = raster.pack(Depth::One)?;
    assert_eq!(color, color_2);
    assert_eq!(mask, mask_2);

    let tmp_out = Temp::new_file()?;
    let mut out = File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&tmp_out)?;
    let config = RezConfig::builder()
        .resource_type(ResourceType::MonoIconAndMask)
        .build();
    libicn::write_icon(&mut out, &color, &mask, &config)?;
    drop(out);

    let written = std::fs::read(&tmp_out)?;
    assert_eq!(written.len(), color.len() + mask.len());
    assert_eq!(&written[..color.len()], color.bytes());
    assert_eq!(&written[color.len()..], mask.bytes());
    Ok(())
}
