/// Demonstrates converting an indexed bitmap into resource-definition
/// source text, ready for inclusion in a `.r` file
///
///
use std::io::{stdout, Cursor};

use libicn::{Depth, IndexedRaster, ResourceType, RezConfig};

/// Builds an 8x8 indexed raster in memory: a border of index 1 around a
/// checker of indexes 6 and 0, rows stored bottom-to-top.
fn synth_raster() -> Vec<u8> {
    let (width, height) = (8u32, 8u32);
    let mut bmp = vec![0u8; 26];
    bmp[0] = b'B';
    bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(26 + width * height).to_le_bytes());
    bmp[10..14].copy_from_slice(&26u32.to_le_bytes());
    bmp[14..18].copy_from_slice(&12u32.to_le_bytes());
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    for y in 0..height {
        for x in 0..width {
            let on_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
            bmp.push(if on_border {
                1
            } else if (x + y) % 2 == 0 {
                6
            } else {
                0
            });
        }
    }
    bmp
}

fn main() -> anyhow::Result<()> {
    let mut raster = IndexedRaster::from_reader(Cursor::new(synth_raster()))?;

    let (mono, mask) = raster.pack(Depth::One)?;
    let config = RezConfig::builder()
        .textual(true)
        .resource_wrapper(true)
        .resource_type(ResourceType::MonoIconAndMask)
        .build();
    libicn::write_icon(&mut stdout(), &mono, &mask, &config)?;

    // Second pass over the same source for the 16-color variant.
    let (icl4, _) = raster.pack(Depth::Four)?;
    let config = RezConfig::builder()
        .textual(true)
        .resource_wrapper(true)
        .resource_type(ResourceType::ColorIcon4)
        .build();
    libicn::write_icon(&mut stdout(), &icl4, &mask, &config)?;
    Ok(())
}
