/// Demonstrates writing the raw packed planes of a mono icon to a file,
/// color plane first, mask plane second
///
///
use std::{fs::File, io::Cursor};

use libicn::{Depth, IndexedRaster, ResourceType, RezConfig};

/// Builds a 4x4 indexed raster in memory: index 1 on the diagonal, index 0
/// elsewhere, rows stored bottom-to-top.
fn synth_raster() -> Vec<u8> {
    let (width, height) = (4u32, 4u32);
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
            bmp.push(u8::from(x == y));
        }
    }
    bmp
}

fn main() -> anyhow::Result<()> {
    let mut raster = IndexedRaster::from_reader(Cursor::new(synth_raster()))?;
    let (mono, mask) = raster.pack(Depth::One)?;

    let mut output = File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open("icon_example.bin")?;
    let config = RezConfig::builder()
        .resource_type(ResourceType::MonoIconAndMask)
        .build();
    libicn::write_icon(&mut output, &mono, &mask, &config)?;

    println!(
        "wrote {} icon bytes and {} mask bytes",
        mono.len(),
        mask.len()
    );
    std::fs::remove_file("icon_example.bin")?;
    Ok(())
}
