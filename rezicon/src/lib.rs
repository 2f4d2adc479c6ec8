use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Result;
use libicn::{Depth, IndexedRaster, PixelConsumer, ResourceType, RezConfig};
use tracing::{debug, info, instrument};

#[instrument]
pub fn bmp_to_icon(bmp_file: &Path, output_name: &Path, hex: bool, color_icon: bool) -> Result<()> {
    let mut raster = IndexedRaster::from_file(bmp_file)?;
    debug!("raster is {}x{} px", raster.width(), raster.height());

    let output = File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(output_name)?;
    let mut output = BufWriter::new(output);

    let (mono, mask) = raster.pack(Depth::One)?;
    debug!("mono planes: {} icon bytes, {} mask bytes", mono.len(), mask.len());
    let config = RezConfig::builder()
        .textual(hex)
        .resource_wrapper(hex)
        .resource_type(ResourceType::MonoIconAndMask)
        .build();
    libicn::write_icon(&mut output, &mono, &mask, &config)?;

    if color_icon {
        // Second traversal of the same source with fresh accumulators. The
        // color icon reuses the mono mask on screen, so the mask plane this
        // pass derives is discarded.
        let (icl4, _) = raster.pack(Depth::Four)?;
        debug!("color plane: {} bytes", icl4.len());
        let config = RezConfig::builder()
            .textual(hex)
            .resource_wrapper(hex)
            .resource_type(ResourceType::ColorIcon4)
            .build();
        libicn::write_icon(&mut output, &icl4, &mask, &config)?;
    }
    output.flush()?;
    info!(
        "Successfully wrote icon resource to {}",
        output_name.display()
    );
    Ok(())
}

/// Renders each display row the way the legacy debugging tool did: nonzero
/// pixels as their hex literal, zero pixels as blank space.
struct AsciiPreview {
    line: String,
}

impl PixelConsumer for AsciiPreview {
    fn accept_pixel(&mut self, index: u8) {
        if index > 0 {
            self.line.push_str(&format!("{index:#x} "));
        } else {
            self.line.push_str("    ");
        }
    }

    fn end_row(&mut self, _y: u32) {
        println!("{}", self.line);
        self.line.clear();
    }
}

#[instrument]
pub fn preview_bmp(bmp_file: &Path) -> Result<()> {
    let mut raster = IndexedRaster::from_file(bmp_file)?;
    debug!("raster is {}x{} px", raster.width(), raster.height());

    let mut preview = AsciiPreview {
        line: String::new(),
    };
    raster.feed(&mut preview)?;
    Ok(())
}
