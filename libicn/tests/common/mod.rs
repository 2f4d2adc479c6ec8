/// Builds the byte image of a minimal uncompressed 8-bit indexed raster:
/// 26-byte fixed-offset header followed by `stored_pixels`, which must be
/// laid out bottom-to-top the way the container stores them.
pub fn synth_bmp(width: u32, height: u32, stored_pixels: &[u8]) -> Vec<u8> {
    assert_eq!((width * height) as usize, stored_pixels.len());
    let total = 26 + u32::try_from(stored_pixels.len()).unwrap();
    let mut bmp = vec![0u8; 26];
    bmp[0] = b'B';
    bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&total.to_le_bytes());
    bmp[10..14].copy_from_slice(&26u32.to_le_bytes());
    bmp[14..18].copy_from_slice(&12u32.to_le_bytes());
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp.extend_from_slice(stored_pixels);
    bmp
}
