//! CPU reorientation ops: fixed mirror and quarter-turn permutations of
//! packed pixel data. Valid for any supported color format.

use crate::error::Result;
use crate::image::{Image, ImageDesc};

/// Mirrors an image left-right.
pub fn flip_horizontal(image: &Image) -> Result<Image> {
    let desc = *image.desc();
    let out_desc = ImageDesc::new_packed(desc.width, desc.height, desc.color_format);

    let bpp = desc.color_format.byte_count() as usize;
    let w = desc.width as usize;
    let h = desc.height as usize;

    let mut bytes = vec![0u8; out_desc.size_in_bytes()];
    for y in 0..h {
        let src_row = &image.bytes()[y * desc.stride..y * desc.stride + w * bpp];
        let dst_row = &mut bytes[y * out_desc.stride..y * out_desc.stride + w * bpp];
        for x in 0..w {
            let sx = w - 1 - x;
            dst_row[x * bpp..(x + 1) * bpp].copy_from_slice(&src_row[sx * bpp..(sx + 1) * bpp]);
        }
    }

    Image::new_with_data(out_desc, bytes)
}

/// Rotates an image 90 degrees counter-clockwise.
///
/// Output dimensions are the transpose of the input's.
pub fn rotate90_ccw(image: &Image) -> Result<Image> {
    let desc = *image.desc();
    let out_desc = ImageDesc::new_packed(desc.height, desc.width, desc.color_format);

    let bpp = desc.color_format.byte_count() as usize;
    let w = desc.width as usize;
    let h = desc.height as usize;

    let mut bytes = vec![0u8; out_desc.size_in_bytes()];
    for y in 0..h {
        let src_row = &image.bytes()[y * desc.stride..y * desc.stride + w * bpp];
        for x in 0..w {
            // src (x, y) lands at (y, w - 1 - x): the right edge becomes the top
            let dst_idx = (w - 1 - x) * out_desc.stride + y * bpp;
            bytes[dst_idx..dst_idx + bpp].copy_from_slice(&src_row[x * bpp..(x + 1) * bpp]);
        }
    }

    Image::new_with_data(out_desc, bytes)
}
