use common::test_utils::test_output_path;

use crate::color_format::{ChannelCount, ChannelSize, ChannelType, ColorFormat};
use crate::error::Error;
use crate::image::{Image, ImageDesc};

/// Small RGB_U8 test image with a deterministic gradient.
fn gradient_rgb_u8(width: u32, height: u32) -> Image {
    let desc = ImageDesc::new_packed(width, height, ColorFormat::RGB_U8);
    let mut bytes = Vec::with_capacity(desc.size_in_bytes());
    for y in 0..height {
        for x in 0..width {
            bytes.push((x * 7 % 256) as u8);
            bytes.push((y * 13 % 256) as u8);
            bytes.push(((x + y) % 256) as u8);
        }
    }
    Image::new_with_data(desc, bytes).unwrap()
}

// =============================================================================
// File reading
// =============================================================================

#[test]
fn read_missing_file_returns_error() {
    let result = Image::read_file("/nonexistent/does_not_exist.png");
    assert!(result.is_err());
}

#[test]
fn read_invalid_extension_returns_error() {
    let result = Image::read_file("/nonexistent/file.xyz");
    assert!(matches!(result, Err(Error::InvalidExtension(_))));
}

#[test]
fn read_missing_extension_returns_error() {
    let result = Image::read_file("/nonexistent/file");
    assert!(matches!(result, Err(Error::InvalidExtension(_))));
}

#[test]
fn read_uppercase_extension_dispatches() {
    // Uppercase extensions reach the decoder, which then reports IO failure
    let result = Image::read_file("/nonexistent/does_not_exist.TIF");
    assert!(matches!(result, Err(Error::Io(_)) | Err(Error::Encoding(_))));
}

// =============================================================================
// File saving
// =============================================================================

#[test]
fn save_and_reload_png() {
    let original = gradient_rgb_u8(21, 13);
    original.save_file(test_output_path("save_reload.png")).unwrap();

    let reloaded = Image::read_file(test_output_path("save_reload.png")).unwrap();
    assert_eq!(original.desc(), reloaded.desc());
    assert_eq!(original.bytes(), reloaded.bytes());
}

#[test]
fn save_and_reload_tiff() {
    let original = gradient_rgb_u8(17, 9);
    original.save_file(test_output_path("save_reload.tiff")).unwrap();

    let reloaded = Image::read_file(test_output_path("save_reload.tiff")).unwrap();
    assert_eq!(original.desc(), reloaded.desc());
    assert_eq!(original.bytes(), reloaded.bytes());
}

#[test]
fn save_gray16_tiff_roundtrip() {
    let desc = ImageDesc::new_packed(4, 2, ColorFormat::L_U16);
    let samples: Vec<u16> = (0..8).map(|v| v * 1000).collect();
    let original = Image::new_with_data(desc, bytemuck::cast_slice(&samples).to_vec()).unwrap();

    original
        .save_file(test_output_path("save_gray16.tiff"))
        .unwrap();
    let reloaded = Image::read_file(test_output_path("save_gray16.tiff")).unwrap();

    assert_eq!(reloaded.desc().color_format.channel_count, ChannelCount::L);
    assert_eq!(
        reloaded.desc().color_format.channel_size,
        ChannelSize::_16bit
    );
    assert_eq!(reloaded.desc().color_format.channel_type, ChannelType::UInt);
    assert_eq!(original.bytes(), reloaded.bytes());
}

#[test]
fn save_packs_padded_rows() {
    // Width 2 RGB rows occupy 6 bytes, padded to an 8-byte stride
    let desc = ImageDesc::new(2, 2, ColorFormat::RGB_U8);
    assert!(!desc.is_packed());

    let mut image = Image::new_empty(desc).unwrap();
    image.bytes_mut().copy_from_slice(&[
        1, 2, 3, 4, 5, 6, 0, 0, //
        7, 8, 9, 10, 11, 12, 0, 0,
    ]);

    image.save_file(test_output_path("save_padded.png")).unwrap();
    let reloaded = Image::read_file(test_output_path("save_padded.png")).unwrap();

    assert!(reloaded.desc().is_packed());
    assert_eq!(reloaded.bytes(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
}

#[test]
fn save_float_tiff_is_unsupported() {
    let desc = ImageDesc::new_packed(2, 2, ColorFormat::L_F32);
    let image = Image::new_empty(desc).unwrap();
    let result = image.save_file(test_output_path("save_float.tiff"));
    assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
}

// =============================================================================
// Image creation
// =============================================================================

#[test]
fn new_empty_is_zeroed() {
    let desc = ImageDesc::new(8, 4, ColorFormat::RGBA_U8);
    let image = Image::new_empty(desc).unwrap();
    assert_eq!(image.bytes().len(), desc.size_in_bytes());
    assert!(image.bytes().iter().all(|&b| b == 0));
}

#[test]
fn new_with_data_rejects_size_mismatch() {
    let desc = ImageDesc::new(1, 1, ColorFormat::L_U16);
    let result = Image::new_with_data(desc, vec![0u8; 3]);
    assert!(result.is_err());
}

#[test]
fn desc_stride_is_aligned() {
    let desc = ImageDesc::new(3, 1, ColorFormat::L_U8);
    assert_eq!(desc.row_bytes(), 3);
    assert_eq!(desc.stride, 4);
    assert!(!desc.is_packed());

    let packed = ImageDesc::new_packed(3, 1, ColorFormat::L_U8);
    assert_eq!(packed.stride, 3);
    assert!(packed.is_packed());
}

#[test]
fn packed_strips_padding() {
    let desc = ImageDesc::new(1, 2, ColorFormat::RGB_U8);
    let image = Image::new_with_data(desc, vec![1, 2, 3, 0, 4, 5, 6, 0]).unwrap();

    let packed = image.packed();
    assert!(packed.desc().is_packed());
    assert_eq!(packed.bytes(), &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn desc_display_format() {
    let desc = ImageDesc::new(640, 480, ColorFormat::RGB_U8);
    assert_eq!(desc.to_string(), "640x480 RGB_U8");
}
