//! Drawing primitives for scatter canvases.
//!
//! Works on 8-bit uint images (L, RGB or RGBA). Colors carry an alpha
//! component that is blended against the existing pixel.

use glam::Vec2;

use crate::color::Color;
use crate::color_format::{ChannelSize, ChannelType};
use crate::image::Image;

/// Fill an entire image with a single color.
pub fn fill(image: &mut Image, color: Color) {
    let desc = *image.desc();
    debug_assert_eq!(desc.color_format.channel_size, ChannelSize::_8bit);
    debug_assert_eq!(desc.color_format.channel_type, ChannelType::UInt);

    let channels = desc.color_format.channel_count as usize;
    let stride = desc.stride;
    let opaque = color.with_alpha(1.0);

    let pixels = image.bytes_mut();
    for y in 0..desc.height as usize {
        for x in 0..desc.width as usize {
            let idx = y * stride + x * channels;
            blend_pixel(pixels, idx, channels, opaque);
        }
    }
}

/// Draw a filled circle (dot) on an image.
///
/// The dot is clipped to the canvas bounds and alpha-blended over the
/// existing pixels.
///
/// # Arguments
/// * `image` - The image to draw on (8-bit uint formats)
/// * `center` - Center coordinates in pixels
/// * `radius` - Circle radius in pixels
/// * `color` - Color; `color.a` is the blend opacity
pub fn draw_dot(image: &mut Image, center: Vec2, radius: f32, color: Color) {
    let cx = center.x;
    let cy = center.y;
    let desc = *image.desc();
    debug_assert_eq!(desc.color_format.channel_size, ChannelSize::_8bit);
    debug_assert_eq!(desc.color_format.channel_type, ChannelType::UInt);

    let width = desc.width;
    let height = desc.height;
    let channels = desc.color_format.channel_count as usize;
    let stride = desc.stride;

    let r_sq = radius * radius;

    // Bounding box, clipped to the canvas
    let x_min = ((cx - radius).floor() as i64).max(0) as usize;
    let x_max = ((cx + radius).ceil() as i64).min(width as i64 - 1);
    let y_min = ((cy - radius).floor() as i64).max(0) as usize;
    let y_max = ((cy + radius).ceil() as i64).min(height as i64 - 1);

    if x_max < 0 || y_max < 0 || cx - radius >= width as f32 || cy - radius >= height as f32 {
        return;
    }
    let (x_max, y_max) = (x_max as usize, y_max as usize);

    let pixels = image.bytes_mut();
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let dist_sq = dx * dx + dy * dy;

            if dist_sq <= r_sq {
                let idx = y * stride + x * channels;
                blend_pixel(pixels, idx, channels, color);
            }
        }
    }
}

/// Blend a color into a single pixel at the given byte offset.
#[inline]
fn blend_pixel(pixels: &mut [u8], idx: usize, channels: usize, color: Color) {
    if channels == 1 {
        // Grayscale: use luminance
        pixels[idx] = blend_channel(color.luminance(), pixels[idx], color.a);
    } else if channels >= 3 {
        pixels[idx] = blend_channel(color.r, pixels[idx], color.a);
        pixels[idx + 1] = blend_channel(color.g, pixels[idx + 1], color.a);
        pixels[idx + 2] = blend_channel(color.b, pixels[idx + 2], color.a);
        if channels == 4 {
            pixels[idx + 3] = blend_channel(1.0, pixels[idx + 3], color.a);
        }
    }
}

/// Normal-mode blend of a normalized source value over a u8 destination.
#[inline]
fn blend_channel(src: f32, dst: u8, alpha: f32) -> u8 {
    let max = u8::MAX as f32;
    let d = dst as f32 / max;
    let result = src * alpha + d * (1.0 - alpha);
    (result * max).clamp(0.0, max) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_format::ColorFormat;
    use crate::image::ImageDesc;

    fn white_canvas(width: u32, height: u32) -> Image {
        let desc = ImageDesc::new(width, height, ColorFormat::RGB_U8);
        let mut img = Image::new_empty(desc).unwrap();
        fill(&mut img, Color::WHITE);
        img
    }

    fn pixel(img: &Image, x: usize, y: usize) -> [u8; 3] {
        let idx = y * img.desc().stride + x * 3;
        let b = img.bytes();
        [b[idx], b[idx + 1], b[idx + 2]]
    }

    #[test]
    fn test_fill_white() {
        let img = white_canvas(10, 10);
        assert_eq!(pixel(&img, 0, 0), [255, 255, 255]);
        assert_eq!(pixel(&img, 9, 9), [255, 255, 255]);
    }

    #[test]
    fn test_draw_dot_center() {
        let mut img = white_canvas(100, 100);
        draw_dot(&mut img, Vec2::new(50.0, 50.0), 5.0, Color::RED);

        assert_eq!(pixel(&img, 50, 50), [255, 0, 0]);
        // Outside the radius stays white
        assert_eq!(pixel(&img, 60, 50), [255, 255, 255]);
    }

    #[test]
    fn test_draw_dot_blends_alpha() {
        let mut img = white_canvas(20, 20);
        draw_dot(&mut img, Vec2::new(10.0, 10.0), 3.0, Color::BLACK.with_alpha(0.5));

        let [r, g, b] = pixel(&img, 10, 10);
        // 50% black over white lands mid-gray
        assert!(r > 100 && r < 155, "r = {}", r);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_draw_dot_clips_to_canvas() {
        let mut img = white_canvas(10, 10);
        // Center outside the canvas; only the overlapping arc is drawn
        draw_dot(&mut img, Vec2::new(-2.0, 5.0), 4.0, Color::BLUE);
        assert_eq!(pixel(&img, 0, 5), [0, 0, 255]);

        // Entirely off-canvas is a no-op
        draw_dot(&mut img, Vec2::new(50.0, 50.0), 4.0, Color::BLUE);
        assert_eq!(pixel(&img, 9, 9), [255, 255, 255]);
    }

    #[test]
    fn test_draw_dot_on_grayscale() {
        let desc = ImageDesc::new(20, 20, ColorFormat::L_U8);
        let mut img = Image::new_empty(desc).unwrap();
        draw_dot(&mut img, Vec2::new(10.0, 10.0), 3.0, Color::WHITE);

        let idx = 10 * img.desc().stride + 10;
        assert!(img.bytes()[idx] >= 254);
    }
}
