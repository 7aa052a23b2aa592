use std::fs::File;
use std::path::Path;

use bytemuck::Pod;
use tiff::encoder::colortype::{self, ColorType};
use tiff::encoder::{TiffEncoder, TiffValue};

use crate::color_format::{ChannelCount, ChannelSize, ChannelType};
use crate::error::{Error, Result};
use crate::image::Image;

macro_rules! dispatch_tiff {
    ($image:expr, $filename:expr, {
        $( ($count:ident, $size:ident, $type:ident) => $color_type:ty ),+ $(,)?
    }) => {
        match (
            $image.desc.color_format.channel_count,
            $image.desc.color_format.channel_size,
            $image.desc.color_format.channel_type,
        ) {
            $(
                (ChannelCount::$count, ChannelSize::$size, ChannelType::$type) => {
                    save_tiff_internal::<$color_type, _>($image, $filename)?
                }
            )+
            (_, _, _) => {
                return Err(Error::UnsupportedFormat(format!(
                    "TIFF format: {:?} {:?} {:?}",
                    $image.desc.color_format.channel_count,
                    $image.desc.color_format.channel_size,
                    $image.desc.color_format.channel_type
                )));
            }
        }
    };
}

pub(crate) fn save_tiff<P: AsRef<Path>>(image: &Image, filename: P) -> Result<()> {
    debug_assert!(
        image.desc().is_packed(),
        "Image must be packed before saving"
    );

    dispatch_tiff!(image, filename, {
        // Gray
        (L, _8bit, UInt) => colortype::Gray8,
        (L, _16bit, UInt) => colortype::Gray16,
        (L, _32bit, UInt) => colortype::Gray32,
        // RGB
        (Rgb, _8bit, UInt) => colortype::RGB8,
        (Rgb, _16bit, UInt) => colortype::RGB16,
        // RGBA
        (Rgba, _8bit, UInt) => colortype::RGBA8,
        (Rgba, _16bit, UInt) => colortype::RGBA16,
    });

    Ok(())
}

fn save_tiff_internal<CT, P: AsRef<Path>>(image: &Image, filename: P) -> Result<()>
where
    CT: ColorType,
    CT::Inner: Pod,
    [CT::Inner]: TiffValue,
{
    // Copying cast: byte buffers carry no alignment guarantee for wider samples
    let buf: Vec<CT::Inner> = bytemuck::pod_collect_to_vec(image.bytes());

    let mut file = File::create(filename)?;
    let mut tiff = TiffEncoder::new(&mut file)?;
    let img = tiff.new_image::<CT>(image.desc().width, image.desc().height)?;

    img.write_data(&buf)?;

    Ok(())
}
