//! Single-FOV synthetic image generation.
//!
//! One invocation renders the cells of one field of view as colored dots on
//! a blank canvas sized to the segmentation mask, saves the render, then
//! saves a mirrored and quarter-turned variant next to it.

use std::path::{Path, PathBuf};

use glam::Vec2;
use tracing::{debug, info};

use common::Raster;

use crate::color::Color;
use crate::color_format::ColorFormat;
use crate::drawing;
use crate::error::Result;
use crate::identity::{identity_raster, IdentityIndex};
use crate::image::{Image, ImageDesc};
use crate::layout::FovLayout;
use crate::mask::SegmentationMask;
use crate::ops;
use crate::palette::IdentityPalette;
use crate::table::{CellRecord, CellTable};

/// Blank border around the mask area, in pixels.
pub const CANVAS_MARGIN: u32 = 10;
/// Dot radius, in pixels.
pub const DOT_RADIUS: f32 = 5.6;
/// Dot opacity.
pub const DOT_ALPHA: f32 = 0.95;

/// Products of one invocation.
///
/// The identity raster is a side value: it is rebuilt on every call and
/// nothing persists it. Its codes are only meaningful within the call that
/// produced them.
#[derive(Debug)]
pub struct FovArtifacts {
    pub identity_raster: Raster<u32>,
    pub dot_path: PathBuf,
    pub rotated_path: PathBuf,
}

/// Renders one field of view with the default identity palette.
///
/// See [`render_fov_with`].
pub fn render_fov(
    parent_dir: &Path,
    sample_name: &str,
    fov: &str,
    table: &CellTable,
    display: bool,
) -> Result<FovArtifacts> {
    render_fov_with(
        &IdentityPalette::default(),
        parent_dir,
        sample_name,
        fov,
        table,
        display,
    )
}

/// Renders one field of view: loads the segmentation mask, filters the cell
/// table to `fov`, stamps one colored dot per palette-matching cell, writes
/// the render and its mirrored + rotated variant.
///
/// `fov` is compared against the table's FOV column by exact string
/// equality. Rows whose identity is not in the palette are skipped when
/// drawing but still participate in identity-code assignment.
///
/// `display` keeps contract parity with interactive callers: this crate is
/// headless, so `true` logs the artifact path instead of opening a viewer.
///
/// An empty row set is not an error; the output pair is blank.
pub fn render_fov_with(
    palette: &IdentityPalette,
    parent_dir: &Path,
    sample_name: &str,
    fov: &str,
    table: &CellTable,
    display: bool,
) -> Result<FovArtifacts> {
    let layout = FovLayout::new(parent_dir, sample_name, fov);
    layout.ensure_output_dir()?;

    let mask = SegmentationMask::read_tiff(layout.mask_path())?;
    debug!(
        "loaded {}x{} mask from {}",
        mask.width(),
        mask.height(),
        layout.mask_path().display()
    );

    let rows = table.filter_fov(fov);
    debug!("{} cells in FOV {} of {}", rows.len(), fov, sample_name);

    let index = IdentityIndex::from_rows(rows.iter().copied());
    let identity = identity_raster(mask.raster(), &rows, &index);

    let canvas = render_scatter(&rows, palette, mask.width() as u32, mask.height() as u32)?;
    canvas.save_file(layout.dot_path())?;

    let reloaded = Image::read_file(layout.dot_path())?;
    let rotated = ops::rotate90_ccw(&ops::flip_horizontal(&reloaded)?)?;
    rotated.save_file(layout.rotated_path())?;

    if display {
        info!("rendered {}", layout.dot_path().display());
    }

    Ok(FovArtifacts {
        identity_raster: identity,
        dot_path: layout.dot_path().to_path_buf(),
        rotated_path: layout.rotated_path().to_path_buf(),
    })
}

/// Stamps one dot per palette-matching cell onto a white RGB canvas.
///
/// The canvas spans the mask area plus [`CANVAS_MARGIN`] on every side.
/// Dots are placed with the horizontal position taken from `center_y` and
/// the vertical position from `center_x` — the axis swap is a fixed
/// convention of this pipeline, matching the row/column orientation of the
/// upstream masks. Palette entries are drawn in table order.
pub fn render_scatter(
    rows: &[&CellRecord],
    palette: &IdentityPalette,
    mask_width: u32,
    mask_height: u32,
) -> Result<Image> {
    let desc = ImageDesc::new(
        mask_width + 2 * CANVAS_MARGIN,
        mask_height + 2 * CANVAS_MARGIN,
        ColorFormat::RGB_U8,
    );
    let mut canvas = Image::new_empty(desc)?;
    drawing::fill(&mut canvas, Color::WHITE);

    let margin = CANVAS_MARGIN as f32;
    for (label, color) in palette.iter() {
        let color = color.with_alpha(DOT_ALPHA);
        for row in rows.iter().filter(|r| r.identity == label) {
            let center = Vec2::new(
                row.center_y as f32 + margin,
                row.center_x as f32 + margin,
            );
            drawing::draw_dot(&mut canvas, center, DOT_RADIUS, color);
        }
    }

    Ok(canvas)
}
