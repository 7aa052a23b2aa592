//! End-to-end demo: fabricates a small sample (segmentation mask + cell
//! table), renders one FOV, and prints the written artifact paths.
//!
//! Run with: cargo run --example render_fov

use std::path::Path;

use anyhow::Result;

use common::log_setup::setup_logging;
use cytosynth::prelude::*;

const SAMPLE: &str = "DemoSample";
const FOV: &str = "s1";
const WIDTH: u32 = 256;
const HEIGHT: u32 = 192;

fn main() -> Result<()> {
    setup_logging("info");

    let root = Path::new("demo_output");
    write_demo_mask(root)?;
    let table = demo_table();

    let artifacts = render_fov(root, SAMPLE, FOV, &table, true)?;

    println!("dot image:     {}", artifacts.dot_path.display());
    println!("rotated image: {}", artifacts.rotated_path.display());
    println!(
        "identity raster: {}x{}, {} labeled pixels",
        artifacts.identity_raster.width(),
        artifacts.identity_raster.height(),
        artifacts.identity_raster.iter().filter(|&&v| v != 0).count()
    );

    Ok(())
}

/// Writes a mask with one square cell footprint per table row.
fn write_demo_mask(root: &Path) -> Result<()> {
    let sample_dir = root.join(PROJECT_SUBDIR).join(SAMPLE);
    std::fs::create_dir_all(&sample_dir)?;

    let mut pixels = vec![0u16; (WIDTH * HEIGHT) as usize];
    for (i, row) in demo_table().iter().enumerate() {
        let cx = row.center_x as i64;
        let cy = row.center_y as i64;
        for dy in -4..=4i64 {
            for dx in -4..=4i64 {
                let (x, y) = (cy + dx, cx + dy);
                if x >= 0 && x < WIDTH as i64 && y >= 0 && y < HEIGHT as i64 {
                    pixels[(y * WIDTH as i64 + x) as usize] = i as u16 + 1;
                }
            }
        }
    }

    let desc = ImageDesc::new_packed(WIDTH, HEIGHT, ColorFormat::L_U16);
    let mask = Image::new_with_data(desc, bytemuck::cast_slice(&pixels).to_vec())?;
    mask.save_file(sample_dir.join(format!("{}_w1_{}_t1_segmentation.tiff", SAMPLE, FOV)))?;

    Ok(())
}

fn demo_table() -> CellTable {
    let cells = [
        (1, "Tumor", 40.0, 60.0),
        (2, "Tumor", 52.0, 100.0),
        (3, "Stroma", 90.0, 30.0),
        (4, "Monocyte_Stroma", 120.0, 140.0),
        (5, "Macrophage_Stroma", 70.0, 200.0),
        (6, "Microglia_Stroma", 150.0, 80.0),
        (7, "NaN", 20.0, 180.0),
        (8, "Unclassified", 160.0, 220.0), // not in the palette; never drawn
    ];

    CellTable::from_records(
        cells
            .iter()
            .map(|&(object_number, identity, center_x, center_y)| CellRecord {
                fov: FOV.to_string(),
                object_number,
                identity: identity.to_string(),
                center_x,
                center_y,
            })
            .collect(),
    )
}
