//! Cytosynth - synthetic cell-identity images for multiplexed tissue imaging.
//!
//! Renders the cells of one field of view (FOV) as colored dots on a blank
//! canvas sized to the FOV's segmentation mask, using a fixed cell-type
//! palette, then saves the render and a mirrored, quarter-turned variant.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cytosynth::prelude::*;
//!
//! let table = CellTable::from_csv_path("cells.csv")?;
//! let artifacts = render_fov(Path::new("/data"), "SampleA", "s1", &table, false)?;
//!
//! println!("wrote {}", artifacts.dot_path.display());
//! ```
//!
//! One call handles one (sample, FOV) pair; callers loop for batches.

mod color;
mod color_format;
mod drawing;
mod error;
mod identity;
mod image;
mod layout;
mod mask;
mod ops;
mod palette;
mod synthesis;
mod table;

pub mod prelude;

pub use prelude::*;
