// Color and formats
pub use crate::color::Color;
pub use crate::color_format::{ChannelCount, ChannelSize, ChannelType, ColorFormat, ALL_FORMATS};

// Error handling
pub use crate::error::{Error, Result};

// Image types and reorientation ops
pub use crate::image::{Image, ImageDesc, SUPPORTED_EXTENSIONS};
pub use crate::ops::{flip_horizontal, rotate90_ccw};

// Drawing
pub use crate::drawing::{draw_dot, fill};

// Cell data
pub use crate::palette::{IdentityPalette, DEFAULT_IDENTITY_COLORS};
pub use crate::table::{CellRecord, CellTable};

// Masks and identity codes
pub use crate::identity::{identity_raster, IdentityIndex};
pub use crate::mask::SegmentationMask;

// Pipeline
pub use crate::layout::{FovLayout, PROJECT_SUBDIR};
pub use crate::synthesis::{
    render_fov, render_fov_with, render_scatter, FovArtifacts, CANVAS_MARGIN, DOT_ALPHA,
    DOT_RADIUS,
};

// Shared raster grid
pub use common::Raster;
