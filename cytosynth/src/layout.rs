//! Path and directory resolution for one (sample, FOV) invocation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Project subdirectory holding per-sample masks and synthetic outputs.
pub const PROJECT_SUBDIR: &str = "MacMonoMicroglia";

const OUTPUT_SUBDIR: &str = "SyntheticImages";

/// Resolved input and output locations for a single field of view.
///
/// Nothing is validated at construction time; a missing mask surfaces as an
/// IO error when it is read.
#[derive(Debug, Clone)]
pub struct FovLayout {
    mask_path: PathBuf,
    output_dir: PathBuf,
    dot_path: PathBuf,
    rotated_path: PathBuf,
}

impl FovLayout {
    pub fn new(parent_dir: &Path, sample_name: &str, fov: &str) -> Self {
        let project_dir = parent_dir.join(PROJECT_SUBDIR);

        let mask_path = project_dir
            .join(sample_name)
            .join(format!("{}_w1_{}_t1_segmentation.tiff", sample_name, fov));

        let output_dir = project_dir.join(OUTPUT_SUBDIR).join(sample_name);
        let dot_path = output_dir.join(format!("{}_{}_CellTypeCalling_dot.TIF", sample_name, fov));
        let rotated_path =
            output_dir.join(format!("{}_{}_CellTypeCalling_dot_rotate.TIF", sample_name, fov));

        Self {
            mask_path,
            output_dir,
            dot_path,
            rotated_path,
        }
    }

    /// Creates the output directory if absent. Idempotent.
    pub fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    pub fn mask_path(&self) -> &Path {
        &self.mask_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn dot_path(&self) -> &Path {
        &self.dot_path
    }

    pub fn rotated_path(&self) -> &Path {
        &self.rotated_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_patterns() {
        let layout = FovLayout::new(Path::new("/data"), "SampleA", "s3");

        assert_eq!(
            layout.mask_path(),
            Path::new("/data/MacMonoMicroglia/SampleA/SampleA_w1_s3_t1_segmentation.tiff")
        );
        assert_eq!(
            layout.output_dir(),
            Path::new("/data/MacMonoMicroglia/SyntheticImages/SampleA")
        );
        assert_eq!(
            layout.dot_path(),
            Path::new(
                "/data/MacMonoMicroglia/SyntheticImages/SampleA/SampleA_s3_CellTypeCalling_dot.TIF"
            )
        );
        assert_eq!(
            layout.rotated_path(),
            Path::new(
                "/data/MacMonoMicroglia/SyntheticImages/SampleA/SampleA_s3_CellTypeCalling_dot_rotate.TIF"
            )
        );
    }

    #[test]
    fn test_numeric_fov_formats_into_names() {
        let layout = FovLayout::new(Path::new("/data"), "S", "7");
        assert!(layout
            .mask_path()
            .to_string_lossy()
            .ends_with("S_w1_7_t1_segmentation.tiff"));
    }

    #[test]
    fn test_ensure_output_dir_is_idempotent() {
        let root = common::test_utils::test_output_path("layout_idempotent");
        let layout = FovLayout::new(&root, "SampleA", "s1");

        layout.ensure_output_dir().unwrap();
        layout.ensure_output_dir().unwrap();
        assert!(layout.output_dir().is_dir());
    }
}
