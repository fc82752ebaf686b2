//! Command-line interface for batch shattering of image files

use crate::effect::parameters::{FractureParameters, parse_hex_color};
use crate::effect::pipeline::fracture_image;
use crate::io::configuration::{
    DEFAULT_ELONGATION, DEFAULT_GAP, DEFAULT_GAP_COLOR, DEFAULT_INTENSITY, DEFAULT_ROTATION,
    DEFAULT_SCATTER, DEFAULT_SHARD_COUNT, DEFAULT_STABILITY, OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{FractureError, Result, target_error};
use crate::io::export::write_jpeg;
use crate::io::progress::ProgressManager;
use clap::Parser;
use image::Rgba;
use rand::Rng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fracture")]
#[command(
    author,
    version,
    about = "Render a Voronoi shatter effect over raster images"
)]
/// Command-line arguments for the shatter tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for a reproducible shard layout
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Approximate number of shards visible inside the image
    #[arg(short = 'n', long, default_value_t = DEFAULT_SHARD_COUNT)]
    pub shards: u32,

    /// Displacement strength; zero leaves every shard in place
    #[arg(short, long, default_value_t = DEFAULT_INTENSITY)]
    pub intensity: f64,

    /// Gap stroke width in pixels between displaced shards
    #[arg(short, long, default_value_t = DEFAULT_GAP)]
    pub gap: f64,

    /// Percentage of shards left undisplaced (0-100)
    #[arg(long, default_value_t = DEFAULT_STABILITY)]
    pub stability: f64,

    /// Horizontal stretch factor applied to the tessellation
    #[arg(long, default_value_t = DEFAULT_ELONGATION)]
    pub elongation_x: f64,

    /// Vertical stretch factor applied to the tessellation
    #[arg(long, default_value_t = DEFAULT_ELONGATION)]
    pub elongation_y: f64,

    /// Global rotation of the tessellation in degrees (0-360)
    #[arg(short, long, default_value_t = DEFAULT_ROTATION)]
    pub rotation: f64,

    /// Per-shard rotation jitter range in degrees (0-180)
    #[arg(long, default_value_t = DEFAULT_SCATTER)]
    pub scatter: f64,

    /// Gap stroke color as #rrggbb
    #[arg(long, default_value = DEFAULT_GAP_COLOR, value_parser = parse_hex_color)]
    pub gap_color: Rgba<u8>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Collect the effect parameters from the parsed arguments
    pub const fn parameters(&self) -> FractureParameters {
        FractureParameters {
            shard_count: self.shards,
            intensity: self.intensity,
            gap: self.gap,
            stability: self.stability,
            elongation_x: self.elongation_x,
            elongation_y: self.elongation_y,
            rotation: self.rotation,
            scatter: self.scatter,
            gap_color: self.gap_color,
        }
    }
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        // One layout seed for the whole batch keeps runs reproducible
        let seed = self.cli.seed.unwrap_or_else(|| rand::rng().random());

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file, seed)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if Self::has_supported_extension(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(target_error("Target file must be a PNG, JPEG or WebP image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if Self::has_supported_extension(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(target_error("Target must be an image file or directory"))
        }
    }

    fn has_supported_extension(path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| {
                let lower = ext.to_ascii_lowercase();
                SUPPORTED_EXTENSIONS.contains(&lower.as_str())
            })
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, seed: u64) -> Result<()> {
        let output_path = Self::output_path(input_path);

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let source = image::open(input_path)
            .map_err(|source| FractureError::ImageLoad {
                path: input_path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        let params = self.cli.parameters();
        let surface = fracture_image(&source, &params, seed)?;
        write_jpeg(&surface, &output_path)?;

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.jpg", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
