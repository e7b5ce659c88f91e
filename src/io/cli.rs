//! Command-line interface for turning one image into a dice mosaic

use crate::dice::{Die, Style};
use crate::glyphs::{AssetGlyphs, GlyphProvider, GlyphSet, PipGlyphs};
use crate::io::configuration::{
    DEFAULT_SIDE, DEFAULT_STYLE, LEGACY_LONG_FLAGS, MAX_SIDE, STYLE_COUNT,
    SUPPORTED_INPUT_EXTENSIONS,
};
use crate::io::error::{Result, invalid_input};
use crate::io::image::{load_grayscale, save_image, timestamped_output_path};
use crate::io::progress::ProgressReporter;
use crate::mosaic::compositor::{band_count, compose_parallel_with, compose_with};
use crate::mosaic::{Image, MosaicSummary};
use chrono::{Local, NaiveDateTime};
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Instant;

const EXAMPLES: &str = "\
Examples:
  img2dice ./sample/input/sample1.jpg -side 10 -style 2 --save
  img2dice ./sample/input/sample2.jpg -side 1 --save
  img2dice ./sample/input/sample2.jpg --style 3 --output out/sample2.png
  img2dice ./sample/input/sample1.jpg --glyphs ./dice-png --parallel";

#[derive(Parser, Debug)]
#[command(name = "img2dice")]
#[command(
    author,
    version,
    about = "Build up an image from die faces",
    long_about = None,
    disable_version_flag = true,
    after_help = EXAMPLES
)]
/// Command-line arguments for the mosaic tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Path of an image file (jpeg, jpg, png or bmp)
    #[arg(value_name = "INPUT", value_parser = parse_image_path)]
    pub input: PathBuf,

    /// Die style code
    #[arg(long, default_value_t = DEFAULT_STYLE, value_parser = clap::value_parser!(u8).range(1..=i64::from(STYLE_COUNT)))]
    pub style: u8,

    /// Length of the die's side in pixels (at most 1024)
    #[arg(long, default_value_t = DEFAULT_SIDE, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SIDE)))]
    pub side: u32,

    /// Save the result beside the input with a timestamped name
    #[arg(long)]
    pub save: bool,

    /// Also write the result to this path (format from extension)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory of raster glyphs laid out as <DIR>/<style>/<face>.png
    #[arg(short, long, value_name = "DIR")]
    pub glyphs: Option<PathBuf>,

    /// Compose row bands on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Die described by the style and side arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the style code or side length is invalid
    pub fn die(&self) -> Result<Die> {
        Die::new(Style::new(self.style)?, self.side as usize)
    }

    /// Every path the result should be written to
    pub fn output_targets(&self, now: &NaiveDateTime) -> Vec<PathBuf> {
        let mut targets = Vec::new();
        if self.save {
            targets.push(timestamped_output_path(&self.input, now));
        }
        if let Some(output) = &self.output {
            targets.push(output.clone());
        }
        targets
    }
}

/// Accept an existing file with a supported image extension
///
/// # Errors
///
/// Returns an error if the path is not a file or its extension is unsupported
pub fn validate_input_path(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(invalid_input(path, &"file does not exist"));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if !SUPPORTED_INPUT_EXTENSIONS.contains(&extension.as_str()) {
        return Err(invalid_input(
            path,
            &format!(
                "not an image file, valid formats are [{}]",
                SUPPORTED_INPUT_EXTENSIONS.join(", ")
            ),
        ));
    }

    Ok(path.canonicalize().unwrap_or_else(|_| path.to_path_buf()))
}

fn parse_image_path(value: &str) -> std::result::Result<PathBuf, String> {
    validate_input_path(Path::new(value)).map_err(|err| err.to_string())
}

/// Rewrite the single-dash long flags (`-side 10`, `-style=2`) to `--side`/`--style`
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str().and_then(rewrite_legacy_flag) {
            Some(rewritten) => OsString::from(rewritten),
            None => arg,
        })
        .collect()
}

fn rewrite_legacy_flag(arg: &str) -> Option<String> {
    LEGACY_LONG_FLAGS.iter().find_map(|flag| {
        let rest = arg.strip_prefix('-')?.strip_prefix(flag)?;
        (rest.is_empty() || rest.starts_with('=')).then(|| format!("--{flag}{rest}"))
    })
}

/// Result of a run: the mosaic plus what happened when persisting it
#[derive(Debug)]
pub struct RunOutcome {
    /// Composed mosaic
    pub image: Image,
    /// Per-face block counts
    pub summary: MosaicSummary,
    /// Paths written successfully
    pub saved: Vec<PathBuf>,
    /// Paths that could not be written
    pub failed: Vec<PathBuf>,
}

/// Runs one conversion according to CLI arguments
pub struct MosaicRunner {
    cli: Cli,
}

impl MosaicRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Arguments this runner was built with
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Load glyphs, compose the mosaic and persist it
    ///
    /// Save failures are logged and reported in the outcome rather than
    /// returned, so the composed image is never lost.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The style or side is invalid
    /// - Any of the six glyphs cannot be produced
    /// - The input image cannot be loaded
    pub fn run(&self) -> Result<RunOutcome> {
        let start_time = Instant::now();
        let die = self.cli.die()?;
        let glyphs = self.load_glyphs(&die)?;
        log::info!(
            "Dice with style {} and side {} are ready",
            die.style(),
            die.side()
        );

        let mut image = load_grayscale(&self.cli.input)?;
        let progress = ProgressReporter::new(
            band_count(image.height(), die.side_nonzero()),
            self.cli.should_show_progress(),
        );

        let summary = if self.cli.parallel {
            compose_parallel_with(&mut image, &die, &glyphs, || progress.advance())?
        } else {
            compose_with(&mut image, &die, &glyphs, || progress.advance())?
        };
        progress.finish();

        log::info!(
            "Image converted to {} dice in {:.2?}",
            summary.blocks(),
            start_time.elapsed()
        );
        log::debug!("Face counts (1 to 6): {:?}", summary.face_counts());

        let mut outcome = RunOutcome {
            image,
            summary,
            saved: Vec::new(),
            failed: Vec::new(),
        };
        self.persist(&mut outcome, &Local::now().naive_local());
        Ok(outcome)
    }

    fn load_glyphs(&self, die: &Die) -> Result<GlyphSet> {
        let provider: Box<dyn GlyphProvider> = match &self.cli.glyphs {
            Some(dir) => Box::new(AssetGlyphs::new(dir)),
            None => Box::new(PipGlyphs::new()),
        };
        provider.load_glyphs(die.style(), die.side())
    }

    fn persist(&self, outcome: &mut RunOutcome, now: &NaiveDateTime) {
        let targets = self.cli.output_targets(now);
        if targets.is_empty() {
            log::info!("Result not saved; pass --save or --output to keep it");
            return;
        }

        for target in targets {
            match save_image(&outcome.image, &target) {
                Ok(()) => {
                    log::info!("Image is saved to {}", target.display());
                    outcome.saved.push(target);
                }
                Err(err) => {
                    log::warn!("Image couldn't be saved: {err}");
                    outcome.failed.push(target);
                }
            }
        }
    }
}
