//! Progress display while bands of blocks are composed

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BAND_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Dicing: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Counts finished row bands; safe to advance from worker threads
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Reporter expecting `bands` updates, drawn to stderr when `visible`
    pub fn new(bands: usize, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(bands as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_length(bands as u64);
        bar.set_style(BAND_STYLE.clone());
        Self { bar }
    }

    /// Record one finished band
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Bands recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Bands expected in total
    pub fn length(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
