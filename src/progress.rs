//! Progress display for package downloads

use console::Style;
use indicatif::{HumanBytes, ProgressBar, ProgressStyle};

/// Progress display for a single download
pub struct DownloadProgress {
    pb: ProgressBar,
}

impl DownloadProgress {
    /// Announce the download and create a byte progress bar of the declared size
    pub fn start(url: &str, size: u64) -> Self {
        eprintln!(
            "{} {}... ({})",
            Style::new().bold().green().apply_to("Downloading"),
            url,
            human_size(size)
        );

        let style = ProgressStyle::default_bar()
            .template("  [{bar:40.cyan/blue}] {bytes}/{total_bytes} {bytes_per_sec}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let pb = ProgressBar::new(size);
        pb.set_style(style);
        Self { pb }
    }

    /// Hidden progress, for tests and non-interactive runs
    #[cfg(test)]
    pub fn hidden() -> Self {
        Self {
            pb: ProgressBar::hidden(),
        }
    }

    pub fn inc(&self, bytes: u64) {
        self.pb.inc(bytes);
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.pb.abandon();
    }
}

/// Render a byte count the way download notices do (e.g. "1.50 MiB")
pub fn human_size(bytes: u64) -> String {
    HumanBytes(bytes).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(10), "10 B");
        assert_eq!(human_size(1024), "1.00 KiB");
        assert_eq!(human_size(3 * 1024 * 1024 / 2), "1.50 MiB");
    }

    #[test]
    fn test_hidden_progress_counts() {
        let progress = DownloadProgress::hidden();
        progress.inc(5);
        progress.inc(5);
        assert_eq!(progress.pb.position(), 10);
        progress.finish();
    }
}
