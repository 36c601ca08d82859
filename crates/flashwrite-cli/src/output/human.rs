//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use flashwrite_core::CopyStats;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn write_stats(&self, stats: &CopyStats) {
        let _ = self
            .term
            .write_line(&format!("  Blocks written: {}", stats.blocks_written));
        let _ = self
            .term
            .write_line(&format!("  Blocks omitted: {}", stats.blocks_omitted));
        let _ = self.term.write_line(&format!(
            "  Bytes written:  {}",
            Self::format_size(stats.bytes_written)
        ));
        let _ = self.term.write_line(&format!(
            "  Total bytes:    {}",
            Self::format_size(stats.bytes_total)
        ));
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_copy_result(&self, stats: &CopyStats, optimized: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} Copy complete", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line("Copy complete");
        }

        self.write_stats(stats);

        if self.verbose && optimized {
            let skipped = stats.bytes_total - stats.bytes_written;
            let _ = self.term.write_line(&format!(
                "  Skipped rewriting {} of unchanged content",
                Self::format_size(skipped)
            ));
        }

        Ok(())
    }

    fn format_copy_failure(&self, stats: &CopyStats, _optimized: bool, _error: &str) -> Result<()> {
        // Even a failed copy reports what landed on the target; the error
        // itself is printed by the caller.
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} Copy failed", style("✗").red().bold()));
        } else {
            let _ = self.term.write_line("Copy failed");
        }

        self.write_stats(stats);
        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {}", style("⚠").yellow().bold(), message));
        } else {
            let _ = self.term.write_line(&format!("Warning: {message}"));
        }
    }
}
