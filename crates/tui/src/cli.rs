//! Command-line arguments.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use techcal_core::LayoutConfig;
use techcal_core::clock::{ClockFormat, parse_clock};
use techcal_core::merge::MergePolicy;
use techcal_core::model::ViewWindow;
use techcal_core::model::view::{DEFAULT_VIEW_END, DEFAULT_VIEW_START};

/// Technician work-order calendar.
#[derive(Debug, Parser)]
#[command(name = "techcal", version, about)]
pub struct Cli {
    /// Schedule document (JSON).
    pub schedule: PathBuf,

    /// First visible time of day (HH:MM). Overrides the document.
    #[arg(long, value_parser = parse_clock)]
    pub view_start: Option<u32>,

    /// Last visible time of day (HH:MM). Overrides the document.
    #[arg(long, value_parser = parse_clock)]
    pub view_end: Option<u32>,

    /// Keep back-to-back work orders in separate clusters.
    #[arg(long)]
    pub strict_merge: bool,

    /// Print times six hours late, like the legacy server output.
    #[arg(long)]
    pub legacy_clock: bool,

    /// Gap between side-by-side blocks in rem (HTML output).
    #[arg(long, default_value_t = 1.0)]
    pub gutter_rem: f64,

    /// Print the laid-out board as HTML to stdout instead of opening the UI.
    #[arg(long)]
    pub html: bool,

    /// Write logs to this file. The terminal UI owns stdout/stderr.
    #[arg(long, env = "TECHCAL_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig::new()
            .with_merge_policy(if self.strict_merge {
                MergePolicy::Strict
            } else {
                MergePolicy::Touching
            })
            .with_gutter_rem(self.gutter_rem)
            .with_clock(if self.legacy_clock {
                ClockFormat::legacy()
            } else {
                ClockFormat::default()
            })
    }

    /// View window from the flags, if either bound was given. A missing
    /// bound falls back to the default workday edge.
    pub fn view_override(&self) -> Result<Option<ViewWindow>> {
        if self.view_start.is_none() && self.view_end.is_none() {
            return Ok(None);
        }
        let view = ViewWindow::new(
            self.view_start.unwrap_or(DEFAULT_VIEW_START),
            self.view_end.unwrap_or(DEFAULT_VIEW_END),
        )?;
        Ok(Some(view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&["techcal", "day.json"]);
        assert_eq!(cli.schedule, PathBuf::from("day.json"));
        assert_eq!(cli.layout_config(), LayoutConfig::default());
        assert!(matches!(cli.view_override(), Ok(None)));
        assert!(!cli.html);
    }

    #[test]
    fn flags_map_to_config() {
        let cli = parse(&[
            "techcal",
            "day.json",
            "--strict-merge",
            "--legacy-clock",
            "--gutter-rem",
            "0.5",
        ]);
        let config = cli.layout_config();
        assert_eq!(config.merge_policy, MergePolicy::Strict);
        assert_eq!(config.clock, ClockFormat::legacy());
        assert_eq!(config.gutter_rem, 0.5);
    }

    #[test]
    fn view_flags_parse_clock_text() {
        let cli = parse(&["techcal", "day.json", "--view-start", "06:30"]);
        assert_eq!(cli.view_start, Some(23_400));
        let view = cli.view_override().unwrap().unwrap();
        assert_eq!((view.start(), view.end()), (23_400, DEFAULT_VIEW_END));
    }

    #[test]
    fn inverted_view_flags_are_rejected() {
        let cli = parse(&["techcal", "day.json", "--view-start", "18:00", "--view-end", "08:00"]);
        assert!(cli.view_override().is_err());
    }

    #[test]
    fn bad_clock_flag_is_a_usage_error() {
        assert!(Cli::try_parse_from(["techcal", "day.json", "--view-end", "noon"]).is_err());
    }
}
