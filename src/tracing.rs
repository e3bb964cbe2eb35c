//! Tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug,shell=debug` - message flow and state diffs
//! - `RUST_LOG=chatshell::resizer=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/chatshell/logs/chatshell.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{ShellModel, TopBanner};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG, defaulting to warnings only. File
/// logging writes to the config dir's `logs/chatshell.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr; stdout carries emitted actions
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "chatshell.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of layout-relevant state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct ShellSnapshot {
    pub mounted: bool,
    pub left_panel_size: Option<f32>,
    pub left_panel_collapsed: bool,
    pub dragging: bool,
    pub banner: Option<&'static str>,
    pub compact_layout: bool,
    pub server_notices: usize,
}

fn banner_name(banner: &TopBanner) -> &'static str {
    match banner {
        TopBanner::ServerLimit { .. } => "server_limit",
        TopBanner::Cookie { .. } => "cookie",
        TopBanner::NewVersion { .. } => "new_version",
        TopBanner::UpdateCheck(_) => "update_check",
        TopBanner::PasswordNag => "password_nag",
        TopBanner::NotifierToolbar => "notifier_toolbar",
    }
}

impl ShellSnapshot {
    pub fn from_model(model: &ShellModel) -> Self {
        Self {
            mounted: model.mounted,
            left_panel_size: model.left_panel_size(),
            left_panel_collapsed: model.left_panel_collapsed(),
            dragging: model.resizer.as_ref().is_some_and(|r| r.is_dragging()),
            banner: model.top_banner().as_ref().map(banner_name),
            compact_layout: model.state.use_compact_layout,
            server_notices: model.state.server_notice_events.len(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &ShellSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.mounted != other.mounted {
            changes.push(format!("mounted: {} → {}", self.mounted, other.mounted));
        }
        if self.left_panel_size != other.left_panel_size {
            changes.push(format!(
                "left panel: {:?} → {:?}",
                self.left_panel_size, other.left_panel_size
            ));
        }
        if self.left_panel_collapsed != other.left_panel_collapsed {
            let status = if other.left_panel_collapsed {
                "collapsed"
            } else {
                "expanded"
            };
            changes.push(format!("left panel {}", status));
        }
        if self.dragging != other.dragging {
            let status = if other.dragging { "started" } else { "ended" };
            changes.push(format!("drag {}", status));
        }
        if self.banner != other.banner {
            changes.push(format!("banner: {:?} → {:?}", self.banner, other.banner));
        }
        if self.compact_layout != other.compact_layout {
            changes.push(format!("compact layout: {}", other.compact_layout));
        }
        if self.server_notices != other.server_notices {
            changes.push(format!(
                "server notices: {} → {}",
                self.server_notices, other.server_notices
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
