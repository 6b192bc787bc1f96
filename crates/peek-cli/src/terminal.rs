//! Terminal implementation of the `Host` trait.
//!
//! Pickers are `inquire` selects, documents and comparisons are printed to
//! stdout, errors and the status line go through the output module.

use colored::Colorize;
use inquire::{InquireError, Select};
use peek_core::config::DisplayConfig;
use peek_core::{Comparison, Config, DiffStyle, DocumentView, Error, Host, Result};

use crate::output;
use crate::render::{render_document, render_side_by_side, render_unified};

/// Width used when the terminal size is unknown (e.g. output is piped).
const FALLBACK_WIDTH: usize = 160;

/// Host backed by an interactive terminal.
#[derive(Debug, Clone)]
pub struct TerminalHost {
    page_size: usize,
    display: DisplayConfig,
}

impl TerminalHost {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            page_size: config.general.page_size.max(1),
            display: config.display.clone(),
        }
    }

    fn width(&self) -> usize {
        if self.display.width > 0 {
            return self.display.width;
        }
        console::Term::stdout()
            .size_checked()
            .map_or(FALLBACK_WIDTH, |(_, cols)| usize::from(cols))
    }
}

impl Host for TerminalHost {
    fn pick_index(&self, label: &str, items: &[String]) -> Result<Option<usize>> {
        let selection = Select::new(label, items.to_vec())
            .with_page_size(self.page_size)
            .raw_prompt();

        match selection {
            Ok(choice) => Ok(Some(choice.index)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(Error::Host(format!("Failed to get selection: {e}"))),
        }
    }

    fn show_error(&self, message: &str) {
        output::error(message);
    }

    fn show_document(&self, document: DocumentView<'_>) -> Result<()> {
        output::info(&format!(
            "{} {}",
            output::title(document.title),
            document.uri.to_string().dimmed()
        ));
        output::hr();
        output::essential(&render_document(
            document.content,
            self.display.line_numbers,
        ));
        Ok(())
    }

    fn show_comparison(&self, comparison: &Comparison<'_>) -> Result<()> {
        let historical = comparison.historical;
        let live = comparison.live;
        output::info(&output::title(&comparison.title));

        let rendered = match self.display.diff_style {
            DiffStyle::Unified => render_unified(
                historical.content,
                &live.content,
                historical.title,
                &live.relative,
                self.display.context_lines,
            ),
            DiffStyle::SideBySide => render_side_by_side(
                historical.content,
                &live.content,
                self.width(),
                self.display.context_lines,
            ),
        };

        if rendered.is_empty() {
            output::info("No differences.");
            return Ok(());
        }

        output::hr();
        for line in rendered.lines() {
            output::essential(&colorize(line, self.display.diff_style));
        }
        Ok(())
    }

    fn set_status(&self, text: Option<&str>) {
        if let Some(text) = text {
            output::status(text);
        }
    }
}

/// Color one rendered diff line by its marker.
fn colorize(line: &str, style: DiffStyle) -> String {
    match style {
        DiffStyle::Unified => {
            if line.starts_with("---") || line.starts_with("+++") {
                line.bold().to_string()
            } else if line.starts_with("@@") {
                line.cyan().to_string()
            } else if line.starts_with('-') {
                line.red().to_string()
            } else if line.starts_with('+') {
                line.green().to_string()
            } else {
                line.to_string()
            }
        }
        DiffStyle::SideBySide => {
            if line.starts_with('┄') {
                line.dimmed().to_string()
            } else if line.starts_with('-') || line.contains("│ +") {
                line.yellow().to_string()
            } else {
                line.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_never_zero() {
        let mut config = Config::default();
        config.general.page_size = 0;
        let host = TerminalHost::new(&config);
        assert_eq!(host.page_size, 1);
    }

    #[test]
    fn test_configured_width_wins() {
        let mut config = Config::default();
        config.display.width = 99;
        let host = TerminalHost::new(&config);
        assert_eq!(host.width(), 99);
    }

    #[test]
    fn test_colorize_keeps_text() {
        for line in ["--- a", "+++ b", "@@ -1 +1 @@", "-old", "+new", " same"] {
            assert!(colorize(line, DiffStyle::Unified).contains(line));
        }
        assert!(colorize("- a │ + b", DiffStyle::SideBySide).contains("- a │ + b"));
    }
}
