//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text, plus
//! ANSI coloring of log lines by display category.

use anyhow::Result;
use planwatch_core::LogCategory;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // Configure termimad skin for better appearance
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Process line by line to show hash symbols for headers
            for line in markdown.lines() {
                if line.starts_with('#') {
                    print!("\x1b[34m{line}\x1b[0m");
                    println!();
                } else {
                    // For non-header lines, use regular rendering
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Print a single log line, colored by its display category
    pub fn render_log_line(&self, category: LogCategory, line: &str) {
        match Self::color_code(category) {
            Some(code) if self.rich_enabled => println!("\x1b[{code}m{line}\x1b[0m"),
            _ => println!("{line}"),
        }
    }

    /// ANSI color code for a category; Info stays in the default color
    fn color_code(category: LogCategory) -> Option<u8> {
        match category {
            LogCategory::Info => None,
            LogCategory::Warning => Some(33),
            LogCategory::Error => Some(31),
            LogCategory::Success => Some(32),
            LogCategory::Command => Some(36),
            LogCategory::LlmRequest | LogCategory::LlmResponse => Some(35),
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
