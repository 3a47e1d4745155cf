//! Terminal rendering for the step screens.
//!
//! Uses termimad for rich markdown display of the invitation copy, with a
//! plain text fallback for `--no-color` and non-terminal output.

use anyhow::Result;
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

        // Gold headings and warm emphasis to match the invitation.
        skin.set_headers_fg(Color::Yellow);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Grey);

        Self { rich_enabled, skin }
    }

    /// Whether rich output is enabled.
    pub fn is_rich(&self) -> bool {
        self.rich_enabled
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
            if !markdown.ends_with('\n') {
                println!();
            }
        }
        Ok(())
    }

    /// Clear the screen between steps. A no-op in plain mode so piped
    /// output stays readable.
    pub fn clear(&self) {
        if self.rich_enabled {
            print!("\x1b[2J\x1b[H");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
