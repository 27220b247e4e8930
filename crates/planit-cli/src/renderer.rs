//! Terminal rendering for plan markdown.
//!
//! Rich output colours plan headings, checked-off tasks and overrun warnings
//! and hands every other line to termimad. `--no-color` prints the markdown
//! unchanged.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// How a single line of plan markdown is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineStyle {
    /// `#` plan title or `##` section / list entry
    Heading,
    /// `### [x]` task that is done
    DoneTask,
    /// `### [ ]` task still to do
    OpenTask,
    /// `>` quote, used for overrun warnings
    Warning,
    /// Anything else, rendered inline by termimad
    Body,
}

impl LineStyle {
    fn of(line: &str) -> Self {
        if line.starts_with("### [x]") {
            Self::DoneTask
        } else if line.starts_with("### [ ]") {
            Self::OpenTask
        } else if line.starts_with('#') {
            Self::Heading
        } else if line.starts_with('>') {
            Self::Warning
        } else {
            Self::Body
        }
    }

    fn ansi(self) -> Option<&'static str> {
        match self {
            Self::Heading | Self::OpenTask => Some(BLUE),
            Self::DoneTask => Some(GREEN),
            Self::Warning => Some(RED),
            Self::Body => None,
        }
    }
}

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Prints markdown to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match LineStyle::of(line).ansi() {
                Some(colour) => println!("{colour}{line}{RESET}"),
                None if line.starts_with("- Generated:") => println!("{DIM}{line}{RESET}"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
