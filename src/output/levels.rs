//! Console output for the level-ordered listing
//!
//! One line per tree entry, in level order, formatted as
//! `depth:position:path` with a trailing newline. No header, no summary
//! line.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Entry, TreeNode};

use super::config::OutputConfig;

/// Writes the level-ordered listing to stdout, tinting directory paths when
/// color is enabled. The byte content of each line is identical with color
/// off.
pub struct LevelFormatter {
    stdout: StandardStream,
}

impl LevelFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    /// Print every entry of the tree, draining the traversal in one pass.
    pub fn print(&mut self, root: &TreeNode) -> io::Result<()> {
        for entry in root.level_order() {
            self.write_entry(&entry)?;
        }
        Ok(())
    }

    fn write_entry(&mut self, entry: &Entry) -> io::Result<()> {
        write!(self.stdout, "{}:{}:", entry.depth, entry.position)?;
        if entry.kind.is_dir() {
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        }
        write!(self.stdout, "{}", entry.path.display())?;
        self.stdout.reset()?;
        writeln!(self.stdout)?;
        Ok(())
    }
}

/// Render the listing into a plain string, one line per entry.
pub fn render_levels(root: &TreeNode) -> String {
    let mut out = String::new();
    for entry in root.level_order() {
        out.push_str(&format!(
            "{}:{}:{}\n",
            entry.depth,
            entry.position,
            entry.path.display()
        ));
    }
    out
}
