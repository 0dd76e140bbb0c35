//! JSON output formatting

use std::io;

use crate::tree::TreeNode;

/// Print the built tree as pretty-printed JSON to stdout.
pub fn print_json(root: &TreeNode) -> io::Result<()> {
    let json = serde_json::to_string_pretty(root).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
