//! CLI entry point for strata

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use strata::{BuilderConfig, LevelFormatter, OsFilesystem, OutputConfig, TreeBuilder, print_json};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(about = "Tree, but level by level")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Output the tree in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Make the starting path absolute against the current directory, with `.`
/// segments folded away so they don't leak into the printed paths.
fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    joined.components().collect()
}

fn main() {
    let args = Args::parse();

    let root = absolutize(&args.path);
    if !root.exists() {
        eprintln!(
            "strata: cannot access '{}': No such file or directory",
            args.path.display()
        );
        process::exit(1);
    }

    let config = BuilderConfig {
        max_depth: args.level,
    };
    let tree = TreeBuilder::new(config, OsFilesystem).build(&root);

    let result = if args.json {
        print_json(&tree)
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
        };
        LevelFormatter::new(output_config).print(&tree)
    };

    if let Err(e) = result {
        eprintln!("strata: error writing output: {}", e);
        process::exit(1);
    }
}
