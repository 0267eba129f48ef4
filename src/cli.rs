//! Command-line front end.
//!
//! This module holds the argument definitions, the text rendering of a maze, and the logging
//! setup used by the binary.

use std::io::Write;

use clap::Parser;
use color_eyre::eyre::Result;
use env_logger::Env;

use crate::Maze;

/// Glyph printed for a wall tile.
const WALL: char = '#';

/// Glyph printed for a passage tile.
const PASSAGE: char = ' ';

/// Command-line arguments.
///
/// The positional arguments follow the order height, width, extra path probability. All three
/// have defaults, so running without arguments prints a 15 by 21 maze.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Number of tile rows; odd and at least 5.
    #[arg(default_value_t = 15)]
    pub height: usize,
    /// Number of tile columns; odd and at least 5.
    #[arg(default_value_t = 21)]
    pub width: usize,
    /// Percent chance of opening each candidate wall after generation; 0 skips loosening.
    #[arg(default_value_t = 0, allow_negative_numbers = true)]
    pub extra_paths: i32,
    /// Seed for reproducible output; drawn from system entropy when absent.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Keep single-tile walls that end up surrounded by passages after loosening.
    #[arg(long)]
    pub keep_isolated: bool,
}

/// Installs the logger used by the binary.
///
/// Output defaults to warnings and errors and can be raised through the `RUST_LOG` environment
/// variable.
///
/// # Errors
///
/// This function returns an error if a logger has already been installed.
pub fn init_logging() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).try_init()?;

    Ok(())
}

/// Builds a maze from the arguments and prints it to `out`.
///
/// The generated maze is always printed. When the extra path probability is positive, the maze
/// is then loosened and printed a second time.
///
/// # Errors
///
/// This function may return errors if:
/// - The dimensions are even or smaller than five
/// - Writing to `out` fails
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let mut maze = match args.seed {
        Some(seed) => Maze::with_seed(args.height, args.width, seed)?,
        None => Maze::new(args.height, args.width)?,
    };

    writeln!(out, "Generated maze:")?;
    out.write_all(render(&maze.tiles()).as_bytes())?;

    if args.extra_paths > 0 {
        maze.loosen(args.extra_paths, !args.keep_isolated);

        writeln!(out, "\n\nWith extra paths:")?;
        out.write_all(render(&maze.tiles()).as_bytes())?;
    }

    Ok(())
}

/// Renders tiles as text.
///
/// Each tile becomes a glyph followed by a tab, and each row ends with a newline.
pub fn render(tiles: &[Vec<bool>]) -> String {
    let mut text = String::new();
    for row in tiles {
        for wall in row {
            text.push(if *wall { WALL } else { PASSAGE });
            text.push('\t');
        }
        text.push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(args: &Args) -> String {
        let mut out = Vec::new();
        run(args, &mut out).expect("run should succeed");
        String::from_utf8(out).expect("output should be valid utf-8")
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["mazecarve"]).expect("defaults should parse");

        assert_eq!(args.height, 15);
        assert_eq!(args.width, 21);
        assert_eq!(args.extra_paths, 0);
        assert_eq!(args.seed, None);
        assert!(!args.keep_isolated);
    }

    #[test]
    fn test_args_positional_and_flags() {
        let args = Args::try_parse_from([
            "mazecarve",
            "9",
            "11",
            "25",
            "--seed",
            "3",
            "--keep-isolated",
        ])
        .expect("arguments should parse");

        assert_eq!(args.height, 9);
        assert_eq!(args.width, 11);
        assert_eq!(args.extra_paths, 25);
        assert_eq!(args.seed, Some(3));
        assert!(args.keep_isolated);
    }

    #[test]
    fn test_args_negative_probability() {
        let args =
            Args::try_parse_from(["mazecarve", "9", "11", "-5"]).expect("arguments should parse");

        assert_eq!(args.extra_paths, -5);
    }

    #[test]
    fn test_args_reject_negative_dimensions() {
        assert!(Args::try_parse_from(["mazecarve", "-9", "11"]).is_err());
    }

    #[test]
    fn test_render() {
        let tiles = vec![vec![true, false], vec![false, true]];

        assert_eq!(render(&tiles), "#\t \t\n \t#\t\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_run_prints_generated_maze() {
        let args = Args::try_parse_from(["mazecarve", "5", "7", "--seed", "1"])
            .expect("arguments should parse");

        let text = output(&args);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.first(), Some(&"Generated maze:"));
        assert_eq!(lines.len(), 6);
        assert_eq!(lines.get(1), Some(&"#\t#\t#\t#\t#\t#\t#\t"));
        assert!(!text.contains("With extra paths"));
    }

    #[test]
    fn test_run_prints_loosened_maze() {
        let args = Args::try_parse_from(["mazecarve", "7", "9", "100", "--seed", "2"])
            .expect("arguments should parse");

        let text = output(&args);

        assert!(text.starts_with("Generated maze:\n"));
        assert!(text.contains("\n\n\nWith extra paths:\n"));
        assert_eq!(text.lines().count(), 1 + 7 + 2 + 1 + 7);
    }

    #[test]
    fn test_run_is_reproducible_with_seed() {
        let args = Args::try_parse_from(["mazecarve", "11", "11", "30", "--seed", "8"])
            .expect("arguments should parse");

        assert_eq!(output(&args), output(&args));
    }

    #[test]
    fn test_run_rejects_invalid_dimensions() {
        let args = Args::try_parse_from(["mazecarve", "6", "7"]).expect("arguments should parse");
        let mut out = Vec::new();

        assert!(run(&args, &mut out).is_err());
        assert!(out.is_empty());
    }
}
