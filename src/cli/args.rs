//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Preview the safe-svg icon block renderer
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: safe-svg.toml)
    #[arg(short = 'C', long, default_value = "safe-svg.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render a block to markup
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: BlockArgs,
    },

    /// Print only the resolved inline style of a block
    #[command(visible_alias = "s")]
    Style {
        #[command(flatten)]
        args: BlockArgs,
    },
}

/// Shared arguments for Render and Style commands
#[derive(clap::Args, Debug, Clone)]
pub struct BlockArgs {
    /// JSON file with the block attributes. Use `-` to read from stdin.
    #[arg(value_name = "ATTRS", value_hint = clap::ValueHint::FilePath)]
    pub attrs: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Commands {
    pub fn block_args(&self) -> &BlockArgs {
        match self {
            Commands::Render { args } | Commands::Style { args } => args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from(["safe-svg", "render", "block.json", "-V"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("safe-svg.toml"));
        assert!(matches!(cli.command, Commands::Render { .. }));

        let args = cli.command.block_args();
        assert_eq!(args.attrs, PathBuf::from("block.json"));
        assert!(args.verbose);
    }

    #[test]
    fn test_parse_style_from_stdin() {
        let cli =
            Cli::try_parse_from(["safe-svg", "-C", "site/safe-svg.toml", "s", "-", "--color", "never"])
                .unwrap();
        assert_eq!(cli.config, PathBuf::from("site/safe-svg.toml"));
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(matches!(cli.command, Commands::Style { .. }));
        assert_eq!(cli.command.block_args().attrs, PathBuf::from("-"));
        assert!(!cli.command.block_args().verbose);
    }
}
