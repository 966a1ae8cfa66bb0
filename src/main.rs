//! safe-svg - preview the inline SVG icon block renderer.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use safe_svg::SafeSvgConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let args = cli.command.block_args();
    safe_svg::logger::set_verbose(args.verbose);

    match &cli.command {
        Commands::Render { args } => {
            let config = SafeSvgConfig::load(&cli.config)?;
            cli::render::render_block(&config, &args.attrs)
        }
        Commands::Style { args } => cli::render::print_style(&args.attrs),
    }
}
