//! Render and Style command implementation.
//!
//! Plays the host: block attributes come from a JSON file or stdin, media
//! from the `[media]` section of the config.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use safe_svg::style::resolve_style;
use safe_svg::{BlockAttributes, FsMediaLibrary, SafeSvgConfig, StdFileReader, SvgIconRenderer};
use safe_svg::{debug, log};

/// Read block attributes from `source`, or stdin when it is `-`.
pub fn read_attributes(source: &Path) -> Result<BlockAttributes> {
    let content = if source == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read attributes from stdin")?;
        buf
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("Failed to read `{}`", source.display()))?
    };

    parse_attributes(&content)
}

fn parse_attributes(content: &str) -> Result<BlockAttributes> {
    let value: serde_json::Value =
        serde_json::from_str(content).context("Block attributes are not valid JSON")?;
    BlockAttributes::from_json(&value).context("Invalid block attributes")
}

/// Render a block and print the markup to stdout.
///
/// A block that renders to nothing prints nothing; the reason is logged.
pub fn render_block(config: &SafeSvgConfig, source: &Path) -> Result<()> {
    let attrs = read_attributes(source)?;
    let library = FsMediaLibrary::from_config(&config.media, config.get_root());
    debug!("media"; "{} attachment(s) under {}", library.len(), config.root_join(&config.media.root).display());

    let renderer = SvgIconRenderer::new(library, StdFileReader).with_config(config.render.clone());
    match renderer.try_render(&attrs) {
        Ok(html) => println!("{html}"),
        Err(err) => log!("render"; "nothing rendered for media {}: {}", attrs.image_id, err),
    }
    Ok(())
}

/// Print the resolved inline style of a block.
pub fn print_style(source: &Path) -> Result<()> {
    let attrs = read_attributes(source)?;
    println!("{}", resolve_style(&attrs));
    Ok(())
}
