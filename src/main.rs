//! Command-line driver for the cutplan library.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use clap::Parser;

use cutplan::{cover, DiagramConfig, Dimensions};

/// Compute a sheet tiling layout and render its diagram
#[derive(Parser, Debug)]
#[command(name = "cutplan", version, about)]
struct Args {
    /// Sheet size as WxH, e.g. 30x60
    #[arg(long)]
    sheet: String,

    /// Coverage area size as WxH, e.g. 400x400
    #[arg(long)]
    area: String,

    /// Output PNG path
    #[arg(short, long, default_value = "cutplan.png")]
    output: PathBuf,

    /// Longest canvas edge in pixels
    #[arg(long, default_value_t = 640)]
    canvas_size: u32,

    /// Disable the background grid overlay
    #[arg(long)]
    no_grid: bool,

    /// Print a JSON payload (summary fields plus base64 PNG) instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let sheet = Dimensions::parse(&args.sheet)?;
    let area = Dimensions::parse(&args.area)?;

    let config = DiagramConfig {
        canvas_size: args.canvas_size,
        draw_grid: !args.no_grid,
        ..Default::default()
    };

    let (summary, diagram) = cover(sheet, area, &config)?;

    fs::write(&args.output, &diagram.png_data)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    if args.json {
        let payload = serde_json::json!({
            "summary": summary,
            "diagram": {
                "width": diagram.width,
                "height": diagram.height,
                "png_base64": BASE64.encode(&diagram.png_data),
            },
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", summary);
        println!("Diagram written to {}", args.output.display());
    }

    Ok(())
}
