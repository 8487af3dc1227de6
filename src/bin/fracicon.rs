use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fracicon", version, about = "Generate the extension toolbar icons")]
struct Cli {
    /// Output directory for the generated PNGs (created if absent).
    #[arg(long, default_value = "icons")]
    out_dir: PathBuf,

    /// Pixel sizes to render, one icon-<size>.png per entry.
    #[arg(long, value_delimiter = ',', default_values_t = fracicon::DEFAULT_SIZES)]
    sizes: Vec<u32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let opts = fracicon::ExportOptions {
        out_dir: cli.out_dir,
        sizes: cli.sizes,
        theme: fracicon::IconTheme::default(),
    };
    let paths = fracicon::export_icons(&opts)
        .with_context(|| format!("export icons into '{}'", opts.out_dir.display()))?;

    for path in &paths {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
