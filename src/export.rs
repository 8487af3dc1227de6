//! Batch driver: render each requested size and persist it as a PNG.

use std::path::PathBuf;

use crate::{
    error::{IconError, IconResult},
    render::render_icon_with,
    theme::IconTheme,
};

/// Sizes shipped in the extension manifest, smallest first.
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 96];

/// What to export and where.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Directory receiving the PNGs; created if absent.
    pub out_dir: PathBuf,
    /// Edge lengths to render, one file per entry, written in this order.
    pub sizes: Vec<u32>,
    /// Appearance; the default theme reproduces the shipped artwork.
    pub theme: IconTheme,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("icons"),
            sizes: DEFAULT_SIZES.to_vec(),
            theme: IconTheme::default(),
        }
    }
}

/// Render every size in `opts.sizes` and write `icon-<size>.png` files into
/// `opts.out_dir`, returning the written paths in input order.
///
/// The directory is created if missing (re-running against an existing
/// directory just overwrites the files). The first failing size aborts the
/// batch; the error names the offending size or path.
pub fn export_icons(opts: &ExportOptions) -> IconResult<Vec<PathBuf>> {
    std::fs::create_dir_all(&opts.out_dir).map_err(|e| IconError::io(&opts.out_dir, e))?;

    let mut paths = Vec::with_capacity(opts.sizes.len());
    for &size in &opts.sizes {
        let icon = render_icon_with(size, &opts.theme)?;
        let path = opts.out_dir.join(format!("icon-{size}.png"));
        image::save_buffer_with_format(
            &path,
            &icon.data,
            size,
            size,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| IconError::encode(&path, e))?;
        tracing::info!(size, path = %path.display(), "wrote icon");
        paths.push(path);
    }
    Ok(paths)
}
