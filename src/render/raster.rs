use std::io::Cursor;

use anyhow::Context as _;

use crate::foundation::error::{ChoreoError, ChoreoResult};

const MAX_DIM: u32 = 8_192;

/// Straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RasterFrame {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }
}

/// Rasterize an SVG document into a `size`×`size` pixel square.
pub fn rasterize_rgba8(svg: &str, size: u32) -> ChoreoResult<RasterFrame> {
    if size == 0 || size > MAX_DIM {
        return Err(ChoreoError::evaluation(format!(
            "raster size must be within 1..={MAX_DIM}, got {size}"
        )));
    }

    let mut opts = usvg::Options::default();
    opts.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse svg tree")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| ChoreoError::evaluation("failed to allocate svg pixmap"))?;
    let sx = (size as f32) / tree.size().width();
    let sy = (size as f32) / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    Ok(RasterFrame {
        width: size,
        height: size,
        data,
    })
}

/// Rasterize and encode as PNG bytes.
pub fn rasterize_png(svg: &str, size: u32) -> ChoreoResult<Vec<u8>> {
    let frame = rasterize_rgba8(svg, size)?;
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.data)
        .ok_or_else(|| ChoreoError::evaluation("raster buffer size mismatch"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
