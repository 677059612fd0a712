//! QrEncoder - renders codes to PNG with the `qrcode` and `image` crates.

use std::io::Cursor;

use futures_util::future::{BoxFuture, FutureExt};
use image::{ImageFormat, Rgba, RgbaImage};
use qrcode::{Color, EcLevel, QrCode};

use super::{Artifact, CodeEncoder, EncodeError, QrMatrix, RenderOptions};

/// Pixels per module when the requested width is too small for the symbol.
const FALLBACK_SCALE: f64 = 4.0;

/// Production encoder backed by the `qrcode` crate.
#[derive(Debug, Clone, Copy)]
pub struct QrEncoder {
    ec_level: EcLevel,
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl QrEncoder {
    /// Create an encoder using error correction level M.
    pub fn new() -> Self {
        Self {
            ec_level: EcLevel::M,
        }
    }

    /// Create an encoder with a specific error correction level.
    pub fn with_ec_level(ec_level: EcLevel) -> Self {
        Self { ec_level }
    }

    /// Encode `code` and render it synchronously.
    ///
    /// The image is `options.width` pixels square when the width can hold the
    /// symbol plus its margin; each module is then `width / (modules + 2 * margin)`
    /// pixels, which may be fractional. Otherwise a fixed scale is used.
    pub fn render(&self, code: &str, options: &RenderOptions) -> Result<Artifact, EncodeError> {
        let qr = QrCode::with_error_correction_level(code.as_bytes(), self.ec_level)?;
        let size = qr.width();
        let modules: Vec<bool> = qr.to_colors().into_iter().map(|c| c == Color::Dark).collect();
        let matrix = QrMatrix::new(size, modules)
            .ok_or_else(|| EncodeError::Task(format!("malformed {}x{} module grid", size, size)))?;

        let image = rasterize(&matrix, options);
        let pixel_width = image.width();

        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        log::debug!(
            "Rendered {} as {}x{} modules, {}px PNG ({} bytes)",
            code,
            size,
            size,
            pixel_width,
            png.len()
        );

        Ok(Artifact::new(code.to_string(), png, pixel_width, matrix))
    }
}

impl CodeEncoder for QrEncoder {
    fn encode(
        &self,
        code: String,
        options: RenderOptions,
    ) -> BoxFuture<'static, Result<Artifact, EncodeError>> {
        let encoder = *self;
        async move {
            tokio::task::spawn_blocking(move || encoder.render(&code, &options))
                .await
                .map_err(|e| EncodeError::Task(e.to_string()))?
        }
        .boxed()
    }
}

/// Draw the matrix into an RGBA image.
fn rasterize(matrix: &QrMatrix, options: &RenderOptions) -> RgbaImage {
    let total = (matrix.width() as u32 + options.margin * 2) as f64;
    let scale = if options.width as f64 >= total {
        options.width as f64 / total
    } else {
        FALLBACK_SCALE
    };
    let symbol_size = (total * scale).floor() as u32;
    let scaled_margin = options.margin as f64 * scale;
    let inner_end = symbol_size as f64 - scaled_margin;
    let last = matrix.width().saturating_sub(1);

    RgbaImage::from_fn(symbol_size, symbol_size, |x, y| {
        let (px, py) = (x as f64, y as f64);
        let inside = px >= scaled_margin && py >= scaled_margin && px < inner_end && py < inner_end;
        if inside {
            let col = (((px - scaled_margin) / scale).floor() as usize).min(last);
            let row = (((py - scaled_margin) / scale).floor() as usize).min(last);
            if matrix.is_dark(col, row) {
                return Rgba(options.dark);
            }
        }
        Rgba(options.light)
    })
}
