//! Code encoder seam and the artifacts it produces.
//!
//! The form never renders QR codes itself. It hands a complete code to a
//! [`CodeEncoder`], which may suspend and may fail, and stores the resulting
//! [`Artifact`] once the outcome is known to be current.

mod qr;

use futures_util::future::BoxFuture;

pub use qr::QrEncoder;

/// Fixed rendering options for encoded codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Target image width (and height) in pixels.
    pub width: u32,
    /// Quiet zone around the symbol, in modules.
    pub margin: u32,
    /// Foreground (dark module) color, RGBA.
    pub dark: [u8; 4],
    /// Background (light module) color, RGBA.
    pub light: [u8; 4],
}

impl RenderOptions {
    /// The only options the form uses: 256px wide, 2-module margin, black on white.
    pub const STANDARD: RenderOptions = RenderOptions {
        width: 256,
        margin: 2,
        dark: [0x00, 0x00, 0x00, 0xFF],
        light: [0xFF, 0xFF, 0xFF, 0xFF],
    };
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Square grid of QR modules, row-major, `true` for dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Build a matrix from row-major modules. Returns `None` if `modules`
    /// is not `width * width` long.
    pub fn new(width: usize, modules: Vec<bool>) -> Option<Self> {
        if modules.len() == width * width {
            Some(Self { width, modules })
        } else {
            None
        }
    }

    /// Number of modules per side.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at column `x`, row `y` is dark. Out of range is light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }

    /// Render the matrix as text using half-block characters, two module
    /// rows per text line, with `margin` light modules on every side.
    ///
    /// Dark modules are drawn as spaces and light modules as blocks, so the
    /// symbol scans correctly on dark terminal backgrounds.
    pub fn to_half_blocks(&self, margin: usize) -> Vec<String> {
        let total = self.width + margin * 2;
        let dark_at = |x: usize, y: usize| -> bool {
            x >= margin && y >= margin && self.is_dark(x - margin, y - margin)
        };

        (0..total)
            .step_by(2)
            .map(|y| {
                (0..total)
                    .map(|x| {
                        let top = dark_at(x, y);
                        // odd totals leave a final half row that is always light
                        let bottom = y + 1 < total && dark_at(x, y + 1);
                        match (top, bottom) {
                            (true, true) => ' ',
                            (true, false) => '▄',
                            (false, true) => '▀',
                            (false, false) => '█',
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

/// Encoded form of a code: the PNG image plus the module matrix it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    code: String,
    png: Vec<u8>,
    pixel_width: u32,
    matrix: QrMatrix,
}

impl Artifact {
    pub fn new(code: String, png: Vec<u8>, pixel_width: u32, matrix: QrMatrix) -> Self {
        Self {
            code,
            png,
            pixel_width,
            matrix,
        }
    }

    /// The code this artifact encodes.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// PNG-encoded image bytes.
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    /// Image width and height in pixels.
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    pub fn matrix(&self) -> &QrMatrix {
        &self.matrix
    }
}

/// Errors that can occur while encoding a code.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("QR encoding failed: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Encode task failed: {0}")]
    Task(String),
}

/// Asynchronous, fallible conversion of a complete code into an [`Artifact`].
///
/// The returned future owns everything it needs, so callers can spawn it
/// and let it outlive the request that started it.
pub trait CodeEncoder: Send + Sync {
    fn encode(
        &self,
        code: String,
        options: RenderOptions,
    ) -> BoxFuture<'static, Result<Artifact, EncodeError>>;
}
