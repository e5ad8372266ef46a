use std::sync::Arc;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, CanvasResult};
use crate::pixel::Pixel;

const CHANNELS: usize = 4;

/// How snapshot pixel data is held in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotEncoding {
    /// Plain RGBA bytes
    #[default]
    Raw,
    /// Lossless PNG, smaller for mostly flat doodles but slower to take and restore
    Png,
}

/// Immutable copy of a [`PixelBuffer`] at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    encoding: SnapshotEncoding,
    data: Arc<[u8]>,
}

impl Snapshot {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn encoding(&self) -> SnapshotEncoding {
        self.encoding
    }

    /// Decode back to row-major RGBA bytes
    pub fn to_rgba(&self) -> CanvasResult<Vec<u8>> {
        match self.encoding {
            SnapshotEncoding::Raw => Ok(self.data.to_vec()),
            SnapshotEncoding::Png => {
                let image = image::load_from_memory_with_format(&self.data, ImageFormat::Png)
                    .map_err(|e| CanvasError::SnapshotCodec(e.to_string()))?;
                Ok(image.to_rgba8().into_raw())
            }
        }
    }
}

/// A `width` x `height` grid of RGBA pixels stored row-major.
///
/// Every accessor rejects coordinates outside the grid with
/// [`CanvasError::OutOfBounds`]; nothing is clamped implicitly.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
    /// Bumped on every mutation so the UI knows when to re-upload
    revision: u64,
}

// Two buffers are equal when their pixels are; the revision is bookkeeping
impl PartialEq for PixelBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }
}

impl Eq for PixelBuffer {}

impl PixelBuffer {
    /// Create a buffer cleared to the background colour
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        Self::filled(width, height, Pixel::BACKGROUND)
    }

    /// Create a buffer where every pixel is `pixel` (made opaque)
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> CanvasResult<Self> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize;
        let data = pixel.opaque().to_array().repeat(len);
        Ok(Self {
            width,
            height,
            data,
            revision: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Row-major RGBA bytes, four per pixel
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn offset(&self, x: i32, y: i32) -> CanvasResult<usize> {
        if !self.contains(x, y) {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize * self.width as usize + x as usize) * CHANNELS)
    }

    pub fn get(&self, x: i32, y: i32) -> CanvasResult<Pixel> {
        let i = self.offset(x, y)?;
        Ok(Pixel::rgba(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Write one pixel. Alpha is always stored as 255.
    pub fn set(&mut self, x: i32, y: i32, pixel: Pixel) -> CanvasResult<()> {
        let i = self.offset(x, y)?;
        self.data[i..i + CHANNELS].copy_from_slice(&pixel.opaque().to_array());
        self.revision += 1;
        Ok(())
    }

    /// Reset every pixel to [`Pixel::BACKGROUND`]
    pub fn clear(&mut self) {
        let background = Pixel::BACKGROUND.to_array();
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&background);
        }
        self.revision += 1;
    }

    /// Raw snapshot of the current pixels
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            encoding: SnapshotEncoding::Raw,
            data: Arc::from(self.data.as_slice()),
        }
    }

    /// Snapshot the current pixels using the given encoding
    pub fn snapshot_with(&self, encoding: SnapshotEncoding) -> CanvasResult<Snapshot> {
        match encoding {
            SnapshotEncoding::Raw => Ok(self.snapshot()),
            SnapshotEncoding::Png => {
                let mut png = Vec::new();
                PngEncoder::new(&mut png)
                    .write_image(&self.data, self.width, self.height, ExtendedColorType::Rgba8)
                    .map_err(|e| CanvasError::SnapshotCodec(e.to_string()))?;
                Ok(Snapshot {
                    width: self.width,
                    height: self.height,
                    encoding,
                    data: Arc::from(png),
                })
            }
        }
    }

    /// Overwrite all pixels from `snapshot`. Sizes must match.
    pub fn restore(&mut self, snapshot: &Snapshot) -> CanvasResult<()> {
        if snapshot.width != self.width || snapshot.height != self.height {
            return Err(CanvasError::SnapshotMismatch {
                snapshot_width: snapshot.width,
                snapshot_height: snapshot.height,
                width: self.width,
                height: self.height,
            });
        }
        let rgba = snapshot.to_rgba()?;
        if rgba.len() != self.data.len() {
            return Err(CanvasError::SnapshotCodec(format!(
                "expected {} bytes, decoded {}",
                self.data.len(),
                rgba.len()
            )));
        }
        self.data = rgba;
        self.revision += 1;
        Ok(())
    }
}
