use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

use crate::buffer::PixelBuffer;

/// The canvas as a GPU texture, re-uploaded only when the buffer revision moves
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
    uploads: u64,
}

// TextureHandle doesn't implement Debug
impl std::fmt::Debug for CanvasTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasTexture")
            .field("uploaded_revision", &self.uploaded_revision)
            .field("uploads", &self.uploads)
            .finish()
    }
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times pixels were sent to the GPU
    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    fn to_image(buffer: &PixelBuffer) -> ColorImage {
        let size = [buffer.width() as usize, buffer.height() as usize];
        ColorImage::from_rgba_unmultiplied(size, buffer.as_bytes())
    }

    /// Texture showing the current `buffer`, uploading it first if stale
    pub fn texture_id(&mut self, ctx: &Context, buffer: &PixelBuffer) -> TextureId {
        let revision = buffer.revision();
        if let Some(handle) = &self.handle {
            if self.uploaded_revision == Some(revision) {
                return handle.id();
            }
        }

        let image = Self::to_image(buffer);
        let handle = match self.handle.take() {
            Some(mut handle) => {
                handle.set(image, TextureOptions::NEAREST);
                handle
            }
            None => ctx.load_texture("doodle_canvas", image, TextureOptions::NEAREST),
        };
        let id = handle.id();
        self.handle = Some(handle);
        self.uploaded_revision = Some(revision);
        self.uploads += 1;
        id
    }
}
