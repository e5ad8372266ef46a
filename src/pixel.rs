use egui::{Color32, Pos2};

/// One RGBA pixel. Equality is exact and channel-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::rgba(0, 0, 0, 255);
    pub const WHITE: Pixel = Pixel::rgba(255, 255, 255, 255);

    /// What the eraser paints and what `clear` resets to
    pub const BACKGROUND: Pixel = Pixel::WHITE;

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with alpha forced to 255
    pub const fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgb> for Pixel {
    fn from(rgb: Rgb) -> Self {
        Pixel::rgba(rgb.r, rgb.g, rgb.b, 255)
    }
}

impl From<Pixel> for Color32 {
    fn from(p: Pixel) -> Self {
        Color32::from_rgba_unmultiplied(p.r, p.g, p.b, p.a)
    }
}

/// A resolved colour as handed over by the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Color32 {
    fn from(rgb: Rgb) -> Self {
        Color32::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Integer canvas coordinate. May lie outside the buffer; callers check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snap a screen-space position, relative to `origin`, onto the pixel grid
    pub fn from_pos(pos: Pos2, origin: Pos2) -> Self {
        let local = pos - origin;
        Self::new(local.x.floor() as i32, local.y.floor() as i32)
    }
}
