use crate::pixel::Rgb;

/// A named swatch shown in the colour picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub rgb: Rgb,
}

const fn swatch(name: &'static str, r: u8, g: u8, b: u8) -> Swatch {
    Swatch {
        name,
        rgb: Rgb::new(r, g, b),
    }
}

/// The default swatches, CSS colour names resolved to sRGB
pub const SWATCHES: [Swatch; 12] = [
    swatch("black", 0, 0, 0),
    swatch("darkgrey", 169, 169, 169),
    swatch("yellowgreen", 154, 205, 50),
    swatch("gold", 255, 215, 0),
    swatch("mediumorchid", 186, 85, 211),
    swatch("orange", 255, 165, 0),
    swatch("pink", 255, 192, 203),
    swatch("sienna", 160, 82, 45),
    swatch("crimson", 220, 20, 60),
    swatch("dodgerblue", 30, 144, 255),
    swatch("lightblue", 173, 216, 230),
    swatch("darkolivegreen", 85, 107, 47),
];

/// Look up a swatch colour by name, ignoring case
pub fn resolve(name: &str) -> Option<Rgb> {
    SWATCHES
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .map(|s| s.rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_named_colours() {
        assert_eq!(resolve("crimson"), Some(Rgb::new(220, 20, 60)));
        assert_eq!(resolve("DodgerBlue"), Some(Rgb::new(30, 144, 255)));
        assert_eq!(resolve("chartreuse"), None);
    }

    #[test]
    fn test_first_swatch_is_default_brush_colour() {
        assert_eq!(SWATCHES[0].rgb, Rgb::BLACK);
    }
}
