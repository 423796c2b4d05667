/// Straight (non-premultiplied) colour with 8-bit channels and a float alpha,
/// matching how 2D canvas fill styles are expressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    /// Build from a `0xRRGGBB` literal; alpha is taken as given.
    pub const fn from_hex(rgb: u32, alpha: f32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: alpha,
        }
    }

    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }
}
