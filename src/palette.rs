//! Background colours. Purely cosmetic; re-rolled every time fruit is eaten.

use rand::Rng;

/// Hue in degrees, saturation and lightness in percent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// Dark backdrop shown before the first fruit is eaten (#1a1a2e).
pub const INITIAL_BACKGROUND: (u8, u8, u8) = (0x1a, 0x1a, 0x2e);

impl Hsl {
    /// A soft pastel: any hue, 55-69% saturation, 78-84% lightness.
    pub fn random_pastel<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Hsl {
            h: rng.gen_range(0..360),
            s: 55 + rng.gen_range(0..15),
            l: 78 + rng.gen_range(0..7),
        }
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        let s = f32::from(self.s) / 100.0;
        let l = f32::from(self.l) / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = f32::from(self.h % 360) / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let (r, g, b) = match hp as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let to_byte = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (to_byte(r), to_byte(g), to_byte(b))
    }
}
