//! RGB colouration for prey and predator colour imprints

use serde::{Deserialize, Serialize};

use crate::rng::SimRng;

/// Colour with channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Uniformly random colour
    pub fn random<R: SimRng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.next_unit(), rng.next_unit(), rng.next_unit())
    }

    /// Euclidean distance in RGB space, normalised so black to white is 1.0
    pub fn distance(&self, other: &Rgb) -> f64 {
        let dr = self.red - other.red;
        let dg = self.green - other.green;
        let db = self.blue - other.blue;
        (dr * dr + dg * dg + db * db).sqrt() / 3f64.sqrt()
    }

    /// Pull this colour toward `target` by `factor`.
    ///
    /// Each channel moves by `(self - target) * factor`, so 0.0 leaves the
    /// colour unchanged and 1.0 adopts `target` outright.
    pub fn imprint_toward(&self, target: &Rgb, factor: f64) -> Rgb {
        let pull = |own: f64, seen: f64| own - (own - seen) * factor;
        Rgb::new(
            pull(self.red, target.red),
            pull(self.green, target.green),
            pull(self.blue, target.blue),
        )
    }

    /// 8-bit channels for rendering
    pub fn to_256(&self) -> [u8; 3] {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.red), channel(self.green), channel(self.blue)]
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}
