// Color source for session display tags
// Color is presentation data; the scheduler draws it from an injectable source
// so tests and themed shells can pin exact values

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies display color tags for newly placed sessions.
pub trait ColorSource {
    /// Next color as lowercase `#rrggbb` hex.
    fn next_color(&mut self) -> String;
}

/// Random throwaway colors, one per placement. Not deterministic and not
/// collision-free; seed an instance when repeatability matters.
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    /// A source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A repeatable source for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> String {
        format!("#{:06x}", self.rng.gen_range(0u32..0x0100_0000))
    }
}

/// Cycles through a fixed palette; fully deterministic.
pub struct FixedColors {
    palette: Vec<String>,
    next: usize,
}

impl FixedColors {
    /// A source cycling the given palette in order. An empty palette falls
    /// back to a single neutral gray.
    pub fn new(palette: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut palette: Vec<String> = palette.into_iter().map(Into::into).collect();
        if palette.is_empty() {
            palette.push("#808080".to_string());
        }

        Self { palette, next: 0 }
    }
}

impl ColorSource for FixedColors {
    fn next_color(&mut self) -> String {
        let color = self.palette[self.next % self.palette.len()].clone();
        self.next += 1;
        color
    }
}
