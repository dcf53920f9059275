use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("malformed hex colour {0:?} (expected #rrggbb)")]
    Malformed(String),
}

/// 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (case-insensitive). Alpha suffixes are not accepted.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ColorError::Malformed(hex.to_string()))?;
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorError::Malformed(hex.to_string()))?;
        Ok(Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel linear blend, rounded half up.
    pub fn lerp(self, other: Rgb, factor: f32) -> Rgb {
        #[inline]
        fn channel(a: u8, b: u8, t: f32) -> u8 {
            let v = a as f32 + t * (b as f32 - a as f32);
            (v + 0.5).floor().clamp(0.0, 255.0) as u8
        }
        Rgb {
            r: channel(self.r, other.r, factor),
            g: channel(self.g, other.g, factor),
            b: channel(self.b, other.b, factor),
        }
    }
}

/// Blend two `#rrggbb` colours; `factor` 0 yields `color1`, 1 yields `color2`.
pub fn interpolate_color(color1: &str, color2: &str, factor: f32) -> Result<String, ColorError> {
    let a = Rgb::from_hex(color1)?;
    let b = Rgb::from_hex(color2)?;
    Ok(a.lerp(b, factor).to_hex())
}

/// Palette walk shared by every phrase in a frame.
#[derive(Clone, Debug)]
pub struct ColorCycle {
    palette: Vec<Rgb>,
    current: usize,
    next: usize,
    progress: f32,
    step: f32,
}

impl ColorCycle {
    pub fn new(palette: &[&str], step: f32) -> Result<Self, ColorError> {
        let palette = palette
            .iter()
            .map(|hex| Rgb::from_hex(hex))
            .collect::<Result<Vec<_>, _>>()?;
        if palette.is_empty() {
            return Err(ColorError::Malformed(String::new()));
        }
        Ok(Self {
            next: 1 % palette.len(),
            palette,
            current: 0,
            progress: 0.0,
            step,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn next_index(&self) -> usize {
        self.next
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn color(&self) -> Rgb {
        self.palette[self.current].lerp(self.palette[self.next], self.progress)
    }

    pub fn advance(&mut self) {
        self.progress += self.step;
        if self.progress >= 1.0 {
            self.progress = 0.0;
            self.current = self.next;
            self.next = (self.next + 1) % self.palette.len();
        }
    }
}
