//! Linear color scale for heatmap cells

use serde::{Deserialize, Serialize};

/// Color with 0-255 float channels and a 0-1 alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
    /// Opacity
    pub a: f64,
}

impl Rgba {
    /// Convert CSS-style HSL (degrees, fractions) with alpha
    #[must_use]
    pub fn from_hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        let chroma = (1.0 - 2.0f64.mul_add(lightness, -1.0).abs()) * saturation;
        let sector = hue.rem_euclid(360.0) / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (r, g, b) = match sector.floor() as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Self {
            r: (r + m) * 255.0,
            g: (g + m) * 255.0,
            b: (b + m) * 255.0,
            a: alpha.clamp(0.0, 1.0),
        }
    }

    /// Channel-wise linear interpolation, `t` in `[0, 1]`
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: (other.r - self.r).mul_add(t, self.r),
            g: (other.g - self.g).mul_add(t, self.g),
            b: (other.b - self.b).mul_add(t, self.b),
            a: (other.a - self.a).mul_add(t, self.a),
        }
    }

    /// CSS color string; `rgb(...)` when opaque, `rgba(...)` otherwise
    #[must_use]
    pub fn to_css(self) -> String {
        let (r, g, b) = (channel(self.r), channel(self.g), channel(self.b));
        let alpha = (self.a * 1000.0).round() / 1000.0;
        if alpha >= 1.0 {
            format!("rgb({r}, {g}, {b})")
        } else {
            format!("rgba({r}, {g}, {b}, {alpha})")
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Piecewise-linear scale over evenly spaced integer control points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    stops: Vec<Rgba>,
}

impl ColorScale {
    /// Scale whose domain is `0..stops.len() - 1`
    #[must_use]
    pub const fn new(stops: Vec<Rgba>) -> Self {
        Self { stops }
    }

    /// Six-stop scale for activity levels 0 to 5, dark gray to full purple
    #[must_use]
    pub fn activity() -> Self {
        let purple = |alpha| Rgba::from_hsla(262.0, 0.8, 0.6, alpha);
        Self::new(vec![
            Rgba::from_hsla(240.0, 0.037, 0.159, 1.0),
            purple(0.2),
            purple(0.4),
            purple(0.6),
            purple(0.8),
            purple(1.0),
        ])
    }

    /// Largest value in the domain
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn domain_max(&self) -> f64 {
        self.stops.len().saturating_sub(1) as f64
    }

    /// Interpolated color at `value`, clamped to the domain
    #[must_use]
    pub fn rgba(&self, value: f64) -> Option<Rgba> {
        let first = *self.stops.first()?;
        let value = if value.is_finite() {
            value.clamp(0.0, self.domain_max())
        } else {
            0.0
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = value.floor() as usize;
        let lower = self.stops.get(index).copied().unwrap_or(first);
        Some(match self.stops.get(index + 1) {
            Some(&upper) => lower.lerp(upper, value - value.floor()),
            None => lower,
        })
    }

    /// CSS color at `value`; transparent for an empty scale
    #[must_use]
    pub fn color(&self, value: f64) -> String {
        self.rgba(value)
            .map_or_else(|| "transparent".to_string(), Rgba::to_css)
    }

    /// CSS color for an integer activity level
    #[must_use]
    pub fn color_for_level(&self, level: u8) -> String {
        self.color(f64::from(level))
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::activity()
    }
}
