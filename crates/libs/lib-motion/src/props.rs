//! The animatable property set.

use serde::{Deserialize, Serialize};

/// Visual state of one element. Lengths are pixels, rotations degrees.
/// `y_percent` is a vertical shift relative to the element's own height.
///
/// The default value is the element's natural rendering (fully opaque, no
/// transform, no blur), which is the `to` state of every entrance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatedProps {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub y_percent: f64,
    pub scale: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub blur: f64,
}

impl Default for AnimatedProps {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AnimatedProps {
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        y_percent: 0.0,
        scale: 1.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        blur: 0.0,
    };

    /// Fully transparent, otherwise untouched.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        ..Self::IDENTITY
    };

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub fn y_percent(mut self, percent: f64) -> Self {
        self.y_percent = percent;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn rotate_x(mut self, degrees: f64) -> Self {
        self.rotate_x = degrees;
        self
    }

    pub fn rotate_y(mut self, degrees: f64) -> Self {
        self.rotate_y = degrees;
        self
    }

    pub fn blur(mut self, px: f64) -> Self {
        self.blur = px;
        self
    }

    /// Per-property linear interpolation; `t` is not clamped so overshooting easings work.
    pub fn interpolate(&self, to: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            y_percent: mix(self.y_percent, to.y_percent),
            scale: mix(self.scale, to.scale),
            rotate_x: mix(self.rotate_x, to.rotate_x),
            rotate_y: mix(self.rotate_y, to.rotate_y),
            blur: mix(self.blur, to.blur).max(0.0),
        }
    }

    /// CSS `transform` value.
    pub fn transform_css(&self) -> String {
        let mut css = format!(
            "translate3d({}px, {}px, 0px) scale({})",
            round(self.x),
            round(self.y),
            round(self.scale)
        );
        if self.y_percent != 0.0 {
            css.push_str(&format!(" translateY({}%)", round(self.y_percent)));
        }
        if self.rotate_x != 0.0 {
            css.push_str(&format!(" rotateX({}deg)", round(self.rotate_x)));
        }
        if self.rotate_y != 0.0 {
            css.push_str(&format!(" rotateY({}deg)", round(self.rotate_y)));
        }
        css
    }

    /// CSS `filter` value.
    pub fn filter_css(&self) -> String {
        if self.blur > 0.0 {
            format!("blur({}px)", round(self.blur))
        } else {
            "none".to_string()
        }
    }

    /// `(property, value)` pairs a surface writes as inline style.
    pub fn style_declarations(&self) -> [(&'static str, String); 3] {
        [
            ("opacity", round(self.opacity).to_string()),
            ("transform", self.transform_css()),
            ("filter", self.filter_css()),
        ]
    }

    /// Inline `style` attribute text.
    pub fn to_style(&self) -> String {
        self.style_declarations()
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn round(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
