use crate::{animation::anim::Lerp, foundation::core::Vec2};

/// Renderable state of one diagram element.
///
/// The default value is the identity: fully opaque, unscaled, untranslated,
/// no stroke offset, full extent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    pub opacity: f64,
    pub scale: f64,
    pub translate: Vec2,
    /// Stroke dash offset in virtual canvas units.
    pub dash_offset: f64,
    /// Fraction of the element's natural width that is shown (0..1).
    pub extent: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            translate: Vec2::ZERO,
            dash_offset: 0.0,
            extent: 1.0,
        }
    }
}

impl VisualState {
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_translate(mut self, x: f64, y: f64) -> Self {
        self.translate = Vec2::new(x, y);
        self
    }

    pub fn with_dash_offset(mut self, dash_offset: f64) -> Self {
        self.dash_offset = dash_offset;
        self
    }

    pub fn with_extent(mut self, extent: f64) -> Self {
        self.extent = extent;
        self
    }

    /// Layer a loop value on top of this state.
    pub fn modulate(mut self, property: Property, value: f64) -> Self {
        match property {
            Property::Opacity => self.opacity *= value,
            Property::Scale => self.scale *= value,
            Property::DashOffset => self.dash_offset += value,
            Property::TranslateY => self.translate.y += value,
        }
        self
    }

    /// State handed to a renderer: opacity and extent clamped to [0, 1].
    ///
    /// Scale is left alone so spring overshoot stays visible.
    pub fn clamped(mut self) -> Self {
        self.opacity = self.opacity.clamp(0.0, 1.0);
        self.extent = self.extent.clamp(0.0, 1.0);
        self
    }
}

impl Lerp for VisualState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
            translate: Vec2::lerp(a.translate, b.translate, t),
            dash_offset: f64::lerp(&a.dash_offset, &b.dash_offset, t),
            extent: f64::lerp(&a.extent, &b.extent, t),
        }
    }
}

/// Property a perpetual loop drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Property {
    Opacity,
    Scale,
    DashOffset,
    TranslateY,
}

impl Property {
    /// Value whose modulation leaves a state unchanged.
    pub fn identity(self) -> f64 {
        match self {
            Self::Opacity | Self::Scale => 1.0,
            Self::DashOffset | Self::TranslateY => 0.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
