//! Toast themes.

use crate::color::{Color, ColorStyle};
use crate::rect::EdgeInsets;
use crate::toast::ToastKind;
use cgmath::Vector2;
use serde::{Deserialize, Serialize};

/// Semantic text styles; hosts map these to concrete fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Title,
    Headline,
    Body,
    Callout,
    Subheadline,
    Footnote,
    Caption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Font {
    pub style: TextStyle,
    #[serde(default = "Font::default_weight")]
    pub weight: FontWeight,
}

impl Font {
    pub const fn new(style: TextStyle, weight: FontWeight) -> Font {
        Font { style, weight }
    }

    fn default_weight() -> FontWeight {
        FontWeight::Regular
    }
}

/// Shadow configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowStyle {
    Disabled,
    Enabled {
        radius: f64,
        opacity: f64,
        offset: Vector2<f64>,
    },
}

impl ShadowStyle {
    pub fn subtle() -> ShadowStyle {
        ShadowStyle::Enabled {
            radius: 2.,
            opacity: 0.05,
            offset: Vector2::new(0., 1.),
        }
    }

    pub fn strong() -> ShadowStyle {
        ShadowStyle::Enabled {
            radius: 8.,
            opacity: 0.2,
            offset: Vector2::new(0., 4.),
        }
    }
}

impl Default for ShadowStyle {
    fn default() -> ShadowStyle {
        ShadowStyle::Enabled {
            radius: 4.,
            opacity: 0.1,
            offset: Vector2::new(0., 2.),
        }
    }
}

/// Colors, type, and shape of toasts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastTheme {
    pub error_colors: ColorStyle,
    pub success_colors: ColorStyle,
    pub warning_colors: ColorStyle,
    pub info_colors: ColorStyle,

    pub message_font: Font,
    pub button_font: Font,

    pub padding: EdgeInsets,
    pub corner_radius: f64,
    pub shadow: ShadowStyle,
    pub icon_size: f64,

    /// Solid backgrounds at or below this alpha get the primary text color instead of white.
    pub contrast_threshold: f64,
}

impl Default for ToastTheme {
    fn default() -> ToastTheme {
        ToastTheme {
            error_colors: ColorStyle::Solid(Color::RED),
            success_colors: ColorStyle::Solid(Color::GREEN),
            warning_colors: ColorStyle::Solid(Color::ORANGE),
            info_colors: ColorStyle::Solid(Color::BLUE),
            message_font: Font::new(TextStyle::Headline, FontWeight::Semibold),
            button_font: Font::new(TextStyle::Callout, FontWeight::Medium),
            padding: EdgeInsets::new(12., 16., 12., 16.),
            corner_radius: 12.,
            shadow: ShadowStyle::default(),
            icon_size: 20.,
            contrast_threshold: 0.,
        }
    }
}

impl ToastTheme {
    /// Gradients instead of solid colors.
    pub fn vibrant() -> ToastTheme {
        ToastTheme {
            error_colors: ColorStyle::Gradient(vec![Color::RED, Color::PINK]),
            success_colors: ColorStyle::Gradient(vec![Color::GREEN, Color::MINT]),
            warning_colors: ColorStyle::Gradient(vec![Color::ORANGE, Color::YELLOW]),
            info_colors: ColorStyle::Gradient(vec![Color::BLUE, Color::CYAN]),
            ..ToastTheme::default()
        }
    }

    /// Translucent colors.
    pub fn subtle() -> ToastTheme {
        ToastTheme {
            error_colors: ColorStyle::Solid(Color::RED.with_opacity(0.1)),
            success_colors: ColorStyle::Solid(Color::GREEN.with_opacity(0.1)),
            warning_colors: ColorStyle::Solid(Color::ORANGE.with_opacity(0.1)),
            info_colors: ColorStyle::Solid(Color::BLUE.with_opacity(0.1)),
            ..ToastTheme::default()
        }
    }

    /// Returns the background style for a toast kind.
    pub fn color_style(&self, kind: ToastKind) -> ColorStyle {
        match kind {
            ToastKind::Error => self.error_colors.clone(),
            ToastKind::Success => self.success_colors.clone(),
            ToastKind::Warning => self.warning_colors.clone(),
            ToastKind::Info => self.info_colors.clone(),
            ToastKind::Custom => ColorStyle::Solid(Color::GRAY),
        }
    }
}
