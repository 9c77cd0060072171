//! Toast behavior and appearance configuration.

use crate::error::{Error, Result};
use crate::position::ToastPosition;
use crate::theme::{ShadowStyle, ToastTheme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Animation curve used when toasts appear and disappear. Times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Animation {
    Spring {
        response: f64,
        damping_fraction: f64,
        #[serde(default)]
        blend_duration: f64,
    },
    EaseInOut {
        duration: f64,
    },
    Linear {
        duration: f64,
    },
}

impl Default for Animation {
    fn default() -> Animation {
        Animation::Spring {
            response: 0.3,
            damping_fraction: 0.6,
            blend_duration: 0.,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Bottom,
    Leading,
    Trailing,
}

/// How toasts enter and leave.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionStyle {
    /// Derived from the toast position.
    #[default]
    Automatic,
    /// Slide in from an edge while fading.
    Slide(Edge),
    Fade,
    /// Fade while scaling from the given factor.
    Scale(f64),
}

/// A concrete transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub slide_from: Option<Edge>,
    pub fade: bool,
    pub scale: Option<f64>,
}

impl TransitionStyle {
    /// Resolves this style for a toast at `position`.
    pub fn resolve(self, position: ToastPosition) -> Transition {
        match self {
            TransitionStyle::Automatic => match position {
                ToastPosition::Top => TransitionStyle::Slide(Edge::Top).resolve(position),
                ToastPosition::Bottom => TransitionStyle::Slide(Edge::Bottom).resolve(position),
                ToastPosition::Center | ToastPosition::Custom { .. } => {
                    TransitionStyle::Scale(0.9).resolve(position)
                }
            },
            TransitionStyle::Slide(edge) => Transition {
                slide_from: Some(edge),
                fade: true,
                scale: None,
            },
            TransitionStyle::Fade => Transition {
                slide_from: None,
                fade: true,
                scale: None,
            },
            TransitionStyle::Scale(scale) => Transition {
                slide_from: None,
                fade: true,
                scale: Some(scale),
            },
        }
    }
}

/// Horizontal alignment of toast text, which also decides where the icon and buttons go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

/// Configuration for toast behavior and appearance.
///
/// Every field may be omitted in TOML.
///
/// ```toml
/// tap_to_dismiss = false
/// text_alignment = "center"
///
/// [theme]
/// corner_radius = 8
/// error_colors = { gradient = ["red", "#ff2d55"] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfiguration {
    pub theme: ToastTheme,

    pub tap_to_dismiss: bool,
    pub swipe_to_dismiss: bool,

    pub animation: Animation,
    pub transition: TransitionStyle,

    pub max_width: f64,
    pub horizontal_padding: f64,
    pub text_alignment: TextAlignment,
}

impl Default for ToastConfiguration {
    fn default() -> ToastConfiguration {
        ToastConfiguration {
            theme: ToastTheme::default(),
            tap_to_dismiss: true,
            swipe_to_dismiss: true,
            animation: Animation::default(),
            transition: TransitionStyle::default(),
            max_width: 600.,
            horizontal_padding: 16.,
            text_alignment: TextAlignment::default(),
        }
    }
}

impl ToastConfiguration {
    /// Parses a configuration from TOML.
    pub fn from_toml_str(s: &str) -> Result<ToastConfiguration> {
        let config: ToastConfiguration = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<ToastConfiguration> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|error| Error::Io {
            path: path.to_path_buf(),
            error,
        })?;
        let config = ToastConfiguration::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded toast configuration");
        Ok(config)
    }

    /// Checks that sizes and times are finite and not negative.
    pub fn validate(&self) -> Result<()> {
        fn check(field: &'static str, value: f64) -> Result<()> {
            if value.is_finite() && value >= 0. {
                Ok(())
            } else {
                Err(Error::InvalidValue { field, value })
            }
        }

        check("max_width", self.max_width)?;
        check("horizontal_padding", self.horizontal_padding)?;
        check("theme.corner_radius", self.theme.corner_radius)?;
        check("theme.icon_size", self.theme.icon_size)?;
        let padding = self.theme.padding;
        for value in &[padding.top, padding.leading, padding.bottom, padding.trailing] {
            check("theme.padding", *value)?;
        }
        if let ShadowStyle::Enabled { radius, opacity, .. } = self.theme.shadow {
            check("theme.shadow.radius", radius)?;
            check("theme.shadow.opacity", opacity)?;
        }
        match self.animation {
            Animation::Spring {
                response,
                damping_fraction,
                blend_duration,
            } => {
                check("animation.response", response)?;
                check("animation.damping_fraction", damping_fraction)?;
                check("animation.blend_duration", blend_duration)?;
            }
            Animation::EaseInOut { duration } | Animation::Linear { duration } => {
                check("animation.duration", duration)?;
            }
        }
        if let TransitionStyle::Scale(scale) = self.transition {
            check("transition.scale", scale)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, ColorStyle};
    use crate::position::Alignment;
    use cgmath::Vector2;

    #[test]
    fn empty_toml_is_default() {
        let config = ToastConfiguration::from_toml_str("").unwrap();
        assert_eq!(config, ToastConfiguration::default());
    }

    #[test]
    fn partial_toml() {
        let config = ToastConfiguration::from_toml_str(
            r##"
            tap_to_dismiss = false
            text_alignment = "trailing"
            transition = { slide = "leading" }
            animation = { linear = { duration = 0.25 } }

            [theme]
            corner_radius = 8.0
            shadow = "disabled"
            error_colors = { gradient = ["red", "#ff2d55"] }
            info_colors = { solid = "#0000ff80" }
            "##,
        )
        .unwrap();

        assert!(!config.tap_to_dismiss);
        assert!(config.swipe_to_dismiss);
        assert_eq!(config.text_alignment, TextAlignment::Trailing);
        assert_eq!(config.transition, TransitionStyle::Slide(Edge::Leading));
        assert_eq!(config.animation, Animation::Linear { duration: 0.25 });
        assert_eq!(config.theme.corner_radius, 8.);
        assert_eq!(config.theme.shadow, ShadowStyle::Disabled);
        assert_eq!(
            config.theme.error_colors,
            ColorStyle::Gradient(vec![Color::RED, Color::rgb(1., 45. / 255., 85. / 255.)])
        );
        assert_eq!(config.theme.success_colors, ToastTheme::default().success_colors);
    }

    #[test]
    fn rejects_bad_values() {
        match ToastConfiguration::from_toml_str("max_width = -1.0") {
            Err(Error::InvalidValue { field, .. }) => assert_eq!(field, "max_width"),
            other => panic!("expected InvalidValue, got {:?}", other),
        }
        assert!(matches!(
            ToastConfiguration::from_toml_str("[theme]\nerror_colors = { solid = \"nope\" }"),
            Err(Error::Toml(_))
        ));
        assert!(matches!(
            ToastConfiguration::from_toml_str("text_alignment = 3"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn load_missing_file() {
        let err = ToastConfiguration::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn automatic_transitions() {
        let auto = TransitionStyle::Automatic;
        assert_eq!(auto.resolve(ToastPosition::Top).slide_from, Some(Edge::Top));
        assert_eq!(auto.resolve(ToastPosition::Bottom).slide_from, Some(Edge::Bottom));
        let center = auto.resolve(ToastPosition::Center);
        assert_eq!(center.slide_from, None);
        assert_eq!(center.scale, Some(0.9));
        let custom = auto.resolve(ToastPosition::custom(Alignment::Leading, Vector2::new(1., 1.)));
        assert_eq!(custom, center);

        assert_eq!(
            TransitionStyle::Fade.resolve(ToastPosition::Top),
            Transition {
                slide_from: None,
                fade: true,
                scale: None
            }
        );
    }
}
