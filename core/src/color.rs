//! Colors and color styles.

use crate::error::Error;
use core::convert::TryFrom;
use core::fmt;
use serde::{Deserialize, Serialize};

/// An RGBA color with components between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const CLEAR: Color = Color::rgba(0., 0., 0., 0.);
    pub const BLACK: Color = Color::rgb(0., 0., 0.);
    pub const WHITE: Color = Color::rgb(1., 1., 1.);
    pub const GRAY: Color = Color::rgb(0.557, 0.557, 0.576);
    pub const RED: Color = Color::rgb(1., 0.231, 0.188);
    pub const ORANGE: Color = Color::rgb(1., 0.584, 0.);
    pub const YELLOW: Color = Color::rgb(1., 0.8, 0.);
    pub const GREEN: Color = Color::rgb(0.204, 0.78, 0.349);
    pub const MINT: Color = Color::rgb(0., 0.78, 0.745);
    pub const CYAN: Color = Color::rgb(0.196, 0.678, 0.902);
    pub const BLUE: Color = Color::rgb(0., 0.478, 1.);
    pub const PINK: Color = Color::rgb(1., 0.176, 0.333);

    const NAMED: [(&'static str, Color); 12] = [
        ("clear", Color::CLEAR),
        ("black", Color::BLACK),
        ("white", Color::WHITE),
        ("gray", Color::GRAY),
        ("red", Color::RED),
        ("orange", Color::ORANGE),
        ("yellow", Color::YELLOW),
        ("green", Color::GREEN),
        ("mint", Color::MINT),
        ("cyan", Color::CYAN),
        ("blue", Color::BLUE),
        ("pink", Color::PINK),
    ];

    pub const fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b, a: 1. }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color { r, g, b, a }
    }

    /// Returns the same color with the given alpha.
    pub fn with_opacity(self, a: f64) -> Color {
        Color {
            a: a.max(0.).min(1.),
            ..self
        }
    }

    /// Parses `#rrggbb`, `#rrggbbaa`, or one of the named colors.
    pub fn parse(s: &str) -> Result<Color, Error> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            let channel = |i: usize| {
                hex.get(i..i + 2)
                    .and_then(|c| u8::from_str_radix(c, 16).ok())
                    .map(|c| f64::from(c) / 255.)
            };
            return match hex.len() {
                6 | 8 => {
                    let a = if hex.len() == 8 { channel(6) } else { Some(1.) };
                    match (channel(0), channel(2), channel(4), a) {
                        (Some(r), Some(g), Some(b), Some(a)) => Ok(Color { r, g, b, a }),
                        _ => Err(Error::InvalidColor(s.to_string())),
                    }
                }
                _ => Err(Error::InvalidColor(s.to_string())),
            };
        }

        Color::NAMED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, color)| *color)
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;
    fn try_from(s: String) -> Result<Color, Error> {
        Color::parse(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let byte = |c: f64| (c.max(0.).min(1.) * 255.).round() as u8;
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            byte(self.r),
            byte(self.g),
            byte(self.b),
            byte(self.a)
        )
    }
}

/// How a toast background is filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorStyle {
    Solid(Color),
    /// A leading-to-trailing linear gradient.
    Gradient(Vec<Color>),
}

/// The color used for text and icons drawn on top of a [`ColorStyle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Foreground {
    /// A fixed color.
    Fixed(Color),
    /// The host’s primary text color.
    Primary,
}

impl ColorStyle {
    /// Picks a foreground for this background.
    ///
    /// Anything more opaque than `threshold` gets white text; gradients always do.
    pub fn foreground(&self, threshold: f64) -> Foreground {
        match self {
            ColorStyle::Solid(color) if color.a <= threshold => Foreground::Primary,
            ColorStyle::Solid(_) | ColorStyle::Gradient(_) => Foreground::Fixed(Color::WHITE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_names() {
        assert_eq!(Color::parse("#ff0000").unwrap(), Color::rgb(1., 0., 0.));
        let c = Color::parse("#00000080").unwrap();
        assert!((c.a - 128. / 255.).abs() < 1e-9);
        assert_eq!(Color::parse("Mint").unwrap(), Color::MINT);
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#zzzzzz").is_err());
        assert!(Color::parse("chartreuse").is_err());
    }

    #[test]
    fn display_is_parseable() {
        let c = Color::rgba(0.2, 0.4, 0.6, 0.8);
        let back = Color::parse(&c.to_string()).unwrap();
        assert!((back.g - 0.4).abs() < 0.01);
    }

    #[test]
    fn foreground_contrast() {
        assert_eq!(
            ColorStyle::Solid(Color::RED).foreground(0.),
            Foreground::Fixed(Color::WHITE)
        );
        assert_eq!(
            ColorStyle::Solid(Color::CLEAR).foreground(0.),
            Foreground::Primary
        );
        // translucent backgrounds still count as colored unless the threshold says otherwise
        let faint = ColorStyle::Solid(Color::RED.with_opacity(0.1));
        assert_eq!(faint.foreground(0.), Foreground::Fixed(Color::WHITE));
        assert_eq!(faint.foreground(0.2), Foreground::Primary);
        assert_eq!(
            ColorStyle::Gradient(vec![Color::CLEAR]).foreground(0.5),
            Foreground::Fixed(Color::WHITE)
        );
    }
}
