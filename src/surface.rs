//! Render descriptions of toasts.
//!
//! Nothing here draws anything. [`render`] turns a toast and a configuration into a
//! [`ToastView`], which hosts map onto their own view primitives.

use cgmath::Vector2;
use toastie_core::color::{ColorStyle, Foreground};
use toastie_core::config::TextAlignment;
use toastie_core::theme::{Font, ShadowStyle};
use toastie_core::{
    ButtonId, ButtonRole, CustomContent, EdgeInsets, Toast, ToastConfiguration, ToastIcon,
    ToastId,
};

/// Space between elements of the standard row.
pub const ROW_SPACING: f64 = 12.;
/// Space between buttons.
pub const BUTTON_SPACING: f64 = 8.;

/// A rendered toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub id: ToastId,
    /// Drag offset to apply on top of the toast’s placement.
    pub offset: Vector2<f64>,
    pub body: ToastBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToastBody {
    Standard(StandardContent),
    /// Host-provided content, drawn as-is.
    Custom(CustomContent),
}

/// The standard icon, message, and buttons row.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardContent {
    pub elements: Vec<Element>,
    pub background: ColorStyle,
    pub foreground: Foreground,
    pub padding: EdgeInsets,
    pub max_width: f64,
    pub corner_radius: f64,
    pub shadow: ShadowStyle,
    pub spacing: f64,
}

/// Laid out left to right (leading to trailing).
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Icon { icon: ToastIcon, size: f64 },
    Message {
        text: String,
        font: Font,
        alignment: TextAlignment,
    },
    /// Flexible space.
    Spacer,
    Buttons {
        buttons: Vec<ButtonView>,
        spacing: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub id: ButtonId,
    pub title: String,
    pub role: Option<ButtonRole>,
    pub font: Font,
}

/// Renders a toast, displaced by a drag `offset`.
pub fn render(toast: &Toast, config: &ToastConfiguration, offset: Vector2<f64>) -> ToastView {
    let body = match toast.custom_content() {
        Some(content) => ToastBody::Custom(content.clone()),
        None => ToastBody::Standard(standard_content(toast, config)),
    };
    ToastView {
        id: toast.id(),
        offset,
        body,
    }
}

fn standard_content(toast: &Toast, config: &ToastConfiguration) -> StandardContent {
    let theme = &config.theme;
    let background = theme.color_style(toast.kind());
    let foreground = background.foreground(theme.contrast_threshold);

    let icon = match toast.icon() {
        ToastIcon::None => None,
        icon => Some(Element::Icon {
            icon: icon.clone(),
            size: theme.icon_size,
        }),
    };
    let message = Element::Message {
        text: toast.message().to_string(),
        font: theme.message_font,
        alignment: config.text_alignment,
    };
    let buttons = if toast.buttons().is_empty() {
        None
    } else {
        Some(Element::Buttons {
            buttons: toast
                .buttons()
                .iter()
                .map(|button| ButtonView {
                    id: button.id(),
                    title: button.title().to_string(),
                    role: button.role(),
                    font: theme.button_font,
                })
                .collect(),
            spacing: BUTTON_SPACING,
        })
    };

    let mut elements = Vec::with_capacity(5);
    match config.text_alignment {
        TextAlignment::Leading => {
            elements.extend(icon);
            elements.push(message);
            elements.push(Element::Spacer);
            elements.extend(buttons);
        }
        TextAlignment::Center => {
            elements.push(Element::Spacer);
            elements.extend(icon);
            elements.push(message);
            elements.push(Element::Spacer);
            elements.extend(buttons);
        }
        TextAlignment::Trailing => {
            elements.extend(buttons);
            elements.push(Element::Spacer);
            elements.push(message);
            elements.extend(icon);
        }
    }

    StandardContent {
        elements,
        background,
        foreground,
        padding: theme.padding,
        max_width: config.max_width,
        corner_radius: theme.corner_radius,
        shadow: theme.shadow,
        spacing: ROW_SPACING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Zero;
    use toastie_core::color::Color;
    use toastie_core::{ToastButton, ToastTheme};

    fn kinds(view: &ToastView) -> Vec<&'static str> {
        match &view.body {
            ToastBody::Standard(content) => content
                .elements
                .iter()
                .map(|e| match e {
                    Element::Icon { .. } => "icon",
                    Element::Message { .. } => "message",
                    Element::Spacer => "spacer",
                    Element::Buttons { .. } => "buttons",
                })
                .collect(),
            ToastBody::Custom(_) => vec!["custom"],
        }
    }

    fn standard(view: &ToastView) -> &StandardContent {
        match &view.body {
            ToastBody::Standard(content) => content,
            ToastBody::Custom(_) => panic!("expected standard content"),
        }
    }

    #[test]
    fn alignment_orders_elements() {
        let toast = Toast::success("saved").with_button(ToastButton::new("Undo", || ()));
        let mut config = ToastConfiguration::default();

        let view = render(&toast, &config, Vector2::zero());
        assert_eq!(kinds(&view), ["icon", "message", "spacer", "buttons"]);

        config.text_alignment = TextAlignment::Center;
        let view = render(&toast, &config, Vector2::zero());
        assert_eq!(kinds(&view), ["spacer", "icon", "message", "spacer", "buttons"]);

        config.text_alignment = TextAlignment::Trailing;
        let view = render(&toast, &config, Vector2::zero());
        assert_eq!(kinds(&view), ["buttons", "spacer", "message", "icon"]);

        let bare = Toast::info("plain").with_icon(ToastIcon::None);
        assert_eq!(kinds(&render(&bare, &config, Vector2::zero())), ["spacer", "message"]);
    }

    #[test]
    fn foreground_contrast() {
        let mut config = ToastConfiguration::default();
        let view = render(&Toast::error("x"), &config, Vector2::zero());
        assert_eq!(standard(&view).background, ColorStyle::Solid(Color::RED));
        assert_eq!(standard(&view).foreground, Foreground::Fixed(Color::WHITE));

        config.theme.info_colors = ColorStyle::Solid(Color::CLEAR);
        let view = render(&Toast::info("x"), &config, Vector2::zero());
        assert_eq!(standard(&view).foreground, Foreground::Primary);

        config.theme = ToastTheme::subtle();
        config.theme.contrast_threshold = 0.2;
        let view = render(&Toast::warning("x"), &config, Vector2::zero());
        assert_eq!(standard(&view).foreground, Foreground::Primary);

        config.theme = ToastTheme::vibrant();
        let view = render(&Toast::warning("x"), &config, Vector2::zero());
        assert_eq!(standard(&view).foreground, Foreground::Fixed(Color::WHITE));
    }

    #[test]
    fn custom_toasts_render_their_content() {
        let toast = Toast::custom(42u32);
        let view = render(&toast, &ToastConfiguration::default(), Vector2::new(5., 0.));
        assert_eq!(view.offset, Vector2::new(5., 0.));
        match view.body {
            ToastBody::Custom(content) => assert_eq!(content.downcast_ref::<u32>(), Some(&42)),
            other => panic!("expected custom content, got {:?}", other),
        }
    }

    #[test]
    fn buttons_keep_order_and_role() {
        let toast = Toast::warning("delete?")
            .with_button(ToastButton::new("Cancel", || ()).with_role(ButtonRole::Cancel))
            .with_button(ToastButton::new("Delete", || ()).with_role(ButtonRole::Destructive));
        let view = render(&toast, &ToastConfiguration::default(), Vector2::zero());
        let buttons = standard(&view)
            .elements
            .iter()
            .find_map(|e| match e {
                Element::Buttons { buttons, .. } => Some(buttons.clone()),
                _ => None,
            })
            .unwrap();
        let titles: Vec<_> = buttons.iter().map(|b| (b.title.as_str(), b.role)).collect();
        assert_eq!(
            titles,
            [
                ("Cancel", Some(ButtonRole::Cancel)),
                ("Delete", Some(ButtonRole::Destructive))
            ]
        );
        assert_eq!(buttons[0].id, toast.buttons()[0].id());
    }
}
