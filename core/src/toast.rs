//! The toast record.

use crate::button::ToastButton;
use crate::position::ToastPosition;
use core::any::Any;
use core::fmt;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// How long toasts stay up unless told otherwise.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(2);

/// A unique identifier for a toast.
///
/// (this is just a UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(Uuid);

impl ToastId {
    pub(crate) fn new() -> ToastId {
        ToastId(Uuid::new_v4())
    }

    pub(crate) fn uuid(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Predefined toast kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Error,
    Success,
    Warning,
    Info,
    Custom,
}

impl ToastKind {
    /// Default icon for each kind.
    pub fn default_icon(self) -> ToastIcon {
        match self {
            ToastKind::Error => ToastIcon::system("xmark.circle.fill"),
            ToastKind::Success => ToastIcon::system("checkmark.circle.fill"),
            ToastKind::Warning => ToastIcon::system("exclamationmark.triangle.fill"),
            ToastKind::Info => ToastIcon::system("info.circle.fill"),
            ToastKind::Custom => ToastIcon::None,
        }
    }

    /// Default haptic for each kind.
    pub fn default_haptic(self) -> Option<HapticFeedback> {
        match self {
            ToastKind::Error => Some(HapticFeedback::Error),
            ToastKind::Success => Some(HapticFeedback::Success),
            ToastKind::Warning => Some(HapticFeedback::Warning),
            ToastKind::Info | ToastKind::Custom => None,
        }
    }
}

/// Haptic feedback kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticFeedback {
    Success,
    Warning,
    Error,
    Light,
    Medium,
    Heavy,
}

/// An opaque payload handed back to the host for rendering.
///
/// Compares by pointer identity.
#[derive(Clone)]
pub struct CustomContent(Arc<dyn Any + Send + Sync>);

impl CustomContent {
    pub fn new<T: Any + Send + Sync>(content: T) -> CustomContent {
        CustomContent(Arc::new(content))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl PartialEq for CustomContent {
    fn eq(&self, other: &CustomContent) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CustomContent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CustomContent(..)")
    }
}

/// Icon shown next to the toast message.
#[derive(Debug, Clone, PartialEq)]
pub enum ToastIcon {
    /// A named system symbol.
    System(String),
    /// A named bitmap from the host’s assets.
    Image(String),
    /// Host-rendered content.
    Content(CustomContent),
    /// No icon at all.
    None,
}

impl ToastIcon {
    pub fn system(name: impl Into<String>) -> ToastIcon {
        ToastIcon::System(name.into())
    }

    pub fn image(name: impl Into<String>) -> ToastIcon {
        ToastIcon::Image(name.into())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ToastIcon::None)
    }
}

/// A toast message.
///
/// Toasts get a fresh [`ToastId`] when they’re created and keep it for as long as they live.
/// The `with_*` methods are meant for building a toast up before it’s presented.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    message: String,
    icon: ToastIcon,
    position: ToastPosition,
    duration: Duration,
    haptic: Option<HapticFeedback>,
    dismissible: bool,
    buttons: Vec<ToastButton>,
    custom_content: Option<CustomContent>,
}

impl Toast {
    /// Creates a toast with the kind’s default icon and haptic.
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Toast {
        Toast {
            id: ToastId::new(),
            kind,
            message: message.into(),
            icon: kind.default_icon(),
            position: ToastPosition::Top,
            duration: DEFAULT_DURATION,
            haptic: kind.default_haptic(),
            dismissible: true,
            buttons: Vec::new(),
            custom_content: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Toast {
        Toast::new(ToastKind::Error, message)
    }

    pub fn success(message: impl Into<String>) -> Toast {
        Toast::new(ToastKind::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Toast {
        Toast::new(ToastKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Toast {
        Toast::new(ToastKind::Info, message)
    }

    /// Creates a toast that renders host-provided content instead of the standard row.
    pub fn custom<T: Any + Send + Sync>(content: T) -> Toast {
        let mut toast = Toast::new(ToastKind::Custom, "");
        toast.custom_content = Some(CustomContent::new(content));
        toast
    }

    /// Replaces the icon. Pass [`ToastIcon::None`] to hide it.
    pub fn with_icon(mut self, icon: ToastIcon) -> Toast {
        self.icon = icon;
        self
    }

    pub fn with_position(mut self, position: ToastPosition) -> Toast {
        self.position = position;
        self
    }

    /// Sets the auto-dismiss duration. Zero means the toast stays until dismissed.
    pub fn with_duration(mut self, duration: Duration) -> Toast {
        self.duration = duration;
        self
    }

    /// Sets the duration in seconds; negative or non-finite values mean zero.
    pub fn with_duration_secs(self, secs: f64) -> Toast {
        let duration = if secs.is_finite() && secs > 0. {
            Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        };
        self.with_duration(duration)
    }

    pub fn with_haptic(mut self, haptic: Option<HapticFeedback>) -> Toast {
        self.haptic = haptic;
        self
    }

    pub fn with_dismissible(mut self, dismissible: bool) -> Toast {
        self.dismissible = dismissible;
        self
    }

    pub fn with_button(mut self, button: ToastButton) -> Toast {
        self.buttons.push(button);
        self
    }

    pub fn with_buttons(mut self, buttons: impl IntoIterator<Item = ToastButton>) -> Toast {
        self.buttons.extend(buttons);
        self
    }

    /// Returns a copy of this toast with a new identifier.
    pub fn reidentified(&self) -> Toast {
        Toast {
            id: ToastId::new(),
            ..self.clone()
        }
    }

    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn icon(&self) -> &ToastIcon {
        &self.icon
    }

    pub fn position(&self) -> ToastPosition {
        self.position
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether this toast goes away on its own.
    pub fn auto_dismisses(&self) -> bool {
        self.duration > Duration::ZERO
    }

    pub fn haptic(&self) -> Option<HapticFeedback> {
        self.haptic
    }

    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    pub fn buttons(&self) -> &[ToastButton] {
        &self.buttons
    }

    /// Finds a button by id.
    pub fn button(&self, id: crate::button::ButtonId) -> Option<&ToastButton> {
        self.buttons.iter().find(|b| b.id() == id)
    }

    pub fn custom_content(&self) -> Option<&CustomContent> {
        self.custom_content.as_ref()
    }
}

impl PartialEq for Toast {
    fn eq(&self, other: &Toast) -> bool {
        self.id == other.id
            && self.kind == other.kind
            && self.message == other.message
            && self.icon == other.icon
            && self.position == other.position
            && self.duration == other.duration
            && self.haptic == other.haptic
            && self.dismissible == other.dismissible
            && self.buttons == other.buttons
            && self.custom_content == other.custom_content
    }
}
