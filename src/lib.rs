//! Toast presentation.
//!
//! This crate turns toast values from [`toastie_core`] into something on screen: it decides
//! which toasts are visible, dismisses them when their time is up or when the user taps or
//! swipes them away, and produces render descriptions for the host to draw.
//!
//! # Conceptual overview
//! ## Bindings
//! Hosts and controllers share state through [`Binding`]s. A host writes a [`ToastStatus`]
//! (or an optional toast, or a list of toasts) into a binding; the controller picks it up on
//! its next update. When a toast is dismissed by its timer or by the user, the controller
//! writes the dismissal back.
//!
//! ## Controllers
//! A [`Presenter`] shows one toast at a time. A [`ToastQueue`] shows every toast in a list,
//! each with its own timer. Neither runs on its own: call `update` with the current time,
//! or let a [`Host`] do it.
//!
//! ## Rendering
//! Controllers render into [`RenderedToast`]s, which say what a toast looks like (a
//! [`surface::ToastView`]), where it goes, and how it enters and leaves. Gestures come back
//! in as [`ToastEvent`]s.

pub use toastie_core;
pub use toastie_core::{
    cgmath, color, config, theme, Alignment, ButtonId, ButtonRole, CustomContent, EdgeInsets,
    HapticFeedback, Rect, Registry, Status, StatusId, Toast, ToastButton, ToastConfiguration,
    ToastFactory, ToastIcon, ToastId, ToastKind, ToastPosition, ToastStatus, ToastTheme,
    DEFAULT_DURATION,
};

mod binding;
mod error;
mod gesture;
mod haptics;
mod host;
mod placement;
mod presenter;
mod queue;
mod slot;
mod source;
pub mod surface;
mod timer;

pub use binding::{Binding, Subscription};
pub use error::{Error, Result};
pub use gesture::{DragOutcome, DragState, SWIPE_DISMISS_THRESHOLD};
pub use haptics::{HapticEngine, NoHaptics};
pub use host::{Event, EventSender, Host, LayerId, Overlay, ToastEvent};
pub use placement::{Placement, RenderedToast, OVERLAY_Z_INDEX};
pub use presenter::{Phase, Presenter};
pub use queue::ToastQueue;
pub use source::ToastSource;
pub use timer::{DismissTimer, TimerHandle};
