//! Toast data model.
//!
//! # Conceptual overview
//! A toast is a short message that floats above the rest of the UI for a while and then goes
//! away, either on its own or because the user dismissed it.
//!
//! ## Toasts
//! [`Toast`] values are created once and then handed around; every toast gets a unique
//! [`ToastId`] at construction that it keeps forever. Controllers use the id to tell whether a
//! newly pushed toast is actually new or the same one again, and hosts can use it to key
//! transitions.
//!
//! ## Status
//! A single toast slot is driven by a [`ToastStatus`], which is either presented (with a toast)
//! or dismissed. The convenience constructors collapse empty messages into a dismissed status,
//! so `ToastStatus::error(maybe_error)` can be assigned directly from an optional error string.
//!
//! ## Registry
//! Frequently used toasts can be registered ahead of time in a [`Registry`], keyed by anything
//! hashable. The registry is a plain value: create one, share it behind an `Arc` if needed, and
//! pass it to whatever wants to look toasts up.
//!
//! ## Themes and Configuration
//! [`ToastTheme`] and [`ToastConfiguration`] are plain data describing what toasts look like
//! and how they can be dismissed. Configurations can be loaded from TOML.
//!
//! ## Coordinate System
//! The y axis points down. Offsets and sizes are in points.

mod button;
pub mod color;
pub mod config;
mod error;
mod position;
mod rect;
mod registry;
mod status;
pub mod theme;
mod toast;

pub use button::{ButtonId, ButtonRole, ToastButton};
pub use config::ToastConfiguration;
pub use error::{Error, Result};
pub use position::{Alignment, ToastPosition};
pub use rect::{EdgeInsets, Rect};
pub use registry::{Registry, ToastFactory};
pub use status::{Status, StatusId, ToastStatus};
pub use theme::ToastTheme;
pub use toast::{
    CustomContent, HapticFeedback, Toast, ToastIcon, ToastId, ToastKind, DEFAULT_DURATION,
};

pub use cgmath;
