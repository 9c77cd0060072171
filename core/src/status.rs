//! Toast status: the value hosts bind to drive a single toast slot.

use crate::registry::Registry;
use crate::toast::{Toast, ToastId};
use core::borrow::Borrow;
use core::hash::Hash;
use uuid::Uuid;

/// Identifies one status value.
///
/// Equal to the toast’s id when presented, and fresh for every dismissed status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusId(Uuid);

impl From<ToastId> for StatusId {
    fn from(id: ToastId) -> StatusId {
        StatusId(id.uuid())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Presented(Toast),
    Dismissed,
}

/// Whether a toast should currently be shown.
///
/// Two statuses compare equal if their [`Status`] is equal; the [`StatusId`] only tells
/// individual pushes apart.
#[derive(Debug, Clone)]
pub struct ToastStatus {
    id: StatusId,
    status: Status,
}

impl ToastStatus {
    pub fn dismissed() -> ToastStatus {
        ToastStatus {
            id: StatusId(Uuid::new_v4()),
            status: Status::Dismissed,
        }
    }

    pub fn presented(toast: Toast) -> ToastStatus {
        ToastStatus {
            id: toast.id().into(),
            status: Status::Presented(toast),
        }
    }

    /// An error toast, or dismissed if the message is missing or empty.
    pub fn error<'a>(message: impl Into<Option<&'a str>>) -> ToastStatus {
        ToastStatus::from_message(message.into(), Toast::error)
    }

    /// A success toast, or dismissed if the message is missing or empty.
    pub fn success<'a>(message: impl Into<Option<&'a str>>) -> ToastStatus {
        ToastStatus::from_message(message.into(), Toast::success)
    }

    /// A warning toast, or dismissed if the message is missing or empty.
    pub fn warning<'a>(message: impl Into<Option<&'a str>>) -> ToastStatus {
        ToastStatus::from_message(message.into(), Toast::warning)
    }

    /// An info toast, or dismissed if the message is missing or empty.
    pub fn info<'a>(message: impl Into<Option<&'a str>>) -> ToastStatus {
        ToastStatus::from_message(message.into(), Toast::info)
    }

    /// A toast built from a registered template, or dismissed if nothing is registered.
    pub fn registered<K, Q>(registry: &Registry<K>, key: &Q) -> ToastStatus
    where
        K: Eq + Hash + Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        match registry.materialize(key) {
            Some(toast) => ToastStatus::presented(toast),
            None => ToastStatus::dismissed(),
        }
    }

    fn from_message(message: Option<&str>, make: fn(String) -> Toast) -> ToastStatus {
        match message {
            Some(message) if !message.is_empty() => ToastStatus::presented(make(message.to_string())),
            _ => ToastStatus::dismissed(),
        }
    }

    pub fn id(&self) -> StatusId {
        self.id
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The presented toast, if any.
    pub fn toast(&self) -> Option<&Toast> {
        match &self.status {
            Status::Presented(toast) => Some(toast),
            Status::Dismissed => None,
        }
    }

    pub fn is_dismissed(&self) -> bool {
        matches!(self.status, Status::Dismissed)
    }
}

impl Default for ToastStatus {
    fn default() -> ToastStatus {
        ToastStatus::dismissed()
    }
}

impl From<Toast> for ToastStatus {
    fn from(toast: Toast) -> ToastStatus {
        ToastStatus::presented(toast)
    }
}

impl PartialEq for ToastStatus {
    fn eq(&self, other: &ToastStatus) -> bool {
        self.status == other.status
    }
}
