//! Toast action buttons.

use core::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// A unique identifier for a toast button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ButtonId(Uuid);

impl ButtonId {
    pub(crate) fn new() -> ButtonId {
        ButtonId(Uuid::new_v4())
    }
}

/// Semantic role of a button. Rendering decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    Cancel,
    Destructive,
}

/// A button shown in a toast’s action row.
///
/// Buttons compare by identity only.
#[derive(Clone)]
pub struct ToastButton {
    id: ButtonId,
    title: String,
    role: Option<ButtonRole>,
    action: Arc<dyn Fn() + Send + Sync>,
}

impl ToastButton {
    pub fn new<F: 'static + Fn() + Send + Sync>(title: impl Into<String>, action: F) -> ToastButton {
        ToastButton {
            id: ButtonId::new(),
            title: title.into(),
            role: None,
            action: Arc::new(action),
        }
    }

    /// Sets the button role.
    pub fn with_role(mut self, role: ButtonRole) -> ToastButton {
        self.role = Some(role);
        self
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn role(&self) -> Option<ButtonRole> {
        self.role
    }

    /// Runs the button action.
    pub fn activate(&self) {
        (self.action)();
    }
}

impl PartialEq for ToastButton {
    fn eq(&self, other: &ToastButton) -> bool {
        self.id == other.id
    }
}

impl Eq for ToastButton {}

impl fmt::Debug for ToastButton {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ToastButton")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn activate_runs_action() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let button = ToastButton::new("Undo", move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
        .with_role(ButtonRole::Destructive);

        button.activate();
        button.activate();
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(button.role(), Some(ButtonRole::Destructive));
    }

    #[test]
    fn equality_is_by_id() {
        let a = ToastButton::new("Same", || {});
        let b = ToastButton::new("Same", || {});
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
