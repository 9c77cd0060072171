use crate::binding::Binding;
use toastie_core::{Toast, ToastId, ToastStatus};

/// Something a [`Presenter`](crate::Presenter) can take its toast from.
pub trait ToastSource {
    /// Changes whenever the requested toast may have changed.
    fn version(&self) -> u64;

    /// The toast that should be visible right now.
    fn requested(&self) -> Option<Toast>;

    /// Marks the toast with the given id as dismissed, unless something else has replaced it.
    fn reset_if(&self, id: ToastId);
}

impl ToastSource for Binding<ToastStatus> {
    fn version(&self) -> u64 {
        Binding::version(self)
    }

    fn requested(&self) -> Option<Toast> {
        self.with(|status| status.toast().cloned())
    }

    fn reset_if(&self, id: ToastId) {
        self.update(|status| {
            if status.toast().map(Toast::id) == Some(id) {
                *status = ToastStatus::dismissed();
                true
            } else {
                false
            }
        });
    }
}

impl ToastSource for Binding<Option<Toast>> {
    fn version(&self) -> u64 {
        Binding::version(self)
    }

    fn requested(&self) -> Option<Toast> {
        self.get()
    }

    fn reset_if(&self, id: ToastId) {
        self.update(|toast| {
            if toast.as_ref().map(Toast::id) == Some(id) {
                *toast = None;
                true
            } else {
                false
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_only_clears_matching_toast() {
        let first = Toast::info("first");
        let second = Toast::info("second");
        let binding = Binding::new(ToastStatus::presented(first.clone()));

        binding.set(second.clone().into());
        binding.reset_if(first.id());
        assert_eq!(binding.requested(), Some(second.clone()));

        binding.reset_if(second.id());
        assert!(binding.get().is_dismissed());
    }

    #[test]
    fn optional_toasts() {
        let toast = Toast::warning("w");
        let binding = Binding::new(Some(toast.clone()));
        let version = ToastSource::version(&binding);
        binding.reset_if(Toast::info("other").id());
        assert_eq!(ToastSource::version(&binding), version);
        binding.reset_if(toast.id());
        assert_eq!(binding.requested(), None);
    }
}
