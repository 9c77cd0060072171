use crate::binding::{Binding, Subscription};
use crate::error::{Error, Result};
use crate::placement::RenderedToast;
use crate::presenter::Presenter;
use crate::queue::ToastQueue;
use crate::source::ToastSource;
use cgmath::Vector2;
use crossbeam::channel::{self, Receiver, Sender};
use crossbeam::select;
use std::time::{Duration, Instant};
use toastie_core::{ButtonId, EdgeInsets, Rect, ToastId};

/// Identifies an overlay added to a [`Host`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(usize);

/// User interaction with a toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastEvent {
    Tap(ToastId),
    DragChanged(ToastId, Vector2<f64>),
    DragEnded(ToastId, Vector2<f64>),
    Button(ToastId, ButtonId),
    /// Dismiss programmatically, as if the user had.
    Dismiss(ToastId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Toast { layer: LayerId, event: ToastEvent },
    /// Something changed; re-check bindings and timers.
    Wake,
}

/// Anything that shows toasts and can be driven by a [`Host`].
pub trait Overlay {
    /// Reconciles with bindings and fires due timers. Returns whether anything changed.
    fn update(&mut self, now: Instant) -> bool;

    /// Applies a user event. Returns whether anything changed.
    fn handle(&mut self, event: ToastEvent) -> bool;

    /// When this overlay next needs an [`Overlay::update`] without any other prompting.
    fn next_deadline(&self) -> Option<Instant>;

    fn render(&self, bounds: Rect, safe_area: EdgeInsets) -> Vec<RenderedToast>;
}

impl<S: ToastSource> Overlay for Presenter<S> {
    fn update(&mut self, now: Instant) -> bool {
        Presenter::update(self, now)
    }

    fn handle(&mut self, event: ToastEvent) -> bool {
        match event {
            ToastEvent::Tap(id) => self.tap(id),
            ToastEvent::DragChanged(id, translation) => {
                self.drag_changed(id, translation);
                true
            }
            ToastEvent::DragEnded(id, translation) => {
                self.drag_ended(id, translation);
                true
            }
            ToastEvent::Button(id, button) => self.press(id, button),
            ToastEvent::Dismiss(id) => self.dismiss_toast(id),
        }
    }

    fn next_deadline(&self) -> Option<Instant> {
        Presenter::next_deadline(self)
    }

    fn render(&self, _bounds: Rect, _safe_area: EdgeInsets) -> Vec<RenderedToast> {
        Presenter::render(self).into_iter().collect()
    }
}

impl Overlay for ToastQueue {
    fn update(&mut self, now: Instant) -> bool {
        ToastQueue::update(self, now)
    }

    fn handle(&mut self, event: ToastEvent) -> bool {
        match event {
            ToastEvent::Tap(id) => self.tap(id),
            ToastEvent::DragChanged(id, translation) => {
                self.drag_changed(id, translation);
                true
            }
            ToastEvent::DragEnded(id, translation) => {
                self.drag_ended(id, translation);
                true
            }
            ToastEvent::Button(id, button) => self.press(id, button),
            ToastEvent::Dismiss(id) => self.dismiss(id),
        }
    }

    fn next_deadline(&self) -> Option<Instant> {
        ToastQueue::next_deadline(self)
    }

    fn render(&self, bounds: Rect, safe_area: EdgeInsets) -> Vec<RenderedToast> {
        ToastQueue::render(self, bounds, safe_area)
    }
}

/// Posts events to a [`Host`] from any thread.
#[derive(Debug, Clone)]
pub struct EventSender(Sender<Event>);

impl EventSender {
    pub fn send(&self, layer: LayerId, event: ToastEvent) -> Result<()> {
        self.0
            .send(Event::Toast { layer, event })
            .map_err(|_| Error::HostClosed)
    }

    /// Wakes up a host blocked in [`Host::wait`].
    pub fn wake(&self) -> Result<()> {
        self.0.send(Event::Wake).map_err(|_| Error::HostClosed)
    }
}

/// Drives a set of toast overlays on one thread.
///
/// Gesture events may come from anywhere through an [`EventSender`]; they’re applied in order
/// the next time the host is polled.
pub struct Host {
    overlays: Vec<Box<dyn Overlay>>,
    event_send: Sender<Event>,
    event_recv: Receiver<Event>,
    subscriptions: Vec<Subscription>,
}

impl Host {
    pub fn new() -> Host {
        let (event_send, event_recv) = channel::unbounded();
        Host {
            overlays: Vec::new(),
            event_send,
            event_recv,
            subscriptions: Vec::new(),
        }
    }

    /// Adds an overlay. Overlays added later are drawn on top.
    pub fn add_overlay<O: Overlay + 'static>(&mut self, overlay: O) -> LayerId {
        self.overlays.push(Box::new(overlay));
        LayerId(self.overlays.len() - 1)
    }

    pub fn sender(&self) -> EventSender {
        EventSender(self.event_send.clone())
    }

    /// Wakes the host whenever `binding` is written to.
    pub fn watch<T: 'static + Send>(&mut self, binding: &Binding<T>) {
        let sender = self.event_send.clone();
        let subscription = binding.subscribe(move |_| {
            // the host may already be gone
            let _ = sender.send(Event::Wake);
        });
        self.subscriptions.push(subscription);
    }

    fn dispatch(&mut self, event: Event) -> bool {
        match event {
            Event::Toast { layer, event } => match self.overlays.get_mut(layer.0) {
                Some(overlay) => overlay.handle(event),
                None => {
                    tracing::warn!(?layer, ?event, "event for unknown overlay");
                    false
                }
            },
            Event::Wake => false,
        }
    }

    /// Applies all pending events, then updates every overlay.
    ///
    /// Returns whether anything changed and should be re-rendered.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Ok(event) = self.event_recv.try_recv() {
            changed |= self.dispatch(event);
        }
        for overlay in &mut self.overlays {
            changed |= overlay.update(now);
        }
        changed
    }

    /// The earliest time any overlay needs updating.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.overlays
            .iter()
            .filter_map(|overlay| overlay.next_deadline())
            .min()
    }

    /// Blocks until an event arrives, a timer is due, or `timeout` passes, then polls.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let now = Instant::now();
        let until = now
            .checked_add(timeout)
            .into_iter()
            .chain(self.next_deadline())
            .min();
        let timer = match until {
            Some(until) => channel::after(until.saturating_duration_since(now)),
            None => channel::never(),
        };

        let received = select! {
            recv(self.event_recv) -> event => event.ok(),
            recv(timer) -> _ => None,
        };
        let changed = match received {
            Some(event) => self.dispatch(event),
            None => false,
        };
        self.poll(Instant::now()) || changed
    }

    /// Renders every overlay, bottom to top.
    pub fn render(&self, bounds: Rect, safe_area: EdgeInsets) -> Vec<RenderedToast> {
        self.overlays
            .iter()
            .flat_map(|overlay| overlay.render(bounds, safe_area))
            .collect()
    }
}

impl Default for Host {
    fn default() -> Host {
        Host::new()
    }
}
