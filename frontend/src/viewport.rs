use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportState {
    pub width_pixels: u32,
}

impl ViewportState {
    pub fn new(width_pixels: u32) -> Self {
        Self { width_pixels }
    }

    /// Before the first measurement.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_known(&self) -> bool {
        self.width_pixels > 0
    }
}

pub type ResizeCallback = Box<dyn Fn(u32)>;

/// Keeps a resize listener registered until dropped.
pub struct ResizeSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ResizeSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// For hosts that never resize.
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Source of the display width and its resize notifications.
pub trait ViewportProvider {
    fn current_width(&self) -> u32;

    /// `callback` receives the new width on every resize until the returned
    /// subscription is dropped.
    fn on_resize(&self, callback: ResizeCallback) -> ResizeSubscription;
}

/// The browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

fn window_width(window: &web_sys::Window) -> u32 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map(|width| width.max(0.0) as u32)
        .unwrap_or(0)
}

impl ViewportProvider for WindowViewport {
    fn current_width(&self) -> u32 {
        web_sys::window().map(|w| window_width(&w)).unwrap_or(0)
    }

    fn on_resize(&self, callback: ResizeCallback) -> ResizeSubscription {
        let Some(window) = web_sys::window() else {
            warn!("No window available, viewport width stays unknown");
            return ResizeSubscription::noop();
        };

        let resize_callback = {
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                callback(window_width(&window));
            }) as Box<dyn Fn()>)
        };

        if let Err(err) = window
            .add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())
        {
            warn!("Failed to register resize listener: {:?}", err);
            return ResizeSubscription::noop();
        }

        ResizeSubscription::new(move || {
            if let Err(err) = window.remove_event_listener_with_callback(
                "resize",
                resize_callback.as_ref().unchecked_ref(),
            ) {
                warn!("Failed to remove resize listener: {:?}", err);
            }
        })
    }
}

/// Runs a task after a delay. Dropping the returned handle cancels the task
/// if it has not fired yet.
pub trait TimerScheduler {
    type Pending: 'static;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Pending;
}

/// Browser timers via `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimers;

impl TimerScheduler for GlooTimers {
    type Pending = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Coalesces bursts of resize notifications, reporting only the last width
/// once `delay_ms` passes without another event.
pub struct DebouncedViewport<S: TimerScheduler> {
    inner: Rc<dyn ViewportProvider>,
    delay_ms: u32,
    scheduler: Rc<S>,
}

impl<S: TimerScheduler> DebouncedViewport<S> {
    pub fn new(inner: Rc<dyn ViewportProvider>, delay_ms: u32, scheduler: S) -> Self {
        Self {
            inner,
            delay_ms,
            scheduler: Rc::new(scheduler),
        }
    }
}

impl<S: TimerScheduler + 'static> ViewportProvider for DebouncedViewport<S> {
    fn current_width(&self) -> u32 {
        self.inner.current_width()
    }

    fn on_resize(&self, callback: ResizeCallback) -> ResizeSubscription {
        let callback: Rc<dyn Fn(u32)> = Rc::from(callback);
        let pending: Rc<RefCell<Option<S::Pending>>> = Rc::new(RefCell::new(None));
        let delay_ms = self.delay_ms;

        let inner_subscription = {
            let pending = pending.clone();
            let scheduler = self.scheduler.clone();
            self.inner.on_resize(Box::new(move |width| {
                let callback = callback.clone();
                let next = scheduler.schedule(delay_ms, Box::new(move || callback(width)));
                // Replacing the handle cancels the previous task.
                let previous = pending.borrow_mut().replace(next);
                drop(previous);
            }))
        };

        ResizeSubscription::new(move || {
            drop(inner_subscription);
            let cancelled = pending.borrow_mut().take();
            drop(cancelled);
        })
    }
}

/// Follows a provider's width from attachment until dropped.
pub struct ViewportTracker {
    _subscription: ResizeSubscription,
}

impl ViewportTracker {
    pub fn attach(provider: &dyn ViewportProvider, on_change: impl Fn(ViewportState) + 'static) -> Self {
        on_change(ViewportState::new(provider.current_width()));

        let subscription = provider.on_resize(Box::new(move |width| {
            on_change(ViewportState::new(width));
        }));

        Self {
            _subscription: subscription,
        }
    }
}

/// Context handle so the page can inject its own provider.
#[derive(Clone)]
pub struct ViewportHandle(pub Rc<dyn ViewportProvider>);

impl ViewportHandle {
    pub fn from_config() -> Self {
        let window: Rc<dyn ViewportProvider> = Rc::new(WindowViewport);
        match config::RESIZE_DEBOUNCE_MS {
            0 => Self(window),
            delay_ms => Self(Rc::new(DebouncedViewport::new(window, delay_ms, GlooTimers))),
        }
    }
}

impl PartialEq for ViewportHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Live viewport width. Reports 0 until mounted and measured.
#[hook]
pub fn use_viewport() -> ViewportState {
    let handle = use_context::<ViewportHandle>();
    let state = use_state(ViewportState::unknown);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let provider = handle.unwrap_or_else(ViewportHandle::from_config).0;
                let tracker = ViewportTracker::attach(provider.as_ref(), move |next| {
                    if next.is_known() {
                        debug!("Viewport width: {}", next.width_pixels);
                    }
                    state.set(next);
                });

                move || drop(tracker)
            },
            (),
        );
    }

    *state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct MockViewport {
        width: Cell<u32>,
        listeners: Rc<RefCell<Vec<(usize, Rc<dyn Fn(u32)>)>>>,
        next_id: Cell<usize>,
    }

    impl MockViewport {
        fn with_width(width: u32) -> Self {
            let mock = Self::default();
            mock.width.set(width);
            mock
        }

        fn resize(&self, width: u32) {
            self.width.set(width);
            let listeners: Vec<_> = self.listeners.borrow().iter().map(|(_, cb)| cb.clone()).collect();
            for listener in listeners {
                listener(width);
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl ViewportProvider for MockViewport {
        fn current_width(&self) -> u32 {
            self.width.get()
        }

        fn on_resize(&self, callback: ResizeCallback) -> ResizeSubscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, Rc::from(callback)));

            let listeners = self.listeners.clone();
            ResizeSubscription::new(move || {
                listeners.borrow_mut().retain(|(listener_id, _)| *listener_id != id);
            })
        }
    }

    #[test]
    fn unknown_state_is_zero() {
        assert_eq!(ViewportState::unknown().width_pixels, 0);
        assert!(!ViewportState::unknown().is_known());
        assert!(ViewportState::new(1).is_known());
    }

    #[test]
    fn tracker_reports_initial_width_then_every_resize() {
        let mock = MockViewport::with_width(1024);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let tracker = {
            let seen = seen.clone();
            ViewportTracker::attach(&mock, move |state| seen.borrow_mut().push(state.width_pixels))
        };

        mock.resize(500);
        mock.resize(1400);
        mock.resize(1400);

        assert_eq!(*seen.borrow(), vec![1024, 500, 1400, 1400]);
        drop(tracker);
    }

    #[test]
    fn dropping_tracker_releases_listener() {
        let mock = MockViewport::with_width(800);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let tracker = {
            let seen = seen.clone();
            ViewportTracker::attach(&mock, move |state| seen.borrow_mut().push(state.width_pixels))
        };
        assert_eq!(mock.listener_count(), 1);

        drop(tracker);
        assert_eq!(mock.listener_count(), 0);

        mock.resize(300);
        assert_eq!(*seen.borrow(), vec![800]);
    }

    #[test]
    fn repeated_mounts_do_not_leak_listeners() {
        let mock = MockViewport::with_width(800);
        for _ in 0..10 {
            let tracker = ViewportTracker::attach(&mock, |_| {});
            assert_eq!(mock.listener_count(), 1);
            drop(tracker);
        }
        assert_eq!(mock.listener_count(), 0);
    }

    #[test]
    fn noop_subscription_drops_cleanly() {
        let released = Rc::new(Cell::new(false));
        drop(ResizeSubscription::noop());

        let subscription = {
            let released = released.clone();
            ResizeSubscription::new(move || released.set(true))
        };
        assert!(!released.get());
        drop(subscription);
        assert!(released.get());
    }

    #[test]
    fn handles_compare_by_provider_identity() {
        let provider: Rc<dyn ViewportProvider> = Rc::new(MockViewport::default());
        let a = ViewportHandle(provider.clone());
        let b = ViewportHandle(provider);
        let c = ViewportHandle(Rc::new(MockViewport::default()));
        assert!(a == b);
        assert!(a != c);
    }

    type TaskQueue = Rc<RefCell<Vec<(usize, u32, Box<dyn FnOnce()>)>>>;

    /// Timers that only fire when the test says so.
    #[derive(Default)]
    struct ManualTimers {
        queue: TaskQueue,
        next_id: Cell<usize>,
    }

    struct ManualTask {
        id: usize,
        queue: TaskQueue,
    }

    impl Drop for ManualTask {
        fn drop(&mut self) {
            self.queue.borrow_mut().retain(|(id, _, _)| *id != self.id);
        }
    }

    impl TimerScheduler for Rc<ManualTimers> {
        type Pending = ManualTask;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualTask {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push((id, delay_ms, task));
            ManualTask {
                id,
                queue: self.queue.clone(),
            }
        }
    }

    impl ManualTimers {
        fn pending(&self) -> Vec<u32> {
            self.queue.borrow().iter().map(|(_, delay, _)| *delay).collect()
        }

        fn fire_all(&self) {
            let tasks: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            for (_, _, task) in tasks {
                task();
            }
        }
    }

    fn debounced(mock: &Rc<MockViewport>, timers: &Rc<ManualTimers>) -> DebouncedViewport<Rc<ManualTimers>> {
        let inner: Rc<dyn ViewportProvider> = mock.clone();
        DebouncedViewport::new(inner, 150, timers.clone())
    }

    #[test]
    fn debounce_reports_only_the_last_width_of_a_burst() {
        let mock = Rc::new(MockViewport::with_width(1024));
        let timers = Rc::new(ManualTimers::default());
        let viewport = debounced(&mock, &timers);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _subscription = {
            let seen = seen.clone();
            viewport.on_resize(Box::new(move |width| seen.borrow_mut().push(width)))
        };

        mock.resize(500);
        mock.resize(700);
        mock.resize(900);
        assert_eq!(timers.pending(), vec![150]);
        assert!(seen.borrow().is_empty());

        timers.fire_all();
        assert_eq!(*seen.borrow(), vec![900]);

        mock.resize(1300);
        timers.fire_all();
        assert_eq!(*seen.borrow(), vec![900, 1300]);
    }

    #[test]
    fn dropping_debounced_subscription_cancels_pending_report() {
        let mock = Rc::new(MockViewport::with_width(1024));
        let timers = Rc::new(ManualTimers::default());
        let viewport = debounced(&mock, &timers);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let subscription = {
            let seen = seen.clone();
            viewport.on_resize(Box::new(move |width| seen.borrow_mut().push(width)))
        };
        mock.resize(600);
        assert_eq!(timers.pending().len(), 1);

        drop(subscription);
        assert!(timers.pending().is_empty());
        assert_eq!(mock.listener_count(), 0);

        timers.fire_all();
        mock.resize(800);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn debounced_width_reads_through_to_inner_provider() {
        let mock = Rc::new(MockViewport::with_width(1024));
        let timers = Rc::new(ManualTimers::default());
        let viewport = debounced(&mock, &timers);

        let tracker = ViewportTracker::attach(&viewport, |_| {});
        assert_eq!(viewport.current_width(), 1024);
        mock.resize(640);
        assert_eq!(viewport.current_width(), 640);
        drop(tracker);
    }
}
