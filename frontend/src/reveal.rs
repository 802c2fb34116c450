//! Scroll-triggered entry animations.
//!
//! Each section owns one latch that flips the first time the section
//! intersects the viewport and then stays flipped, so leaving and
//! re-entering the view never replays the animation.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    NotEntered,
    Entered,
}

impl RevealState {
    /// NotEntered -> Entered on the first intersection. No other transition.
    pub fn observe(self, intersecting: bool) -> Self {
        match (self, intersecting) {
            (RevealState::NotEntered, true) => RevealState::Entered,
            (state, _) => state,
        }
    }

    pub fn has_entered(self) -> bool {
        self == RevealState::Entered
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn any_intersecting(entries: &js_sys::Array) -> bool {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .any(|entry| entry.is_intersecting())
}

/// Attach the returned ref to the element to watch. The flag turns true once
/// at least `threshold` of it has been visible.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node_ref = use_node_ref();
    let state = use_state(RevealState::default);

    {
        let node_ref = node_ref.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let mut teardown: Option<(IntersectionObserver, ObserverCallback)> = None;

                if let Some(element) = node_ref.cast::<web_sys::Element>() {
                    let callback = {
                        let state = state.clone();
                        let mut latch = RevealState::default();
                        Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                            let next = latch.observe(any_intersecting(&entries));
                            if next != latch {
                                latch = next;
                                state.set(next);
                                // Nothing left to watch for.
                                observer.disconnect();
                            }
                        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
                    };

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));

                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                        Ok(observer) => {
                            observer.observe(&element);
                            teardown = Some((observer, callback));
                        }
                        Err(err) => {
                            warn!("IntersectionObserver unavailable, showing content: {:?}", err);
                            state.set(RevealState::Entered);
                        }
                    }
                } else {
                    warn!("Reveal target not mounted, showing content");
                    state.set(RevealState::Entered);
                }

                move || {
                    if let Some((observer, _callback)) = teardown {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    (node_ref, state.has_entered())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    FadeUp,
    ScaleIn,
}

impl Motion {
    fn class(self) -> &'static str {
        match self {
            Motion::FadeUp => "reveal-fade-up",
            Motion::ScaleIn => "reveal-scale-in",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealItemProps {
    pub visible: bool,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub motion: Motion,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children in a CSS transition that starts when `visible` flips.
#[function_component(RevealItem)]
pub fn reveal_item(props: &RevealItemProps) -> Html {
    let style = format!("transition-delay: {}ms;", props.delay_ms);

    html! {
        <div
            class={classes!("reveal", props.motion.class(), props.visible.then(|| "revealed"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Delay of the `index`-th item in a staggered group.
pub fn stagger(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    base_ms + step_ms * index as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_not_entered() {
        assert_eq!(RevealState::default(), RevealState::NotEntered);
        assert!(!RevealState::default().has_entered());
    }

    #[test]
    fn first_intersection_latches() {
        let state = RevealState::NotEntered.observe(false);
        assert_eq!(state, RevealState::NotEntered);
        let state = state.observe(true);
        assert_eq!(state, RevealState::Entered);
    }

    #[test]
    fn never_reverts_after_entering() {
        let mut state = RevealState::NotEntered.observe(true);
        for intersecting in [false, true, false, false, true] {
            state = state.observe(intersecting);
            assert!(state.has_entered());
        }
    }

    #[test]
    fn stagger_offsets() {
        assert_eq!(stagger(200, 100, 0), 200);
        assert_eq!(stagger(200, 100, 2), 400);
        assert_eq!(stagger(0, 0, 5), 0);
    }
}
