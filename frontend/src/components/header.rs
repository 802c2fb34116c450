use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

/// Anchor targets in page order.
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("about", "About"),
    ("services", "Services"),
    ("products", "Products"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub company_name: String,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                Some(window) => {
                    let scroll_callback = {
                        let window = window.clone();
                        Closure::wrap(Box::new(move || {
                            let scroll_top = window.scroll_y().unwrap_or(0.0);
                            is_scrolled.set(scroll_top > config::HEADER_SCROLL_THRESHOLD as f64);
                        }) as Box<dyn FnMut()>)
                    };

                    match window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        Ok(()) => Box::new(move || {
                            if let Err(err) = window.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            ) {
                                warn!("Failed to remove scroll listener: {:?}", err);
                            }
                        }),
                        Err(err) => {
                            warn!("Failed to register scroll listener: {:?}", err);
                            Box::new(|| ())
                        }
                    }
                }
                None => Box::new(|| ()),
            };

            move || destructor()
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchors keep their default jump; only the menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {props.company_name.clone()}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_SECTIONS.iter().map(|(id, label)| html! {
                            <a href={format!("#{}", id)} class="nav-link" onclick={close_menu.clone()}>
                                {*label}
                            </a>
                        }).collect::<Html>()
                    }
                    <a href="#contact" class="nav-cta" onclick={close_menu.clone()}>
                        {"Get a Quote"}
                    </a>
                </div>
            </div>
        </nav>
    }
}
