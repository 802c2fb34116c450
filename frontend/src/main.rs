use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod media;
mod reveal;
mod viewport;
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod products;
    pub mod projects;
    pub mod responsive_image;
    pub mod section_header;
    pub mod services;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use content::SiteContent;
use pages::{home::Home, not_found::NotFound};
use viewport::ViewportHandle;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, site: Rc<SiteContent>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home site={site} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let site = use_memo(|_| content::load().map(Rc::new), ());
    let viewport = use_memo(|_| ViewportHandle::from_config(), ());

    match &*site {
        Ok(site) => {
            let site = site.clone();
            html! {
                <ContextProvider<ViewportHandle> context={(*viewport).clone()}>
                    <BrowserRouter>
                        <Switch<Route> render={move |routes| switch(routes, site.clone())} />
                    </BrowserRouter>
                </ContextProvider<ViewportHandle>>
            }
        }
        Err(err) => {
            error!("{}", err);
            html! {
                <div class="content-error">
                    <h1>{"Something went wrong"}</h1>
                    <p>{"The site could not be loaded. Please try again later."}</p>
                </div>
            }
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
