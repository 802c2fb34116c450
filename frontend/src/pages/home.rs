use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, header::Header, hero::Hero,
    products::Products, projects::Projects, services::Services,
};
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub site: Rc<SiteContent>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let site = &props.site;

    // Start at the top on first mount, hash links still jump afterwards.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    if window.location().hash().map(|h| h.is_empty()).unwrap_or(true) {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="landing-page">
            <Header company_name={site.company.short_name.clone()} />
            <Hero hero={site.hero.clone()} />
            <About about={site.about.clone()} />
            <Services services={site.services.clone()} />
            <Products products={site.products.clone()} />
            <Projects projects={site.projects.clone()} />
            <Contact contact={site.contact.clone()} company={site.company.clone()} />
            <Footer company={site.company.clone()} footer={site.footer.clone()} />
        </main>
    }
}
