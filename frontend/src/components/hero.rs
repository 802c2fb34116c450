use yew::prelude::*;

use crate::components::responsive_image::ResponsiveImage;
use crate::content;
use crate::reveal::{Motion, RevealItem};
use crate::viewport::use_viewport;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: content::Hero,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let viewport = use_viewport();
    let hero = &props.hero;

    // The hero is above the fold, so it animates in on mount rather than
    // waiting for an intersection.
    let mounted = use_state(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }

    html! {
        <header id="home" class="hero">
            <div class="hero-background">
                <ResponsiveImage
                    src={hero.image.clone()}
                    alt={hero.highlight.clone()}
                    viewport={viewport}
                    class="hero-image"
                />
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <RevealItem visible={*mounted}>
                    <p class="hero-eyebrow">{hero.eyebrow.clone()}</p>
                </RevealItem>
                <RevealItem visible={*mounted} delay_ms={150}>
                    <h1 class="hero-title">
                        {hero.title.clone()}
                        {" "}
                        <span class="hero-highlight">{hero.highlight.clone()}</span>
                    </h1>
                </RevealItem>
                <RevealItem visible={*mounted} delay_ms={300}>
                    <p class="hero-subtitle">{hero.subtitle.clone()}</p>
                </RevealItem>
                <RevealItem visible={*mounted} delay_ms={450} motion={Motion::ScaleIn} class="hero-cta-group">
                    <a href="#contact" class="hero-cta">{hero.primary_cta.clone()}</a>
                    <a href="#services" class="hero-cta secondary">{hero.secondary_cta.clone()}</a>
                </RevealItem>
            </div>
        </header>
    }
}
