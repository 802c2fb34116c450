use yew::prelude::*;

use crate::components::responsive_image::ResponsiveImage;
use crate::components::section_header::SectionHeader;
use crate::config;
use crate::content;
use crate::reveal::{stagger, use_reveal, Motion, RevealItem};
use crate::viewport::use_viewport;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub about: content::About,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let (section_ref, in_view) = use_reveal(config::REVEAL_THRESHOLD);
    let viewport = use_viewport();
    let about = &props.about;

    html! {
        <section id="about" class="about-section" ref={section_ref}>
            <div class="section-container about-grid">
                <div class="about-text">
                    <SectionHeader badge={about.badge.clone()} title={about.title.clone()} visible={in_view} />
                    {
                        about.paragraphs.iter().enumerate().map(|(index, paragraph)| html! {
                            <RevealItem visible={in_view} delay_ms={stagger(200, 100, index)}>
                                <p class="about-paragraph">{paragraph.clone()}</p>
                            </RevealItem>
                        }).collect::<Html>()
                    }
                    <ul class="about-highlights">
                        {
                            about.highlights.iter().enumerate().map(|(index, highlight)| html! {
                                <li>
                                    <RevealItem visible={in_view} delay_ms={stagger(400, 80, index)}>
                                        <span class="check-icon">{"✓"}</span>
                                        {highlight.clone()}
                                    </RevealItem>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
                <RevealItem visible={in_view} delay_ms={300} motion={Motion::ScaleIn} class="about-image">
                    <ResponsiveImage src={about.image.clone()} alt={about.title.clone()} viewport={viewport} />
                </RevealItem>
            </div>
        </section>
    }
}
