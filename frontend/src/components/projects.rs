use yew::prelude::*;

use crate::components::responsive_image::ResponsiveImage;
use crate::components::section_header::SectionHeader;
use crate::config;
use crate::content;
use crate::reveal::{stagger, use_reveal, Motion, RevealItem};
use crate::viewport::use_viewport;

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: content::Projects,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let (section_ref, in_view) = use_reveal(config::REVEAL_THRESHOLD);
    let viewport = use_viewport();
    let projects = &props.projects;

    html! {
        <section id="projects" class="projects-section" ref={section_ref}>
            <div class="section-container">
                <SectionHeader
                    badge={projects.badge.clone()}
                    title={projects.title.clone()}
                    intro={projects.intro.clone()}
                    visible={in_view}
                />
                <div class="projects-grid">
                    {
                        projects.items.iter().enumerate().map(|(index, project)| html! {
                            <RevealItem
                                visible={in_view}
                                delay_ms={stagger(200, 120, index)}
                                motion={Motion::ScaleIn}
                                class="project-card"
                            >
                                <ResponsiveImage src={project.image.clone()} alt={project.title.clone()} viewport={viewport} />
                                <div class="project-info">
                                    <span class="project-category">{project.category.clone()}</span>
                                    <h3>{project.title.clone()}</h3>
                                    <p class="project-location">{project.location.clone()}</p>
                                </div>
                            </RevealItem>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
