use yew::prelude::*;

use crate::components::responsive_image::ResponsiveImage;
use crate::components::section_header::SectionHeader;
use crate::config;
use crate::content;
use crate::reveal::{stagger, use_reveal, Motion, RevealItem};
use crate::viewport::{use_viewport, ViewportState};

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: content::Services,
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: content::Service,
    viewport: ViewportState,
    visible: bool,
    delay_ms: u32,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;

    html! {
        <RevealItem visible={props.visible} delay_ms={props.delay_ms} class="service-card">
            <div class="service-image">
                <ResponsiveImage src={service.image.clone()} alt={service.title.clone()} viewport={props.viewport} />
                <div class="service-image-overlay"></div>
                <div class="service-image-caption">
                    <div class="service-icon">{service.icon.clone()}</div>
                    <h3>{service.title.clone()}</h3>
                </div>
            </div>
            <div class="service-body">
                <p>{service.description.clone()}</p>
                <ul class="service-features">
                    {
                        service.features.iter().map(|feature| html! {
                            <li><span class="check-icon">{"✓"}</span>{feature.clone()}</li>
                        }).collect::<Html>()
                    }
                </ul>
                <a href="#contact" class="learn-more">{"Learn More →"}</a>
            </div>
        </RevealItem>
    }
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let (section_ref, in_view) = use_reveal(config::REVEAL_THRESHOLD);
    let viewport = use_viewport();
    let services = &props.services;
    let last_step = services.process.len().saturating_sub(1);

    html! {
        <section id="services" class="services-section" ref={section_ref}>
            <div class="section-container">
                <SectionHeader
                    badge={services.badge.clone()}
                    title={services.title.clone()}
                    intro={services.intro.clone()}
                    visible={in_view}
                />

                <div class="services-grid">
                    {
                        services.items.iter().enumerate().map(|(index, service)| html! {
                            <ServiceCard
                                service={service.clone()}
                                viewport={viewport}
                                visible={in_view}
                                delay_ms={stagger(200, 100, index)}
                            />
                        }).collect::<Html>()
                    }
                </div>

                <RevealItem visible={in_view} delay_ms={500} class="stats-panel">
                    <h3>{"Service Excellence by Numbers"}</h3>
                    <p>{"Our commitment to quality and precision drives everything we do"}</p>
                    <div class="stats-row">
                        {
                            services.stats.iter().enumerate().map(|(index, stat)| html! {
                                <RevealItem
                                    visible={in_view}
                                    delay_ms={stagger(700, 100, index)}
                                    motion={Motion::ScaleIn}
                                    class="stat"
                                >
                                    <div class="stat-icon">{stat.icon.clone()}</div>
                                    <div class="stat-number">{stat.number.clone()}</div>
                                    <div class="stat-label">{stat.label.clone()}</div>
                                </RevealItem>
                            }).collect::<Html>()
                        }
                    </div>
                </RevealItem>

                <RevealItem visible={in_view} delay_ms={800} class="process">
                    <h3>{"Our Process"}</h3>
                    <div class="process-grid">
                        {
                            services.process.iter().enumerate().map(|(index, step)| html! {
                                <RevealItem visible={in_view} delay_ms={stagger(1000, 100, index)} class="process-step">
                                    <div class="step-number">{(index + 1).to_string()}</div>
                                    <h4>{step.title.clone()}</h4>
                                    <p>{step.description.clone()}</p>
                                    {
                                        if index < last_step {
                                            html! { <div class="step-connector"></div> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </RevealItem>
                            }).collect::<Html>()
                        }
                    </div>
                </RevealItem>
            </div>
        </section>
    }
}
