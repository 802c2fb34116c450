use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::config;
use crate::content;
use crate::reveal::{stagger, use_reveal, RevealItem};

#[derive(Properties, PartialEq)]
pub struct ProductsProps {
    pub products: content::Products,
}

#[function_component(Products)]
pub fn products(props: &ProductsProps) -> Html {
    let (section_ref, in_view) = use_reveal(config::REVEAL_THRESHOLD);
    let products = &props.products;

    html! {
        <section id="products" class="products-section" ref={section_ref}>
            <div class="section-container">
                <SectionHeader
                    badge={products.badge.clone()}
                    title={products.title.clone()}
                    intro={products.intro.clone()}
                    visible={in_view}
                />
                <div class="products-grid">
                    {
                        products.items.iter().enumerate().map(|(index, product)| html! {
                            <RevealItem visible={in_view} delay_ms={stagger(200, 100, index)} class="product-card">
                                <div class="product-swatch" style={format!("background: {};", product.swatch)}></div>
                                <h3>{product.name.clone()}</h3>
                                <p>{product.description.clone()}</p>
                                <div class="product-finishes">
                                    {
                                        product.finishes.iter().map(|finish| html! {
                                            <span class="finish-tag">{finish.clone()}</span>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </RevealItem>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
