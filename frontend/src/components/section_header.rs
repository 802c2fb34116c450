use yew::prelude::*;

use crate::reveal::RevealItem;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub badge: String,
    pub title: String,
    #[prop_or_default]
    pub intro: Option<String>,
    pub visible: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <RevealItem visible={props.visible} class="section-header">
            <span class="section-badge">{props.badge.clone()}</span>
            <h2 class="section-title">{props.title.clone()}</h2>
            {
                if let Some(intro) = &props.intro {
                    html! { <p class="section-intro">{intro.clone()}</p> }
                } else {
                    html! {}
                }
            }
        </RevealItem>
    }
}
