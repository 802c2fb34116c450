use log::warn;
use yew::prelude::*;

use crate::config;
use crate::media::MediaAsset;
use crate::viewport::ViewportState;

#[derive(Properties, PartialEq)]
pub struct ResponsiveImageProps {
    pub src: String,
    pub alt: String,
    pub viewport: ViewportState,
    #[prop_or_default]
    pub class: Classes,
}

/// `<img>` pointing at the CDN variant sized for the current viewport.
#[function_component(ResponsiveImage)]
pub fn responsive_image(props: &ResponsiveImageProps) -> Html {
    let asset = use_memo(
        |src: &String| {
            MediaAsset::new(src.as_str())
                .map_err(|err| warn!("Falling back to placeholder: {}", err))
                .ok()
        },
        props.src.clone(),
    );

    let src = match &*asset {
        Some(asset) => asset.select(props.viewport).to_string(),
        None => config::PLACEHOLDER_IMAGE.to_string(),
    };

    html! {
        <img src={src} alt={props.alt.clone()} loading="lazy" class={props.class.clone()} />
    }
}
