use chrono::Datelike;
use yew::prelude::*;

use crate::components::header::NAV_SECTIONS;
use crate::content;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub company: content::Company,
    pub footer: content::Footer,
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let company = &props.company;

    html! {
        <footer id="footer" class="site-footer">
            <div class="section-container footer-grid">
                <div class="footer-brand">
                    <h3>{&company.name}</h3>
                    <p class="footer-tagline">{&company.tagline}</p>
                    <p>{&props.footer.blurb}</p>
                </div>
                <div class="footer-links">
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        {
                            NAV_SECTIONS.iter().map(|(id, label)| html! {
                                <li><a href={format!("#{}", id)}>{*label}</a></li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
                <div class="footer-contact">
                    <h4>{"Contact"}</h4>
                    <p>{&company.address}</p>
                    <p><a href={format!("tel:{}", company.phone.replace(' ', ""))}>{&company.phone}</a></p>
                    <p><a href={format!("mailto:{}", company.email)}>{&company.email}</a></p>
                    <p>{&company.hours}</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", current_year(), company.name)}</p>
            </div>
        </footer>
    }
}
