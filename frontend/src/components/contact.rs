use log::{info, warn};
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::config;
use crate::content;
use crate::reveal::{use_reveal, RevealItem};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please tell us your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please describe your project")]
    MissingMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Enquiry {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        let looks_valid = email
            .split_once('@')
            .map(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.ends_with('.'))
            .unwrap_or(false);
        if !looks_valid {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    /// `mailto:` link that opens the visitor's mail client with the
    /// enquiry filled in.
    pub fn mailto(&self, to: &str) -> Result<String, ContactError> {
        self.validate()?;

        let subject = format!("Project enquiry from {}", self.name.trim());
        let mut body = format!(
            "Name: {}\nEmail: {}\n",
            self.name.trim(),
            self.email.trim()
        );
        if !self.phone.trim().is_empty() {
            body.push_str(&format!("Phone: {}\n", self.phone.trim()));
        }
        body.push('\n');
        body.push_str(self.message.trim());

        Ok(format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        ))
    }
}

#[derive(Properties, PartialEq)]
pub struct EnquiryFormProps {
    pub to_email: String,
}

pub enum EnquiryFormMsg {
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    SetMessage(String),
    Submit,
}

pub struct EnquiryForm {
    enquiry: Enquiry,
    error: Option<ContactError>,
    sent: bool,
}

impl Component for EnquiryForm {
    type Message = EnquiryFormMsg;
    type Properties = EnquiryFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            enquiry: Enquiry::default(),
            error: None,
            sent: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            EnquiryFormMsg::SetName(name) => self.enquiry.name = name,
            EnquiryFormMsg::SetEmail(email) => self.enquiry.email = email,
            EnquiryFormMsg::SetPhone(phone) => self.enquiry.phone = phone,
            EnquiryFormMsg::SetMessage(message) => self.enquiry.message = message,
            EnquiryFormMsg::Submit => match self.enquiry.mailto(&ctx.props().to_email) {
                Ok(href) => {
                    match web_sys::window() {
                        Some(window) => match window.location().set_href(&href) {
                            Ok(()) => {
                                info!("Opened mail client for enquiry");
                                self.sent = true;
                            }
                            Err(err) => warn!("Failed to open mail client: {:?}", err),
                        },
                        None => warn!("No window available to open mail client"),
                    }
                    self.error = None;
                }
                Err(err) => {
                    self.error = Some(err);
                    self.sent = false;
                }
            },
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            EnquiryFormMsg::Submit
        });

        html! {
            <form class="enquiry-form" onsubmit={onsubmit} novalidate={true}>
                if let Some(error) = &self.error {
                    <div class="form-error">{ error.to_string() }</div>
                }
                if self.sent {
                    <div class="form-success">{"Thanks! Your mail app should now open with the enquiry ready to send."}</div>
                }
                <div class="form-row">
                    <input
                        type="text"
                        placeholder="Your name"
                        value={self.enquiry.name.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            EnquiryFormMsg::SetName(input.value())
                        })}
                    />
                    <input
                        type="email"
                        placeholder="Email address"
                        value={self.enquiry.email.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            EnquiryFormMsg::SetEmail(input.value())
                        })}
                    />
                </div>
                <input
                    type="tel"
                    placeholder="Phone (optional)"
                    value={self.enquiry.phone.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        EnquiryFormMsg::SetPhone(input.value())
                    })}
                />
                <textarea
                    placeholder="Tell us about your project"
                    rows="5"
                    value={self.enquiry.message.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        EnquiryFormMsg::SetMessage(input.value())
                    })}
                />
                <button type="submit" class="form-submit">{"Send Enquiry"}</button>
            </form>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub contact: content::Contact,
    pub company: content::Company,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let (section_ref, in_view) = use_reveal(config::REVEAL_THRESHOLD);
    let company = &props.company;

    html! {
        <section id="contact" class="contact-section" ref={section_ref}>
            <div class="section-container">
                <SectionHeader
                    badge={props.contact.badge.clone()}
                    title={props.contact.title.clone()}
                    intro={props.contact.intro.clone()}
                    visible={in_view}
                />
                <div class="contact-grid">
                    <RevealItem visible={in_view} delay_ms={200} class="contact-details">
                        <div class="contact-item">
                            <span class="contact-icon">{"📍"}</span>
                            <div>
                                <h4>{"Visit Us"}</h4>
                                <p>{&company.address}</p>
                            </div>
                        </div>
                        <div class="contact-item">
                            <span class="contact-icon">{"📞"}</span>
                            <div>
                                <h4>{"Call Us"}</h4>
                                <a href={format!("tel:{}", company.phone.replace(' ', ""))}>{&company.phone}</a>
                            </div>
                        </div>
                        <div class="contact-item">
                            <span class="contact-icon">{"✉️"}</span>
                            <div>
                                <h4>{"Email Us"}</h4>
                                <a href={format!("mailto:{}", company.email)}>{&company.email}</a>
                            </div>
                        </div>
                        <div class="contact-item">
                            <span class="contact-icon">{"🕒"}</span>
                            <div>
                                <h4>{"Working Hours"}</h4>
                                <p>{&company.hours}</p>
                            </div>
                        </div>
                    </RevealItem>
                    <RevealItem visible={in_view} delay_ms={350}>
                        <EnquiryForm to_email={company.email.clone()} />
                    </RevealItem>
                </div>
            </div>
        </section>
    }
}
