use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::media;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub company: Company,
    pub hero: Hero,
    pub about: About,
    pub services: Services,
    pub products: Products,
    pub projects: Projects,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Company {
    pub name: String,
    pub short_name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub hours: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Hero {
    pub eyebrow: String,
    pub title: String,
    pub highlight: String,
    pub subtitle: String,
    pub image: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct About {
    pub badge: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub highlights: Vec<String>,
    pub image: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Services {
    pub badge: String,
    pub title: String,
    pub intro: String,
    pub items: Vec<Service>,
    pub stats: Vec<Stat>,
    pub process: Vec<ProcessStep>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub image: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Stat {
    pub icon: String,
    pub number: String,
    pub label: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Products {
    pub badge: String,
    pub title: String,
    pub intro: String,
    pub items: Vec<Product>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub finishes: Vec<String>,
    /// CSS colour used for the material swatch.
    pub swatch: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Projects {
    pub badge: String,
    pub title: String,
    pub intro: String,
    pub items: Vec<Project>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub location: String,
    pub image: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Contact {
    pub badge: String,
    pub title: String,
    pub intro: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Footer {
    pub blurb: String,
}

impl SiteContent {
    /// Every CDN image referenced by the page.
    pub fn image_urls(&self) -> Vec<&str> {
        let mut urls = vec![self.hero.image.as_str(), self.about.image.as_str()];
        urls.extend(self.services.items.iter().map(|s| s.image.as_str()));
        urls.extend(self.projects.items.iter().map(|p| p.image.as_str()));
        urls
    }
}

pub fn parse(json: &str) -> Result<SiteContent, ContentError> {
    Ok(serde_json::from_str(json)?)
}

/// Image URLs that can't be turned into responsive variants. These still
/// render, as the placeholder image.
pub fn unresolvable_images(site: &SiteContent) -> Vec<media::MediaError> {
    site.image_urls()
        .into_iter()
        .filter_map(|url| media::asset_path(url).err())
        .collect()
}

/// The copy compiled into the binary.
pub fn load() -> Result<SiteContent, ContentError> {
    let site = parse(SITE_JSON)?;
    for err in unresolvable_images(&site) {
        warn!("{}", err);
    }
    Ok(site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{asset_path, derive_variants};

    #[test]
    fn shipped_content_parses() {
        let site = load().expect("site.json should parse");
        assert!(!site.company.name.is_empty());
        assert_eq!(site.services.items.len(), 3);
        assert_eq!(site.services.process.len(), 4);
        assert!(!site.products.items.is_empty());
        assert!(!site.projects.items.is_empty());
    }

    #[test]
    fn every_shipped_image_has_responsive_variants() {
        let site = load().unwrap();
        for url in site.image_urls() {
            let variants = derive_variants(url).unwrap_or_else(|e| panic!("{e}"));
            assert_eq!(asset_path(&variants.mobile).unwrap(), asset_path(url).unwrap());
        }
    }

    #[test]
    fn shipped_content_has_no_unresolvable_images() {
        assert!(unresolvable_images(&load().unwrap()).is_empty());
    }

    #[test]
    fn images_without_upload_segment_are_reported() {
        let mut site = load().unwrap();
        site.hero.image = "https://example.com/static/hero.jpg".to_string();
        site.projects.items[0].image = "https://cdn.example.com/upload/kitchen.jpg".to_string();

        let errors = unresolvable_images(&site);
        assert_eq!(
            errors,
            vec![
                media::MediaError::InvalidAssetUrl("https://example.com/static/hero.jpg".to_string()),
                media::MediaError::InvalidAssetUrl("https://cdn.example.com/upload/kitchen.jpg".to_string()),
            ]
        );
    }

    #[test]
    fn contact_email_looks_like_one() {
        let site = load().unwrap();
        assert!(site.company.email.contains('@'));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = parse("{\"company\": 1}").unwrap_err();
        assert!(err.to_string().starts_with("site content is malformed"));
    }
}
