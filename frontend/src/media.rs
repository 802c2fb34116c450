//! Responsive image URLs for Cloudinary-style CDN assets.
//!
//! A CDN URL looks like `<host>/upload/<params>/<asset-path>`. The first
//! component after `/upload/` is a parameter block (a version tag such as
//! `v1750925956` or a transformation string) and gets replaced; the rest is
//! the asset path shared by every variant.

use thiserror::Error;

use crate::viewport::ViewportState;

pub const UPLOAD_MARKER: &str = "/upload/";

/// Viewports narrower than this get the mobile variant.
pub const TABLET_MIN_WIDTH: u32 = 768;
/// Viewports at least this wide get the desktop variant.
pub const DESKTOP_MIN_WIDTH: u32 = 1280;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("invalid asset url `{0}`: expected `<host>/upload/<params>/<asset-path>`")]
    InvalidAssetUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Mobile,
    Tablet,
    Desktop,
}

impl Variant {
    #[cfg(test)]
    pub const ALL: [Variant; 3] = [Variant::Mobile, Variant::Tablet, Variant::Desktop];

    /// Width in pixels requested from the CDN.
    pub fn width(self) -> u32 {
        match self {
            Variant::Mobile => 640,
            Variant::Tablet => 1280,
            Variant::Desktop => 1600,
        }
    }

    pub fn transformation(self) -> String {
        format!("f_auto,q_auto,w_{},c_fill", self.width())
    }

    /// `None` while the width is still unknown (0).
    pub fn for_width(width: u32) -> Option<Variant> {
        match width {
            0 => None,
            w if w < TABLET_MIN_WIDTH => Some(Variant::Mobile),
            w if w < DESKTOP_MIN_WIDTH => Some(Variant::Tablet),
            _ => Some(Variant::Desktop),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variants {
    pub mobile: String,
    pub tablet: String,
    pub desktop: String,
}

impl Variants {
    pub fn get(&self, variant: Variant) -> &str {
        match variant {
            Variant::Mobile => &self.mobile,
            Variant::Tablet => &self.tablet,
            Variant::Desktop => &self.desktop,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub base_url: String,
    pub variants: Variants,
}

impl MediaAsset {
    pub fn new(base_url: impl Into<String>) -> Result<Self, MediaError> {
        let base_url = base_url.into();
        let variants = derive_variants(&base_url)?;
        Ok(Self { base_url, variants })
    }

    /// Picks the URL for `viewport`, using the untouched base URL as the
    /// default while the width is unknown.
    pub fn select(&self, viewport: ViewportState) -> &str {
        select_variant(&self.variants, viewport, &self.base_url)
    }
}

struct ParsedUrl<'a> {
    prefix: &'a str,
    asset_path: &'a str,
}

/// Splits `url` at the first `/upload/` and drops the component right after
/// it. A URL with nothing after that component, such as
/// `<host>/upload/photo.jpg` with no parameter block, is rejected as
/// `InvalidAssetUrl` rather than rewritten into a URL with an empty path.
fn parse(url: &str) -> Result<ParsedUrl<'_>, MediaError> {
    let invalid = || MediaError::InvalidAssetUrl(url.to_string());

    let (prefix, rest) = url.split_once(UPLOAD_MARKER).ok_or_else(invalid)?;
    // Drop the parameter block, keep everything after it.
    let (_params, asset_path) = rest.split_once('/').ok_or_else(invalid)?;
    if asset_path.is_empty() {
        return Err(invalid());
    }

    Ok(ParsedUrl { prefix, asset_path })
}

/// Returns the asset path of a CDN URL with its parameter block removed.
pub fn asset_path(url: &str) -> Result<&str, MediaError> {
    parse(url).map(|parsed| parsed.asset_path)
}

pub fn derive_variants(base_url: &str) -> Result<Variants, MediaError> {
    let parsed = parse(base_url)?;
    let build = |variant: Variant| {
        format!(
            "{}{}{}/{}",
            parsed.prefix,
            UPLOAD_MARKER,
            variant.transformation(),
            parsed.asset_path
        )
    };

    Ok(Variants {
        mobile: build(Variant::Mobile),
        tablet: build(Variant::Tablet),
        desktop: build(Variant::Desktop),
    })
}

pub fn select_variant<'a>(variants: &'a Variants, viewport: ViewportState, default: &'a str) -> &'a str {
    if !viewport.is_known() {
        return default;
    }
    Variant::for_width(viewport.width_pixels).map_or(default, |variant| variants.get(variant))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHOTO: &str = "https://cdn.example.com/upload/v123/photo.jpg";
    const SERVICE: &str =
        "https://res.cloudinary.com/dmfrfsnro/image/upload/v1750925956/AVI_4406-min_hrhyjx.jpg";

    fn viewport(width: u32) -> ViewportState {
        ViewportState::new(width)
    }

    #[test]
    fn rewrites_version_block_into_mobile_transformation() {
        let variants = derive_variants(PHOTO).unwrap();
        assert_eq!(
            variants.mobile,
            "https://cdn.example.com/upload/f_auto,q_auto,w_640,c_fill/photo.jpg"
        );
        assert_eq!(
            variants.tablet,
            "https://cdn.example.com/upload/f_auto,q_auto,w_1280,c_fill/photo.jpg"
        );
        assert_eq!(
            variants.desktop,
            "https://cdn.example.com/upload/f_auto,q_auto,w_1600,c_fill/photo.jpg"
        );
    }

    #[test]
    fn every_variant_keeps_the_asset_path_and_its_width() {
        let variants = derive_variants(SERVICE).unwrap();
        for variant in Variant::ALL {
            let url = variants.get(variant);
            assert!(url.ends_with("/AVI_4406-min_hrhyjx.jpg"), "{url}");
            assert!(url.contains(&format!(",w_{},", variant.width())), "{url}");
            assert!(url.starts_with("https://res.cloudinary.com/dmfrfsnro/image/upload/"));
        }
    }

    #[test]
    fn nested_asset_paths_survive() {
        let variants =
            derive_variants("https://cdn.example.com/upload/v9/projects/2024/kitchen.jpg").unwrap();
        assert_eq!(
            variants.desktop,
            "https://cdn.example.com/upload/f_auto,q_auto,w_1600,c_fill/projects/2024/kitchen.jpg"
        );
    }

    #[test]
    fn rederiving_from_a_variant_keeps_the_asset_path() {
        let original = asset_path(SERVICE).unwrap();
        let variants = derive_variants(SERVICE).unwrap();
        for variant in Variant::ALL {
            let again = derive_variants(variants.get(variant)).unwrap();
            assert_eq!(asset_path(variants.get(variant)).unwrap(), original);
            assert_eq!(again, variants);
        }
    }

    #[test]
    fn splits_on_first_marker_only() {
        let variants = derive_variants("https://cdn.example.com/upload/v1/upload/a.jpg").unwrap();
        assert_eq!(
            variants.mobile,
            "https://cdn.example.com/upload/f_auto,q_auto,w_640,c_fill/upload/a.jpg"
        );
    }

    #[test]
    fn missing_marker_is_rejected() {
        for url in [
            "https://cdn.example.com/images/v123/photo.jpg",
            "https://cdn.example.com/uploads/v123/photo.jpg",
            "",
        ] {
            assert_eq!(
                derive_variants(url),
                Err(MediaError::InvalidAssetUrl(url.to_string()))
            );
            assert!(MediaAsset::new(url).is_err());
        }
    }

    #[test]
    fn missing_asset_path_is_rejected() {
        for url in [
            "https://cdn.example.com/upload/photo.jpg",
            "https://cdn.example.com/upload/v1/",
        ] {
            assert_eq!(derive_variants(url), Err(MediaError::InvalidAssetUrl(url.to_string())));
            assert_eq!(asset_path(url), Err(MediaError::InvalidAssetUrl(url.to_string())));
        }
    }

    #[test]
    fn selection_thresholds() {
        let asset = MediaAsset::new(PHOTO).unwrap();
        let cases = [
            (0, PHOTO.to_string()),
            (1, asset.variants.mobile.clone()),
            (767, asset.variants.mobile.clone()),
            (768, asset.variants.tablet.clone()),
            (1279, asset.variants.tablet.clone()),
            (1280, asset.variants.desktop.clone()),
            (3840, asset.variants.desktop.clone()),
        ];
        for (width, expected) in cases {
            assert_eq!(asset.select(viewport(width)), expected, "width {width}");
        }
    }

    #[test]
    fn unknown_width_uses_caller_default() {
        let variants = derive_variants(PHOTO).unwrap();
        assert_eq!(
            select_variant(&variants, ViewportState::unknown(), "/assets/placeholder.svg"),
            "/assets/placeholder.svg"
        );
        assert_eq!(Variant::for_width(0), None);
    }
}
