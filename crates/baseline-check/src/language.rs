//! Snippet language inference from detected feature identifiers.
//!
//! Membership is inferred from identifier prefixes and short allow-lists
//! rather than the catalog category a signature was registered under. This
//! keeps labels stable for identifiers such as `grid` (a CSS signature that
//! does not carry the `css-` prefix) or `canvas` (registered under both HTML
//! and JS, classified as HTML here).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::DetectedFeature;

const CSS_PREFIX: &str = "css-";
const CSS_EXTRA: &[&str] = &["grid", "flexbox", "aspect-ratio"];

const JS_PREFIX: &str = "es";
const JS_FRAGMENTS: &[&str] = &["promise", "async"];
const JS_EXTRA: &[&str] = &["fetch", "map-set", "array-methods"];

const HTML_PREFIX: &str = "html";
const HTML_EXTRA: &[&str] = &["dialog", "details", "picture", "canvas", "svg"];

/// Inferred language of an analyzed snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "CSS")]
    Css,
    #[serde(rename = "JavaScript")]
    JavaScript,
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "HTML + CSS")]
    HtmlCss,
    #[serde(rename = "HTML + JavaScript")]
    HtmlJavaScript,
    #[serde(rename = "Mixed")]
    Mixed,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Css => "CSS",
            Language::JavaScript => "JavaScript",
            Language::Html => "HTML",
            Language::HtmlCss => "HTML + CSS",
            Language::HtmlJavaScript => "HTML + JavaScript",
            Language::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_css_like(feature: &str) -> bool {
    feature.starts_with(CSS_PREFIX) || CSS_EXTRA.contains(&feature)
}

pub fn is_js_like(feature: &str) -> bool {
    feature.starts_with(JS_PREFIX)
        || JS_FRAGMENTS.iter().any(|frag| feature.contains(frag))
        || JS_EXTRA.contains(&feature)
}

pub fn is_html_like(feature: &str) -> bool {
    feature.starts_with(HTML_PREFIX) || HTML_EXTRA.contains(&feature)
}

/// Classify a snippet from its detected features.
pub fn infer_language(features: &[DetectedFeature]) -> Language {
    let has_css = features.iter().any(|f| is_css_like(&f.feature));
    let has_js = features.iter().any(|f| is_js_like(&f.feature));
    let has_html = features.iter().any(|f| is_html_like(&f.feature));

    match (has_css, has_js, has_html) {
        (true, false, false) => Language::Css,
        (false, true, false) => Language::JavaScript,
        (false, false, true) => Language::Html,
        (true, false, true) => Language::HtmlCss,
        (false, true, true) => Language::HtmlJavaScript,
        _ => Language::Mixed,
    }
}
