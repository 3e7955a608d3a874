use crate::catalog::RuleSpec::{self, Matches};

pub(super) const SIGNATURES: &[(&str, &[RuleSpec])] = &[
    (
        "dialog",
        &[
            Matches(r"<dialog"),
            Matches(r"HTMLDialogElement"),
            Matches(r"showModal\s*\("),
            Matches(r"\.close\s*\("),
        ],
    ),
    ("details", &[Matches(r"<details"), Matches(r"<summary")]),
    ("summary", &[Matches(r"<summary")]),
    ("picture", &[Matches(r"<picture"), Matches(r"<source")]),
    ("track", &[Matches(r"<track")]),
    ("progress", &[Matches(r"<progress")]),
    ("meter", &[Matches(r"<meter")]),
    ("output", &[Matches(r"<output")]),
    ("datalist", &[Matches(r"<datalist"), Matches(r"list\s*=")]),
    (
        "web-components",
        &[
            Matches(r"customElements"),
            Matches(r"attachShadow"),
            Matches(r"custom-element"),
            Matches(r"customElements\.define"),
            Matches(r"<(?-u:[\w-])+-(?-u:[\w-])+"),
        ],
    ),
    ("shadow-dom", &[Matches(r"attachShadow"), Matches(r"shadowRoot")]),
    (
        "custom-elements",
        &[Matches(r"customElements\.define"), Matches(r"HTMLElement")],
    ),
    ("template", &[Matches(r"<template")]),
    ("slot", &[Matches(r"<slot"), Matches(r"slot\s*=")]),
    // Superseded by the script-side `canvas` signature.
    ("canvas", &[Matches(r"<canvas"), Matches(r"getContext\s*\(")]),
    (
        "svg",
        &[
            Matches(r"<svg"),
            Matches(r"<path"),
            Matches(r"<circle"),
            Matches(r"<rect"),
        ],
    ),
    ("video", &[Matches(r"<video")]),
    ("audio", &[Matches(r"<audio")]),
    ("source", &[Matches(r"<source")]),
    ("srcset", &[Matches(r"srcset\s*=")]),
    ("sizes", &[Matches(r"sizes\s*=")]),
    ("loading", &[Matches(r#"loading\s*=\s*["']lazy["']"#)]),
    ("lazy-loading", &[Matches(r#"loading\s*=\s*["']lazy["']"#)]),
    ("preload", &[Matches(r#"rel\s*=\s*["']preload["']"#)]),
    ("prefetch", &[Matches(r#"rel\s*=\s*["']prefetch["']"#)]),
    ("preconnect", &[Matches(r#"rel\s*=\s*["']preconnect["']"#)]),
    ("dns-prefetch", &[Matches(r#"rel\s*=\s*["']dns-prefetch["']"#)]),
    (
        "modulepreload",
        &[Matches(r#"rel\s*=\s*["']modulepreload["']"#)],
    ),
];
