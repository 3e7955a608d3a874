use crate::catalog::RuleSpec::{self, Matches};

pub(super) const SIGNATURES: &[(&str, &[RuleSpec])] = &[
    // Layout
    (
        "grid",
        &[
            Matches(r"display\s*:\s*grid"),
            Matches(r"grid-template"),
            Matches(r"grid-area"),
            Matches(r"grid-column"),
            Matches(r"grid-row"),
            Matches(r"grid-gap"),
            Matches(r"gap\s*:"),
        ],
    ),
    (
        "css-grid",
        &[
            Matches(r"display\s*:\s*grid"),
            Matches(r"grid-template"),
            Matches(r"grid-area"),
        ],
    ),
    (
        "flexbox",
        &[
            Matches(r"display\s*:\s*flex"),
            Matches(r"flex-direction"),
            Matches(r"flex-wrap"),
            Matches(r"justify-content"),
            Matches(r"align-items"),
            Matches(r"flex\s*:"),
        ],
    ),
    (
        "css-flexbox",
        &[
            Matches(r"display\s*:\s*flex"),
            Matches(r"flex-direction"),
            Matches(r"justify-content"),
        ],
    ),
    ("subgrid", &[Matches(r"grid-template.*subgrid"), Matches(r"subgrid")]),
    ("css-subgrid", &[Matches(r"subgrid")]),
    // Properties
    ("aspect-ratio", &[Matches(r"aspect-ratio\s*:")]),
    ("backdrop-filter", &[Matches(r"backdrop-filter\s*:")]),
    ("css-backdrop-filter", &[Matches(r"backdrop-filter\s*:")]),
    (
        "css-custom-properties",
        &[Matches(r"--(?-u:[\w-])+\s*:"), Matches(r"var\s*\(")],
    ),
    ("css-variables", &[Matches(r"--(?-u:[\w-])+\s*:"), Matches(r"var\s*\(")]),
    ("css-calc", &[Matches(r"calc\s*\(")]),
    (
        "css-transforms",
        &[
            Matches(r"transform\s*:"),
            Matches(r"rotate\s*\("),
            Matches(r"scale\s*\("),
            Matches(r"translate\s*\("),
        ],
    ),
    (
        "css-transitions",
        &[
            Matches(r"transition\s*:"),
            Matches(r"transition-property"),
            Matches(r"transition-duration"),
        ],
    ),
    (
        "css-animations",
        &[
            Matches(r"@keyframes"),
            Matches(r"animation\s*:"),
            Matches(r"animation-name"),
        ],
    ),
    (
        "css-gradients",
        &[
            Matches(r"linear-gradient"),
            Matches(r"radial-gradient"),
            Matches(r"conic-gradient"),
        ],
    ),
    (
        "css-filter",
        &[
            Matches(r"filter\s*:"),
            Matches(r"blur\s*\("),
            Matches(r"brightness\s*\("),
            Matches(r"contrast\s*\("),
        ],
    ),
    ("css-clip-path", &[Matches(r"clip-path\s*:")]),
    ("css-object-fit", &[Matches(r"object-fit\s*:")]),
    ("css-object-position", &[Matches(r"object-position\s*:")]),
    // Positioning and flow
    ("css-sticky", &[Matches(r"position\s*:\s*sticky")]),
    ("css-position-sticky", &[Matches(r"position\s*:\s*sticky")]),
    (
        "css-logical-properties",
        &[
            Matches(r"margin-inline"),
            Matches(r"padding-block"),
            Matches(r"border-inline"),
            Matches(r"inset-inline"),
        ],
    ),
    ("css-writing-mode", &[Matches(r"writing-mode\s*:")]),
    ("css-text-orientation", &[Matches(r"text-orientation\s*:")]),
    // Newer features, limited availability
    ("css-cascade-layers", &[Matches(r"@layer"), Matches(r"layer\s*\(")]),
    (
        "css-container-queries",
        &[
            Matches(r"@container"),
            Matches(r"container-type"),
            Matches(r"container-name"),
            Matches(r"container\s*:"),
        ],
    ),
    ("css-has", &[Matches(r":has\s*\(")]),
    ("css-nesting", &[Matches(r"&\s*[.:#\[]"), Matches(r"&\s*\{")]),
    ("css-color-mix", &[Matches(r"color-mix\s*\(")]),
    ("css-relative-color-syntax", &[Matches(r"from\s+(?-u:\w)+")]),
    (
        "css-wide-gamut-colors",
        &[
            Matches(r"color\s*\(\s*display-p3"),
            Matches(r"color\s*\(\s*rec2020"),
        ],
    ),
    // Scrolling
    ("css-scroll-behavior", &[Matches(r"scroll-behavior\s*:")]),
    ("css-overscroll-behavior", &[Matches(r"overscroll-behavior")]),
    ("css-scroll-snap", &[Matches(r"scroll-snap")]),
    (
        "css-scroll-timeline",
        &[Matches(r"scroll-timeline"), Matches(r"@scroll-timeline")],
    ),
    (
        "css-view-timeline",
        &[Matches(r"view-timeline"), Matches(r"@view-timeline")],
    ),
    ("css-animation-timeline", &[Matches(r"animation-timeline")]),
    // Typography
    ("css-font-display", &[Matches(r"font-display\s*:")]),
    ("css-font-feature-settings", &[Matches(r"font-feature-settings")]),
    (
        "css-font-variation-settings",
        &[Matches(r"font-variation-settings")],
    ),
    // Color and appearance
    ("css-color-scheme", &[Matches(r"color-scheme\s*:")]),
    ("css-forced-color-adjust", &[Matches(r"forced-color-adjust")]),
    ("css-light-dark", &[Matches(r"light-dark\s*\(")]),
    // Media queries
    (
        "prefers-color-scheme",
        &[Matches(r"@media.*prefers-color-scheme")],
    ),
    (
        "prefers-reduced-motion",
        &[Matches(r"@media.*prefers-reduced-motion")],
    ),
    ("prefers-contrast", &[Matches(r"@media.*prefers-contrast")]),
    (
        "prefers-reduced-transparency",
        &[Matches(r"@media.*prefers-reduced-transparency")],
    ),
    // Units
    (
        "css-viewport-units",
        &[
            Matches(r"(?-u:\d)+vh"),
            Matches(r"(?-u:\d)+vw"),
            Matches(r"(?-u:\d)+vmin"),
            Matches(r"(?-u:\d)+vmax"),
            Matches(r"(?-u:\d)+vi"),
            Matches(r"(?-u:\d)+vb"),
        ],
    ),
    ("css-rem-units", &[Matches(r"(?-u:\d)+rem")]),
    ("css-ch-units", &[Matches(r"(?-u:\d)+ch")]),
    ("css-ex-units", &[Matches(r"(?-u:\d)+ex")]),
    // Selectors
    (
        "css-nth-child",
        &[
            Matches(r":nth-child\s*\("),
            Matches(r":nth-last-child\s*\("),
            Matches(r":nth-of-type\s*\("),
        ],
    ),
    ("css-not-selector", &[Matches(r":not\s*\(")]),
    ("css-attribute-selectors", &[Matches(r"\[(?-u:[\w-])+[*^$|~]?=")]),
    (
        "css-pseudo-elements",
        &[
            Matches(r"::before"),
            Matches(r"::after"),
            Matches(r"::first-line"),
            Matches(r"::first-letter"),
        ],
    ),
    (
        "css-pseudo-classes",
        &[
            Matches(r":hover"),
            Matches(r":focus"),
            Matches(r":active"),
            Matches(r":visited"),
            Matches(r":target"),
        ],
    ),
    // Experimental
    (
        "css-anchor-positioning",
        &[Matches(r"anchor\s*\("), Matches(r"position-anchor")],
    ),
    (
        "css-view-transitions",
        &[Matches(r"view-transition"), Matches(r"::view-transition")],
    ),
    ("css-scope", &[Matches(r"@scope")]),
    ("css-starting-style", &[Matches(r"@starting-style")]),
    ("css-field-sizing", &[Matches(r"field-sizing\s*:")]),
];
