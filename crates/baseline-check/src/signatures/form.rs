use crate::catalog::RuleSpec::{self, Matches};

pub(super) const SIGNATURES: &[(&str, &[RuleSpec])] = &[
    ("input-email", &[Matches(r#"type\s*=\s*["']email["']"#)]),
    ("input-url", &[Matches(r#"type\s*=\s*["']url["']"#)]),
    ("input-tel", &[Matches(r#"type\s*=\s*["']tel["']"#)]),
    ("input-search", &[Matches(r#"type\s*=\s*["']search["']"#)]),
    ("input-number", &[Matches(r#"type\s*=\s*["']number["']"#)]),
    ("input-range", &[Matches(r#"type\s*=\s*["']range["']"#)]),
    ("input-color", &[Matches(r#"type\s*=\s*["']color["']"#)]),
    ("input-date", &[Matches(r#"type\s*=\s*["']date["']"#)]),
    (
        "input-datetime-local",
        &[Matches(r#"type\s*=\s*["']datetime-local["']"#)],
    ),
    ("input-month", &[Matches(r#"type\s*=\s*["']month["']"#)]),
    ("input-week", &[Matches(r#"type\s*=\s*["']week["']"#)]),
    ("input-time", &[Matches(r#"type\s*=\s*["']time["']"#)]),
    ("input-file", &[Matches(r#"type\s*=\s*["']file["']"#)]),
    ("input-multiple", &[Matches(r"multiple")]),
    ("input-pattern", &[Matches(r"pattern\s*=")]),
    ("input-placeholder", &[Matches(r"placeholder\s*=")]),
    ("input-required", &[Matches(r"required")]),
    ("input-autofocus", &[Matches(r"autofocus")]),
    ("input-autocomplete", &[Matches(r"autocomplete\s*=")]),
    (
        "form-validation",
        &[
            Matches(r"checkValidity\s*\("),
            Matches(r"reportValidity\s*\("),
            Matches(r"setCustomValidity\s*\("),
        ],
    ),
];
