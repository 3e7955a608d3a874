//! Signature catalog: the compiled, flat table of detectable features.
//!
//! Signatures are declared as data (see [`crate::signatures`]) and compiled
//! once. Identifiers are unique across the whole catalog; when a later
//! category redefines an identifier that an earlier category registered, the
//! later rules replace the earlier ones in place. Defining the same identifier
//! twice inside one category is rejected as ambiguous.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::signatures;
use crate::types::Category;

/// Declarative form of one detection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSpec {
    /// Case-insensitive pattern that may match anywhere in the text.
    Matches(&'static str),
    /// Pattern that only counts when the rest of its line does not contain
    /// `rejected` (case-insensitive). A match spanning a line break may stop
    /// just before it instead.
    MatchesUnlessLineContains {
        pattern: &'static str,
        rejected: &'static str,
    },
}

/// Declarative signatures of one category, in registration order.
#[derive(Debug, Clone, Copy)]
pub struct CategorySpecs {
    pub category: Category,
    pub signatures: &'static [(&'static str, &'static [RuleSpec])],
}

/// Errors raised while compiling a catalog.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Invalid pattern {pattern:?} for feature {feature}: {source}")]
    InvalidPattern {
        feature: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Empty feature identifier in {0} signatures")]
    EmptyIdentifier(Category),

    #[error("Feature {0} has no detection rules")]
    NoRules(String),

    #[error("Feature {feature} is registered twice in {category} signatures")]
    DuplicateSignature { feature: String, category: Category },
}

/// A compiled detection rule.
#[derive(Debug, Clone)]
pub enum Rule {
    Pattern(Regex),
    LineGuarded { pattern: Regex, rejected: Regex },
}

impl Rule {
    fn compile(feature: &str, spec: &RuleSpec) -> Result<Self, CatalogError> {
        match *spec {
            RuleSpec::Matches(pattern) => Ok(Rule::Pattern(compile_pattern(feature, pattern)?)),
            RuleSpec::MatchesUnlessLineContains { pattern, rejected } => Ok(Rule::LineGuarded {
                pattern: compile_pattern(feature, pattern)?,
                rejected: compile_pattern(feature, &regex::escape(rejected))?,
            }),
        }
    }

    /// Whether the rule matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Rule::Pattern(re) => re.is_match(text),
            Rule::LineGuarded { pattern, rejected } => line_guarded_match(pattern, rejected, text),
        }
    }
}

const LINE_BREAKS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// A guarded match passes when nothing on the rest of its line matches
/// `rejected`. Each line is searched for `rejected` at most once, so the scan
/// stays linear however many matches share a line.
fn line_guarded_match(pattern: &Regex, rejected: &Regex, text: &str) -> bool {
    // End of the current line and the last `rejected` start found on it.
    let mut line: Option<(usize, Option<usize>)> = None;

    for m in pattern.find_iter(text) {
        if can_end_at_line_break(pattern, text, &m) {
            return true;
        }

        let at = m.end();
        let (_, last_rejected) = match line {
            Some(current @ (end, _)) if at <= end => current,
            _ => {
                let end = text[at..].find(LINE_BREAKS).map_or(text.len(), |i| at + i);
                let current = (end, last_match_start(rejected, &text[..end], at));
                line = Some(current);
                current
            }
        };

        if last_rejected.map_or(true, |start| start < at) {
            return true;
        }
    }
    false
}

/// Whether `m` could stop right before one of the line breaks it spans,
/// leaving an empty rest of line.
fn can_end_at_line_break(pattern: &Regex, text: &str, m: &regex::Match<'_>) -> bool {
    m.as_str().match_indices(LINE_BREAKS).any(|(offset, _)| {
        let end = m.start() + offset;
        pattern
            .find_at(&text[..end], m.start())
            .is_some_and(|shorter| shorter.start() == m.start() && shorter.end() == end)
    })
}

/// Start of the last (possibly overlapping) match of `re` at or after `from`.
fn last_match_start(re: &Regex, haystack: &str, from: usize) -> Option<usize> {
    let mut last = None;
    let mut at = from;
    while at <= haystack.len() {
        let Some(m) = re.find_at(haystack, at) else {
            break;
        };
        last = Some(m.start());
        at = m.start() + haystack[m.start()..].chars().next().map_or(1, char::len_utf8);
    }
    last
}

fn compile_pattern(feature: &str, pattern: &str) -> Result<Regex, CatalogError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| CatalogError::InvalidPattern {
            feature: feature.to_string(),
            pattern: pattern.to_string(),
            source,
        })
}

/// One detectable feature and its rules.
#[derive(Debug, Clone)]
pub struct FeatureSignature {
    id: String,
    category: Category,
    rules: Vec<Rule>,
}

impl FeatureSignature {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// A feature is present when any of its rules matches.
    pub fn matches(&self, text: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(text))
    }
}

/// Immutable, flat catalog of feature signatures.
#[derive(Debug, Clone, Default)]
pub struct SignatureCatalog {
    signatures: Vec<FeatureSignature>,
    index: HashMap<String, usize>,
}

impl SignatureCatalog {
    /// The built-in catalog, compiled on first use.
    pub fn builtin() -> &'static SignatureCatalog {
        static CATALOG: OnceLock<SignatureCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            SignatureCatalog::from_specs(signatures::BUILTIN)
                .expect("built-in signature catalog is valid")
        })
    }

    /// Compile a catalog from declarative category tables.
    pub fn from_specs(categories: &[CategorySpecs]) -> Result<Self, CatalogError> {
        let mut catalog = SignatureCatalog::default();

        for specs in categories {
            let mut in_category = HashSet::new();

            for (id, rule_specs) in specs.signatures {
                if id.is_empty() {
                    return Err(CatalogError::EmptyIdentifier(specs.category));
                }
                if rule_specs.is_empty() {
                    return Err(CatalogError::NoRules(id.to_string()));
                }
                if !in_category.insert(*id) {
                    return Err(CatalogError::DuplicateSignature {
                        feature: id.to_string(),
                        category: specs.category,
                    });
                }

                let rules = rule_specs
                    .iter()
                    .map(|spec| Rule::compile(id, spec))
                    .collect::<Result<Vec<_>, _>>()?;

                let signature = FeatureSignature {
                    id: id.to_string(),
                    category: specs.category,
                    rules,
                };

                match catalog.index.get(*id) {
                    Some(&pos) => {
                        tracing::debug!(
                            "{} signature {id} replaces the {} registration",
                            specs.category,
                            catalog.signatures[pos].category
                        );
                        catalog.signatures[pos] = signature;
                    }
                    None => {
                        catalog.index.insert(id.to_string(), catalog.signatures.len());
                        catalog.signatures.push(signature);
                    }
                }
            }
        }

        tracing::debug!("Compiled signature catalog with {} features", catalog.len());
        Ok(catalog)
    }

    /// Look up a signature by identifier.
    pub fn get(&self, id: &str) -> Option<&FeatureSignature> {
        self.index.get(id).map(|&pos| &self.signatures[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Signatures in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureSignature> {
        self.signatures.iter()
    }

    /// Identifiers whose effective registration belongs to `category`.
    pub fn ids_in(&self, category: Category) -> Vec<&str> {
        self.signatures
            .iter()
            .filter(|s| s.category == category)
            .map(|s| s.id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RuleSpec::*;

    #[test]
    fn test_builtin_compiles() {
        let catalog = SignatureCatalog::builtin();
        assert!(catalog.len() > 150);
        assert!(catalog.contains("grid"));
        assert!(catalog.contains("fetch"));
        assert!(catalog.contains("input-email"));
    }

    #[test]
    fn test_cross_category_redefinition_replaces() {
        let catalog = SignatureCatalog::builtin();
        let canvas = catalog.get("canvas").unwrap();
        assert_eq!(canvas.category(), Category::Js);
        // The HTML rules for <canvas> no longer apply.
        assert!(!canvas.matches("<canvas id=\"c\"></canvas>"));
        assert!(canvas.matches("el.getContext('2d')"));
        assert!(!catalog.ids_in(Category::Html).contains(&"canvas"));
    }

    #[test]
    fn test_replacement_keeps_first_position() {
        const FIRST: &[(&str, &[RuleSpec])] = &[("a", &[Matches("x")]), ("b", &[Matches("y")])];
        const SECOND: &[(&str, &[RuleSpec])] = &[("c", &[Matches("z")]), ("a", &[Matches("w")])];
        let catalog = SignatureCatalog::from_specs(&[
            CategorySpecs {
                category: Category::Css,
                signatures: FIRST,
            },
            CategorySpecs {
                category: Category::Js,
                signatures: SECOND,
            },
        ])
        .unwrap();

        let order: Vec<&str> = catalog.iter().map(|s| s.id()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert!(catalog.get("a").unwrap().matches("W"));
        assert!(!catalog.get("a").unwrap().matches("x"));
    }

    #[test]
    fn test_duplicate_within_category_rejected() {
        const DUP: &[(&str, &[RuleSpec])] = &[("a", &[Matches("x")]), ("a", &[Matches("y")])];
        let err = SignatureCatalog::from_specs(&[CategorySpecs {
            category: Category::Html,
            signatures: DUP,
        }])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSignature { .. }));
    }

    #[test]
    fn test_malformed_pattern_rejected() {
        const BAD: &[(&str, &[RuleSpec])] = &[("broken", &[Matches("foo(")])];
        let err = SignatureCatalog::from_specs(&[CategorySpecs {
            category: Category::Css,
            signatures: BAD,
        }])
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPattern { .. }));
    }

    #[test]
    fn test_empty_rules_and_identifier_rejected() {
        const NO_RULES: &[(&str, &[RuleSpec])] = &[("bare", &[])];
        assert!(matches!(
            SignatureCatalog::from_specs(&[CategorySpecs {
                category: Category::Form,
                signatures: NO_RULES,
            }]),
            Err(CatalogError::NoRules(_))
        ));

        const NO_ID: &[(&str, &[RuleSpec])] = &[("", &[Matches("x")])];
        assert!(matches!(
            SignatureCatalog::from_specs(&[CategorySpecs {
                category: Category::Form,
                signatures: NO_ID,
            }]),
            Err(CatalogError::EmptyIdentifier(Category::Form))
        ));
    }

    #[test]
    fn test_rules_are_case_insensitive() {
        const SIGS: &[(&str, &[RuleSpec])] = &[("fetch", &[Matches(r"fetch\s*\(")])];
        let catalog = SignatureCatalog::from_specs(&[CategorySpecs {
            category: Category::Js,
            signatures: SIGS,
        }])
        .unwrap();
        assert!(catalog.get("fetch").unwrap().matches("FETCH ('/x')"));
    }

    #[test]
    fn test_line_guarded_rule() {
        const SIGS: &[(&str, &[RuleSpec])] = &[(
            "top-level-await",
            &[MatchesUnlessLineContains {
                pattern: r"await\s+",
                rejected: "function",
            }],
        )];
        let catalog = SignatureCatalog::from_specs(&[CategorySpecs {
            category: Category::Js,
            signatures: SIGS,
        }])
        .unwrap();
        let sig = catalog.get("top-level-await").unwrap();
        assert!(sig.matches("const data = await load();"));
        assert!(!sig.matches("await someFunction();"));
        assert!(sig.matches("await Function\nawait load();"));
        assert!(sig.matches("await x;\nfunction f() {}"));
    }

    fn guarded_catalog() -> SignatureCatalog {
        const SIGS: &[(&str, &[RuleSpec])] = &[(
            "top-level-await",
            &[MatchesUnlessLineContains {
                pattern: r"await\s+",
                rejected: "function",
            }],
        )];
        SignatureCatalog::from_specs(&[CategorySpecs {
            category: Category::Js,
            signatures: SIGS,
        }])
        .unwrap()
    }

    /// Reference rule: some end of the `await` whitespace run leaves no
    /// `function` on the rest of its line.
    fn guarded_reference(text: &str) -> bool {
        let lower = text.to_ascii_lowercase();
        let bytes = lower.as_bytes();
        let is_space = |b: u8| b == b' ' || b == b'\n';
        (0..bytes.len()).any(|start| {
            if !lower[start..].starts_with("await") {
                return false;
            }
            let run_start = start + "await".len();
            let mut run_end = run_start;
            while run_end < bytes.len() && is_space(bytes[run_end]) {
                run_end += 1;
            }
            (run_start + 1..=run_end).any(|end| {
                let rest = &lower[end..];
                let line = &rest[..rest.find('\n').unwrap_or(rest.len())];
                !line.contains("function")
            })
        })
    }

    #[test]
    fn test_line_guard_agrees_with_reference() {
        const TOKENS: [&str; 5] = ["await", " ", "\n", "function", "x"];
        let catalog = guarded_catalog();
        let sig = catalog.get("top-level-await").unwrap();

        let mut cases = vec![String::new()];
        let mut frontier = cases.clone();
        for _ in 0..5 {
            frontier = frontier
                .iter()
                .flat_map(|c| TOKENS.iter().map(move |t| format!("{c}{t}")))
                .collect();
            cases.extend(frontier.iter().cloned());
        }
        for text in &cases {
            assert_eq!(sig.matches(text), guarded_reference(text), "input {text:?}");
        }
    }

    #[test]
    fn test_line_guard_whitespace_may_stop_at_line_break() {
        let catalog = guarded_catalog();
        let sig = catalog.get("top-level-await").unwrap();
        assert!(sig.matches("await \nfunction() {}"));
        assert!(sig.matches("await\n \nfunction() {}"));
        assert!(!sig.matches("await\nfunction() {}"));
    }

    #[test]
    fn test_line_guard_long_line_is_linear() {
        let catalog = guarded_catalog();
        let sig = catalog.get("top-level-await").unwrap();
        let text = format!("{}function", "await ".repeat(100_000));

        let started = std::time::Instant::now();
        assert!(!sig.matches(&text));
        assert!(
            started.elapsed() < std::time::Duration::from_secs(5),
            "guarded scan took {:?}",
            started.elapsed()
        );
    }
}
