//! Built-in signature tables.
//!
//! Each category module declares `(identifier, rules)` pairs in registration
//! order. Patterns are compiled case-insensitively by the catalog.

mod css;
mod form;
mod html;
mod js;

use crate::catalog::CategorySpecs;
use crate::types::Category;

/// Built-in tables in scan order.
pub const BUILTIN: &[CategorySpecs] = &[
    CategorySpecs {
        category: Category::Css,
        signatures: css::SIGNATURES,
    },
    CategorySpecs {
        category: Category::Html,
        signatures: html::SIGNATURES,
    },
    CategorySpecs {
        category: Category::Js,
        signatures: js::SIGNATURES,
    },
    CategorySpecs {
        category: Category::Form,
        signatures: form::SIGNATURES,
    },
];
