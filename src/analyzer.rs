//! Classification and grouping of translation findings.

pub mod aggregate;
pub mod rules;

pub use aggregate::aggregate;
pub use rules::{
    RuleOptions,
    check_unit,
    validate_unit,
};
