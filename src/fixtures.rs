//! Scenario fixtures
//!
//! Shared CSS selectors and page addresses are immutable values handed to
//! each scenario, parsed once from a TOML file. Every field has a default,
//! so an empty fixture file is valid.

mod types;

pub use types::{Fixtures, PageFixtures, SelectorFixtures};
