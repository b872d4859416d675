//! vetnav library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::navigator::{NavError, SectionNavigator};
pub use crate::core::registry::{NavControl, RegistryError, Section, ViewRegistry};
