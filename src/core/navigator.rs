//! # Section Navigator
//!
//! Owns the registry and keeps exactly one (Section, NavControl) pair
//! active. Every change goes through [`SectionNavigator::activate`], which
//! either applies in full or not at all.
//!
//! ```text
//! activate("productos")
//!
//!   inicio     [ ]  nav-inicio     [ ]
//!   mascotas   [ ]  nav-mascotas   [ ]
//!   productos  [x]  nav-productos  [x]
//! ```
//!
//! No I/O happens here. Callers log the `NavError` and carry on.

use std::fmt;

use crate::core::registry::{NavControl, Section, ViewRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// No section with this id. State is left as it was.
    NotFound(String),
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::NotFound(id) => write!(f, "section '{id}' not found"),
            NavError::IndexOutOfRange { index, len } => {
                write!(f, "section index {index} out of range (have {len})")
            }
        }
    }
}

impl std::error::Error for NavError {}

#[derive(Debug, Clone)]
pub struct SectionNavigator {
    registry: ViewRegistry,
    active: usize,
}

impl SectionNavigator {
    /// Take ownership of `registry` with `default_id` as the visible section.
    pub fn new(registry: ViewRegistry, default_id: &str) -> Result<Self, NavError> {
        let active = registry
            .position(default_id)
            .ok_or_else(|| NavError::NotFound(default_id.to_string()))?;
        let mut navigator = Self { registry, active };
        navigator.registry.set_active(active);
        Ok(navigator)
    }

    /// Start on the first registry entry.
    pub fn with_first_active(mut registry: ViewRegistry) -> Self {
        registry.set_active(0);
        Self {
            registry,
            active: 0,
        }
    }

    /// Make `section_id` the only active section and highlight its control.
    pub fn activate(&mut self, section_id: &str) -> Result<(), NavError> {
        let index = self
            .registry
            .position(section_id)
            .ok_or_else(|| NavError::NotFound(section_id.to_string()))?;
        self.apply(index);
        Ok(())
    }

    pub fn activate_index(&mut self, index: usize) -> Result<(), NavError> {
        let len = self.registry.len();
        if index >= len {
            return Err(NavError::IndexOutOfRange { index, len });
        }
        self.apply(index);
        Ok(())
    }

    /// Move to the following section, wrapping after the last.
    pub fn next(&mut self) -> &str {
        let index = (self.active + 1) % self.registry.len();
        self.apply(index);
        self.active_id()
    }

    /// Move to the preceding section, wrapping before the first.
    pub fn previous(&mut self) -> &str {
        let len = self.registry.len();
        let index = (self.active + len - 1) % len;
        self.apply(index);
        self.active_id()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_id(&self) -> &str {
        self.active_section().id()
    }

    pub fn active_section(&self) -> &Section {
        // `active` is only ever set from a checked registry index
        self.registry.section_at(self.active)
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_id() == section_id
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Section, &NavControl)> {
        self.registry.entries()
    }

    fn apply(&mut self, index: usize) {
        self.registry.set_active(index);
        self.active = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_registry;

    fn active_ids(nav: &SectionNavigator) -> Vec<&str> {
        nav.entries()
            .filter(|(s, _)| s.is_active())
            .map(|(s, _)| s.id())
            .collect()
    }

    #[test]
    fn test_new_activates_default() {
        let nav = SectionNavigator::new(test_registry(), "mascotas").unwrap();
        assert_eq!(nav.active_id(), "mascotas");
        assert_eq!(active_ids(&nav), vec!["mascotas"]);
    }

    #[test]
    fn test_new_with_unknown_default_fails() {
        let err = SectionNavigator::new(test_registry(), "nope").unwrap_err();
        assert_eq!(err, NavError::NotFound("nope".to_string()));
    }

    #[test]
    fn test_with_first_active() {
        let nav = SectionNavigator::with_first_active(test_registry());
        assert_eq!(nav.active_id(), "inicio");
        assert_eq!(nav.active_index(), 0);
    }

    #[test]
    fn test_activate_moves_both_flags() {
        let mut nav = SectionNavigator::with_first_active(test_registry());
        nav.activate("productos").unwrap();
        for (section, control) in nav.entries() {
            assert_eq!(section.is_active(), section.id() == "productos");
            assert_eq!(control.is_active(), section.is_active());
        }
    }

    #[test]
    fn test_activate_unknown_leaves_state() {
        let mut nav = SectionNavigator::with_first_active(test_registry());
        nav.activate("productos").unwrap();
        let before = nav.registry().clone();

        let err = nav.activate("no-such-id").unwrap_err();

        assert_eq!(err, NavError::NotFound("no-such-id".to_string()));
        assert_eq!(nav.registry(), &before);
        assert_eq!(nav.active_id(), "productos");
    }

    #[test]
    fn test_activate_empty_id_is_not_found() {
        let mut nav = SectionNavigator::with_first_active(test_registry());
        assert_eq!(nav.activate(""), Err(NavError::NotFound(String::new())));
        assert_eq!(nav.active_id(), "inicio");
    }

    #[test]
    fn test_activate_index() {
        let mut nav = SectionNavigator::with_first_active(test_registry());
        nav.activate_index(2).unwrap();
        assert_eq!(nav.active_id(), "productos");
        assert_eq!(
            nav.activate_index(3),
            Err(NavError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(nav.active_id(), "productos");
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut nav = SectionNavigator::with_first_active(test_registry());
        assert_eq!(nav.previous(), "productos");
        assert_eq!(nav.next(), "inicio");
        assert_eq!(nav.next(), "mascotas");
        assert_eq!(active_ids(&nav), vec!["mascotas"]);
    }

    #[test]
    fn test_not_found_message() {
        let err = NavError::NotFound("x".to_string());
        assert_eq!(err.to_string(), "section 'x' not found");
    }
}
