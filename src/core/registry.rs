//! # View Registry
//!
//! The fixed mapping between navigation controls and the sections they
//! show. Built once at startup from config and never grows or shrinks.
//!
//! ```text
//! ViewRegistry
//! ├── (Section "inicio",    NavControl "nav-inicio")
//! ├── (Section "mascotas",  NavControl "nav-mascotas")
//! └── (Section "productos", NavControl "nav-productos")
//! ```
//!
//! Only the `is_active` flags change after construction, and only through
//! `SectionNavigator`. Everything else is read-only from the outside.

use std::collections::HashSet;
use std::fmt;

/// A unit of content that can be shown or hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: String,
    pub title: String,
    pub body: String,
    /// Development branch this section's feature lands on (None = done).
    pub branch: Option<String>,
    is_active: bool,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            branch: None,
            is_active: false,
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// A control that selects a section when pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavControl {
    id: String,
    section_id: String,
    pub label: String,
    is_active: bool,
}

impl NavControl {
    pub fn new(
        id: impl Into<String>,
        section_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            section_id: section_id.into(),
            label: label.into(),
            is_active: false,
        }
    }

    /// Control for `section` with the conventional `nav-<id>` identifier.
    pub fn for_section(section: &Section, label: impl Into<String>) -> Self {
        Self::new(format!("nav-{}", section.id()), section.id(), label)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn section_id(&self) -> &str {
        &self.section_id
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Reasons a registry can't be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    Empty,
    EmptyId,
    DuplicateSection(String),
    DuplicateControl(String),
    /// A control was paired with a section it doesn't activate.
    MismatchedControl { control: String, section: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Empty => write!(f, "registry has no sections"),
            RegistryError::EmptyId => write!(f, "section and control ids must be non-empty"),
            RegistryError::DuplicateSection(id) => write!(f, "duplicate section id '{id}'"),
            RegistryError::DuplicateControl(id) => write!(f, "duplicate control id '{id}'"),
            RegistryError::MismatchedControl { control, section } => {
                write!(f, "control '{control}' does not activate section '{section}'")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Ordered (Section, NavControl) pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRegistry {
    entries: Vec<(Section, NavControl)>,
}

impl ViewRegistry {
    pub fn new(entries: Vec<(Section, NavControl)>) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut section_ids = HashSet::new();
        let mut control_ids = HashSet::new();
        for (section, control) in &entries {
            if section.id.is_empty() || control.id.is_empty() {
                return Err(RegistryError::EmptyId);
            }
            if control.section_id != section.id {
                return Err(RegistryError::MismatchedControl {
                    control: control.id.clone(),
                    section: section.id.clone(),
                });
            }
            if !section_ids.insert(section.id.as_str()) {
                return Err(RegistryError::DuplicateSection(section.id.clone()));
            }
            if !control_ids.insert(control.id.as_str()) {
                return Err(RegistryError::DuplicateControl(control.id.clone()));
            }
        }

        // Flags belong to the navigator; whatever the caller set is discarded.
        let entries = entries
            .into_iter()
            .map(|(mut section, mut control)| {
                section.is_active = false;
                control.is_active = false;
                (section, control)
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Section, &NavControl)> {
        self.entries.iter().map(|(s, c)| (s, c))
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.entries.iter().map(|(s, _)| s)
    }

    pub fn controls(&self) -> impl Iterator<Item = &NavControl> {
        self.entries.iter().map(|(_, c)| c)
    }

    pub fn get(&self, index: usize) -> Option<(&Section, &NavControl)> {
        self.entries.get(index).map(|(s, c)| (s, c))
    }

    pub fn position(&self, section_id: &str) -> Option<usize> {
        self.entries.iter().position(|(s, _)| s.id == section_id)
    }

    pub fn contains(&self, section_id: &str) -> bool {
        self.position(section_id).is_some()
    }

    pub(crate) fn section_at(&self, index: usize) -> &Section {
        &self.entries[index].0
    }

    /// Set every flag so that only the entry at `index` is active.
    ///
    /// Callers must have checked `index` already; this never partially applies.
    pub(crate) fn set_active(&mut self, index: usize) {
        debug_assert!(index < self.entries.len());
        for (i, (section, control)) in self.entries.iter_mut().enumerate() {
            section.is_active = i == index;
            control.is_active = section.is_active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(id: &str) -> (Section, NavControl) {
        let section = Section::new(id, id.to_uppercase(), "");
        let control = NavControl::for_section(&section, id);
        (section, control)
    }

    #[test]
    fn test_for_section_uses_nav_prefix() {
        let (section, control) = pair("mascotas");
        assert_eq!(control.id(), "nav-mascotas");
        assert_eq!(control.section_id(), section.id());
    }

    #[test]
    fn test_new_rejects_empty_registry() {
        assert_eq!(ViewRegistry::new(vec![]), Err(RegistryError::Empty));
    }

    #[test]
    fn test_new_rejects_duplicate_sections() {
        let err = ViewRegistry::new(vec![pair("inicio"), pair("inicio")]).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateSection("inicio".to_string()));
    }

    #[test]
    fn test_new_rejects_duplicate_controls() {
        let a = Section::new("a", "A", "");
        let b = Section::new("b", "B", "");
        let err = ViewRegistry::new(vec![
            (a, NavControl::new("btn", "a", "A")),
            (b, NavControl::new("btn", "b", "B")),
        ])
        .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateControl("btn".to_string()));
    }

    #[test]
    fn test_new_rejects_empty_ids() {
        let section = Section::new("", "Blank", "");
        let control = NavControl::new("nav-blank", "", "Blank");
        assert_eq!(
            ViewRegistry::new(vec![(section, control)]),
            Err(RegistryError::EmptyId)
        );
    }

    #[test]
    fn test_new_rejects_mismatched_control() {
        let section = Section::new("inicio", "Inicio", "");
        let control = NavControl::new("nav-inicio", "productos", "Inicio");
        let err = ViewRegistry::new(vec![(section, control)]).unwrap_err();
        assert!(matches!(err, RegistryError::MismatchedControl { .. }));
        assert!(err.to_string().contains("nav-inicio"));
    }

    #[test]
    fn test_new_starts_with_everything_inactive() {
        let registry = ViewRegistry::new(vec![pair("a"), pair("b")]).unwrap();
        assert!(registry.entries().all(|(s, c)| !s.is_active() && !c.is_active()));
    }

    #[test]
    fn test_set_active_flags_one_pair() {
        let mut registry = ViewRegistry::new(vec![pair("a"), pair("b"), pair("c")]).unwrap();
        registry.set_active(1);
        let flags: Vec<(bool, bool)> = registry
            .entries()
            .map(|(s, c)| (s.is_active(), c.is_active()))
            .collect();
        assert_eq!(flags, vec![(false, false), (true, true), (false, false)]);
    }

    #[test]
    fn test_position_lookup() {
        let registry = ViewRegistry::new(vec![pair("a"), pair("b")]).unwrap();
        assert_eq!(registry.position("b"), Some(1));
        assert_eq!(registry.position("z"), None);
        assert!(registry.contains("a"));
    }
}
