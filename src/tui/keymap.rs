//! # Keymap
//!
//! Shortcut keys → section ids. The table comes from config; the navigator
//! never sees keys, only the ids this lookup produces.

pub struct Keymap {
    bindings: Vec<(char, String)>,
}

impl Keymap {
    pub fn new(bindings: Vec<(char, String)>) -> Self {
        Self { bindings }
    }

    /// Section id bound to `key`. First binding wins on duplicates.
    pub fn target(&self, key: char) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, id)| id.as_str())
    }

    /// Key bound to `section_id`, for labelling nav buttons.
    pub fn key_for(&self, section_id: &str) -> Option<char> {
        self.bindings
            .iter()
            .find(|(_, id)| id == section_id)
            .map(|(k, _)| *k)
    }

    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.bindings.iter().map(|(k, _)| *k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keymap() -> Keymap {
        Keymap::new(vec![
            ('1', "inicio".to_string()),
            ('2', "mascotas".to_string()),
            ('3', "productos".to_string()),
            ('2', "duplicado".to_string()),
        ])
    }

    #[test]
    fn test_target() {
        let km = keymap();
        assert_eq!(km.target('1'), Some("inicio"));
        assert_eq!(km.target('2'), Some("mascotas"));
        assert_eq!(km.target('9'), None);
    }

    #[test]
    fn test_key_for() {
        let km = keymap();
        assert_eq!(km.key_for("productos"), Some('3'));
        assert_eq!(km.key_for("contacto"), None);
        assert_eq!(km.keys().collect::<String>(), "1232");
    }
}
