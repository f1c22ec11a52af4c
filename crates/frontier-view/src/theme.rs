//! Display themes.  The *choice* lives in the browser's local storage under
//! a fixed key; this module only owns the vocabulary the page offers.

/// Local-storage key the page reads at startup and writes on every change.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Void,
    Dawn,
    Mono,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Void => "void",
            Theme::Dawn => "dawn",
            Theme::Mono => "mono",
        }
    }

    pub const ALL: [Theme; 3] = [Theme::Void, Theme::Dawn, Theme::Mono];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_void() {
        assert_eq!(Theme::default().as_str(), "void");
    }
}
