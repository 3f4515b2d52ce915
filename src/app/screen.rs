// SPDX-License-Identifier: MPL-2.0
//! Top-level screens reachable from the navbar.

/// Screens the operator can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Operations,
    Journal,
    Settings,
}

impl Screen {
    /// All screens in navbar order.
    pub const ALL: [Screen; 3] = [Screen::Operations, Screen::Journal, Screen::Settings];

    /// The i18n key for this screen's navbar label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Screen::Operations => "nav-operations",
            Screen::Journal => "nav-journal",
            Screen::Settings => "nav-settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_screen_is_operations() {
        assert_eq!(Screen::default(), Screen::Operations);
    }

    #[test]
    fn all_lists_every_screen_once() {
        assert_eq!(Screen::ALL.len(), 3);
        assert_eq!(Screen::ALL[0], Screen::Operations);
    }
}
