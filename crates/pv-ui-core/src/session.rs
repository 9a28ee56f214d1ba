//! UI session state.
//!
//! One instance lives for the lifetime of the page. Reducer methods return a
//! [`SessionChange`] describing the display consequences (what the shell must
//! clear), so the DOM layer never has to re-derive them.

use pv_api_types::Operation;

/// The currently selected mode of operation. Being an enum, exactly one tab
/// is active at any time by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Embed,
    Decrypt,
}

impl From<Operation> for Tab {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Embed => Tab::Embed,
            Operation::Decrypt => Tab::Decrypt,
        }
    }
}

/// Display consequences of a session event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionChange {
    /// The card's preview background (and its object URL) must be dropped.
    pub clear_preview: bool,
    /// The decrypted-message display must be emptied and hidden.
    pub clear_decrypted_message: bool,
}

/// Tab, preview, and decrypted-message state for the page.
#[derive(Debug, Clone)]
pub struct UiSession {
    active_tab: Tab,
    decrypted_message: Option<String>,
    preview_owner: Option<Tab>,
}

impl UiSession {
    /// Fresh session: embed tab active, nothing previewed or decrypted.
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Embed,
            decrypted_message: None,
            preview_owner: None,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn decrypted_message(&self) -> Option<&str> {
        self.decrypted_message.as_deref()
    }

    pub fn has_preview(&self) -> bool {
        self.preview_owner.is_some()
    }

    /// A tab button was clicked. Any preview belonging to the prior context
    /// is dropped and the decrypted message is always invalidated.
    pub fn activate_tab(&mut self, tab: Tab) -> SessionChange {
        self.active_tab = tab;
        self.decrypted_message = None;
        let had_preview = self.preview_owner.take().is_some();
        SessionChange {
            clear_preview: had_preview,
            clear_decrypted_message: true,
        }
    }

    /// A new image was selected on `tab`. A fresh image invalidates any prior
    /// decrypted result; a superseded preview must be released before the
    /// replacement is installed.
    pub fn image_selected(&mut self, tab: Tab) -> SessionChange {
        let superseded = self.preview_owner.replace(tab).is_some();
        self.decrypted_message = None;
        SessionChange {
            clear_preview: superseded,
            clear_decrypted_message: true,
        }
    }

    /// A decrypt succeeded with `message`.
    pub fn decrypt_succeeded(&mut self, message: &str) {
        self.decrypted_message = Some(message.to_owned());
    }

    /// A decrypt failed (server-reported or transport). A failed attempt must
    /// never leave a stale message displayed.
    pub fn decrypt_failed(&mut self) -> SessionChange {
        self.decrypted_message = None;
        SessionChange {
            clear_preview: false,
            clear_decrypted_message: true,
        }
    }
}

impl Default for UiSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_switch_clears_message_and_preview() {
        let mut s = UiSession::new();
        s.image_selected(Tab::Decrypt);
        s.decrypt_succeeded("hello world");

        let change = s.activate_tab(Tab::Embed);
        assert!(change.clear_decrypted_message);
        assert!(change.clear_preview);
        assert_eq!(s.decrypted_message(), None);
        assert!(!s.has_preview());
        assert_eq!(s.active_tab(), Tab::Embed);
    }

    #[test]
    fn tab_switch_without_preview_only_clears_message() {
        let mut s = UiSession::new();
        let change = s.activate_tab(Tab::Decrypt);
        assert!(change.clear_decrypted_message);
        assert!(!change.clear_preview);
    }

    #[test]
    fn new_image_invalidates_prior_decrypted_result() {
        let mut s = UiSession::new();
        s.decrypt_succeeded("stale");
        let change = s.image_selected(Tab::Decrypt);
        assert!(change.clear_decrypted_message);
        assert_eq!(s.decrypted_message(), None);
    }

    #[test]
    fn second_selection_supersedes_the_first_preview() {
        let mut s = UiSession::new();
        let first = s.image_selected(Tab::Embed);
        assert!(!first.clear_preview);
        let second = s.image_selected(Tab::Embed);
        assert!(second.clear_preview);
    }

    #[test]
    fn failed_decrypt_clears_the_message() {
        let mut s = UiSession::new();
        s.decrypt_succeeded("hello");
        let change = s.decrypt_failed();
        assert!(change.clear_decrypted_message);
        assert_eq!(s.decrypted_message(), None);
    }
}
