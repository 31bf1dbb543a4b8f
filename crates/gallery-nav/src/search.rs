//! Header search state

/// Live search input plus the applied query.
///
/// The applied query only changes on a successful submit or a clear; typing
/// alone never filters the gallery.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    input: String,
    applied: Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of the search field
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The query in effect, if any
    pub fn applied(&self) -> Option<&str> {
        self.applied.as_deref()
    }

    pub fn set_input(&mut self, text: String) {
        self.input = text;
    }

    /// Submit the current input.
    ///
    /// Whitespace is trimmed; a submission whose trimmed value is empty is a
    /// no-op and leaves any previously applied query in effect. Returns the
    /// newly applied query.
    pub fn submit(&mut self) -> Option<String> {
        let query = self.input.trim();
        if query.is_empty() {
            return None;
        }

        self.applied = Some(query.to_string());
        self.applied.clone()
    }

    /// Drop both the input text and the applied query
    pub fn clear(&mut self) {
        self.input.clear();
        self.applied = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_trims_whitespace() {
        let mut search = SearchState::new();
        search.set_input("  sunset  ".into());
        assert_eq!(search.submit().as_deref(), Some("sunset"));
        assert_eq!(search.applied(), Some("sunset"));
    }

    #[test]
    fn whitespace_only_submit_is_a_noop() {
        let mut search = SearchState::new();
        search.set_input("   ".into());
        assert!(search.submit().is_none());
        assert!(search.applied().is_none());
    }

    #[test]
    fn noop_submit_keeps_previous_query() {
        let mut search = SearchState::new();
        search.set_input("beach".into());
        search.submit();

        search.set_input("   ".into());
        assert!(search.submit().is_none());
        assert_eq!(search.applied(), Some("beach"));
    }

    #[test]
    fn typing_does_not_apply() {
        let mut search = SearchState::new();
        search.set_input("dra".into());
        assert!(search.applied().is_none());
    }

    #[test]
    fn clear_drops_everything() {
        let mut search = SearchState::new();
        search.set_input("cat".into());
        search.submit();
        search.clear();
        assert!(search.input().is_empty());
        assert!(search.applied().is_none());
    }
}
