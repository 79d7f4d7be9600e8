//! Key hints for each input context.

/// Which part of the UI currently receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// The artwork table.
    Table,
    /// The bulk-select dialog.
    BulkSelect,
    /// A page is being fetched.
    Loading,
    /// The last fetch failed.
    LoadError,
    /// The help overlay.
    Help,
}

/// Footer hints for a context. Keys are written in brackets.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Table => {
            "[j/k] move  [space] toggle  [a] page  [s] select N  [h/l] prev/next  [?] help  [q] quit"
        }
        KeyContext::BulkSelect => "[0-9] count  [Enter] select  [Esc] cancel",
        KeyContext::Loading => "[q] quit",
        KeyContext::LoadError => "[r] retry  [Esc] back  [q] quit",
        KeyContext::Help => "[Esc/?] close",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_context_has_hints() {
        for context in [
            KeyContext::Table,
            KeyContext::BulkSelect,
            KeyContext::Loading,
            KeyContext::LoadError,
            KeyContext::Help,
        ] {
            assert!(get_context_hints(context).contains('['));
        }
    }

    #[test]
    fn test_error_hints_mention_retry() {
        assert!(get_context_hints(KeyContext::LoadError).contains("retry"));
    }
}
