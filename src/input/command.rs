//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from the state changes they
//! cause.

/// Everything a key press can ask the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,
    /// Return to the previous path (Esc, Backspace)
    Back,
    /// Jump to the list (Home, g)
    GoHome,

    // =========================================================================
    // List
    // =========================================================================
    MoveUp,
    MoveDown,
    /// Open the highlighted movie (Enter)
    OpenSelected,
    /// Refetch the current view (r)
    Reload,
    /// Start typing a search (/)
    FocusSearch,

    // =========================================================================
    // Search box
    // =========================================================================
    /// Stop typing (Esc, Enter)
    LeaveSearch,
    InsertChar(char),
    DeleteChar,
    /// Empty the search box (Ctrl+U)
    ClearSearch,
}
