//! Type definitions for the application state.
//!
//! - [`Screen`] - Which view a route resolves to
//! - [`Focus`] - Whether keys go to the list or the search box

/// Route targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Detail,
    NotFound,
}

/// Represents which UI component receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Search,
}
