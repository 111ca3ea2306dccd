//! Error types.
//!
//! | Type | Raised by | Handling |
//! |------|-----------|----------|
//! | [`FetchError`] | fetch pipeline | written into the view's `error` field |
//! | [`ValidationError`] | route parameter conversion | written into the view's `error` field |
//! | [`RouteError`] | route table | `NoMatch` at navigation, the rest at startup |
//! | [`FlicksError`] | anything crossing the app boundary | reported to the user |

mod fetch;
mod flicks_error;
mod route;

pub use fetch::{FetchError, FetchErrorKind};
pub use flicks_error::{FlicksError, FlicksResult, ViewError};
pub use route::{RouteError, ValidationError};
