//! Path routing.
//!
//! A [`RouteTable`] maps path patterns (`/`, `/movie/:id`) to views. Paths are
//! normalized before matching, so `/movie/42`, `/movie/42/` and
//! `/movie/42?ref=x` resolve identically. Parameter values are percent-decoded
//! strings; views convert them with [`RouteMatch::parse_param`].

mod navigator;
mod pattern;
mod table;

pub use navigator::Navigator;
pub use pattern::{normalize_path, RoutePattern};
pub use table::{parse_param_value, RouteMatch, RouteTable};
