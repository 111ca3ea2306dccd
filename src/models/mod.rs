mod movie;
mod text_utils;

pub use movie::{DetailItem, Item};
pub use text_utils::{fit_width, truncate_summary, ELLIPSIS};
