//! Panic hook that gives the terminal back before the message prints.

use super::setup::emergency_restore;
use std::panic;

/// Chain terminal restoration in front of the current panic hook. Install
/// after `color_eyre::install()` so its report is what gets printed.
pub fn setup_panic_hook() {
    let previous = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_installs() {
        setup_panic_hook();
        let _ = panic::take_hook();
    }
}
