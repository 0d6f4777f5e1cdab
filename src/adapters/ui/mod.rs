pub mod banner;
pub mod render;
pub mod tui;

use crate::domain::DomainError;

/// Prints the welcome banner unless disabled. Call once at startup (after tracing init).
pub fn init_ui(show_banner: bool) -> Result<(), DomainError> {
    if show_banner {
        banner::print_welcome()?;
    }
    Ok(())
}
