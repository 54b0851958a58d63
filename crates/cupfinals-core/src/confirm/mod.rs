//! Human confirmation of each extracted record through a local HTML page.
//!
//! The page reports the chosen action by setting `document.title` to
//! `CHOICE_<action>`; the bridge polls the title until that sentinel shows up
//! or the wait runs out.

mod bridge;
mod error;
mod page;

pub use bridge::{ConfirmationBridge, TEMP_FILE_PREFIX, TEMP_FILE_SUFFIX};
pub use error::ConfirmError;
pub use page::{CHOICE_PREFIX, escape_html, parse_sentinel, render_page};
