//! Chrome page driver for cupfinals.
//!
//! Implements [`cupfinals_protocols::PageDriver`] over the Chrome DevTools
//! Protocol (CDP) with a small pure-Rust client.
//!
//! ```text
//! ┌─────────────────┐    WebSocket     ┌──────────────────┐
//! │  ChromeDriver   │ ◄──────────────► │   Chrome/Chromium│
//! │  (this crate)   │       CDP        │  (one tab)       │
//! └─────────────────┘                  └──────────────────┘
//! ```
//!
//! If nothing listens on the debug port, Chrome is launched with
//! `--remote-debugging-port` and a dedicated profile, and is shut down again
//! by [`PageDriver::quit`](cupfinals_protocols::PageDriver::quit).

pub mod cdp;
mod driver;
pub mod manager;

pub use cdp::{CdpClient, CdpError, PageSession};
pub use driver::ChromeDriver;
pub use manager::{BrowserError, BrowserManager, BrowserManagerConfig};
