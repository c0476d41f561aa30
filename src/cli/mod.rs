//! # CLI Module
//!
//! User-facing commands of cots. Each command fetches what it needs through
//! [`crate::spotify`], formats it for the terminal and reports progress and
//! problems with the console macros of the crate root.
//!
//! ## Commands
//!
//! - [`search`] - Search artists or albums, optionally loading more pages
//! - [`album`] - Show album metadata and its track listing
//! - [`cue`] - Export the CUE sheet of an album
//! - [`cover`] - Download the album cover
//! - [`open`] - Open an artist or album in the Spotify web player
//! - [`settings`] - Show or change the stored language
//!
//! ## Usage Patterns
//!
//! ```bash
//! cots search "kind of blue" --type albums
//! cots album 1weenld61qoidwYuZ1GESA
//! cots cue 1weenld61qoidwYuZ1GESA --output ~/Music --offset-ms 0
//! cots cover 1weenld61qoidwYuZ1GESA --size max
//! ```

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

mod album;
mod cover;
mod cue;
mod open;
mod search;
mod settings;

pub use album::album;
pub use cover::cover;
pub use cover::cover_filename;
pub use cue::CueOptions;
pub use cue::build_sheet;
pub use cue::cue;
pub use cue::selected_discs;
pub use open::open;
pub use search::search;
pub use settings::settings;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
