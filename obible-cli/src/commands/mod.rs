//! CLI command implementations

mod books;
mod read;
mod search;
mod shell;
mod translations;

pub use books::books;
pub use read::read;
pub use search::search;
pub use shell::shell;
pub use translations::translations;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown on stderr while a request is in flight
pub(crate) fn spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    Ok(pb)
}
