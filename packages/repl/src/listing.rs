//! `ls` output.
//!
//! Rows imitate a PowerShell `Get-ChildItem` table. Only the mode flag and
//! the name carry meaning; the write time and length are made up on every
//! call.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use folio_tree::{Directory, Node, Path};
use rand::Rng;

use crate::prompt::format_location;

/// The entry that gets the archive/readonly flag combination in listings.
pub const FEATURED_ENTRY: &str = "resume";

const MODE_WIDTH: usize = 21;
const WRITE_TIME_WIDTH: usize = 24;
const LENGTH_WIDTH: usize = 8;

const HEADER: &str = "Mode                 LastWriteTime         Length Name\n\
                      ----                 -------------         ------ ----\n";

/// Mode column for one listing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    Featured,
    Directory,
    File,
}

impl EntryMode {
    pub fn of(name: &str, node: &Node) -> Self {
        match node {
            Node::Directory(_) if name == FEATURED_ENTRY => EntryMode::Featured,
            Node::Directory(_) => EntryMode::Directory,
            Node::Leaf(_) => EntryMode::File,
        }
    }

    pub fn flags(self) -> &'static str {
        match self {
            EntryMode::Featured => "dar--l",
            EntryMode::Directory => "d----l",
            EntryMode::File => "-a---l",
        }
    }

    pub fn is_directory(self) -> bool {
        !matches!(self, EntryMode::File)
    }
}

/// Render the listing of `dir`, which lives at `path`.
pub fn format_listing(path: &Path, dir: &Directory, rng: &mut impl Rng) -> String {
    let mut output = format!("\n    Directory: {}\n\n", format_location(path));
    output.push_str(HEADER);

    for (name, node) in dir.iter() {
        let mode = EntryMode::of(name, node);
        let length = if mode.is_directory() {
            String::new()
        } else {
            rng.gen_range(500..2000).to_string()
        };
        let write_time = synthesize_write_time(rng);

        output.push_str(&format!(
            "{:<mode_w$}{:<time_w$}{:<len_w$}{}\n",
            mode.flags(),
            write_time,
            length,
            name,
            mode_w = MODE_WIDTH,
            time_w = WRITE_TIME_WIDTH,
            len_w = LENGTH_WIDTH,
        ));
    }

    output
}

/// A time a few minutes after 2:40 PM on 7/5/2025, e.g. `7/5/2025   2:43 PM`.
fn synthesize_write_time(rng: &mut impl Rng) -> String {
    let written = base_write_time() + Duration::minutes(rng.gen_range(0..5));
    written.format("%-m/%-d/%Y  %_I:%M %p").to_string()
}

fn base_write_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 5)
        .and_then(|date| date.and_hms_opt(14, 40, 0))
        .unwrap_or_default()
}
