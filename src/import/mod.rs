pub mod roster;

pub use roster::{RosterFormat, load_roster_file, parse_roster};
