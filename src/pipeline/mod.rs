//! Entry points behind each CLI command.

pub mod categories;
pub mod song_list;
pub mod synthetic;
pub mod youtube;
