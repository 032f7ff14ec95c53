//! Pizza Tower mod manager.
//!
//! Keeps a vanilla copy of the game's `data.win`, builds full patched copies
//! from xdelta files with `xdelta3`, and swaps them into the game folder.
//!
//! Settings live in `ptmm.json`. An INI `ptmm.cfg` left by earlier releases is
//! not read, so the first run after upgrading goes through setup again.

pub mod commands;
pub mod config;
pub mod locate;
pub mod patch;
pub mod session;
pub mod utils;
pub mod workspace;

#[cfg(test)]
mod testing;
