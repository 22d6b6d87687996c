//! Configuration for colls.
//!
//! Settings are read from an optional `colls.toml` (see [Config::default_path]).
//! - [general]: default listing flags, the same ones `-l`, `-a` and `-r` switch on.
//! - [display]: output details such as the long-mode directory marker and the fallback width.
//! - [load]: locating, parsing and generating the config file.
//!
//! A missing or broken file never stops a listing; internal defaults are used instead.

pub mod display;
pub mod general;
pub mod load;

pub use display::Display;
pub use general::General;
pub use load::Config;
