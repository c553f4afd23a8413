//! Magic Set Editor set-file output

pub mod archive;
pub mod writer;

pub use archive::{SET_ENTRY_NAME, write_set_archive};
pub use writer::{render_set, timestamp_now, write_card, write_postamble, write_preamble};
