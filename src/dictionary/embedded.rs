//! Embedded word list
//!
//! Raw Spanish word list compiled into the binary at build time. Entries are
//! unfiltered; load them through [`load_embedded`](super::loader::load_embedded).

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
