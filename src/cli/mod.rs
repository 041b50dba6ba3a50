//! The interactive shell: menu loop, prompts, and terminal formatting.
//!
//! Everything here is generic over `BufRead`/`Write`, so the full menu flow
//! runs in tests against in-memory buffers. Only `main.rs` binds it to the
//! real stdin/stdout.

pub mod menu;
pub mod print;
