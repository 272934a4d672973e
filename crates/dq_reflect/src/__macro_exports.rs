//! Items referenced by `#[derive(Reflect)]` output.
//!
//! User crates are not required to declare `extern crate alloc`, so the
//! derive reaches `alloc` items through here.

#[doc(hidden)]
pub mod alloc_utils {
    pub use alloc::boxed::Box;
}
