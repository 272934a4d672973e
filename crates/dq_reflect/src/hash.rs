//! Hash containers with a fixed `foldhash` seed.
//!
//! Field-name lookups in [`RecordInfo`](crate::info::RecordInfo) and flattened
//! projections use these instead of `std`'s randomly seeded maps.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

/// A fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x6A09_E667_F3BC_C908);

/// Hasher produced by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// `foldhash` state with a fixed seed, so hashing only depends on the input.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use dq_reflect::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one("Alfa"), FixedHashState.hash_one("Alfa"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

/// A [`hashbrown::HashMap`] using [`FixedHashState`].
///
/// # Examples
///
/// ```
/// use dq_reflect::hash::HashMap;
///
/// let mut map: HashMap<&str, i32> = HashMap::default();
/// map.insert("Alfa", 1);
/// assert_eq!(map.get("Alfa"), Some(&1));
/// ```
pub type HashMap<K, V> = hashbrown::HashMap<K, V, FixedHashState>;

pub use foldhash;
pub use hashbrown;
