//! Shallow merge utilities for keyed mappings.
//!
//! [`extend`] and [`defaults`] walk an explicit list of source mappings
//! and copy entries into a target, differing only in which side wins when
//! a key is already present. Both mutate and return the target; neither
//! makes a copy.
//!
//! # Examples
//!
//! ```rust
//! use lowbar::collection::{defaults, extend};
//! use std::collections::HashMap;
//!
//! let mut config = HashMap::from([("theme", "dark")]);
//! extend(&mut config, &[HashMap::from([("theme", "light"), ("lang", "en")])]);
//! assert_eq!(config["theme"], "light");
//!
//! defaults(&mut config, &[HashMap::from([("theme", "solarized"), ("font", "mono")])]);
//! assert_eq!(config["theme"], "light");
//! assert_eq!(config["font"], "mono");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use super::container::Container;

/// The keyed-mapping half of the container polymorphism.
///
/// Adds keyed lookup and insertion on top of [`Container`] traversal.
/// Implemented for `HashMap` and `BTreeMap`.
pub trait KeyedMapping: Container {
    /// Returns the value stored under `key`, if any.
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Item>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&mut self, key: Self::Key, value: Self::Item);

    /// Returns whether `key` is present.
    fn has_key(&self, key: &Self::Key) -> bool {
        self.lookup(key).is_some()
    }
}

impl<K: Eq + Hash, V> KeyedMapping for HashMap<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> KeyedMapping for BTreeMap<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// Copies every entry of each source into `target`, left to right.
///
/// Later sources overwrite earlier ones and the target itself. Returns
/// the mutated target.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::extend;
/// use std::collections::HashMap;
///
/// let mut target = HashMap::from([("a", 1)]);
/// extend(
///     &mut target,
///     &[HashMap::from([("a", 2), ("b", 2)]), HashMap::from([("b", 3)])],
/// );
/// assert_eq!(target, HashMap::from([("a", 2), ("b", 3)]));
/// ```
pub fn extend<'t, M>(target: &'t mut M, sources: &[M]) -> &'t mut M
where
    M: KeyedMapping,
    M::Key: Clone,
    M::Item: Clone,
{
    for source in sources {
        source.each(|value, key| target.put(key.clone(), value.clone()));
    }
    target
}

/// Copies entries like [`extend`], but never overwrites a key already
/// present on `target`: the first-seen value for each key wins.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::defaults;
/// use std::collections::HashMap;
///
/// let mut target = HashMap::from([("a", 1)]);
/// defaults(
///     &mut target,
///     &[HashMap::from([("a", 2), ("b", 2)]), HashMap::from([("b", 3)])],
/// );
/// assert_eq!(target, HashMap::from([("a", 1), ("b", 2)]));
/// ```
pub fn defaults<'t, M>(target: &'t mut M, sources: &[M]) -> &'t mut M
where
    M: KeyedMapping,
    M::Key: Clone,
    M::Item: Clone,
{
    for source in sources {
        source.each(|value, key| {
            if !target.has_key(key) {
                target.put(key.clone(), value.clone());
            }
        });
    }
    target
}
