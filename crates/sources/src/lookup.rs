use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::record::CompressedSourceFile;

/// Lookup that never fails: a missing key yields `V::default()`.
///
/// A key stored with the default value can't be told apart from a missing
/// one. Use the map's own `get` when that matters.
pub trait GetValueOrDefault<V> {
    fn get_value_or_default(&self, key: &str) -> V;
}

impl<V, S> GetValueOrDefault<V> for HashMap<String, V, S>
where
    V: Default + Clone,
    S: BuildHasher,
{
    fn get_value_or_default(&self, key: &str) -> V {
        self.get(key).cloned().unwrap_or_default()
    }
}

impl<V> GetValueOrDefault<V> for BTreeMap<String, V>
where
    V: Default + Clone,
{
    fn get_value_or_default(&self, key: &str) -> V {
        self.get(key).cloned().unwrap_or_default()
    }
}

pub fn get_value_or_default(
    map: &HashMap<String, CompressedSourceFile>,
    key: &str,
) -> CompressedSourceFile {
    map.get_value_or_default(key)
}
