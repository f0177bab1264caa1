use std::collections::HashMap;

use log::debug;

use crate::lookup::GetValueOrDefault;
use crate::record::CompressedSourceFile;

static EMPTY: CompressedSourceFile = CompressedSourceFile::empty();

/// Compressed source files keyed by file name.
#[derive(Clone, Debug, Default)]
pub struct SourceMap {
    data: HashMap<String, CompressedSourceFile>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&CompressedSourceFile> {
        self.data.get(key)
    }

    /// Like `get`, but a miss yields the empty record instead of `None`.
    pub fn get_or_empty(&self, key: &str) -> &CompressedSourceFile {
        self.data.get(key).unwrap_or_else(|| {
            debug!("No source file for key {:?}", key);
            &EMPTY
        })
    }

    pub fn get_value_or_default(&self, key: &str) -> CompressedSourceFile {
        self.data.get_value_or_default(key)
    }

    /// Insert `record` under `key`, returning whatever it replaced.
    pub fn set(
        &mut self,
        key: String,
        record: CompressedSourceFile,
    ) -> Option<CompressedSourceFile> {
        self.data.insert(key, record)
    }

    pub fn remove(&mut self, key: &str) -> Option<CompressedSourceFile> {
        self.data.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }
}

impl From<HashMap<String, CompressedSourceFile>> for SourceMap {
    fn from(data: HashMap<String, CompressedSourceFile>) -> Self {
        Self { data }
    }
}

impl FromIterator<(String, CompressedSourceFile)> for SourceMap {
    fn from_iter<I: IntoIterator<Item = (String, CompressedSourceFile)>>(iter: I) -> Self {
        iter.into_iter().fold(SourceMap::default(), |mut map, (key, record)| {
            map.set(key, record);
            map
        })
    }
}
