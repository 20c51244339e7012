use std::collections::HashMap;

/// A stable handle to an interned string.
///
/// Two ids compare equal exactly when the texts they were interned from are
/// equal, so string equality in the language is a plain id comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrId(usize);

/// The append-only string intern table.
///
/// Every string value in a running program is a [`StrId`] into this table.
/// Interning the same text twice returns the same id; ids are never
/// invalidated or reused for the lifetime of the table.
///
/// # Example
/// ```
/// use quill::interpreter::value::strings::StrTable;
///
/// let mut table = StrTable::new();
/// let a = table.intern("hello");
/// let b = table.intern("hello");
/// let c = table.intern("world");
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert_eq!(table.resolve(a), "hello");
/// ```
#[derive(Debug, Default)]
pub struct StrTable {
    items: Vec<String>,
    index: HashMap<String, StrId>,
}

impl StrTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `text`, returning the existing id if the exact text has been
    /// seen before, and appending it under the next id otherwise.
    pub fn intern(&mut self, text: &str) -> StrId {
        if let Some(id) = self.index.get(text) {
            return *id;
        }

        let id = StrId(self.items.len());
        self.items.push(text.to_string());
        self.index.insert(text.to_string(), id);
        id
    }

    /// Returns the text behind `id`.
    ///
    /// Lookup is a direct index and O(1). The id must come from this table;
    /// ids are handed out densely from zero, so any id this table produced is
    /// in range.
    #[must_use]
    pub fn resolve(&self, id: StrId) -> &str {
        &self.items[id.0]
    }
}
