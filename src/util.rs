/// Numeric conversion helpers.
///
/// This module provides safe functions for converting the language's single
/// numeric type (`f64`) into the integer and character forms the runtime
/// needs, without risking silent truncation. Indexing, code-point conversion,
/// and `range` bounds all funnel through these checks.
pub mod num;
