//! Provide the parsed form of a separator-joined field path.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

/// A field path split on a separator, e.g. `"Gamma.Ypsilon"` with `"."`.
///
/// Parsing never fails: segments are only validated while resolving, so an
/// empty or lower-case segment surfaces as
/// [`ResolveError::InvalidFieldName`](crate::access::ResolveError::InvalidFieldName)
/// at the position where it is reached.
///
/// An empty separator does not split, the whole text is one segment.
///
/// # Examples
///
/// ```
/// use dq_reflect::access::FieldPath;
///
/// let path = FieldPath::parse("Zeta.zeta.1", ".");
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.segment(1), Some("zeta"));
/// assert_eq!(path.prefix(1), "Zeta.zeta");
/// assert_eq!(path.rest(1), "zeta.1");
///
/// let whole = FieldPath::parse("Gamma.Ypsilon", "");
/// assert_eq!(whole.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath<'a> {
    text: &'a str,
    segments: Vec<Range<usize>>,
}

impl<'a> FieldPath<'a> {
    /// Splits `text` on every occurrence of `separator`.
    pub fn parse(text: &'a str, separator: &str) -> Self {
        let mut segments = Vec::new();
        let mut start = 0;
        if !separator.is_empty() {
            for (offset, _) in text.match_indices(separator) {
                segments.push(start..offset);
                start = offset + separator.len();
            }
        }
        segments.push(start..text.len());

        Self { text, segments }
    }

    /// Returns the unsplit path text.
    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    /// Returns the number of segments, at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns the segment at `index`.
    #[inline]
    pub fn segment(&self, index: usize) -> Option<&'a str> {
        let range = self.segments.get(index)?;
        Some(&self.text[range.clone()])
    }

    /// Returns an iterator over all segments.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &'a str> + '_ {
        self.segments.iter().map(|range| &self.text[range.clone()])
    }

    /// Returns the text up to and including the segment at `index`.
    ///
    /// Saturates to the whole text when `index` is out of range.
    #[inline]
    pub fn prefix(&self, index: usize) -> &'a str {
        match self.segments.get(index) {
            Some(range) => &self.text[..range.end],
            None => self.text,
        }
    }

    /// Returns the text from the segment at `index` to the end, separators
    /// included.
    ///
    /// This is the flat key used once a path reaches a map.
    #[inline]
    pub fn rest(&self, index: usize) -> &'a str {
        match self.segments.get(index) {
            Some(range) => &self.text[range.start..],
            None => "",
        }
    }
}

impl fmt::Display for FieldPath<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.text)
    }
}
