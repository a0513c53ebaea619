//! Fixed-size page windows over ordered result sets.
//!
//! Listing endpoints expose their results as 1-indexed pages of
//! [`PAGE_SIZE`] items. This crate owns the arithmetic so every endpoint
//! slices identically:
//!
//! - [`PageNumber`] is a validated, strictly positive page index parsed from
//!   request input.
//! - [`PageWindow`] is the half-open `start..end` range a page covers before
//!   clipping to the result length.
//! - [`paginate`] returns the borrowed sub-slice for a page. Pages beyond the
//!   end yield an empty slice rather than an error; callers decide whether an
//!   empty page is a failure.
//!
//! # Examples
//!
//! ```
//! use pagination::{paginate, PageNumber};
//!
//! let items: Vec<u32> = (1..=25).collect();
//! let third: PageNumber = "3".parse().expect("valid page");
//! assert_eq!(paginate(&items, third), &[21, 22, 23, 24, 25]);
//! ```

use std::num::NonZeroU32;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of items carried by a single page.
pub const PAGE_SIZE: usize = 10;

/// Errors raised when a page number cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageNumberError {
    /// The raw value is not an integer.
    #[error("page must be an integer, got `{value}`")]
    NotNumeric {
        /// Raw input as received.
        value: String,
    },
    /// The value parsed but is zero or negative.
    #[error("page must be at least 1, got {value}")]
    NotPositive {
        /// Parsed value.
        value: i64,
    },
    /// The value exceeds the supported page range.
    #[error("page {value} is out of range")]
    OutOfRange {
        /// Parsed value.
        value: i64,
    },
}

/// One-based page index.
///
/// ## Invariants
/// - The wrapped value is always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page, used when a request carries no page parameter.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Validate a signed page number.
    ///
    /// # Errors
    /// Returns [`PageNumberError::NotPositive`] for zero or negative input and
    /// [`PageNumberError::OutOfRange`] when the value does not fit in `u32`.
    pub fn new(value: i64) -> Result<Self, PageNumberError> {
        if value < 1 {
            return Err(PageNumberError::NotPositive { value });
        }
        let narrowed = u32::try_from(value).map_err(|_| PageNumberError::OutOfRange { value })?;
        NonZeroU32::new(narrowed)
            .map(Self)
            .ok_or(PageNumberError::NotPositive { value })
    }

    /// Return the raw page index.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Window covered by this page at the default [`PAGE_SIZE`].
    #[must_use]
    pub fn window(self) -> PageWindow {
        PageWindow::new(self, PAGE_SIZE)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for PageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageNumber {
    type Err = PageNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| PageNumberError::NotNumeric {
                value: s.to_owned(),
            })?;
        Self::new(value)
    }
}

impl TryFrom<i64> for PageNumber {
    type Error = PageNumberError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageNumber> for u32 {
    fn from(value: PageNumber) -> Self {
        value.get()
    }
}

/// Half-open range of item offsets covered by a page.
///
/// `start = (page - 1) * size` and `end = start + size`, saturating instead of
/// overflowing for absurdly large pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    start: usize,
    end: usize,
}

impl PageWindow {
    /// Compute the window for `page` with `size` items per page.
    #[must_use]
    pub fn new(page: PageNumber, size: usize) -> Self {
        let preceding = usize::try_from(page.get() - 1).unwrap_or(usize::MAX);
        let start = preceding.saturating_mul(size);
        Self {
            start,
            end: start.saturating_add(size),
        }
    }

    /// First offset of the window.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// One past the last offset of the window.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Clip the window to a sequence of `len` items.
    #[must_use]
    pub fn clamp(&self, len: usize) -> Range<usize> {
        self.start.min(len)..self.end.min(len)
    }

    /// Borrow the items this window covers.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        items.get(self.clamp(items.len())).unwrap_or_default()
    }
}

/// Borrow the `page`-th block of [`PAGE_SIZE`] items.
///
/// Out-of-range pages produce an empty slice.
#[must_use]
pub fn paginate<T>(items: &[T], page: PageNumber) -> &[T] {
    page.window().slice(items)
}

#[cfg(test)]
mod tests {
    //! Unit coverage for page parsing and slicing.

    use super::*;
    use rstest::rstest;

    fn numbered(len: usize) -> Vec<usize> {
        (0..len).collect()
    }

    fn page(value: i64) -> PageNumber {
        PageNumber::new(value).expect("valid page")
    }

    #[rstest]
    #[case(0, 1)]
    #[case(5, 1)]
    #[case(10, 1)]
    #[case(10, 2)]
    #[case(19, 2)]
    #[case(25, 3)]
    #[case(25, 4)]
    #[case(3, 99)]
    fn page_length_matches_window_arithmetic(#[case] len: usize, #[case] number: i64) {
        let items = numbered(len);
        let skipped = usize::try_from(number - 1).expect("non-negative") * PAGE_SIZE;
        let expected = PAGE_SIZE.min(len.saturating_sub(skipped));

        assert_eq!(paginate(&items, page(number)).len(), expected);
    }

    #[rstest]
    fn second_page_starts_after_first_ten() {
        let items = numbered(15);
        assert_eq!(paginate(&items, page(2)), &[10, 11, 12, 13, 14]);
    }

    #[rstest]
    fn pages_past_the_end_are_empty() {
        let items = numbered(30);
        assert!(paginate(&items, page(4)).is_empty());
        assert!(paginate(&items, page(1_000)).is_empty());
    }

    #[rstest]
    fn slicing_is_repeatable() {
        let items = numbered(23);
        let first = paginate(&items, page(3)).to_vec();
        let second = paginate(&items, page(3)).to_vec();
        assert_eq!(first, second);
    }

    #[rstest]
    fn huge_pages_saturate_instead_of_overflowing() {
        let window = page(i64::from(u32::MAX)).window();
        assert!(window.start() <= window.end());
        assert!(window.slice(&numbered(5)).is_empty());
    }

    #[rstest]
    #[case("1", 1)]
    #[case(" 7 ", 7)]
    fn parses_positive_integers(#[case] raw: &str, #[case] expected: u32) {
        let parsed: PageNumber = raw.parse().expect("page parses");
        assert_eq!(parsed.get(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("1.5")]
    fn rejects_non_numeric_input(#[case] raw: &str) {
        let err = raw.parse::<PageNumber>().expect_err("should fail");
        assert!(matches!(err, PageNumberError::NotNumeric { .. }));
    }

    #[rstest]
    #[case("0", 0)]
    #[case("-2", -2)]
    fn rejects_non_positive_input(#[case] raw: &str, #[case] value: i64) {
        let err = raw.parse::<PageNumber>().expect_err("should fail");
        assert_eq!(err, PageNumberError::NotPositive { value });
    }

    #[rstest]
    fn rejects_values_beyond_u32() {
        let value = i64::from(u32::MAX) + 1;
        assert_eq!(
            PageNumber::new(value),
            Err(PageNumberError::OutOfRange { value })
        );
    }

    #[rstest]
    fn defaults_to_first_page() {
        assert_eq!(PageNumber::default(), PageNumber::FIRST);
        assert_eq!(PageNumber::FIRST.get(), 1);
    }

    #[rstest]
    fn deserialises_from_json_number() {
        let parsed: PageNumber = serde_json::from_str("2").expect("page deserialises");
        assert_eq!(parsed.get(), 2);
        assert!(serde_json::from_str::<PageNumber>("0").is_err());
    }
}
