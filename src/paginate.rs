// Paginator for card listings
//
// Slices a flattened token list into fixed-size pages. `paginate` is a plain
// slice and never clamps its index; `Pager` owns the current page and is the
// only thing that moves it, always staying within [0, total_pages).

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::Serialize;

use crate::model::{Category, Token};

/// Page size used when the caller does not pick one
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Rejected page size (a caller bug, not a user-facing condition)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSizeError {
    /// Zero or negative size
    NotPositive(i64),
    /// Text that is not an integer at all
    Invalid(String),
}

impl fmt::Display for PageSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive(n) => write!(f, "Page size must be positive, got {}", n),
            Self::Invalid(s) => write!(f, "Page size is not an integer: {:?}", s),
        }
    }
}

impl std::error::Error for PageSizeError {}

/// Validated, strictly positive page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(size: usize) -> Result<Self, PageSizeError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(PageSizeError::NotPositive(0))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<i64> for PageSize {
    type Error = PageSizeError;

    fn try_from(size: i64) -> Result<Self, Self::Error> {
        if size <= 0 {
            return Err(PageSizeError::NotPositive(size));
        }
        let size = usize::try_from(size).map_err(|_| PageSizeError::Invalid(size.to_string()))?;
        Self::new(size)
    }
}

impl FromStr for PageSize {
    type Err = PageSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size: i64 = s
            .trim()
            .parse()
            .map_err(|_| PageSizeError::Invalid(s.to_string()))?;
        Self::try_from(size)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// One page of tokens plus the metadata a card view needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub items: Vec<Token>,
    pub current_page: usize,
    pub total_pages: usize,
}

impl Page {
    /// Navigation is only worth showing with more than one page
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }
}

/// Concatenate category tokens: category order, then token order
pub fn flatten(categories: &[Category]) -> Vec<Token> {
    categories
        .iter()
        .flat_map(|category| category.tokens.iter().cloned())
        .collect()
}

/// Number of pages needed for `len` tokens (0 when there are none)
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get())
}

/// Slice out page `page_index`
///
/// An index past the last page yields an empty `items` list; clamping is
/// the job of [`Pager`].
pub fn paginate(tokens: &[Token], page_size: PageSize, page_index: usize) -> Page {
    let size = page_size.get();
    let start = page_index.saturating_mul(size).min(tokens.len());
    let end = start.saturating_add(size).min(tokens.len());

    Page {
        items: tokens[start..end].to_vec(),
        current_page: page_index,
        total_pages: total_pages(tokens.len(), page_size),
    }
}

/// Page navigation state over a token list
#[derive(Debug, Clone)]
pub struct Pager {
    tokens: Vec<Token>,
    page_size: PageSize,
    /// Current page; always 0 when there are no pages
    index: usize,
}

impl Pager {
    pub fn new(tokens: Vec<Token>, page_size: PageSize) -> Self {
        Self {
            tokens,
            page_size,
            index: 0,
        }
    }

    /// Replace the token list and go back to the first page
    ///
    /// Resets even when the new list is the same length, so an index can
    /// never outlive the list it was computed for.
    pub fn set_tokens(&mut self, tokens: Vec<Token>) {
        self.tokens = tokens;
        self.index = 0;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.index = 0;
    }

    /// Advance one page; stays put on the last page
    pub fn next_page(&mut self) -> bool {
        let last = self.total_pages().saturating_sub(1);
        if self.index < last {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; stays put on the first page
    pub fn previous_page(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn current_page(&self) -> usize {
        self.index
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.tokens.len(), self.page_size)
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total_pages()
    }

    pub fn page(&self) -> Page {
        paginate(&self.tokens, self.page_size, self.index)
    }
}
