/// Keyset page over a monotonically increasing integer id.
///
/// `limit` is the number of rows the caller wants; repositories fetch one
/// extra row so the caller can tell whether another page exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPage {
    pub after: Option<i32>,
    pub before: Option<i32>,
    pub limit: i64,
    pub direction: PageDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Forward,
    Backward,
}

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

impl Default for IdPage {
    fn default() -> Self {
        Self {
            after: None,
            before: None,
            limit: DEFAULT_PAGE_SIZE,
            direction: PageDirection::Forward,
        }
    }
}

impl IdPage {
    /// Build a page from Relay-style arguments. `last` wins over `first` only
    /// when `first` is absent.
    pub fn from_relay(
        after: Option<i32>,
        before: Option<i32>,
        first: Option<usize>,
        last: Option<usize>,
    ) -> Self {
        let (requested, direction) = match (first, last) {
            (Some(first), _) => (Some(first), PageDirection::Forward),
            (None, Some(last)) => (Some(last), PageDirection::Backward),
            (None, None) => (None, PageDirection::Forward),
        };

        let limit = requested
            .map(|n| n.min(MAX_PAGE_SIZE as usize) as i64)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            after,
            before,
            limit,
            direction,
        }
    }

    /// Rows to request from the database.
    pub fn fetch_limit(&self) -> i64 {
        self.limit + 1
    }

    /// Trim the over-fetched row and restore ascending order.
    ///
    /// Returns the rows of this page and whether more rows exist beyond it in
    /// the direction of travel.
    pub fn finish<T>(&self, mut rows: Vec<T>) -> (Vec<T>, bool) {
        let has_more = rows.len() as i64 > self.limit;
        rows.truncate(self.limit as usize);
        if self.direction == PageDirection::Backward {
            rows.reverse();
        }
        (rows, has_more)
    }
}

/// Escape `LIKE` wildcards so user input is matched literally.
pub fn contains_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
