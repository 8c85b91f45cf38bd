//! Raw-record paging.
//!
//! A stateful cursor over the filtered view, five records at a time. The
//! caller decides between pages whether to continue; there is nothing to
//! release on early stop.

use polars::prelude::DataFrame;

use crate::pipeline::FilteredView;

pub const PAGE_SIZE: usize = 5;

/// One page of raw records.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub rows: DataFrame,
    /// Whether another `next_page` call would return records.
    pub has_more: bool,
}

impl RawPage {
    /// An empty page is the explicit "no more rows" signal.
    pub fn is_empty(&self) -> bool {
        self.rows.height() == 0
    }
}

/// Cursor over a filtered view. Starts at offset 0; every call advances by
/// [`PAGE_SIZE`]. Once exhausted it keeps returning empty pages instead of
/// wrapping around.
#[derive(Debug)]
pub struct RawDataPaginator<'a> {
    view: &'a FilteredView,
    offset: usize,
}

impl<'a> RawDataPaginator<'a> {
    pub fn new(view: &'a FilteredView) -> Self {
        Self { view, offset: 0 }
    }

    pub fn next_page(&mut self) -> RawPage {
        let total = self.view.len();
        if self.offset >= total {
            return RawPage {
                rows: self.view.df.slice(0, 0),
                has_more: false,
            };
        }

        let rows = self.view.df.slice(self.offset as i64, PAGE_SIZE);
        self.offset += PAGE_SIZE;
        RawPage {
            rows,
            has_more: self.offset < total,
        }
    }
}
