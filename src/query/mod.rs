//! Query engine - pure filter, sort, and search derivations over the
//! cached collections.
//!
//! Nothing here touches the network or the caches; callers pass a
//! snapshot in and render what comes out.

mod products;
mod stores;

pub use products::{derive_products, search_products};
pub use stores::search_stores;

use crate::domain::ProductStatus;

/// Status filter selected in the UI. The UI values map onto wire
/// statuses: `ok` to `OK`, `warning` to `STORAGE`, `error` to
/// `OUT_OF_STOCK`; `all` disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Ok,
    Warning,
    Error,
}

impl StatusFilter {
    /// Parse a UI filter value. Unrecognized values fail open to
    /// [`StatusFilter::All`] so no product is ever hidden by a bad
    /// filter string.
    pub fn parse(value: &str) -> Self {
        match value {
            "ok" => Self::Ok,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::All,
        }
    }

    /// The wire status this filter keeps, or `None` for no filtering.
    pub fn status(&self) -> Option<ProductStatus> {
        match self {
            Self::All => None,
            Self::Ok => Some(ProductStatus::Ok),
            Self::Warning => Some(ProductStatus::Storage),
            Self::Error => Some(ProductStatus::OutOfStock),
        }
    }
}

/// Sortable product table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortHeader {
    #[default]
    Name,
    Price,
    Specs,
    SupplierInfo,
    Country,
    Company,
    Rating,
}

impl SortHeader {
    /// Parse a UI header value (`name`, `price`, `specs`,
    /// `supplier-info`, `country`, `company`, `rating`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            "specs" => Some(Self::Specs),
            "supplier-info" => Some(Self::SupplierInfo),
            "country" => Some(Self::Country),
            "company" => Some(Self::Company),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// The filter/sort state behind the product table. Mutated only by
/// explicit user actions; it persists across reloads and store
/// switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductQuery {
    pub status_filter: StatusFilter,
    pub sort_header: SortHeader,
    pub sort_direction: SortDirection,
}

impl ProductQuery {
    /// React to a header click: the same header twice flips the
    /// direction, a new header resets to ascending.
    pub fn toggle_header(&mut self, header: SortHeader) {
        if self.sort_header == header {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_header = header;
            self.sort_direction = SortDirection::Asc;
        }
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }
}
