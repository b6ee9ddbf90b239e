//! Listing engine and shared components for the dashboard views.

pub mod breadcrumb;
mod components;
mod data_table;
pub mod listing;
pub mod pagination;
mod provider;
mod records;

pub use components::{ErrorState, PageHeader, SearchInput, StatsCard, TableSkeleton};
pub use data_table::DataTablePagination;
pub use listing::{ListView, Listing, Searchable, use_list_view};
pub use pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PageItem, PagingFacts};
pub use provider::{RecordProvider, use_records};
