//! View pipeline: filter options, row filtering, sorting, limiting.

mod options;
mod sort;
mod transform;

pub use options::filter_options;
pub use sort::{coerce_numeric, salary_sort_column, sort_rows_desc};
pub use transform::{
    default_sort_key, transform, RecruitmentSort, SortKey, ViewRequest, SALARY_TOP_N,
};
