mod aggregation;
pub mod dates;

pub use aggregation::{count_in_order, most_common};
pub use dates::DateRange;
