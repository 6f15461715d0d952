// Lomuto partition quicksort, always pivots on the first element.
pub mod rust_quicksort_lomuto;

// Comb sort with the 1.247 shrink factor, bubble sort once the gap reaches one.
pub mod rust_combsort;

pub use rust_combsort::{sort as combsort, sort_by as combsort_by};
pub use rust_quicksort_lomuto::{sort as quicksort, sort_by as quicksort_by};
