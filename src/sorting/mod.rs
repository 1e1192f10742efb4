pub mod dutch_flag;
pub mod quick_sort;
