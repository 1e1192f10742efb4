pub mod matrix_search;
pub mod rotated_min;
