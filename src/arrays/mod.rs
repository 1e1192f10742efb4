pub mod has_duplicate;
pub mod longest_consecutive;
pub mod max_profit;
pub mod max_subarray;
pub mod missing_number;
pub mod move_zeroes;
pub mod next_permutation;
pub mod product_except_self;
pub mod remove_duplicates;
pub mod sliding_window_max;
