pub mod top_k;
pub mod top_k_frequent;
