pub mod coin_change;
pub mod word_break;
