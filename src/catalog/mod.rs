pub mod filter;
pub mod labels;
pub mod store;
pub mod types;

pub use filter::{parse_digit_list, parse_keywords, search_cards, search_talents, SearchFilter};
pub use labels::CardColor;
pub use store::{load_cards, load_talents, save_cards, save_talents};
pub use types::{Card, Talent};
