pub mod formatter;

pub use formatter::{
    color_heading, color_marker, format_card_count, format_card_list, format_card_list_short,
    format_card_summary, format_score_breakdown, format_talent_list, format_talent_summary,
    should_use_colors,
};
