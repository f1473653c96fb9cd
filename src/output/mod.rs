pub mod formatter;

pub use formatter::{
    capitalize_club, format_average, format_average_line, format_club_detail, format_club_help,
    format_distance_prompt, format_distances, format_stats_table, should_use_colors,
};
