use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::input::DistanceRange;
use crate::stats::{ClubSet, ClubStats, StatsSummary};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Capitalize the first character of a club identifier ("pw" -> "Pw")
pub fn capitalize_club(club: &str) -> String {
    let mut chars = club.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format an average distance: whole numbers keep one decimal ("150.0"),
/// everything else shows its rounded value ("183.33")
pub fn format_average(average: f64) -> String {
    if average.fract() == 0.0 {
        format!("{:.1}", average)
    } else {
        format!("{}", average)
    }
}

/// Format a list of distances as "[190, 210, 187]"
pub fn format_distances(distances: &[u32]) -> String {
    let joined = distances
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

/// The line printed after a club is updated
pub fn format_average_line(club: &str, stats: &ClubStats, use_colors: bool) -> String {
    let average = format_average(stats.average_distance);
    if use_colors {
        format!(
            "{} Average Distance: {} yards",
            capitalize_club(club).bold(),
            average.green()
        )
    } else {
        format!("{} Average Distance: {} yards", capitalize_club(club), average)
    }
}

/// Help text listing the clubs that can be tracked
pub fn format_club_help(clubs: &ClubSet) -> String {
    if clubs.is_standard() {
        return "\nClub Names:\n\n\
                Driver\n\
                A fairway wood such as a 3w, 5w, 7w\n\
                An iron from 0-9 (Ex: 4i)\n\
                A hybrid from 0-9 (Ex: 6hy)\n\
                A wedge such as a Pw, Gw, Sw, Lw\n\
                Putter\n"
            .to_string();
    }

    let names = clubs.iter().collect::<Vec<_>>().join(", ");
    format!("\nClub Names:\n\n{}\n", names)
}

/// Prompt text asking for distances shot with `club`
pub fn format_distance_prompt(club: &str, range: DistanceRange) -> String {
    format!(
        "\nWhen entering distances, order them from oldest to newest with spaces between\n\
         Distances must be realistic integers (the range of accepted distances is between {} yards)\n\
         Any distances outside of this range will be discarded\n\
         Ex: 190 210 187 200 204\n\
         Distance(s) previously shot from {} (yards)",
        range, club
    )
}

/// Format one club's statistics with detailed multi-line output
pub fn format_club_detail(club: &str, stats: &ClubStats, use_colors: bool) -> String {
    let average = format_average(stats.average_distance);
    let recent_5 = format_distances(&stats.recent_5.to_vec());
    let recent_15 = format_distances(&stats.recent_15.to_vec());

    if use_colors {
        format!(
            "{}\n  Average: {} yards\n  Total shots: {}\n  Total distance: {} yards\n  Past 5: {}\n  Past 15: {}",
            capitalize_club(club).bold(),
            average.green(),
            stats.total_shots,
            stats.total_distance,
            recent_5.cyan(),
            recent_15.dimmed()
        )
    } else {
        format!(
            "{}\n  Average: {} yards\n  Total shots: {}\n  Total distance: {} yards\n  Past 5: {}\n  Past 15: {}",
            capitalize_club(club),
            average,
            stats.total_shots,
            stats.total_distance,
            recent_5,
            recent_15
        )
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Format clubs that have recorded shots as a table:
/// Club, Shots, Average, Past 5, and Past 15 when the terminal is wide enough
pub fn format_stats_table(summary: &StatsSummary, use_colors: bool) -> String {
    format_stats_table_with_width(summary, use_colors, get_terminal_width())
}

fn format_stats_table_with_width(
    summary: &StatsSummary,
    use_colors: bool,
    term_width: Option<usize>,
) -> String {
    let rows: Vec<(&str, &ClubStats)> = summary
        .iter()
        .filter(|(_, stats)| stats.total_shots > 0)
        .collect();

    if rows.is_empty() {
        return "No shots recorded yet.".to_string();
    }

    let club_width = 7;
    let shots_width = 6;
    let average_width = 8;
    let separator = "  ";
    // Past 15 of 3-digit distances is ~75 chars; pipes get everything
    let show_recent_15 = term_width.map_or(true, |w| w >= 140);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let mut header = format!(
        "{:<cw$}{sep}{:>sw$}{sep}{:>aw$}{sep}{}",
        "Club",
        "Shots",
        "Average",
        "Past 5",
        cw = club_width,
        sw = shots_width,
        aw = average_width,
        sep = separator
    );
    if show_recent_15 {
        header.push_str(&format!("{:<28}{}", "", "Past 15"));
    }
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });

    for (club, stats) in rows {
        let club_str = format!("{:<width$}", club, width = club_width);
        let shots_str = format!("{:>width$}", stats.total_shots, width = shots_width);
        let average_str = format!(
            "{:>width$}",
            format_average(stats.average_distance),
            width = average_width
        );
        let recent_5 = format_distances(&stats.recent_5.to_vec());

        let mut line = if use_colors {
            format!(
                "{}{sep}{}{sep}{}{sep}{:<34}",
                club_str.cyan(),
                shots_str,
                average_str.green(),
                recent_5,
                sep = separator
            )
        } else {
            format!(
                "{}{sep}{}{sep}{}{sep}{:<34}",
                club_str,
                shots_str,
                average_str,
                recent_5,
                sep = separator
            )
        };
        if show_recent_15 {
            line.push_str(&format_distances(&stats.recent_15.to_vec()));
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_from(distances: &[u32]) -> ClubStats {
        let mut stats = ClubStats::default();
        for &d in distances {
            stats.push_shot(d);
        }
        stats.recompute_average();
        stats
    }

    #[test]
    fn test_capitalize_club() {
        assert_eq!(capitalize_club("driver"), "Driver");
        assert_eq!(capitalize_club("pw"), "Pw");
        assert_eq!(capitalize_club("3w"), "3w");
        assert_eq!(capitalize_club(""), "");
    }

    #[test]
    fn test_format_average() {
        assert_eq!(format_average(150.0), "150.0");
        assert_eq!(format_average(0.0), "0.0");
        assert_eq!(format_average(183.33), "183.33");
        assert_eq!(format_average(9.5), "9.5");
    }

    #[test]
    fn test_format_distances() {
        assert_eq!(format_distances(&[190, 210, 187]), "[190, 210, 187]");
        assert_eq!(format_distances(&[]), "[]");
    }

    #[test]
    fn test_format_average_line_plain() {
        let stats = stats_from(&[100, 200]);
        assert_eq!(
            format_average_line("driver", &stats, false),
            "Driver Average Distance: 150.0 yards"
        );
    }

    #[test]
    fn test_club_help_for_custom_set() {
        let clubs = ClubSet::new(["driver", "7i"]);
        assert_eq!(format_club_help(&clubs), "\nClub Names:\n\ndriver, 7i\n");
        assert!(format_club_help(&ClubSet::standard()).contains("A hybrid from 0-9"));
    }

    #[test]
    fn test_distance_prompt_mentions_range_and_club() {
        let prompt = format_distance_prompt("7i", DistanceRange::default());
        assert!(prompt.contains("between 0-600 yards"));
        assert!(prompt.ends_with("Distance(s) previously shot from 7i (yards)"));
    }

    #[test]
    fn test_club_detail_plain() {
        let stats = stats_from(&[150, 160]);
        let detail = format_club_detail("7i", &stats, false);
        assert!(detail.starts_with("7i\n  Average: 155.0 yards"));
        assert!(detail.contains("Total shots: 2"));
        assert!(detail.contains("Past 5: [150, 160]"));
    }

    #[test]
    fn test_stats_table_empty() {
        let summary = StatsSummary::initialize(&ClubSet::standard());
        assert_eq!(format_stats_table(&summary, false), "No shots recorded yet.");
    }

    #[test]
    fn test_stats_table_lists_only_used_clubs_in_order() {
        let mut summary = StatsSummary::initialize(&ClubSet::standard());
        *summary.get_mut("pw").unwrap() = stats_from(&[100, 110]);
        *summary.get_mut("driver").unwrap() = stats_from(&[250]);

        let table = format_stats_table_with_width(&summary, false, Some(80));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Club"));
        assert!(!lines[0].contains("Past 15"));
        assert!(lines[1].starts_with("driver"));
        assert!(lines[1].contains("250.0"));
        assert!(lines[2].starts_with("pw"));
        assert!(lines[2].ends_with("[100, 110]"));
    }

    #[test]
    fn test_stats_table_wide_terminal_adds_past_15() {
        let mut summary = StatsSummary::initialize(&ClubSet::new(["7i"]));
        *summary.get_mut("7i").unwrap() = stats_from(&(140..147).collect::<Vec<u32>>());

        let table = format_stats_table_with_width(&summary, false, None);
        assert!(table.lines().next().unwrap().ends_with("Past 15"));
        assert!(table.ends_with("[140, 141, 142, 143, 144, 145, 146]"));
    }
}
