use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref clubs) = config.clubs {
        if clubs.is_empty() {
            errors.push("clubs: must list at least one club".to_string());
        }
        let mut seen: Vec<String> = Vec::new();
        for (i, club) in clubs.iter().enumerate() {
            if club.trim().is_empty() {
                errors.push(format!("clubs[{}]: must not be empty", i));
                continue;
            }
            if club.chars().any(char::is_whitespace) {
                errors.push(format!("clubs[{}]: '{}' must not contain whitespace", i, club));
            }
            if club.chars().any(char::is_uppercase) {
                errors.push(format!("clubs[{}]: '{}' must be lowercase", i, club));
            }
            let normalized = club.to_lowercase();
            if seen.contains(&normalized) {
                errors.push(format!("clubs[{}]: '{}' is listed more than once", i, club));
            } else {
                seen.push(normalized);
            }
        }
    }

    let range = config.distance_range();
    if range.min > range.max {
        errors.push(format!(
            "min_distance ({}) must not be greater than max_distance ({})",
            range.min, range.max
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
