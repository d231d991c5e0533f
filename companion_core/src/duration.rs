//! French duration display and parsing ("1h30min", "1j 12h", "45min")

/// Minutes rendered the way the game shows durations.
///
/// Minutes disappear past the hour-day boundaries: 1470 prints as
/// "1j", not "1j 0h 30min".
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes}min");
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours < 24 {
        return if mins > 0 {
            format!("{hours}h{mins}min")
        } else {
            format!("{hours}h")
        };
    }
    let days = hours / 24;
    let rest_hours = hours % 24;
    if rest_hours > 0 {
        format!("{days}j {rest_hours}h")
    } else {
        format!("{days}j")
    }
}

fn unit_minutes(unit: &str) -> Option<u32> {
    if unit.starts_with("min") {
        Some(1)
    } else if unit.starts_with('j') {
        Some(1440)
    } else if unit.starts_with('h') {
        Some(60)
    } else {
        None
    }
}

/// Parse a French duration string into minutes.
///
/// Accepts any mix of day/hour/minute terms ("2j 3h", "1h30min",
/// "2 jours"), with bare digits reading as minutes. Returns `None`
/// when the text holds no positive duration.
pub fn parse_duration(input: &str) -> Option<u32> {
    let text = input.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }
    if text.chars().all(|c| c.is_ascii_digit()) {
        return text.parse().ok().filter(|&minutes| minutes > 0);
    }

    let mut total: u32 = 0;
    let mut number: Option<u32> = None;
    let mut unit = String::new();

    let mut close_pair = |number: &mut Option<u32>, unit: &mut String, total: &mut u32| {
        if let (Some(value), Some(scale)) = (number.take(), unit_minutes(unit)) {
            *total = total.saturating_add(value.saturating_mul(scale));
        }
        *number = None;
        unit.clear();
    };

    for c in text.chars().chain(std::iter::once(' ')) {
        if c.is_ascii_digit() {
            if !unit.is_empty() {
                close_pair(&mut number, &mut unit, &mut total);
            }
            let digit = c as u32 - '0' as u32;
            number = Some(number.unwrap_or(0).saturating_mul(10).saturating_add(digit));
        } else if c.is_alphabetic() {
            unit.push(c);
        } else if !unit.is_empty() {
            // A space between a number and its unit keeps the pair
            // open, anything after the unit closes it
            close_pair(&mut number, &mut unit, &mut total);
        }
    }

    if total > 0 {
        Some(total)
    } else {
        None
    }
}
