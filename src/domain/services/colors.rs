use crate::domain::models::event::EventStatus;

pub const VENUE_PALETTE: [&str; 8] = [
    "blue", "purple", "green", "red", "indigo", "yellow", "pink", "teal",
];

/// Stable palette entry for a venue name.
///
/// Folds the UTF-16 code units with `hash = unit + ((hash << 5) - hash)`,
/// where the shift truncates to a signed 32-bit integer but the subtraction
/// does not, so a name gets the same color the web calendar gives it.
pub fn consistent_color_for(name: &str) -> &'static str {
    let mut hash: i64 = 0;
    for unit in name.encode_utf16() {
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        hash = i64::from(unit).wrapping_add(shifted.wrapping_sub(hash));
    }
    VENUE_PALETTE[(hash.unsigned_abs() % VENUE_PALETTE.len() as u64) as usize]
}

pub fn status_color(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Confirmed => "green",
        EventStatus::Pending => "yellow",
        EventStatus::Cancelled => "red",
        EventStatus::Finished => "gray",
    }
}

pub fn event_type_color(event_type: &str) -> &'static str {
    match event_type {
        "Reunión Corporativa" => "blue",
        "Boda" => "pink",
        "Congreso" => "green",
        "Coctel" => "purple",
        "Conferencia" => "orange",
        "Seminario" => "teal",
        "Celebración" => "rose",
        "Lanzamiento de Producto" => "indigo",
        _ => "gray",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_stable() {
        let first = consistent_color_for("Salon Diamante");
        for _ in 0..10 {
            assert_eq!(consistent_color_for("Salon Diamante"), first);
        }
        assert!(VENUE_PALETTE.contains(&first));
    }

    #[test]
    fn test_matches_web_hash() {
        // "a" = 97 -> index 1; "ab" = 98 + 31 * 97 = 3105 -> index 1.
        assert_eq!(consistent_color_for(""), "blue");
        assert_eq!(consistent_color_for("a"), "purple");
        assert_eq!(consistent_color_for("ab"), "purple");
        // "abc" = 99 + 31 * 3105 = 96354 -> index 2.
        assert_eq!(consistent_color_for("abc"), "green");
    }

    #[test]
    fn test_long_names_do_not_overflow() {
        let name = "Gran Salón de Convenciones Internacionales del Hotel".repeat(50);
        assert!(VENUE_PALETTE.contains(&consistent_color_for(&name)));
    }

    #[test]
    fn test_status_keys_match_wire_names() {
        for status in EventStatus::ALL {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire, status.as_str());
            assert_ne!(status_color(status), "");
        }
    }

    #[test]
    fn test_badges() {
        assert_eq!(status_color(EventStatus::Confirmed), "green");
        assert_eq!(event_type_color("Boda"), "pink");
        assert_eq!(event_type_color("Desconocido"), "gray");
    }
}
