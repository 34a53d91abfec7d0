//! ==============================================================================
//! text.rs - textarea and checkbox helpers shared by the form components
//! ==============================================================================

/// split a newline-delimited textarea into entries, dropping blank and
/// whitespace-only lines. order is preserved.
pub fn split_lines(input: &str) -> Vec<String> {
    input
        .split('\n')
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// toggle membership of `value` in a checkbox-group field: present values are
/// removed, absent values appended.
pub fn toggle_membership(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_string());
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_drops_blank_lines() {
        assert_eq!(split_lines("a\n\nb\n  \nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_preserves_order() {
        assert_eq!(
            split_lines("healthitnews.com\nmedicalfuturist.com"),
            vec!["healthitnews.com", "medicalfuturist.com"]
        );
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("   \n \n").is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut platforms = vec!["wordpress".to_string()];
        toggle_membership(&mut platforms, "tiktok");
        assert_eq!(platforms, vec!["wordpress", "tiktok"]);
        toggle_membership(&mut platforms, "tiktok");
        assert_eq!(platforms, vec!["wordpress"]);
    }

    #[test]
    fn test_toggle_tracks_presence_not_count() {
        let mut formats: Vec<String> = vec![];
        toggle_membership(&mut formats, "video");
        toggle_membership(&mut formats, "video");
        toggle_membership(&mut formats, "video");
        assert_eq!(formats, vec!["video"]);
    }
}
