/// Parse an ISO 8601 duration as returned by the videos endpoint ("PT1H2M10S")
/// into total seconds.
///
/// Every component is optional and zero components are omitted. Live streams
/// can report day components ("P1DT2H"). Malformed input yields `None` rather
/// than a partial count; the validator treats that as an unavailable video.
pub fn parse_iso8601_duration(s: &str) -> Option<u64> {
    let rest = s.strip_prefix('P')?;
    if rest.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    let mut digits = String::new();
    let mut in_time = false;
    let mut saw_component = false;

    for c in rest.chars() {
        match c {
            'T' if !in_time && digits.is_empty() => in_time = true,
            '0'..='9' => digits.push(c),
            _ => {
                let value: u64 = digits.parse().ok()?;
                digits.clear();
                let scale = match (in_time, c) {
                    (false, 'D') => 86_400,
                    (true, 'H') => 3_600,
                    (true, 'M') => 60,
                    (true, 'S') => 1,
                    _ => return None,
                };
                total = total.checked_add(value.checked_mul(scale)?)?;
                saw_component = true;
            }
        }
    }

    // A trailing number with no unit, or "P"/"PT" with no components at all.
    if !digits.is_empty() || !saw_component {
        return None;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_durations() {
        assert_eq!(parse_iso8601_duration("PT1H2M10S"), Some(3730));
        assert_eq!(parse_iso8601_duration("PT45S"), Some(45));
        assert_eq!(parse_iso8601_duration("PT3M"), Some(180));
        assert_eq!(parse_iso8601_duration("PT2H"), Some(7200));
    }

    #[test]
    fn parses_day_components() {
        assert_eq!(parse_iso8601_duration("P1DT2H"), Some(93_600));
        assert_eq!(parse_iso8601_duration("P0D"), Some(0));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_iso8601_duration(""), None);
        assert_eq!(parse_iso8601_duration("P"), None);
        assert_eq!(parse_iso8601_duration("PT"), None);
        assert_eq!(parse_iso8601_duration("1H2M"), None);
        assert_eq!(parse_iso8601_duration("PT1H2M10"), None);
        assert_eq!(parse_iso8601_duration("PTXS"), None);
        assert_eq!(parse_iso8601_duration("garbage"), None);
    }
}
