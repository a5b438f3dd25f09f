#[cfg(test)]
mod tests {
    use occurrence::libs::date_input::{normalize_date, validate_date, DATE_MAX_LEN};
    use occurrence::libs::validation::{is_valid_date, FieldError, FieldKind};

    #[test]
    fn test_progressive_grouping() {
        assert_eq!(normalize_date(""), "");
        assert_eq!(normalize_date("2"), "2");
        assert_eq!(normalize_date("25"), "25");
        assert_eq!(normalize_date("251"), "25/1");
        assert_eq!(normalize_date("2512"), "25/12");
        assert_eq!(normalize_date("25122"), "25/12/2");
        assert_eq!(normalize_date("25122023"), "25/12/2023");
    }

    #[test]
    fn test_canonical_values_are_unchanged() {
        for year in ["0000", "1999", "2024", "9999"] {
            for month in 1..=12 {
                for day in 1..=31 {
                    let value = format!("{:02}/{:02}/{}", day, month, year);
                    assert!(is_valid_date(&value), "{}", value);
                    assert_eq!(normalize_date(&value), value);
                }
            }
        }
    }

    #[test]
    fn test_separators_and_letters_are_ignored() {
        assert_eq!(normalize_date("25-12-2023"), "25/12/2023");
        assert_eq!(normalize_date("25.12.2023"), "25/12/2023");
        assert_eq!(normalize_date("dia 25 de 12"), "25/12");
    }

    #[test]
    fn test_extra_digits_are_truncated() {
        assert_eq!(normalize_date("2512202399"), "25/12/2023");
        assert_eq!(normalize_date("25/12/20231"), "25/12/2023");
    }

    #[test]
    fn test_no_clamping_while_typing() {
        assert_eq!(normalize_date("99999999"), "99/99/9999");
        assert!(!is_valid_date(&normalize_date("99999999")));
    }

    #[test]
    fn test_output_stays_within_bounds() {
        for raw in ["", "1", "123456789012345", "ab/cd/efgh", "//////////"] {
            let normalized = normalize_date(raw);
            assert!(normalized.len() <= DATE_MAX_LEN, "{:?} -> {:?}", raw, normalized);
            assert!(normalized.chars().all(|c| c.is_ascii_digit() || c == '/'));
        }
    }

    #[test]
    fn test_calendar_is_not_checked() {
        assert!(is_valid_date("31/02/2024"));
        assert!(is_valid_date("31/04/2023"));
    }

    #[test]
    fn test_invalid_dates() {
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("00/12/2023"));
        assert!(!is_valid_date("32/12/2023"));
        assert!(!is_valid_date("25/13/2023"));
        assert!(!is_valid_date("25/00/2023"));
        assert!(!is_valid_date("5/12/2023"));
        assert!(!is_valid_date("25/12/23"));
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        // Arabic-Indic and fullwidth years
        let arabic = "25/12/\u{0662}\u{0660}\u{0662}\u{0663}";
        let fullwidth = "25/12/\u{FF12}\u{FF10}\u{FF12}\u{FF13}";

        assert!(!is_valid_date(arabic));
        assert!(!is_valid_date(fullwidth));
        assert!(!is_valid_date("２５/１２/２０２３"));
        assert_eq!(validate_date(fullwidth, true), Err(FieldError::InvalidFormat(FieldKind::Date)));
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(validate_date("25/12/2023", true), Ok(()));
        assert_eq!(validate_date("", false), Ok(()));
        assert_eq!(validate_date("", true), Err(FieldError::RequiredFieldEmpty));
        assert_eq!(validate_date("25/12", true), Err(FieldError::InvalidFormat(FieldKind::Date)));
    }
}
