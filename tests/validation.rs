#[cfg(test)]
mod tests {
    use occurrence::libs::validation::{
        check_field, is_valid_choice, is_valid_time, missing_required, FieldError, FieldKind, FormError,
    };

    #[test]
    fn test_is_valid_time() {
        assert!(is_valid_time("00:00"));
        assert!(is_valid_time("23:59"));
        assert!(is_valid_time("9:30"));
        assert!(!is_valid_time(""));
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("12:60"));
        assert!(!is_valid_time("1230"));
        assert!(!is_valid_time("12:3"));
    }

    #[test]
    fn test_is_valid_choice() {
        assert!(is_valid_choice("SIM"));
        assert!(is_valid_choice("NÃO"));
        assert!(!is_valid_choice("sim"));
        assert!(!is_valid_choice("NAO"));
        assert!(!is_valid_choice(""));
    }

    #[test]
    fn test_required_check_comes_first() {
        for kind in [FieldKind::Time, FieldKind::Date, FieldKind::Text, FieldKind::Choice] {
            assert_eq!(check_field(kind, "", true), Err(FieldError::RequiredFieldEmpty));
            assert_eq!(check_field(kind, "", false), Ok(()));
        }
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        assert_eq!(check_field(FieldKind::Text, " ", true), Ok(()));
        assert_eq!(check_field(FieldKind::Time, " ", true), Err(FieldError::InvalidFormat(FieldKind::Time)));
    }

    #[test]
    fn test_invalid_format_per_kind() {
        assert_eq!(check_field(FieldKind::Time, "7", false), Err(FieldError::InvalidFormat(FieldKind::Time)));
        assert_eq!(check_field(FieldKind::Date, "2023-12-25", false), Err(FieldError::InvalidFormat(FieldKind::Date)));
        assert_eq!(check_field(FieldKind::Choice, "TALVEZ", false), Err(FieldError::InvalidFormat(FieldKind::Choice)));
        assert_eq!(check_field(FieldKind::Text, "qualquer coisa", true), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::RequiredFieldEmpty.to_string(), "Campo obrigatório");
        assert_eq!(
            FieldError::InvalidFormat(FieldKind::Time).to_string(),
            "Formato inválido. Use HH:MM (ex: 14:30)"
        );
        assert_eq!(
            FieldError::InvalidFormat(FieldKind::Date).to_string(),
            "Formato inválido. Use DD/MM/YYYY (ex: 25/12/2023)"
        );
        assert_eq!(
            FormError::MissingRequiredFields { count: 3 }.to_string(),
            "Preencha todos os campos obrigatórios"
        );
    }

    #[test]
    fn test_max_len() {
        assert_eq!(FieldKind::Time.max_len(), Some(5));
        assert_eq!(FieldKind::Date.max_len(), Some(10));
        assert_eq!(FieldKind::Text.max_len(), None);
    }

    #[test]
    fn test_missing_required() {
        let values = vec![("a", "x"), ("b", ""), ("c", ""), ("d", "y")];
        assert_eq!(missing_required(values.clone(), &["a", "b", "d"]), vec!["b"]);
        assert_eq!(missing_required(values.clone(), &["a", "d"]), Vec::<&str>::new());
        assert_eq!(missing_required(values, &[]), Vec::<&str>::new());
    }

    #[test]
    fn test_missing_required_keeps_form_order() {
        let values = vec![(1, ""), (2, "ok"), (3, "")];
        assert_eq!(missing_required(values, &[3, 1]), vec![1, 3]);
    }
}
