use validator::{ValidationError, ValidationErrors};

/// Rejects strings made only of whitespace
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Flatten validator output into "field: message" strings, sorted by field name
pub fn violation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Mouse").is_ok());
        assert!(not_blank(" a ").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("\t\n").is_err());
    }

    #[test]
    fn test_violation_messages_sorted_and_fall_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("stock", ValidationError::new("range"));
        let mut with_message = ValidationError::new("length");
        with_message.message = Some("too short".into());
        errors.add("nombre", with_message);

        assert_eq!(
            violation_messages(&errors),
            vec!["nombre: too short".to_string(), "stock: range".to_string()]
        );
    }
}
