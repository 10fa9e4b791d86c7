//! Reusable field validators
//!
//! Applied to raw form values before a bill payload is assembled.

/// Validator: field is required (non-empty)
pub fn required() -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &str| {
        if value.trim().is_empty() {
            Err(format!("Le champ '{}' est requis", field))
        } else {
            Ok(())
        }
    }
}

/// Validator: field is optional (always valid)
pub fn optional() -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    |_: &str, _: &str| Ok(())
}

/// Validator: number must be positive
pub fn positive() -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &str| {
        if let Ok(num) = value.parse::<f64>() {
            if num <= 0.0 {
                Err(format!(
                    "Le champ '{}' doit être positif (valeur: {})",
                    field, num
                ))
            } else {
                Ok(())
            }
        } else {
            Ok(()) // Si ce n'est pas un nombre, on laisse passer (autre validateur gérera)
        }
    }
}

/// Validator: value must be in allowed list
pub fn in_list(
    allowed: Vec<String>,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        if !allowed.contains(&value.to_string()) {
            Err(format!(
                "'{}' doit être l'une des valeurs: {:?} (valeur actuelle: {})",
                field, allowed, value
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: date must match format
pub fn date_format(
    format: &'static str,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &str| match chrono::NaiveDate::parse_from_str(value, format) {
        Ok(_) => Ok(()),
        Err(_) => Err(format!(
            "'{}' doit être au format {} (valeur actuelle: {})",
            field, format, value
        )),
    }
}

/// Validator: file name must carry one of the allowed extensions
///
/// Comparison is case-insensitive; a name without any extension is
/// rejected.
pub fn extension_in(
    allowed: Vec<String>,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        let ext = value.rsplit_once('.').map(|(_, e)| e.to_lowercase());
        match ext {
            Some(ext) if allowed.iter().any(|a| a.to_lowercase() == ext) => Ok(()),
            _ => Err(format!(
                "'{}' doit être un fichier {:?} (valeur actuelle: {})",
                field, allowed, value
            )),
        }
    }
}
