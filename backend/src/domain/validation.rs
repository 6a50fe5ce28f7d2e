//! Server-side validation of submitted record fields.
//!
//! Every create and update carries a complete record, so both run the same
//! checks: required fields must be non-empty, plus per-resource format rules.

use shared::{parse_iso_date, AnimalFields, CareFields, ResourceFields, FREQUENCY_OPTIONS};

/// Validation rules for a resource's fields
pub trait Validate: ResourceFields {
    /// Returns a user-facing message describing the first problem found
    fn validate(&self) -> Result<(), String>;
}

fn require_fields<F: ResourceFields>(fields: &F) -> Result<(), String> {
    match fields.missing_required().first() {
        Some(name) => Err(format!("Field '{}' is required", name)),
        None => Ok(()),
    }
}

impl Validate for AnimalFields {
    fn validate(&self) -> Result<(), String> {
        require_fields(self)?;

        if parse_iso_date(&self.birth_date).is_none() {
            return Err("Field 'dataNascimento' must be in YYYY-MM-DD format".to_string());
        }

        Ok(())
    }
}

impl Validate for CareFields {
    fn validate(&self) -> Result<(), String> {
        require_fields(self)?;

        if !FREQUENCY_OPTIONS.contains(&self.frequency.as_str()) {
            return Err(format!(
                "Field 'frequencia' must be one of: {}",
                FREQUENCY_OPTIONS.join(", ")
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_animal() -> AnimalFields {
        AnimalFields {
            name: "Dumbo".to_string(),
            description: String::new(),
            birth_date: "2015-08-30".to_string(),
            species: "Elefante".to_string(),
            habitat: "Savana".to_string(),
            origin_country: "Tanzânia".to_string(),
        }
    }

    #[test]
    fn test_valid_animal_passes() {
        assert!(valid_animal().validate().is_ok());
    }

    #[test]
    fn test_animal_requires_name() {
        let animal = AnimalFields {
            name: String::new(),
            ..valid_animal()
        };
        assert_eq!(animal.validate(), Err("Field 'nome' is required".to_string()));
    }

    #[test]
    fn test_animal_rejects_non_iso_birth_date() {
        let animal = AnimalFields {
            birth_date: "30/08/2015".to_string(),
            ..valid_animal()
        };
        let err = animal.validate().unwrap_err();
        assert!(err.contains("dataNascimento"));
    }

    #[test]
    fn test_care_frequency_must_be_known() {
        let care = CareFields {
            care_name: "Limpeza".to_string(),
            description: String::new(),
            frequency: "De vez em quando".to_string(),
        };
        let err = care.validate().unwrap_err();
        assert!(err.starts_with("Field 'frequencia' must be one of"));

        let care = CareFields {
            frequency: "Quinzenal".to_string(),
            ..care
        };
        assert!(care.validate().is_ok());
    }

    #[test]
    fn test_care_requires_name_before_frequency_check() {
        let care = CareFields::default();
        assert_eq!(
            care.validate(),
            Err("Field 'nomeCuidado' is required".to_string())
        );
    }
}
