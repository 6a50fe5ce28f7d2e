//! Column layout and cell text for the record tables.

use shared::{display_date, AnimalFields, CareFields, ResourceFields};

/// How a resource is shown as a table row
pub trait TableColumns: ResourceFields {
    const HEADERS: &'static [&'static str];
    /// Plural noun for list messages, e.g. "animals"
    const PLURAL: &'static str;

    fn cells(&self) -> Vec<String>;

    fn loading_message() -> String {
        format!("Loading {}...", Self::PLURAL)
    }

    fn empty_message() -> String {
        format!(
            "No {} registered. Click \"+ New {}\" to get started.",
            Self::PLURAL,
            Self::LABEL
        )
    }
}

impl TableColumns for AnimalFields {
    const HEADERS: &'static [&'static str] =
        &["Name", "Species", "Habitat", "Origin country", "Birth date"];
    const PLURAL: &'static str = "animals";

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.species.clone(),
            self.habitat.clone(),
            self.origin_country.clone(),
            display_date(&self.birth_date),
        ]
    }
}

impl TableColumns for CareFields {
    const HEADERS: &'static [&'static str] = &["Care", "Description", "Frequency"];
    const PLURAL: &'static str = "cares";

    fn cells(&self) -> Vec<String> {
        let description = if self.description.is_empty() {
            "-".to_string()
        } else {
            self.description.clone()
        };
        vec![self.care_name.clone(), description, self.frequency.clone()]
    }
}
