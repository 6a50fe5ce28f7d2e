use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Server-assigned record identity. Never generated by the client.
pub type RecordId = u64;

/// A persisted record: the server-assigned id plus the resource's fields,
/// flattened on the wire (`{"id": 1, "nome": "...", ...}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<F> {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: F,
}

impl<F> Record<F> {
    pub fn new(id: RecordId, fields: F) -> Self {
        Self { id, fields }
    }
}

pub type AnimalRecord = Record<AnimalFields>;
pub type CareRecord = Record<CareFields>;

/// Errors raised when addressing a record field by name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("field '{0}' cannot be used as a filter")]
    NotFilterable(String),
}

/// Describes one REST resource: where it lives and which string fields it has.
///
/// Field names are the wire names (`nome`, `paisOrigem`, ...). Every field is a
/// plain string so drafts can be edited without type coercion.
pub trait ResourceFields:
    Clone + fmt::Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Base path of the resource, e.g. `/api/animais`
    const BASE_PATH: &'static str;
    /// Singular human label, e.g. `animal`
    const LABEL: &'static str;
    /// All editable fields, in form order
    const FIELD_NAMES: &'static [&'static str];
    /// Fields that must be non-empty before a draft is submitted
    const REQUIRED_FIELDS: &'static [&'static str];
    /// Fields the list endpoint accepts as query constraints
    const FILTER_FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<&str>;

    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    /// Shallow-set a single field by its wire name
    fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FieldError> {
        let slot = self
            .field_mut(name)
            .ok_or_else(|| FieldError::UnknownField(name.to_string()))?;
        *slot = value.into();
        Ok(())
    }

    /// Required fields that are currently empty (whitespace counts as empty)
    fn missing_required(&self) -> Vec<&'static str> {
        Self::REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|name| self.field(name).map_or(true, |v| v.trim().is_empty()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Animals
// ---------------------------------------------------------------------------

pub const SPECIES_OPTIONS: &[&str] = &[
    "Leão", "Tigre", "Elefante", "Girafa", "Macaco", "Pinguim", "Urso", "Serpente", "Outro",
];

pub const HABITAT_OPTIONS: &[&str] = &[
    "Savana", "Floresta", "Deserto", "Oceano", "Montanha", "Tundra", "Pântano",
];

/// Mutable fields of an animal record
///
/// Missing keys deserialize as empty strings so they surface as required-field
/// errors rather than decode failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimalFields {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    /// Birth date in `YYYY-MM-DD` form
    #[serde(rename = "dataNascimento")]
    pub birth_date: String,
    #[serde(rename = "especie")]
    pub species: String,
    pub habitat: String,
    #[serde(rename = "paisOrigem")]
    pub origin_country: String,
}

impl ResourceFields for AnimalFields {
    const BASE_PATH: &'static str = "/api/animais";
    const LABEL: &'static str = "animal";
    const FIELD_NAMES: &'static [&'static str] = &[
        "nome",
        "descricao",
        "dataNascimento",
        "especie",
        "habitat",
        "paisOrigem",
    ];
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["nome", "dataNascimento", "especie", "habitat", "paisOrigem"];
    const FILTER_FIELDS: &'static [&'static str] =
        &["habitat", "especie", "paisOrigem", "dataNascimento"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "nome" => Some(&self.name),
            "descricao" => Some(&self.description),
            "dataNascimento" => Some(&self.birth_date),
            "especie" => Some(&self.species),
            "habitat" => Some(&self.habitat),
            "paisOrigem" => Some(&self.origin_country),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "nome" => Some(&mut self.name),
            "descricao" => Some(&mut self.description),
            "dataNascimento" => Some(&mut self.birth_date),
            "especie" => Some(&mut self.species),
            "habitat" => Some(&mut self.habitat),
            "paisOrigem" => Some(&mut self.origin_country),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Cares
// ---------------------------------------------------------------------------

pub const CARE_KIND_OPTIONS: &[&str] = &[
    "Alimentação",
    "Exame Veterinário",
    "Vacinação",
    "Treinamento",
    "Limpeza",
    "Enriquecimento",
    "Outro",
];

pub const FREQUENCY_OPTIONS: &[&str] = &[
    "Diária",
    "Semanal",
    "Quinzenal",
    "Mensal",
    "Trimestral",
    "Semestral",
    "Anual",
];

/// Mutable fields of a care schedule record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareFields {
    /// Type of care, one of [`CARE_KIND_OPTIONS`]
    #[serde(rename = "nomeCuidado")]
    pub care_name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    /// One of [`FREQUENCY_OPTIONS`]
    #[serde(rename = "frequencia")]
    pub frequency: String,
}

impl ResourceFields for CareFields {
    const BASE_PATH: &'static str = "/api/cuidados";
    const LABEL: &'static str = "care";
    const FIELD_NAMES: &'static [&'static str] = &["nomeCuidado", "descricao", "frequencia"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["nomeCuidado", "frequencia"];
    const FILTER_FIELDS: &'static [&'static str] = &[];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "nomeCuidado" => Some(&self.care_name),
            "descricao" => Some(&self.description),
            "frequencia" => Some(&self.frequency),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "nomeCuidado" => Some(&mut self.care_name),
            "descricao" => Some(&mut self.description),
            "frequencia" => Some(&mut self.frequency),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Optional per-field constraints for a list query.
///
/// Absent and empty entries both mean "no constraint". Only [`FilterSet::active`]
/// entries are ever put on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
    entries: BTreeMap<String, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a constraint, validating the field against the resource's filter fields
    pub fn set_for<F: ResourceFields>(
        &mut self,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), FieldError> {
        if !F::FILTER_FIELDS.contains(&field) {
            return Err(FieldError::NotFilterable(field.to_string()));
        }
        self.set(field, value);
        Ok(())
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(field.into(), value.into());
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    /// Reset every field to empty, keeping the keys so a form can still show them
    pub fn clear(&mut self) {
        for value in self.entries.values_mut() {
            value.clear();
        }
    }

    /// Entries with a non-blank value
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// True when no entry constrains the list
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Strict `YYYY-MM-DD` parse
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Render a stored `YYYY-MM-DD` date as `DD/MM/YYYY` for tables
pub fn display_date(value: &str) -> String {
    if value.is_empty() {
        return "N/A".to_string();
    }
    value.split('-').rev().collect::<Vec<_>>().join("/")
}

/// Short Brazilian form `DD/MM/YY`, used by the birth date filter
pub fn short_br_date(date: NaiveDate) -> String {
    date.format("%d/%m/%y").to_string()
}

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

/// Body of every 4xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of a successful delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}
