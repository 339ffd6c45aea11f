use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use medcheck_core::models::{Disease, Symptom};

use crate::data;
use crate::error::CatalogError;

/// On-disk shape of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub symptoms: Vec<Symptom>,
    pub diseases: Vec<Disease>,
}

/// Presentation-side symptom filter. `None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct SymptomFilter {
    /// Case-insensitive substring of the display name.
    pub search: Option<String>,
    /// Exact category label.
    pub category: Option<String>,
}

/// Immutable, validated symptom and disease tables with O(1) id lookup.
///
/// Every disease profile is non-empty, free of repeated ids and refers only
/// to symptoms present in the table.
#[derive(Debug, Clone)]
pub struct Catalog {
    symptoms: Vec<Symptom>,
    diseases: Vec<Arc<Disease>>,
    symptom_index: HashMap<String, usize>,
    disease_index: HashMap<String, usize>,
}

impl Catalog {
    /// Validate and index the given tables. Catalog order is preserved.
    pub fn new(symptoms: Vec<Symptom>, diseases: Vec<Disease>) -> Result<Self, CatalogError> {
        let mut symptom_index = HashMap::with_capacity(symptoms.len());
        for (i, symptom) in symptoms.iter().enumerate() {
            if symptom_index.insert(symptom.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateSymptom {
                    id: symptom.id.clone(),
                });
            }
        }

        let mut disease_index = HashMap::with_capacity(diseases.len());
        let mut validated = Vec::with_capacity(diseases.len());
        for (i, mut disease) in diseases.into_iter().enumerate() {
            if disease_index.insert(disease.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateDisease { id: disease.id });
            }

            let mut seen = HashSet::new();
            disease.symptoms.retain(|id| {
                let first = seen.insert(id.clone());
                if !first {
                    tracing::warn!(disease = %disease.id, symptom = %id, "dropping repeated symptom in disease profile");
                }
                first
            });

            if disease.symptoms.is_empty() {
                return Err(CatalogError::EmptySymptomProfile {
                    disease_id: disease.id,
                });
            }

            if let Some(missing) = disease
                .symptoms
                .iter()
                .find(|id| !symptom_index.contains_key(id.as_str()))
            {
                return Err(CatalogError::UnknownSymptomReference {
                    disease_id: disease.id.clone(),
                    symptom_id: missing.clone(),
                });
            }

            validated.push(Arc::new(disease));
        }

        tracing::debug!(
            symptoms = symptoms.len(),
            diseases = validated.len(),
            "catalog loaded"
        );

        Ok(Self {
            symptoms,
            diseases: validated,
            symptom_index,
            disease_index,
        })
    }

    /// The compiled-in catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(data::builtin_symptoms(), data::builtin_diseases())
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.symptoms, file.diseases)
    }

    /// Load a catalog from a JSON file shaped like [`CatalogFile`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), diseases = catalog.diseases.len(), "catalog loaded from file");
        Ok(catalog)
    }

    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            symptoms: self.symptoms.clone(),
            diseases: self.diseases.iter().map(|d| Disease::clone(d)).collect(),
        }
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn diseases(&self) -> &[Arc<Disease>] {
        &self.diseases
    }

    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptom_index.get(id).map(|&i| &self.symptoms[i])
    }

    pub fn disease(&self, id: &str) -> Option<&Arc<Disease>> {
        self.disease_index.get(id).map(|&i| &self.diseases[i])
    }

    /// Display name for a symptom id, or the id itself when unknown.
    pub fn symptom_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.symptom(id).map(|s| s.name.as_str()).unwrap_or(id)
    }

    /// Distinct symptom categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.symptoms
            .iter()
            .map(|s| s.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn filter_symptoms(&self, filter: &SymptomFilter) -> Vec<&Symptom> {
        let needle = filter.search.as_deref().map(str::to_lowercase);
        self.symptoms
            .iter()
            .filter(|s| {
                needle
                    .as_deref()
                    .is_none_or(|n| s.name.to_lowercase().contains(n))
            })
            .filter(|s| {
                filter
                    .category
                    .as_deref()
                    .is_none_or(|c| s.category == c)
            })
            .collect()
    }

    pub fn diseases_in_category(&self, category: &str) -> Vec<&Arc<Disease>> {
        self.diseases
            .iter()
            .filter(|d| d.category == category)
            .collect()
    }
}
