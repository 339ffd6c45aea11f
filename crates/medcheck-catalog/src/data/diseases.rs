use medcheck_core::models::{Disease, Severity};

struct DiseaseRow {
    id: &'static str,
    name: &'static str,
    symptoms: &'static [&'static str],
    description: &'static str,
    severity: Severity,
    category: &'static str,
}

/// Catalog order is significant: equal-confidence predictions keep it.
const DISEASES: &[DiseaseRow] = &[
    DiseaseRow {
        id: "common_cold",
        name: "Common Cold",
        symptoms: &["cough", "runny_nose", "sneezing", "sore_throat", "fatigue"],
        description: "A viral infection of the upper respiratory tract",
        severity: Severity::Low,
        category: "Respiratory",
    },
    DiseaseRow {
        id: "influenza",
        name: "Influenza (Flu)",
        symptoms: &["fever", "cough", "fatigue", "muscle_pain", "headache", "chills"],
        description: "A viral infection that attacks the respiratory system",
        severity: Severity::Medium,
        category: "Respiratory",
    },
    DiseaseRow {
        id: "covid19",
        name: "COVID-19",
        symptoms: &["fever", "cough", "shortness_breath", "fatigue", "loss_appetite", "headache"],
        description: "A viral infection caused by SARS-CoV-2",
        severity: Severity::High,
        category: "Respiratory",
    },
    DiseaseRow {
        id: "pneumonia",
        name: "Pneumonia",
        symptoms: &["fever", "cough", "shortness_breath", "chest_pain", "fatigue", "chills"],
        description: "An infection that inflames air sacs in lungs",
        severity: Severity::High,
        category: "Respiratory",
    },
    DiseaseRow {
        id: "asthma",
        name: "Asthma",
        symptoms: &["shortness_breath", "wheezing", "cough", "chest_pain"],
        description: "A condition where airways narrow and swell",
        severity: Severity::Medium,
        category: "Respiratory",
    },
    DiseaseRow {
        id: "gastroenteritis",
        name: "Gastroenteritis",
        symptoms: &["nausea", "vomiting", "diarrhea", "abdominal_pain", "fever", "fatigue"],
        description: "Inflammation of the stomach and intestines",
        severity: Severity::Medium,
        category: "Gastrointestinal",
    },
    DiseaseRow {
        id: "migraine",
        name: "Migraine",
        symptoms: &["headache", "nausea", "vomiting", "dizziness", "fatigue"],
        description: "A severe headache disorder",
        severity: Severity::Medium,
        category: "Neurological",
    },
    DiseaseRow {
        id: "tension_headache",
        name: "Tension Headache",
        symptoms: &["headache", "muscle_pain", "fatigue", "stiffness"],
        description: "Most common type of headache",
        severity: Severity::Low,
        category: "Neurological",
    },
    DiseaseRow {
        id: "arthritis",
        name: "Arthritis",
        symptoms: &["joint_pain", "stiffness", "swelling", "fatigue"],
        description: "Inflammation of joints",
        severity: Severity::Medium,
        category: "Musculoskeletal",
    },
    DiseaseRow {
        id: "fibromyalgia",
        name: "Fibromyalgia",
        symptoms: &["muscle_pain", "fatigue", "insomnia", "headache", "mood_swings"],
        description: "A disorder causing widespread musculoskeletal pain",
        severity: Severity::Medium,
        category: "Musculoskeletal",
    },
    DiseaseRow {
        id: "depression",
        name: "Depression",
        symptoms: &["depression", "fatigue", "insomnia", "loss_appetite", "weight_loss"],
        description: "A mood disorder causing persistent sadness",
        severity: Severity::Medium,
        category: "Mental Health",
    },
    DiseaseRow {
        id: "anxiety_disorder",
        name: "Anxiety Disorder",
        symptoms: &["anxiety", "palpitations", "shortness_breath", "dizziness", "insomnia"],
        description: "Excessive worry and fear",
        severity: Severity::Medium,
        category: "Mental Health",
    },
    DiseaseRow {
        id: "hypertension",
        name: "Hypertension",
        symptoms: &["high_bp", "headache", "dizziness", "chest_pain", "shortness_breath"],
        description: "High blood pressure condition",
        severity: Severity::High,
        category: "Cardiovascular",
    },
    DiseaseRow {
        id: "diabetes",
        name: "Diabetes Type 2",
        symptoms: &["fatigue", "weight_loss", "numbness", "blurred_vision", "frequent_urination"],
        description: "A chronic condition affecting blood sugar levels",
        severity: Severity::High,
        category: "Endocrine",
    },
    DiseaseRow {
        id: "eczema",
        name: "Eczema",
        symptoms: &["rash", "itching", "dry_skin", "swelling"],
        description: "A condition causing skin inflammation",
        severity: Severity::Low,
        category: "Skin",
    },
    DiseaseRow {
        id: "allergic_reaction",
        name: "Allergic Reaction",
        symptoms: &["rash", "itching", "swelling", "runny_nose", "sneezing"],
        description: "Body's immune response to allergens",
        severity: Severity::Medium,
        category: "Immune",
    },
];

pub fn builtin_diseases() -> Vec<Disease> {
    DISEASES
        .iter()
        .map(|row| Disease {
            id: row.id.to_string(),
            name: row.name.to_string(),
            symptoms: row.symptoms.iter().map(|s| s.to_string()).collect(),
            description: row.description.to_string(),
            severity: row.severity,
            category: row.category.to_string(),
        })
        .collect()
}
