use medcheck_core::models::Symptom;

/// (id, display name, category), grouped by category.
const SYMPTOMS: &[(&str, &str, &str)] = &[
    ("cough", "Cough", "Respiratory"),
    ("shortness_breath", "Shortness of breath", "Respiratory"),
    ("chest_pain", "Chest pain", "Respiratory"),
    ("wheezing", "Wheezing", "Respiratory"),
    ("runny_nose", "Runny nose", "Respiratory"),
    ("sneezing", "Sneezing", "Respiratory"),
    ("sore_throat", "Sore throat", "Respiratory"),
    ("nausea", "Nausea", "Gastrointestinal"),
    ("vomiting", "Vomiting", "Gastrointestinal"),
    ("diarrhea", "Diarrhea", "Gastrointestinal"),
    ("constipation", "Constipation", "Gastrointestinal"),
    ("abdominal_pain", "Abdominal pain", "Gastrointestinal"),
    ("bloating", "Bloating", "Gastrointestinal"),
    ("heartburn", "Heartburn", "Gastrointestinal"),
    ("headache", "Headache", "Neurological"),
    ("dizziness", "Dizziness", "Neurological"),
    ("confusion", "Confusion", "Neurological"),
    ("memory_loss", "Memory loss", "Neurological"),
    ("seizures", "Seizures", "Neurological"),
    ("numbness", "Numbness", "Neurological"),
    ("fever", "Fever", "General"),
    ("fatigue", "Fatigue", "General"),
    ("weight_loss", "Weight loss", "General"),
    ("weight_gain", "Weight gain", "General"),
    ("loss_appetite", "Loss of appetite", "General"),
    ("night_sweats", "Night sweats", "General"),
    ("chills", "Chills", "General"),
    ("joint_pain", "Joint pain", "Musculoskeletal"),
    ("muscle_pain", "Muscle pain", "Musculoskeletal"),
    ("back_pain", "Back pain", "Musculoskeletal"),
    ("stiffness", "Stiffness", "Musculoskeletal"),
    ("swelling", "Swelling", "Musculoskeletal"),
    ("rash", "Rash", "Skin"),
    ("itching", "Itching", "Skin"),
    ("dry_skin", "Dry skin", "Skin"),
    ("bruising", "Bruising", "Skin"),
    ("palpitations", "Heart palpitations", "Cardiovascular"),
    ("high_bp", "High blood pressure", "Cardiovascular"),
    ("low_bp", "Low blood pressure", "Cardiovascular"),
    ("anxiety", "Anxiety", "Mental Health"),
    ("depression", "Depression", "Mental Health"),
    ("insomnia", "Insomnia", "Mental Health"),
    ("mood_swings", "Mood swings", "Mental Health"),
    // Referenced by the diabetes profile.
    ("blurred_vision", "Blurred vision", "Endocrine"),
    ("frequent_urination", "Frequent urination", "Endocrine"),
];

pub fn builtin_symptoms() -> Vec<Symptom> {
    SYMPTOMS
        .iter()
        .map(|(id, name, category)| Symptom::new(id, name, category))
        .collect()
}
