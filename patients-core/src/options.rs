//! Option catalogs backing the filter controls and form selects.

pub const BLOOD_TYPES: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub const INSURANCE_PROVIDERS: [&str; 9] = [
    "Aetna",
    "Blue Cross Blue Shield",
    "Cigna",
    "UnitedHealthcare",
    "Humana",
    "Kaiser Permanente",
    "Medicare",
    "Medicaid",
    "Other",
];

pub const COMMON_ALLERGIES: [&str; 12] = [
    "Latex",
    "Pollen",
    "Peanuts",
    "Tree Nuts",
    "Shellfish",
    "Dairy",
    "Eggs",
    "Soy",
    "Wheat",
    "Penicillin",
    "Aspirin",
    "Ibuprofen",
];

pub const COMMON_MEDICATIONS: [&str; 10] = [
    "Levothyroxine",
    "Acetaminophen",
    "Ibuprofen",
    "Metformin",
    "Amlodipine",
    "Lisinopril",
    "Atorvastatin",
    "Albuterol",
    "Omeprazole",
    "Metoprolol",
];

pub const COMMON_CONDITIONS: [&str; 10] = [
    "Hypertension",
    "Diabetes",
    "Asthma",
    "Arthritis",
    "Heart Disease",
    "High Cholesterol",
    "Depression",
    "Anxiety",
    "COPD",
    "Obesity",
];
