//! Fixed heart-failure diagnosis code table.
//!
//! Process-wide static configuration: an immutable code-to-description
//! mapping, read-only for the lifetime of a generation run.

/// ICD-10 heart-failure codes and their human-readable descriptions.
pub const CODES: [(&str, &str); 23] = [
    ("I50.0", "Congestive heart failure"),
    ("I50.1", "Left ventricular failure"),
    ("I50.2", "Systolic (congestive) heart failure"),
    ("I50.20", "Unspecified systolic (congestive) heart failure"),
    ("I50.21", "Acute systolic (congestive) heart failure"),
    ("I50.22", "Chronic systolic (congestive) heart failure"),
    ("I50.23", "Acute on chronic systolic (congestive) heart failure"),
    ("I50.3", "Diastolic (congestive) heart failure"),
    ("I50.30", "Unspecified diastolic (congestive) heart failure"),
    ("I50.31", "Acute diastolic (congestive) heart failure"),
    ("I50.32", "Chronic diastolic (congestive) heart failure"),
    ("I50.33", "Acute on chronic diastolic (congestive) heart failure"),
    (
        "I50.4",
        "Combined systolic (congestive) and diastolic (congestive) heart failure",
    ),
    (
        "I50.40",
        "Unspecified combined systolic (congestive) and diastolic (congestive) heart failure",
    ),
    (
        "I50.41",
        "Acute combined systolic (congestive) and diastolic (congestive) heart failure",
    ),
    (
        "I50.42",
        "Chronic combined systolic (congestive) and diastolic (congestive) heart failure",
    ),
    (
        "I50.43",
        "Acute on chronic combined systolic (congestive) and diastolic (congestive) heart failure",
    ),
    ("I50.9", "Heart failure, unspecified"),
    (
        "I11.0",
        "Hypertensive heart disease with (congestive) heart failure",
    ),
    (
        "I13.0",
        "Hypertensive heart and chronic kidney disease with heart failure and stage 1 through stage 4 chronic kidney disease, or unspecified chronic kidney disease",
    ),
    (
        "I13.2",
        "Hypertensive heart and chronic kidney disease with heart failure and with stage 5 chronic kidney disease, or end stage renal disease",
    ),
    ("I97.13", "Postprocedural heart failure"),
    (
        "I09.81",
        "Heart failure rheumatic (chronic) (inactive) (with chorea)",
    ),
];

/// Look up the description for a diagnosis code.
pub fn description_for(code: &str) -> Option<&'static str> {
    CODES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, description)| *description)
}
