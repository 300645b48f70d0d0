use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use patients_core::PatientStatus;
use patients_normalize::{format_date, normalize_patient_str};

#[derive(Parser, Debug)]
#[command(
    name = "patients-cli",
    about = "Normalize a patient JSON record into the canonical dashboard shape."
)]
struct Args {
    /// Path to the patient JSON file.
    #[arg(short, long)]
    input: PathBuf,

    /// Print the full normalized record as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {:?}", args.input))?;

    let patient = normalize_patient_str(&data)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&patient)?);
        return Ok(());
    }

    let status = patient
        .medical_info
        .as_ref()
        .map(|info| info.status)
        .unwrap_or(PatientStatus::Active);
    let medications = patient
        .medical_info
        .as_ref()
        .map(|info| info.current_medications.len())
        .unwrap_or(0);

    println!(
        "Patient: {} {} (id {})\nDate of birth: {}\nStatus: {}\nMedications: {}\nDocuments: {}\nLast visit: {}",
        patient.first_name,
        patient.last_name,
        patient.id,
        format_date(Some(&patient.date_of_birth)),
        status.display(),
        medications,
        patient.documents.len(),
        format_date(patients_normalize::last_visit_date(&patient).as_deref()),
    );

    Ok(())
}
