//! The generation pipeline.
//!
//! Runs the single linear sequence: read template, classify it, fill
//! placeholders from the bound input files, resolve the output path, write.
//! Classification happens before any filesystem write so an unrecognized
//! template never leaves an output file behind.

use crate::cli::Cli;
use crate::error::Result;
use crate::fs;
use crate::output;
use crate::policy;
use crate::template::{self, PromptType, Slot, SlotBindings};
use std::path::PathBuf;

/// What a successful run produced, for reporting to the caller.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_path: PathBuf,
    pub prompt_type: PromptType,
    pub policy_id: Option<String>,
}

/// Slots consulted for the reported policy identifier, in preference order.
const REPORT_ID_SLOTS: [Slot; 3] = [
    Slot::OriginalDocument,
    Slot::ExtractedPolicy,
    Slot::ExtractedPatient,
];

/// Run the full generation pipeline for one invocation.
pub fn run(cli: &Cli) -> Result<GenerateReport> {
    let template_text = fs::read_file(&cli.prompt)?;
    let prompt_type = template::classify(&cli.prompt)?;

    let bindings = SlotBindings {
        original_document: cli.original_document.clone(),
        original_patient: cli.original_patient.clone(),
        extracted_dd: cli.extracted_dd.clone(),
        extracted_policy: cli.extracted_policy.clone(),
        extracted_patient: cli.extracted_patient.clone(),
    };

    let resolved = template::fill_placeholders(&template_text, &bindings)?;
    let output_path = output::resolve_output_path(&cli.output, prompt_type, &bindings);
    fs::write_file(&output_path, &resolved)?;

    // The report uses the first bound path among document, policy, and
    // patient, even when a later one would yield an identifier.
    let policy_id = REPORT_ID_SLOTS
        .iter()
        .find_map(|&slot| bindings.get(slot))
        .and_then(|path| policy::extract_policy_id(&path.to_string_lossy()).map(str::to_owned));

    Ok(GenerateReport {
        output_path,
        prompt_type,
        policy_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptGenError;
    use std::fs as stdfs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        stdfs::write(&path, content).unwrap();
        path
    }

    fn base_cli(prompt: PathBuf, output: PathBuf) -> Cli {
        Cli {
            prompt,
            original_document: None,
            original_patient: None,
            extracted_dd: None,
            extracted_policy: None,
            extracted_patient: None,
            output,
        }
    }

    #[test]
    fn end_to_end_auto_named_condition_prompt() {
        let dir = TempDir::new().unwrap();
        let prompt = write(
            &dir,
            "policy_condition_judge_prompt.txt",
            "Document: [ORIGINAL_DOCUMENT_PLACEHOLDER]",
        );
        stdfs::create_dir(dir.path().join("LCD_39543")).unwrap();
        let doc = write(&dir, "LCD_39543/Policy_LCD_39543.txt", "Hello");
        let out_dir = dir.path().join("evaluation");
        stdfs::create_dir(&out_dir).unwrap();

        let mut cli = base_cli(prompt, out_dir.clone());
        cli.original_document = Some(doc);

        let report = run(&cli).unwrap();

        assert_eq!(report.output_path, out_dir.join("LCD_39543_condition.txt"));
        assert_eq!(report.prompt_type, PromptType::Condition);
        assert_eq!(report.policy_id.as_deref(), Some("LCD_39543"));
        assert_eq!(
            stdfs::read_to_string(&report.output_path).unwrap(),
            "Document: Hello"
        );
    }

    #[test]
    fn auto_name_falls_back_to_unknown() {
        let dir = TempDir::new().unwrap();
        let prompt = write(
            &dir,
            "data_dictionary_judge_prompt.txt",
            "[EXTRACTED_DD_JSON_PLACEHOLDER]",
        );
        let dd = write(&dir, "dd.json", "{}");
        let out_dir = dir.path().join("out");
        stdfs::create_dir(&out_dir).unwrap();

        let mut cli = base_cli(prompt, out_dir.clone());
        cli.extracted_dd = Some(dd);

        let report = run(&cli).unwrap();

        assert_eq!(report.output_path, out_dir.join("unknown_data.txt"));
        assert_eq!(report.policy_id, None);
        assert!(report.output_path.exists());
    }

    #[test]
    fn explicit_output_path_is_respected() {
        let dir = TempDir::new().unwrap();
        let prompt = write(
            &dir,
            "patient_extraction_judge_prompt.txt",
            "Patient: [EXTRACTED_PAT_PLACEHOLDER]",
        );
        let patient = write(&dir, "patient.json", "{\"id\": 1}");
        let out = dir.path().join("exact_name.txt");

        let mut cli = base_cli(prompt, out.clone());
        cli.extracted_patient = Some(patient);

        let report = run(&cli).unwrap();

        assert_eq!(report.output_path, out);
        assert_eq!(
            stdfs::read_to_string(&out).unwrap(),
            "Patient: {\"id\": 1}"
        );
    }

    #[test]
    fn missing_template_fails_without_writing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("result.txt");
        let cli = base_cli(dir.path().join("absent_prompt.txt"), out.clone());

        let err = run(&cli).unwrap_err();

        assert!(matches!(err, PromptGenError::MissingFile(_)));
        assert!(!out.exists());
    }

    #[test]
    fn missing_bound_input_fails_without_writing() {
        let dir = TempDir::new().unwrap();
        let prompt = write(
            &dir,
            "policy_condition_judge_prompt.txt",
            "[ORIGINAL_DOCUMENT_PLACEHOLDER]",
        );
        let out = dir.path().join("result.txt");

        let mut cli = base_cli(prompt, out.clone());
        cli.original_document = Some(dir.path().join("absent_doc.txt"));

        let err = run(&cli).unwrap_err();

        assert!(matches!(err, PromptGenError::MissingFile(_)));
        assert!(!out.exists());
    }

    #[test]
    fn unrecognized_template_fails_without_writing() {
        let dir = TempDir::new().unwrap();
        let prompt = write(&dir, "random.txt", "no placeholders");
        // Exact output path: the original implementation wrote the file and
        // only then failed while reporting; classification now runs first.
        let out = dir.path().join("result.txt");

        let cli = base_cli(prompt, out.clone());
        let err = run(&cli).unwrap_err();

        assert!(matches!(err, PromptGenError::UnrecognizedTemplate(_)));
        assert!(!out.exists());
    }

    #[test]
    fn reported_identifier_uses_first_bound_slot_only() {
        let dir = TempDir::new().unwrap();
        let prompt = write(&dir, "data_dictionary_judge_prompt.txt", "text");
        stdfs::create_dir(dir.path().join("plain")).unwrap();
        stdfs::create_dir(dir.path().join("LCD_777")).unwrap();
        let doc = write(&dir, "plain/doc.txt", "d");
        let policy = write(&dir, "LCD_777/policy.json", "{}");
        let out = dir.path().join("result.txt");

        let mut cli = base_cli(prompt, out);
        cli.original_document = Some(doc);
        cli.extracted_policy = Some(policy);

        let report = run(&cli).unwrap();

        // Document is bound but carries no identifier; the policy path is
        // not consulted for the report.
        assert_eq!(report.policy_id, None);
    }
}
