//! Implementation of the `vetted check` command.
//!
//! # Steps
//!
//! 1. Build the configuration (file or defaults, production profile, CLI overrides)
//! 2. Read the deliverables from files or stdin
//! 3. Normalize them into a `ValidationInput`
//! 4. Validate and merge into one report
//! 5. Print the summary or JSON report and map the verdict to an exit code

use super::load_config;
use crate::cli::{CheckArgs, OutputFormat};
use serde_json::json;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vetted::exit_codes::{SUCCESS, VALIDATION_FAILURE};
use vetted::{
    CandidateText, Result, Severity, ValidationConfig, ValidationInput, ValidationReport,
    VettedError, quick_validate,
};

const STDIN_PATH: &str = "-";

/// A deliverable read from disk or stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Source {
    /// File stem, or `stdin`. The full path when stems collide.
    name: String,
    text: String,
}

/// Validate the given deliverables and print the report.
pub fn cmd_check(args: CheckArgs) -> Result<i32> {
    let config = resolve_config(&args)?;
    let sources = if args.files.is_empty() {
        vec![read_stdin()?]
    } else {
        load_sources(&args.files)?
    };
    let input = build_input(&args, sources)?;

    let report = quick_validate(input, &config)?;
    info!(
        score = report.score(),
        valid = report.is_valid(),
        issues = report.issues().len(),
        "validation finished"
    );

    match args.format {
        OutputFormat::Text => print!("{}", report.summary()),
        OutputFormat::Json => println!("{:#}", render_json(&report)),
    }

    Ok(if report.is_valid() {
        SUCCESS
    } else {
        VALIDATION_FAILURE
    })
}

/// Config file or defaults, then the production profile, then flag overrides.
fn resolve_config(args: &CheckArgs) -> Result<ValidationConfig> {
    let mut config = load_config(args.config.as_deref(), args.production)?;

    if let Some(min_length) = args.min_length {
        config.min_output_length = min_length;
    }
    if let Some(threshold) = args.threshold {
        config.pass_threshold = threshold;
    }

    config.validate()?;
    Ok(config)
}

fn read_stdin() -> Result<Source> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| VettedError::Input(format!("failed to read stdin: {}", e)))?;

    Ok(Source {
        name: "stdin".to_string(),
        text,
    })
}

/// Read each file; `-` stands for stdin and may appear once.
///
/// Sources are named by file stem. When two files share a stem, each of
/// them is named by its path so every role label stays distinct.
fn load_sources(files: &[PathBuf]) -> Result<Vec<Source>> {
    let stdin_count = files
        .iter()
        .filter(|path| path.as_os_str() == STDIN_PATH)
        .count();
    if stdin_count > 1 {
        return Err(VettedError::Config(format!(
            "'{}' (stdin) given {} times; it can be read only once",
            STDIN_PATH, stdin_count
        )));
    }

    let mut sources = files
        .iter()
        .map(|path| {
            if path.as_os_str() == STDIN_PATH {
                read_stdin()
            } else {
                read_source(path)
            }
        })
        .collect::<Result<Vec<_>>>()?;

    let mut seen: HashMap<String, usize> = HashMap::new();
    for source in &sources {
        *seen.entry(source.name.clone()).or_default() += 1;
    }
    for (source, path) in sources.iter_mut().zip(files) {
        if seen.get(&source.name).is_some_and(|count| *count > 1) {
            debug!(stem = %source.name, path = %path.display(), "stem collision, using path");
            source.name = path.display().to_string();
        }
    }

    Ok(sources)
}

fn read_source(path: &Path) -> Result<Source> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        VettedError::Input(format!("failed to read '{}': {}", path.display(), e))
    })?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    debug!(path = %path.display(), chars = text.chars().count(), "read deliverable");
    Ok(Source { name, text })
}

/// Turn the sources into validation input.
///
/// One source is validated as a single deliverable carrying `--role` and
/// `--task-type`. Several sources become a mapping keyed by file stem.
fn build_input(args: &CheckArgs, mut sources: Vec<Source>) -> Result<ValidationInput> {
    if args.roles_json {
        if sources.len() != 1 {
            return Err(VettedError::Config(
                "--roles-json reads a single JSON document; pass one file or use stdin".to_string(),
            ));
        }
        let source = sources.remove(0);
        return ValidationInput::from_json(&source.text);
    }

    if sources.len() == 1 {
        let source = sources.remove(0);
        let mut candidate = CandidateText::new(source.text);
        candidate.role = args.role.clone();
        candidate.task_type = args.task_type.clone();
        return Ok(candidate.into());
    }

    if args.role.is_some() {
        return Err(VettedError::Config(
            "--role applies to a single deliverable; multiple files are keyed by file name"
                .to_string(),
        ));
    }

    let candidates = sources
        .into_iter()
        .map(|source| {
            let mut candidate = CandidateText::new(source.text).with_role(source.name);
            candidate.task_type = args.task_type.clone();
            candidate
        })
        .collect::<Vec<_>>();
    Ok(candidates.into())
}

fn render_json(report: &ValidationReport) -> serde_json::Value {
    json!({
        "is_valid": report.is_valid(),
        "score": report.score(),
        "pass_threshold": report.pass_threshold(),
        "counts": {
            "critical": report.count(Severity::Critical),
            "warning": report.count(Severity::Warning),
            "info": report.count(Severity::Info),
        },
        "issues": report.issues(),
        "passed_checks": report.passed_checks(),
        "skipped_checks": report.skipped_checks(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn args(extra: &[&str]) -> CheckArgs {
        let argv = ["vetted", "check"].iter().chain(extra.iter()).copied();
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Check(args) => args,
            other => panic!("Expected Check command, got {:?}", other),
        }
    }

    fn source(name: &str, text: &str) -> Source {
        Source {
            name: name.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn single_source_carries_role_and_task_type() {
        let args = args(&["--role", "Senior Engineer", "--task-type", "implementation"]);
        let input = build_input(&args, vec![source("stdin", "text")]).unwrap();

        let expected = CandidateText::new("text")
            .with_role("Senior Engineer")
            .with_task_type("implementation");
        assert_eq!(input, ValidationInput::Single(expected));
    }

    #[test]
    fn several_sources_are_keyed_by_name() {
        let args = args(&["--task-type", "design"]);
        let input = build_input(&args, vec![source("plan", "a"), source("notes", "b")]).unwrap();

        let ValidationInput::Roles(candidates) = input else {
            panic!("Expected Roles input");
        };
        assert_eq!(candidates[0].role.as_deref(), Some("plan"));
        assert_eq!(candidates[1].role.as_deref(), Some("notes"));
        assert!(candidates.iter().all(|c| c.task_type.as_deref() == Some("design")));
    }

    #[test]
    fn role_with_several_sources_is_rejected() {
        let args = args(&["--role", "writer"]);
        let err = build_input(&args, vec![source("a", "x"), source("b", "y")]).unwrap_err();
        assert!(matches!(err, VettedError::Config(_)));
    }

    #[test]
    fn roles_json_is_decoded() {
        let args = args(&["--roles-json"]);
        let input = build_input(&args, vec![source("stdin", r#"{"writer": "w", "analyst": "a"}"#)])
            .unwrap();
        assert_eq!(input.into_candidates().unwrap().len(), 2);
    }

    #[test]
    fn roles_json_needs_one_source() {
        let args = args(&["--roles-json"]);
        assert!(build_input(&args, vec![source("a", "{}"), source("b", "{}")]).is_err());
    }

    #[test]
    fn reads_files_by_stem() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("architecture.md");
        std::fs::write(&path, "# Design").unwrap();

        let sources = load_sources(&[path]).unwrap();
        assert_eq!(sources, vec![source("architecture", "# Design")]);
    }

    #[test]
    fn colliding_stems_are_named_by_path() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a").join("report.md");
        let second = dir.path().join("b").join("report.md");
        let other = dir.path().join("notes.md");
        for path in [&first, &second] {
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, "body").unwrap();
        }
        std::fs::write(&other, "body").unwrap();

        let sources = load_sources(&[first.clone(), second.clone(), other]).unwrap();
        let names: Vec<String> = sources.iter().map(|s| s.name.clone()).collect();
        assert_eq!(
            names,
            vec![
                first.display().to_string(),
                second.display().to_string(),
                "notes".to_string()
            ]
        );

        let input = build_input(&args(&[]), sources).unwrap();
        assert_eq!(input.into_candidates().unwrap().len(), 3);
    }

    #[test]
    fn stdin_given_twice_is_rejected() {
        let err = load_sources(&[PathBuf::from("-"), PathBuf::from("-")]).unwrap_err();
        assert!(matches!(err, VettedError::Config(_)));
        assert!(err.to_string().contains("2 times"));
    }

    #[test]
    fn missing_file_is_input_error() {
        let err = load_sources(&[PathBuf::from("/nonexistent/report.md")]).unwrap_err();
        assert!(matches!(err, VettedError::Input(_)));
        assert!(err.to_string().contains("/nonexistent/report.md"));
    }

    #[test]
    fn overrides_apply_after_profile() {
        let config = resolve_config(&args(&["--production", "--min-length", "50", "--threshold", "85"]))
            .unwrap();
        assert!(config.production_mode);
        assert_eq!(config.min_output_length, 50);
        assert_eq!(config.pass_threshold, 85.0);
    }

    #[test]
    fn invalid_threshold_override_is_rejected() {
        let err = resolve_config(&args(&["--threshold", "150"])).unwrap_err();
        assert!(matches!(err, VettedError::Config(_)));
    }

    #[test]
    fn short_file_fails_gate() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "ok").unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let code = cmd_check(args(&[path.as_str(), "--format", "json"])).unwrap();
        assert_eq!(code, VALIDATION_FAILURE);
    }

    #[test]
    fn lenient_config_passes_gate() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "min_output_length: 1\nrequire_specific_recommendations: false\ncheck_technical_depth: false"
        )
        .unwrap();
        let mut text = NamedTempFile::new().unwrap();
        write!(text, "All services are healthy.").unwrap();

        let config_path = file.path().to_string_lossy().into_owned();
        let text_path = text.path().to_string_lossy().into_owned();
        let code = cmd_check(args(&[text_path.as_str(), "--config", config_path.as_str()])).unwrap();
        assert_eq!(code, SUCCESS);
    }

    #[test]
    fn json_report_shape() {
        let report = quick_validate("ok", &ValidationConfig::default()).unwrap();
        let value = render_json(&report);

        assert_eq!(value["is_valid"], false);
        assert_eq!(value["counts"]["critical"], 2);
        assert_eq!(value["issues"][0]["check_name"], "completeness");
        assert!(value["passed_checks"].is_array());
    }
}
