//! Integration tests for evaluating dictionaries against a reference

use std::fs;

use tempfile::TempDir;
use wordform::prelude::*;

const TEXT: &str = "She walked to the market while he was walking home. They walk every day; \
    walks are good. The dogs ran, the dog runs, and running dogs bark.";

const IDEAL: &str = r#"{
    "words": {
        "walk": ["walk", "walks", "walked", "walking"],
        "dog": ["dog", "dogs"],
        "run": ["run", "runs", "running", "ran"],
        "bark": ["bark", "barks"]
    }
}"#;

fn build() -> Result<Dictionary> {
    DictionaryPipeline::new(
        DictionaryConfig::default().with_separator_strategy(SeparatorStrategy::Predefined),
    )?
    .build_from_text(TEXT)
}

#[test]
fn test_evaluate_from_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ideal.json");
    fs::write(&path, IDEAL)?;

    let ideal = IdealDictionary::from_json_file(&path)?;
    let dictionary = build()?;
    let report = ideal.evaluate(&dictionary);

    assert_eq!(report.words_evaluated, dictionary.len());

    // Only roots equal to a reference key (ignoring case) are correct.
    let correct_roots = dictionary
        .words()
        .filter(|word| {
            ideal
                .find_target(word.root())
                .is_some_and(|(key, _)| key.eq_ignore_ascii_case(word.root()))
        })
        .count();
    assert_eq!(report.root_token_errors, dictionary.len() - correct_roots);

    let walk = dictionary.get("walk").unwrap();
    assert_eq!(walk.variants().len(), 4);
    assert_eq!(ideal.find_target(walk.root()).unwrap().0, "walk");

    // "runs" is the shortest form seen, so it is found through the "run"
    // entry's variants and counts as a wrong root.
    let runs = dictionary.get("runs").unwrap();
    assert_eq!(ideal.find_target(runs.root()).unwrap().0, "run");
    assert!(report.root_token_errors >= 1);
    Ok(())
}

#[test]
fn test_perfect_dictionary_has_no_errors() -> Result<()> {
    let ideal = IdealDictionary::from_json_str(IDEAL)?;
    let dictionary = DictionaryPipeline::new(DictionaryConfig::default())?
        .build_from_tokens(&["walks", "walk", "dogs", "dog", "bark"])?;

    let report = ideal.evaluate(&dictionary);
    assert_eq!(report.words_evaluated, 3);
    assert_eq!(report.root_token_errors, 0);
    assert_eq!(report.token_errors, 0);
    assert!(report.within(&QualityThresholds::new(Some(0), Some(0))));
    Ok(())
}

#[test]
fn test_thresholds_against_reference() -> Result<()> {
    let ideal = IdealDictionary::from_json_str(IDEAL)?;
    let report = ideal.evaluate(&build()?);

    assert!(report.within(&QualityThresholds::default()));
    assert!(report.within(&QualityThresholds::new(
        Some(report.root_token_errors),
        Some(report.token_errors)
    )));
    assert!(!report.within(&QualityThresholds::new(Some(0), None)));
    Ok(())
}

#[test]
fn test_malformed_reference() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ideal.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        IdealDictionary::from_json_file(&path),
        Err(WordformError::Json(_))
    ));
    assert!(matches!(
        IdealDictionary::from_json_file(temp_dir.path().join("missing.json")),
        Err(WordformError::Io(_))
    ));
}
