//! Tests for loading minimizer settings from JSON.

use approx::assert_relative_eq;
use simplexopt_rs::{SimplexConfig, SimplexError, SimplexMinimizer, Termination};

#[test]
fn test_config_file_drives_minimizer() -> simplexopt_rs::Result<()> {
    let path = std::env::temp_dir().join(format!("simplex_config_{}.json", std::process::id()));

    let config = SimplexConfig {
        max_steps: 25,
        expansion_factor: 1.5,
        contraction_factor: 0.5,
        ..SimplexConfig::default()
    };
    config.save_json(&path)?;

    let loaded = SimplexConfig::load_json(&path)?;
    std::fs::remove_file(&path)?;
    assert_eq!(loaded, config);

    let mut minimizer = SimplexMinimizer::with_config(loaded);
    let result = minimizer.minimize_with_report(
        |v: &[f64; 2]| (v[0] - 4.0).powi(2) + (v[1] - 4.0).powi(2),
        [0.0, 0.0],
        0.5,
    );

    assert_eq!(result.iterations, 25);
    assert_eq!(result.termination, Termination::MaxStepsReached);
    Ok(())
}

#[test]
fn test_partial_document_uses_defaults() -> simplexopt_rs::Result<()> {
    let config = SimplexConfig::from_json(r#"{ "contraction_factor": 0.6 }"#)?;
    assert_relative_eq!(config.contraction_factor, 0.6);
    assert_eq!(config.max_steps, 1000);
    assert_relative_eq!(config.expansion_factor, 1.2);
    Ok(())
}

#[test]
fn test_invalid_documents_are_rejected() {
    let bad_factor = SimplexConfig::from_json(r#"{ "expansion_factor": 0.9 }"#);
    assert!(matches!(bad_factor, Err(SimplexError::InvalidParameter(_))));

    let not_json = SimplexConfig::from_json("max_steps = 10");
    assert!(matches!(not_json, Err(SimplexError::JsonError(_))));

    let missing = SimplexConfig::load_json("/nonexistent/simplex_config.json");
    assert!(matches!(missing, Err(SimplexError::IoError(_))));
}
