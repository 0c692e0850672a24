use std::io::Write;

use crate::config::{ConfigBuilder, ConfigLoader, LogFormat, LogLevel, RelayConfig, validation};

#[test]
fn test_default_config() {
    let config = RelayConfig::default();
    assert_eq!(config.retrieval.top_k, 5);
    assert!((config.retrieval.min_score - 0.3).abs() < f32::EPSILON);
    assert_eq!(config.provider.embedding_model, "text-embedding-3-small");
    assert_eq!(config.provider.embedding_dimensions, 1536);
    assert_eq!(config.logging.level, LogLevel::Info);
    assert!(!config.generation.model_ids.is_empty());
    assert!(!config.generation.base_instruction.is_empty());
}

#[test]
fn test_config_builder() {
    let config = ConfigBuilder::new()
        .with_top_k(3)
        .with_min_score(0.5)
        .with_model_ids(["model-a", "model-b"])
        .with_embedding_model("test-embed", 384)
        .with_log_level(LogLevel::Debug)
        .with_log_format(LogFormat::Compact)
        .build()
        .unwrap();

    assert_eq!(config.retrieval.top_k, 3);
    assert!((config.retrieval.min_score - 0.5).abs() < f32::EPSILON);
    assert_eq!(config.generation.model_ids, vec!["model-a", "model-b"]);
    assert_eq!(config.provider.embedding_model, "test-embed");
    assert_eq!(config.provider.embedding_dimensions, 384);
    assert_eq!(config.logging.level, LogLevel::Debug);
    assert_eq!(config.logging.format, LogFormat::Compact);
}

#[test]
fn test_validation_rejects_bad_values() {
    assert!(ConfigBuilder::new().with_top_k(0).build().is_err());
    assert!(ConfigBuilder::new().with_min_score(1.5).build().is_err());
    assert!(
        ConfigBuilder::new()
            .with_model_ids(Vec::<String>::new())
            .build()
            .is_err()
    );
    assert!(
        ConfigBuilder::new()
            .with_base_instruction("   ")
            .build()
            .is_err()
    );
    assert!(
        ConfigBuilder::new()
            .with_embedding_model("m", 0)
            .build()
            .is_err()
    );
}

#[test]
fn test_validation_passes_for_defaults() {
    let config = RelayConfig::default();
    assert!(validation::validate_config(&config).is_ok());
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = ConfigBuilder::new()
        .with_top_k(7)
        .with_model_ids(["only-model"])
        .build()
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: RelayConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(config.retrieval.top_k, deserialized.retrieval.top_k);
    assert_eq!(
        config.generation.model_ids,
        deserialized.generation.model_ids
    );
}

#[test]
fn test_loader_merges_toml_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        "[retrieval]\ntop_k = 2\nmin_score = 0.6\n\n[logging]\nlevel = \"debug\""
    )
    .unwrap();

    let mut loader = ConfigLoader::new();
    loader.load_file(file.path()).unwrap();
    let config = loader.build().unwrap();

    assert_eq!(config.retrieval.top_k, 2);
    assert!((config.retrieval.min_score - 0.6).abs() < f32::EPSILON);
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Untouched sections keep their defaults
    assert_eq!(config.provider.embedding_dimensions, 1536);
}

#[test]
fn test_loader_rejects_missing_file() {
    let mut loader = ConfigLoader::new();
    assert!(loader.load_file("/nonexistent/relingo.toml").is_err());
}

#[test]
fn test_log_level_parsing() {
    assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warn);
    assert_eq!("TRACE".parse::<LogLevel>().unwrap(), LogLevel::Trace);
    assert!("verbose".parse::<LogLevel>().is_err());
}
