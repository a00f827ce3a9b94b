//! Integration tests that prove `.env` values flow through figment.
//!
//! `dotenvy` loads into the process environment, which outlives each test;
//! every test therefore uses its own config key so ordering cannot matter.
//! figment's Jail serializes these tests against the other env tests.

use figment::Jail;
use neuro_config::NeuroConfig;

#[test]
fn dotenv_values_flow_through_figment() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "NEURO_OPENAI__API_KEY=sk-dotenv\n")?;

        let config = NeuroConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.openai.api_key, "sk-dotenv");
        assert!(config.openai.is_configured());
        Ok(())
    });
}

#[test]
fn process_env_beats_dotenv() {
    Jail::expect_with(|jail| {
        jail.set_env("NEURO_DATABASE__URL", "sqlite://./process.db");
        jail.create_file(".env", "NEURO_DATABASE__URL=sqlite://./dotenv.db\n")?;

        let config = NeuroConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.database.url, "sqlite://./process.db");
        Ok(())
    });
}

#[test]
fn dotenv_from_explicit_path_feeds_load() {
    Jail::expect_with(|_jail| {
        let dir = tempfile::tempdir().expect("tempdir");
        let env_path = dir.path().join(".env");
        std::fs::write(&env_path, "NEURO_OUTPUT__OUTPUT_DIR=generated\n").expect("write .env");

        dotenvy::from_path(&env_path).expect("load .env");
        let config = NeuroConfig::load().expect("config loads");
        assert_eq!(config.output.output_dir, "generated");
        Ok(())
    });
}
