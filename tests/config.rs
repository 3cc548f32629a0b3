#[cfg(test)]
mod tests {
    use eckho::libs::config::{Config, SeedConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_lifecycle(_ctx: &mut ConfigTestContext) {
        // Missing file reads as defaults.
        assert_eq!(Config::read().unwrap(), Config::default());

        // Saved settings survive a round trip.
        let config = Config {
            default_employee: Some("john.smith".to_string()),
            seed: Some(SeedConfig { months_back: 2 }),
        };
        config.save().unwrap();
        assert_eq!(Config::read().unwrap(), config);

        // Deleting resets to defaults; deleting twice is harmless.
        Config::delete().unwrap();
        assert_eq!(Config::read().unwrap(), Config::default());
        Config::delete().unwrap();
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_seed_config_default_depth(_ctx: &mut ConfigTestContext) {
        assert_eq!(SeedConfig::default().months_back, 3);
    }
}
