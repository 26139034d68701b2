//! Tests for configuration

#[cfg(test)]
mod tests {
    use super::super::config::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_value_scan_config_defaults() {
        let config: ValueScanConfig = toml::from_str("").unwrap();
        assert_eq!(config.min_odds, dec!(1.45));
        assert_eq!(config.min_value_ratio, dec!(1.15));
        assert_eq!(config.min_votes, 10);
        assert_eq!(config.top_n, 6);
    }

    #[test]
    fn test_contrarian_config_defaults() {
        let config: ContrarianConfig = toml::from_str("").unwrap();
        assert_eq!(config.min_expert_p1, dec!(0.70));
        assert_eq!(config.min_fair_p2, dec!(0.45));
        assert_eq!(config.fair_over_expert, dec!(1.1));
        assert_eq!(config.top_n, 3);
    }

    #[test]
    fn test_config_defaults_from_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.value.min_votes, 10);
        assert_eq!(config.contrarian.top_n, 3);
    }

    #[test]
    fn test_value_scan_config_overrides() {
        let toml_str = r#"
min_odds = 1.60
min_value_ratio = 1.25
min_votes = 5
top_n = 10
"#;
        let config: ValueScanConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.min_odds, dec!(1.60));
        assert_eq!(config.min_value_ratio, dec!(1.25));
        assert_eq!(config.min_votes, 5);
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn test_config_partial_override_keeps_other_defaults() {
        let toml_str = r#"
[value]
min_votes = 1
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.value.min_votes, 1);
        assert_eq!(config.value.min_odds, dec!(1.45));
        assert_eq!(config.contrarian.min_expert_p1, dec!(0.70));
    }

    #[test]
    fn test_config_load_missing_file_uses_defaults() {
        let config = Config::load("does-not-exist").unwrap();
        assert_eq!(config.value.top_n, 6);
    }

    #[test]
    fn test_config_load_from_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "[value]\nmin_votes = 2\ntop_n = 4").unwrap();
        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.value.min_votes, 2);
        assert_eq!(config.value.top_n, 4);
        assert_eq!(config.contrarian.top_n, 3);
    }
}
