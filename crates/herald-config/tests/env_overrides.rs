use figment::Jail;
use herald_config::HeraldConfig;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("HERALD_REVALIDATION__ENDPOINT", "https://modonty.com/api/revalidate");
        jail.set_env("HERALD_REVALIDATION__SECRET", "from-env");
        jail.set_env("HERALD_ONTOLOGY__TTL_SECS", "60");

        let config = HeraldConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.revalidation.secret, "from-env");
        assert!(config.revalidation.is_configured());
        assert_eq!(config.ontology.ttl_secs, 60);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".herald")).map_err(|e| e.to_string())?;
        jail.create_file(
            ".herald/config.toml",
            r"
[graph]
list_window = 5
",
        )?;
        jail.set_env("HERALD_GRAPH__LIST_WINDOW", "8");

        let config = HeraldConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.graph.list_window, 8);
        Ok(())
    });
}
