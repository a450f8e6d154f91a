use hub_config::HubConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &HubConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &HubConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.store.is_configured() && has_env_prefix(&env_keys, "CARDHUB_STORE") {
        warnings.push(
            "Store config appears default while CARDHUB_STORE* env vars exist. Use double underscores (example: CARDHUB_STORE__URL)."
                .to_string(),
        );
    }

    if !config.auth.has_login_url() && has_env_prefix(&env_keys, "CARDHUB_AUTH") {
        warnings.push(
            "Auth config appears default while CARDHUB_AUTH* env vars exist. Use double underscores (example: CARDHUB_AUTH__LOGIN_URL)."
                .to_string(),
        );
    }

    warnings
}

/// Keys that start with the section prefix but not with `<prefix>__`.
fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    let nested = format!("{prefix}__");
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key.starts_with(&nested))
}

#[cfg(test)]
mod tests {
    use hub_config::{AuthConfig, HubConfig, StoreConfig};
    use pretty_assertions::assert_eq;

    use super::collect_unconfigured_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &HubConfig::default(),
            env(&[
                ("CARDHUB_STORE_URL", "https://store.example"),
                ("CARDHUB_AUTH_LOGIN_URL", "https://login.example"),
            ]),
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("CARDHUB_STORE__URL"));
    }

    #[test]
    fn does_not_warn_when_sections_are_configured() {
        let config = HubConfig {
            store: StoreConfig {
                url: "https://store.example".to_string(),
                ..Default::default()
            },
            auth: AuthConfig {
                login_url: "https://login.example".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[
                ("CARDHUB_STORE_URL", "https://store.example"),
                ("CARDHUB_AUTH_LOGIN_URL", "https://login.example"),
            ]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn correctly_nested_keys_are_not_flagged() {
        let warnings = collect_unconfigured_warnings(
            &HubConfig::default(),
            env(&[("CARDHUB_STORE__TIMEOUT_SECS", "5")]),
        );
        assert!(warnings.is_empty());
    }
}
