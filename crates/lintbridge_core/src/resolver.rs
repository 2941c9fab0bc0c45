//! Resolution of settings into an engine configuration and rule list.

use std::sync::Arc;

use lintbridge_engine::{Config, Rule, RuleSet};
use tracing::debug;

use crate::LintError;
use crate::config_map::create_config_map;
use crate::normalize::normalize;
use crate::registry::default_config;
use crate::settings::ReviveSettings;

/// Builds the normalized engine configuration for `settings`.
///
/// Empty settings use the built-in defaults. Otherwise the settings tree is
/// encoded to TOML and decoded with the engine's own schema, so values get
/// the same defaults and types as a hand-written configuration file.
pub fn resolve_config(settings: &ReviveSettings) -> Result<Config, LintError> {
    let mut config = if settings.is_empty() {
        default_config()
    } else {
        let raw = create_config_map(settings)?;
        let encoded =
            toml::to_string(&raw).map_err(|e| LintError::config_encoding(e.to_string()))?;
        toml::from_str::<Config>(&encoded).map_err(|e| LintError::config_decoding(e.to_string()))?
    };

    normalize(&mut config);

    debug!("revive configuration: {:?}", config);

    Ok(config)
}

/// Picks the rules to run from `catalogue`, in name order.
///
/// Disabled rules are skipped. An enabled rule missing from the catalogue is
/// a [`LintError::RuleResolution`].
pub fn resolve_lint_rules(
    config: &Config,
    catalogue: &RuleSet,
) -> Result<Vec<Arc<dyn Rule>>, LintError> {
    config
        .rules
        .iter()
        .filter(|(_, rule)| !rule.disabled)
        .map(|(name, _)| {
            catalogue
                .get(name)
                .ok_or_else(|| LintError::RuleResolution(name.clone()))
        })
        .collect()
}
