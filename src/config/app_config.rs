use std::env;
use std::path::{Path, PathBuf};

use reqwest::Client;

use super::probe_config::ProbeConfig;
use crate::error::{Error, Result};
use crate::http_probe::prelude::*;
use crate::logging::default_log_file;
use crate::probe::prelude::Orchestrator;
use crate::quic_probe::prelude::QuicProber;

const DEFAULT_CONFIG_FILE: &str = "config.yml";

pub struct AppConfig {
    pub config: ProbeConfig,
    pub log_file: PathBuf,
}

/// Load the probe configuration.
///
/// `path` wins over the `CONFIG_FILE` environment variable, which wins over
/// `config.yml`. A missing default file means defaults; a missing file that
/// was asked for explicitly is an error. `LOG_FILE` overrides the log path.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let (location, explicit) = match (path, env::var("CONFIG_FILE")) {
        (Some(p), _) => (p.to_path_buf(), true),
        (None, Ok(p)) => (PathBuf::from(p), true),
        (None, Err(_)) => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let config = if location.exists() {
        let config_str = std::fs::read_to_string(&location)?;
        parse_config(&config_str)?
    } else if explicit {
        return Err(Error::Config(format!(
            "config file {} not found",
            location.display()
        )));
    } else {
        ProbeConfig::default()
    };

    let log_file = env::var("LOG_FILE")
        .map(PathBuf::from)
        .ok()
        .or_else(|| config.log_file.clone())
        .unwrap_or_else(default_log_file);

    Ok(AppConfig { config, log_file })
}

pub fn parse_config(yaml: &str) -> Result<ProbeConfig> {
    // an empty file is a valid, all-default config
    if yaml.trim().is_empty() {
        return Ok(ProbeConfig::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Setup the HTTPS client used for protocol negotiation.
pub fn setup_client(config: &ProbeConfig) -> Result<Client> {
    build_client(&config.user_agent, config.accept_invalid_certs)
}

/// Wire the real probers together from the configuration.
pub fn setup_orchestrator(
    config: &ProbeConfig,
) -> Result<Orchestrator<HttpNegotiator, QuicProber>> {
    let negotiator = HttpNegotiator::new(setup_client(config)?, config.http_timeout());
    let prober = QuicProber::new(config.udp_timeout());
    Ok(Orchestrator::new(negotiator, prober))
}
