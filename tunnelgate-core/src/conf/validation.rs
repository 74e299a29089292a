use crate::conf::types::{MetricsKind, TunnelGateConfig};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub message: String,
    pub help: Option<String>,
}

/// Non-fatal findings about a parsed config.
///
/// Nothing here blocks startup: every value that parses has a defined
/// meaning, so the report only carries warnings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn has_violations(&self) -> bool {
        !self.warnings.is_empty()
    }

    fn warning(&mut self, message: impl Into<String>, help: Option<&str>) {
        self.warnings.push(ValidationIssue {
            message: message.into(),
            help: help.map(str::to_string),
        });
    }

    pub fn render_plain(&self) {
        for issue in &self.warnings {
            println!("warning: {}", issue.message);

            if let Some(help) = &issue.help {
                println!("  help: {}", help);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub config: TunnelGateConfig,
    pub report: ValidationReport,
}

pub fn validate_config(config: TunnelGateConfig) -> ValidatedConfig {
    let mut report = ValidationReport::default();
    let tunnels = &config.tunnels;

    if tunnels.max_concurrent < 0 {
        report.warning(
            format!(
                "tunnels.max_concurrent = {} is negative and is treated as disabled",
                tunnels.max_concurrent
            ),
            Some("Use 0 to disable tunnel limiting explicitly."),
        );
    }

    if !tunnels.is_enabled() && tunnels.metrics != MetricsKind::None {
        report.warning(
            "tunnels.metrics is set but tunnel limiting is disabled; no denials will be counted",
            None,
        );
    }

    ValidatedConfig { config, report }
}
