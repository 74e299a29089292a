use crate::conf::{ConfigError, load_config};
use std::path::Path;

pub fn check(path: &Path) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(validated) => {
            let tunnels = &validated.config.tunnels;
            println!("✔ Config loaded successfully");
            if tunnels.is_enabled() {
                println!("✔ tunnel limit: {}", tunnels.max_concurrent);
            } else {
                println!("✔ tunnel limit: disabled");
            }
            println!("✔ metrics: {:?}", tunnels.metrics);
            validated.report.render_plain();
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{}", err);
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Pass either the config file itself or the directory containing tunnelgate.hcl.",
        ),

        ConfigError::Parse { .. } => Some(
            "Tunnel limits live in a single block.\n\
             \n\
             Example:\n\
             \n\
             tunnels {\n\
             \x20 max_concurrent = 100\n\
             \x20 metrics        = \"tracing\"\n\
             }",
        ),
    }
}
