use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs an `env_logger` backend once per process. `RUST_LOG` overrides
/// the defaults below.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("collision_tables", LevelFilter::Info)
            .filter_module("collision_demo", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed (tests, embedding apps).
        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use log::{debug, info};

    use super::*;

    #[test]
    fn initialize_twice_is_harmless() {
        initialize_logger();
        initialize_logger();
        debug!("debug message in test");
        info!("info message in test");
    }
}
