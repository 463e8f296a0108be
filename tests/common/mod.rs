//! Shared helpers for the integration tests.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::sync::Once;

static INIT: Once = Once::new();

/// Install a stderr logger once per test binary; visible with `--nocapture`.
pub fn init_logging() {
    INIT.call_once(|| {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new("{l} {M} - {m}{n}")))
            .build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Debug));
        match config {
            Ok(config) => {
                // another logger may already be installed
                let _ = log4rs::init_config(config);
            }
            Err(e) => eprintln!("Error building log4rs config: {e}"),
        }
    });
}
