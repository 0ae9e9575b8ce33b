use crate::core::domain::Configuration;

pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        // disable printing the name of the module in every log line.
        .with_target(false);
    if config.json_logs {
        // colour codes would end up inside the json strings.
        builder.with_ansi(false).json().init();
    } else {
        builder.init();
    }
}
