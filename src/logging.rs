use std::time::SystemTime;

use log::LevelFilter;

/// sends everything at info and above to stdout. Rocket is very chatty at info, so its own targets are held to warnings
pub fn init_logging() -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Info)
        .level_for("rocket", LevelFilter::Warn)
        .level_for("_", LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()
}
