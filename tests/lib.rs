mod calendar;
mod protocol;
mod text;
mod zones;

/// A type alias for tests that want to use `?`.
type Result = std::result::Result<(), epochal::Error>;

/// A logger that writes everything to stderr.
///
/// Call `Logger::init()` at the start of a test to see what the crate logs
/// when the `logging` feature is enabled. Only the first call installs it.
#[derive(Debug)]
struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    fn init() -> std::result::Result<(), log::SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        eprintln!(
            "{}|{}|{}",
            record.level(),
            record.target(),
            record.args(),
        );
    }

    fn flush(&self) {}
}
