use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    debug: bool,
}

impl Logger {
    pub fn init(debug: bool) {
        let _ = LOGGER.get_or_init(|| Logger { debug });
    }

    fn get() -> &'static Logger {
        LOGGER
            .get()
            .expect("Logger not initialized. Call Logger::init() in main first.")
    }

    /// Status lines for the normal run. Always printed, to stdout.
    pub fn info(message: &str) {
        println!("{message}");
    }

    /// Diagnostics, printed to stderr only when --debug is set.
    pub fn debug(message: &str) {
        let logger = Self::get();
        if logger.debug {
            eprintln!("{message}");
        }
    }
}
