use std::fmt;

pub(crate) const LOG_TARGET: &str = "rtc_ice_facade::native";

/// Where the native gatherer and transport write their diagnostics.
///
/// Defaults to the global logger installed with the `log` crate.
#[derive(Clone, Copy)]
pub struct LogSink(&'static dyn log::Log);

impl Default for LogSink {
    fn default() -> Self {
        LogSink(log::logger())
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink").finish_non_exhaustive()
    }
}

impl LogSink {
    pub fn new(logger: &'static dyn log::Log) -> Self {
        LogSink(logger)
    }

    pub(crate) fn log(&self, level: log::Level, args: fmt::Arguments<'_>) {
        if level > log::max_level() {
            return;
        }

        let metadata = log::Metadata::builder()
            .level(level)
            .target(LOG_TARGET)
            .build();
        if !self.0.enabled(&metadata) {
            return;
        }

        self.0.log(
            &log::Record::builder()
                .metadata(metadata)
                .args(args)
                .module_path_static(Some(module_path!()))
                .build(),
        );
    }

    pub(crate) fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(log::Level::Warn, args)
    }

    pub(crate) fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(log::Level::Debug, args)
    }

    pub(crate) fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(log::Level::Trace, args)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use std::sync::Mutex;

    /// Captures records so tests can assert on them.
    pub(crate) struct RecordingLogger {
        pub(crate) records: Mutex<Vec<(log::Level, String, String)>>,
    }

    impl log::Log for RecordingLogger {
        fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            if let Ok(mut records) = self.records.lock() {
                records.push((
                    record.level(),
                    record.target().to_owned(),
                    record.args().to_string(),
                ));
            }
        }

        fn flush(&self) {}
    }

    pub(crate) fn recording_sink() -> (LogSink, &'static RecordingLogger) {
        log::set_max_level(log::LevelFilter::Trace);
        let logger: &'static RecordingLogger = Box::leak(Box::new(RecordingLogger {
            records: Mutex::new(vec![]),
        }));
        (LogSink::new(logger), logger)
    }

    #[test]
    fn test_log_sink_target() {
        let (sink, logger) = recording_sink();
        sink.warn(format_args!("hello {}", 42));

        let records = logger.records.lock().unwrap();
        assert_eq!(
            records.as_slice(),
            &[(
                log::Level::Warn,
                LOG_TARGET.to_owned(),
                "hello 42".to_owned()
            )]
        );
    }
}
