//! Logging backend which writes timestamped lines to a host-provided sink.

use std::io::Write;
use std::sync::Mutex;

use chrono::Local;
use eyre::Result;
use log::{Level, Metadata, Record};
use once_cell::sync::OnceCell;

fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => "info",
        Level::Debug | Level::Trace => "debug",
    }
}

pub struct Logger {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl log::Log for Logger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        // Only the last path segment; full module paths are noise here.
        let module = record
            .module_path()
            .and_then(|path| path.split("::").last())
            .unwrap_or("unknown");

        let time = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        let mut sink = match self.sink.lock() {
            Ok(sink) => sink,
            Err(_) => return,
        };

        //      [date time] [module] [level] Text
        let _ = writeln!(
            sink,
            "[{}] [{}] [{}] {}",
            time,
            module,
            level_name(record.level()),
            record.args()
        );
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.flush();
        }
    }
}

static LOGGER: OnceCell<Logger> = OnceCell::new();

/// Installs the logger over `sink`. Fails if a logger has already been
/// installed in this process.
pub fn init(sink: Box<dyn Write + Send>) -> Result<()> {
    let logger = LOGGER.get_or_init(|| Logger {
        sink: Mutex::new(sink),
    });

    log::set_logger(logger).map_err(|e| eyre::eyre!(e))?;
    log::set_max_level(log::LevelFilter::max());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use std::sync::Arc;

    #[derive(Clone)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn lines_carry_module_level_and_message() {
        let buf = SharedBuf(Arc::new(Mutex::new(Vec::new())));
        let logger = Logger {
            sink: Mutex::new(Box::new(buf.clone())),
        };

        logger.log(
            &Record::builder()
                .args(format_args!("mod CalamityMod not found"))
                .level(Level::Warn)
                .module_path(Some("relogo::registry"))
                .build(),
        );

        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(written.contains("[registry] [warning] mod CalamityMod not found"));
        assert!(written.ends_with('\n'));
    }
}
