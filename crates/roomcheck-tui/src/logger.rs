/// Logger that captures records to a memory buffer instead of stdout,
/// so log output never corrupts the terminal display. The buffer backs
/// the log overlay.
use log::{Level, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

const MAX_LOG_LINES: usize = 5_000;

/// A log entry with timestamp and formatted message
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn format(&self) -> String {
        format!(
            "[{}] {} {}: {}",
            self.timestamp, self.level, self.target, self.message
        )
    }
}

/// Thread-safe log buffer
#[derive(Clone)]
pub struct LogBuffer {
    logs: Arc<RwLock<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(RwLock::new(VecDeque::new())),
        }
    }

    pub fn add_log(&self, entry: LogEntry) {
        let mut logs = self.logs.write().unwrap();
        if logs.len() >= MAX_LOG_LINES {
            logs.pop_front();
        }
        logs.push_back(entry);
    }

    pub fn get_recent_logs(&self, count: usize) -> Vec<String> {
        let logs = self.logs.read().unwrap();
        let start = logs.len().saturating_sub(count);
        logs.iter()
            .skip(start)
            .map(|entry| entry.format())
            .collect()
    }
}

/// Custom logger that writes to the memory buffer
pub struct BufferedLogger {
    buffer: LogBuffer,
}

impl log::Log for BufferedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.add_log(LogEntry {
                timestamp: chrono::Local::now()
                    .format("%Y-%m-%d %H:%M:%S%.3f")
                    .to_string(),
                level: record.level().to_string(),
                target: record.target().to_string(),
                message: format!("{}", record.args()),
            });
        }
    }

    fn flush(&self) {}
}

/// Initialize the buffered logger and return the buffer for reading logs.
/// If a logger is already set the buffer still works, it just captures
/// nothing; stderr stays untouched either way.
pub fn init_memory_logger() -> Result<LogBuffer, SetLoggerError> {
    let buffer = LogBuffer::new();
    let _ = log::set_boxed_logger(Box::new(BufferedLogger {
        buffer: buffer.clone(),
    }));
    log::set_max_level(log::LevelFilter::Debug);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_logs_keep_insertion_order() {
        let buffer = LogBuffer::new();
        for i in 0..5 {
            buffer.add_log(LogEntry {
                timestamp: String::new(),
                level: "INFO".to_string(),
                target: "test".to_string(),
                message: format!("line {}", i),
            });
        }

        let recent = buffer.get_recent_logs(2);
        assert_eq!(recent.len(), 2);
        assert!(recent[0].ends_with("line 3"));
        assert!(recent[1].ends_with("line 4"));
    }
}
