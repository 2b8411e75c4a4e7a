//! Handler implementations
//!
//! Pipelines are built by nesting decorators, outermost first:
//!
//! ```
//! use rust_log_pipeline::handlers::{
//!     CallerFileHandler, LevelFilterHandler, StreamHandler, SyncHandler,
//! };
//! use rust_log_pipeline::format::LogfmtFormat;
//! use rust_log_pipeline::LogLevel;
//!
//! let handler = LevelFilterHandler::new(
//!     LogLevel::Info,
//!     CallerFileHandler::new(
//!         SyncHandler::new(StreamHandler::new(std::io::stderr(), LogfmtFormat::new())),
//!         true,
//!     ),
//! );
//! # let _ = handler;
//! ```

pub mod caller;
pub mod filter;
pub mod func;
pub mod multi;
pub mod stream;
pub mod sync;

pub use caller::{find_caller, CallerFileHandler, CallerFuncHandler, CallerStackHandler, StackFormat};
pub use filter::{DiscardHandler, FilterHandler, LevelFilterHandler};
pub use func::{handler_fn, FuncHandler};
pub use multi::MultiHandler;
pub use stream::StreamHandler;
pub use sync::SyncHandler;

// Re-export the trait next to its implementations
pub use crate::core::Handler;

#[cfg(test)]
pub(crate) mod test_util {
    use crate::core::{Handler, LoggerError, Record, Result};
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use std::sync::Arc;

    /// Keeps a copy of every record it receives
    #[derive(Default)]
    pub struct RecordingHandler {
        pub records: Mutex<Vec<Record>>,
        fail: bool,
    }

    impl RecordingHandler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Records the call, then fails
        pub fn failing() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        pub fn len(&self) -> usize {
            self.records.lock().len()
        }
    }

    impl Handler for RecordingHandler {
        fn log(&self, record: &mut Record) -> Result<()> {
            self.records.lock().push(record.clone());
            if self.fail {
                return Err(LoggerError::handler("recording handler failure"));
            }
            Ok(())
        }
    }

    /// In-memory sink that can be shared with a `StreamHandler`
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for &SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
