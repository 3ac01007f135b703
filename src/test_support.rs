use crate::command::{CommandOutput, CommandRunner};
use crate::error::Result;
use crate::logging;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

/// In-memory log sink shared between a subscriber and the test that inspects it.
#[derive(Clone, Default)]
pub(crate) struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buf.lock().unwrap_or_else(|poison| poison.into_inner())
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Assert that `needles` appear in the log in this order.
    pub(crate) fn assert_sequence(&self, needles: &[&str]) {
        let contents = self.contents();
        let mut from = 0;
        for needle in needles {
            match contents[from..].find(needle) {
                Some(offset) => from += offset + needle.len(),
                None => panic!(
                    "expected {:?} after byte {} in log:\n{}",
                    needle, from, contents
                ),
            }
        }
    }
}

pub(crate) struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter(Arc::clone(&self.buf))
    }
}

/// Run `f` with the script's log format installed on this thread only.
pub(crate) fn with_captured_logs<T>(verbose: bool, f: impl FnOnce() -> T) -> (T, LogCapture) {
    let capture = LogCapture::default();
    let subscriber = logging::subscriber(logging::fixed_filter(verbose), capture.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, capture)
}

/// A command runner that records invocations and replays a canned result.
#[derive(Default)]
pub(crate) struct RecordingRunner {
    calls: Mutex<Vec<(Vec<String>, Option<PathBuf>)>>,
}

impl RecordingRunner {
    pub(crate) fn calls(&self) -> Vec<(Vec<String>, Option<PathBuf>)> {
        self.calls
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, args: &[String], cwd: Option<&Path>) -> Result<CommandOutput> {
        self.calls
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .push((args.to_vec(), cwd.map(Path::to_path_buf)));
        Ok(CommandOutput {
            status: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}
