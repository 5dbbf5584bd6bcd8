use std::io::{self, BufRead, BufReader, Write};
use std::sync::{Mutex, PoisonError};

use blog_core::ports::UiPort;
use tracing::{info, warn};

/// Blocking prompts on a line-oriented terminal.
///
/// `confirm` asks `[y/N]`; only `y`/`yes` (any case) accepts. End of input
/// or a read error counts as "no".
pub struct TerminalUi {
    input: Mutex<Box<dyn BufRead + Send>>,
    output: Mutex<Box<dyn Write + Send>>,
}

impl TerminalUi {
    /// Reads answers from stdin, writes prompts to stderr.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }

    pub fn new(input: impl BufRead + Send + 'static, output: impl Write + Send + 'static) -> Self {
        Self {
            input: Mutex::new(Box::new(input)),
            output: Mutex::new(Box::new(output)),
        }
    }

    fn write_line(&self, text: &str, newline: bool) {
        let mut output = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        let result = if newline {
            writeln!(output, "{text}")
        } else {
            write!(output, "{text}")
        }
        .and_then(|_| output.flush());
        if let Err(e) = result {
            warn!(error = %e, "failed to write to terminal");
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

impl UiPort for TerminalUi {
    fn confirm(&self, message: &str) -> bool {
        self.write_line(&format!("{message} [y/N] "), false);

        let mut answer = String::new();
        let read = self
            .input
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .read_line(&mut answer);
        match read {
            Ok(0) => false,
            Ok(_) => is_yes(&answer),
            Err(e) => {
                warn!(error = %e, "failed to read confirmation");
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        self.write_line(message, true);
    }
}

/// Accepts every confirmation (`--yes`). Alerts still reach stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirmUi;

impl UiPort for AutoConfirmUi {
    fn confirm(&self, message: &str) -> bool {
        info!(prompt = %message, "confirmation auto-accepted");
        true
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn ui(input: &str) -> (TerminalUi, SharedBuf) {
        let out = SharedBuf::default();
        (TerminalUi::new(Cursor::new(input.to_string()), out.clone()), out)
    }

    #[test]
    fn confirm_accepts_only_yes() {
        let (ui, out) = ui("y\nYES\nn\n\nmaybe\n");
        assert!(ui.confirm("Delete?"));
        assert!(ui.confirm("Delete?"));
        assert!(!ui.confirm("Delete?"));
        assert!(!ui.confirm("Delete?"));
        assert!(!ui.confirm("Delete?"));
        assert!(out.text().starts_with("Delete? [y/N] "));
    }

    #[test]
    fn confirm_at_end_of_input_declines() {
        let (ui, _) = ui("");
        assert!(!ui.confirm("Delete?"));
    }

    #[test]
    fn alert_writes_a_line() {
        let (ui, out) = ui("");
        ui.alert("Failed to read file");
        assert_eq!(out.text(), "Failed to read file\n");
    }

    #[test]
    fn auto_confirm_always_accepts() {
        assert!(AutoConfirmUi.confirm("Delete?"));
    }
}
