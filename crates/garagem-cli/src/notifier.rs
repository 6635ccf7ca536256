//! Status notifications on the terminal

use std::io::Write;
use std::time::Duration;

use garagem_types::{MessageKind, Notifier, NotifyError};

/// Writes notifications to stderr, prefixed by their kind. The duration
/// has no meaning on a terminal and is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(
        &self,
        message: &str,
        kind: MessageKind,
        _duration: Duration,
    ) -> Result<(), NotifyError> {
        write_notification(&mut std::io::stderr().lock(), message, kind)
    }
}

fn write_notification(
    out: &mut impl Write,
    message: &str,
    kind: MessageKind,
) -> Result<(), NotifyError> {
    writeln!(out, "[{}] {}", kind, message).map_err(|e| NotifyError::Failed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_notification() {
        let mut out = Vec::new();
        write_notification(&mut out, "Erro ao salvar dados (x).", MessageKind::Error).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[error] Erro ao salvar dados (x).\n");
    }

    #[test]
    fn test_write_failure() {
        let err = write_notification(&mut ClosedPipe, "oi", MessageKind::Info).unwrap_err();
        assert!(matches!(err, NotifyError::Failed(_)));
    }
}
