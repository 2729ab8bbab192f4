//! Telephony handler backed by the OS URI opener.
//!
//! Hands a `tel:` URI to `xdg-open` / `open` / `cmd /C start`, whichever the
//! platform provides. A missing opener or a non-zero exit is reported as
//! [`TelephonyError::Unavailable`]; callers turn that into a message.

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use sg_core::ports::{TelephonyError, TelephonyPort};
use sg_core::PhoneNumber;

pub struct SystemDialer {
    program: String,
    args: Vec<String>,
}

impl SystemDialer {
    /// Dialer using the platform's default URI opener.
    pub fn new() -> Self {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("open", &[])
        } else if cfg!(windows) {
            ("cmd", &["/C", "start", ""])
        } else {
            ("xdg-open", &[])
        };
        Self::with_opener(program, args.iter().map(|a| a.to_string()).collect())
    }

    /// Dialer using a specific opener program. The `tel:` URI is appended
    /// after `args`.
    pub fn with_opener(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Default for SystemDialer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TelephonyPort for SystemDialer {
    async fn dial(&self, number: &PhoneNumber) -> Result<(), TelephonyError> {
        if !number.is_dialable() {
            return Err(TelephonyError::InvalidNumber(number.to_string()));
        }

        let uri = number.tel_uri();
        debug!(program = %self.program, "opening telephony handler");

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(&uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                warn!(program = %self.program, error = %e, "telephony handler failed to start");
                match e.kind() {
                    io::ErrorKind::NotFound => {
                        TelephonyError::Unavailable(format!("{} not found", self.program))
                    }
                    _ => TelephonyError::Unavailable(e.to_string()),
                }
            })?;

        if !status.success() {
            warn!(program = %self.program, %status, "telephony handler exited with failure");
            return Err(TelephonyError::Unavailable(format!(
                "{} exited with {status}",
                self.program
            )));
        }
        Ok(())
    }
}
