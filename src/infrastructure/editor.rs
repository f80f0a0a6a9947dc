//! Compose entry text in an external editor

use crate::error::{DiaryError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

const SCRATCH_FILE: &str = "ENTRY_EDITMSG.md";

/// Runs the configured editor on a scratch file and collects what was written
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open `initial` in the editor inside `dir`, wait for it to exit and
    /// return the saved text without trailing whitespace
    pub fn capture(&self, dir: &Path, initial: &str) -> Result<String> {
        let scratch = dir.join(SCRATCH_FILE);
        fs::write(&scratch, initial)?;

        let outcome = self.run(&scratch);
        let text = outcome.and_then(|()| fs::read_to_string(&scratch).map_err(DiaryError::Io));
        // Scratch file goes away whether or not the edit succeeded
        let _ = fs::remove_file(&scratch);

        Ok(text?.trim_end().to_string())
    }

    fn run(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();

        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&program);
            cmd
        };
        #[cfg(not(windows))]
        let mut cmd = Command::new(&program);

        let status = cmd.args(&args).arg(file_path).status().map_err(|e| {
            DiaryError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(DiaryError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }
        Ok(())
    }

    /// Split the command line into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let mut parts = self.command.split_whitespace().map(str::to_string);
        match parts.next() {
            Some(program) => (program, parts.collect()),
            None if cfg!(windows) => ("notepad".to_string(), vec![]),
            None => ("nano".to_string(), vec![]),
        }
    }
}
