//! Interactive prompt loop.

use std::io::{self, Write};

use anyhow::{Context, Result};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};

use crate::app::logic::Logic;
use crate::infra::config::Repl as ReplConfig;
use crate::ui::render::{render_lists, render_result};

/// Line-editing prompt that feeds each line to [`Logic`].
pub struct Repl {
    editor: Reedline,
    prompt: DefaultPrompt,
}

impl Repl {
    /// Build the editor, attaching a file-backed history when one is configured.
    pub fn new(config: &ReplConfig) -> Result<Self> {
        let mut editor = Reedline::create();
        if let Some(path) = &config.history_file {
            let history = FileBackedHistory::with_file(config.history_size, path.clone())
                .with_context(|| format!("failed to open history file {}", path.display()))?;
            editor = editor.with_history(Box::new(history));
        }
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(config.prompt.clone()),
            DefaultPromptSegment::Empty,
        );
        Ok(Self { editor, prompt })
    }

    /// Read and execute lines until `exit`, Ctrl-C, or Ctrl-D.
    pub fn run(&mut self, logic: &mut Logic) -> Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", render_lists(logic.roster()))?;

        loop {
            let line = match self.editor.read_line(&self.prompt) {
                Ok(Signal::Success(line)) => line,
                Ok(_) => break,
                Err(err) => return Err(err).context("failed to read input"),
            };
            if line.trim().is_empty() {
                continue;
            }

            let result = logic.execute(&line);
            write!(stdout, "{}", render_result(&result, logic.roster()))?;
            stdout.flush()?;
            if matches!(&result, Ok(outcome) if outcome.exit) {
                break;
            }
        }
        Ok(())
    }
}
