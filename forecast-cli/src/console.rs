use std::io::{self, BufRead, IsTerminal, Write};

use inquire::{
    InquireError, Text,
    ui::{RenderConfig, Styled},
};
use thiserror::Error;

/// Why a prompt produced no answer.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input interrupted")]
    Interrupted,

    #[error("input closed")]
    Closed,

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Line-oriented user interaction used by the resolver and the driver.
pub trait Console {
    /// Print one line of output.
    fn say(&mut self, line: &str);

    /// Show `prompt` and return the raw answer.
    ///
    /// Everything before the last newline of `prompt` is printed as a header;
    /// the remainder is the inline prompt marker.
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError>;
}

/// Stdout/stdin console. Uses `inquire` on a terminal and plain line
/// reading when stdin is piped.
#[derive(Debug)]
pub struct TerminalConsole {
    interactive: bool,
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self { interactive: io::stdin().is_terminal() }
    }

    fn ask_inquire(&self, marker: &str) -> Result<String, PromptError> {
        let render = RenderConfig::empty()
            .with_prompt_prefix(Styled::new(""))
            .with_answered_prompt_prefix(Styled::new(""));

        Text::new(marker).with_render_config(render).prompt().map_err(|err| match err {
            InquireError::OperationInterrupted | InquireError::OperationCanceled => {
                PromptError::Interrupted
            }
            InquireError::IO(e) => PromptError::Io(e),
            other => PromptError::Io(io::Error::other(other.to_string())),
        })
    }

    fn ask_plain(&self, marker: &str) -> Result<String, PromptError> {
        read_answer(marker, io::stdin().lock(), io::stdout().lock())
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, line: &str) {
        println!("{line}");
    }

    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        let (header, marker) = split_prompt(prompt);
        if let Some(header) = header {
            println!("{header}");
        }

        if self.interactive { self.ask_inquire(marker) } else { self.ask_plain(marker) }
    }
}

/// Write the marker, then block on one line of input.
///
/// `output` is released before reading so the Ctrl-C handler can still print.
fn read_answer<R: BufRead, W: Write>(
    marker: &str,
    mut input: R,
    mut output: W,
) -> Result<String, PromptError> {
    write!(output, "{marker} ")?;
    output.flush()?;
    drop(output);

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Closed);
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Split `"City?\n> "` into `(Some("City?"), ">")`.
fn split_prompt(prompt: &str) -> (Option<&str>, &str) {
    match prompt.rsplit_once('\n') {
        Some((header, marker)) => (Some(header), marker.trim_end()),
        None => (None, prompt.trim_end()),
    }
}
