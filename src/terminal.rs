use async_trait::async_trait;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Line-oriented terminal used by the interactive session
#[async_trait]
pub trait Terminal: Send {
    /// Show `prompt` and read one line. Returns `None` at end of input.
    async fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Append a line of output
    fn print_line(&mut self, line: &str);
}

/// Terminal backed by the process's stdin and stdout
pub struct StdTerminal {
    lines: Lines<BufReader<Stdin>>,
}

impl StdTerminal {
    pub fn new() -> Self {
        StdTerminal {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Terminal for StdTerminal {
    async fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", prompt)?;
            stdout.flush()?;
        }
        self.lines.next_line().await
    }

    fn print_line(&mut self, line: &str) {
        println!("{}", line);
    }
}
