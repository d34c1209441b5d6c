use std::io::{self, BufRead, Write};

use log::debug;

pub const EXIT_PROMPT: &str = "エンターを押すと処理を終了します。";

/// Prompts on stdout and blocks until a line arrives on stdin.
pub fn wait_enter() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = prompt_enter(&mut stdin.lock(), &mut stdout.lock()) {
        debug!("failed to wait for enter, err={}", err);
    }
}

pub fn prompt_enter<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", EXIT_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(())
}
