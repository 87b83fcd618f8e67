//! Line input read on a dedicated thread.
//!
//! A blocking stdin read cannot be cancelled, so it stays off the runtime:
//! an interrupt can end the session without waiting for the next line.

use std::io::BufRead;

use tokio::sync::mpsc;

/// Forward stdin lines until EOF or the receiver drops.
pub fn spawn_stdin_reader() -> std::io::Result<mpsc::UnboundedReceiver<String>> {
    spawn_line_reader(std::io::BufReader::new(std::io::stdin()))
}

fn spawn_line_reader<R>(reader: R) -> std::io::Result<mpsc::UnboundedReceiver<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::debug!("stdin read error: {e}");
                        break;
                    }
                }
            }
        })?;
    Ok(rx)
}
