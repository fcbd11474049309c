// Text Menu for the RSA Vault
// Reads operator commands line by line and dispatches them to the workflow

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::store::RecordStore;
use crate::util::file_ops::format_file_size;
use crate::workflow::FileCryptoWorkflow;

const MENU_PROMPT: &str = "1 - store, 2 - read, 3 - delete, q - quit";

/// A single operator choice from the top-level prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Store,
    Read,
    Delete,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Command::Store),
            "2" => Some(Command::Read),
            "3" => Some(Command::Delete),
            "q" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Read one line, without its line ending. None at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> io::Result<Option<String>> {
    writeln!(output, "{}", text)?;
    output.flush()?;
    read_line(input)
}

/// Run the menu until the operator quits or input ends.
///
/// Workflow errors are printed and the loop continues; only I/O errors on the
/// menu's own streams end it early.
pub fn run_menu<S, R, W>(workflow: &FileCryptoWorkflow<'_, S>, mut input: R, mut output: W) -> io::Result<()>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(choice) = prompt(&mut input, &mut output, MENU_PROMPT)? else {
            return Ok(());
        };

        match Command::parse(&choice) {
            Some(Command::Store) => {
                let Some(path) = prompt(&mut input, &mut output, "Please enter the path of the file to store: ")? else {
                    return Ok(());
                };
                match workflow.encrypt_file(Path::new(&path)) {
                    Ok(report) => {
                        if !report.record_added {
                            writeln!(output, "File already exists in db, unable to encrypt")?;
                        }
                        match report.write_error {
                            Some(e) => writeln!(output, "Couldn't open file for writing encrypted message: {}", e)?,
                            None => writeln!(
                                output,
                                "Stored {} ({}) at {}",
                                report.file_name,
                                format_file_size(report.ciphertext_len),
                                report.destination.display()
                            )?,
                        }
                    }
                    Err(e) => writeln!(output, "Error: {}", e)?,
                }
            }
            Some(Command::Read) => {
                let Some(name) = prompt(&mut input, &mut output, "Please enter the name of the file to read: ")? else {
                    return Ok(());
                };
                match workflow.decrypt_file(&name) {
                    Ok(plaintext) => writeln!(output, "Decrypted: {}", plaintext)?,
                    Err(e) => writeln!(output, "Error: {}", e)?,
                }
            }
            Some(Command::Delete) => {
                let Some(name) = prompt(&mut input, &mut output, "Please enter the name of the file to delete: ")? else {
                    return Ok(());
                };
                match workflow.delete_record(&name) {
                    Ok(true) => writeln!(output, "Deleted {}", name)?,
                    Ok(false) => writeln!(output, "No record named {}", name)?,
                    Err(e) => writeln!(output, "Error: {}", e)?,
                }
            }
            Some(Command::Quit) => {
                writeln!(output, "Goodbye")?;
                return Ok(());
            }
            None => writeln!(output, "unknown command, try again")?,
        }
        writeln!(output)?;
    }
}
