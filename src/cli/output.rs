//! Output formatting utilities for CLI operations.

use std::io::Write;

use lint_changed::IntakeError;

/// Writes each path on its own line.
pub fn write_files_to<W: Write>(writer: &mut W, files: &[String]) -> Result<(), IntakeError> {
    for file in files {
        writeln!(writer, "{file}").map_err(|error| io_error(&error))?;
    }
    writer.flush().map_err(|error| io_error(&error))
}

fn io_error(error: &std::io::Error) -> IntakeError {
    IntakeError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::write_files_to;

    #[test]
    fn writes_one_path_per_line_in_order() {
        let files = vec!["src/b.ts".to_owned(), "src/a.ts".to_owned()];
        let mut buffer = Vec::new();

        write_files_to(&mut buffer, &files).expect("should write files");

        let output = String::from_utf8(buffer).expect("output should be valid UTF-8");
        assert_eq!(output, "src/b.ts\nsrc/a.ts\n");
    }

    #[test]
    fn writes_nothing_for_empty_list() {
        let mut buffer = Vec::new();

        write_files_to(&mut buffer, &[]).expect("should write nothing");

        assert!(buffer.is_empty(), "expected no output");
    }
}
