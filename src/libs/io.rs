use anyhow::Context;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

/// Opens `input` for buffered reading. `stdin` reads standard input, `*.gz` is
/// decompressed on the fly.
///
/// ```
/// use std::io::BufRead;
/// let reader = parsel::reader("tests/phylip/small.part").unwrap();
/// assert_eq!(reader.lines().count(), 3);
/// ```
pub fn reader(input: &str) -> anyhow::Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = if input == "stdin" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let path = std::path::Path::new(input);
        let file = std::fs::File::open(path)
            .with_context(|| format!("could not open {}", path.display()))?;

        if path.extension() == Some(std::ffi::OsStr::new("gz")) {
            Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    Ok(reader)
}

/// Opens `output` for buffered writing. `stdout` writes to the screen.
pub fn writer(output: &str) -> anyhow::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        let file = std::fs::File::create(output)
            .with_context(|| format!("could not create {}", output))?;
        Box::new(BufWriter::new(file))
    };

    Ok(writer)
}

/// Non-empty lines of `input`, trailing whitespace removed.
///
/// ```
/// let lines = parsel::read_lines("tests/phylip/models.txt").unwrap();
/// assert_eq!(lines, vec!["LG", "JTT", "WAG"]);
/// ```
pub fn read_lines(input: &str) -> anyhow::Result<Vec<String>> {
    let mut lines = vec![];
    for line in reader(input)?.lines() {
        let line = line?;
        let line = line.trim_end();
        if !line.trim().is_empty() {
            lines.push(line.to_string());
        }
    }

    Ok(lines)
}

/// Reads all of `input` into a string.
pub fn read_to_string(input: &str) -> anyhow::Result<String> {
    let mut content = String::new();
    reader(input)?
        .read_to_string(&mut content)
        .with_context(|| format!("read error: {}", input))?;
    Ok(content)
}

/// Writes `content` to `output`, truncating an existing file.
pub fn write_string(output: &str, content: &str) -> anyhow::Result<()> {
    let mut writer = writer(output)?;
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}
