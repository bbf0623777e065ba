use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryInput {
    Range(i64, i64),
    Quit,
    Malformed,
}

fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

pub fn prompt_user_for_size<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<usize> {
    loop {
        write!(writer, "enter array size n: ")?;
        writer.flush()?;
        let Some(prompt) = read_trimmed_line(reader)? else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before an array size was given",
            ));
        };
        match prompt.parse::<usize>() {
            Ok(0) => writeln!(writer, "array size must be at least 1")?,
            Ok(size) => return Ok(size),
            Err(e) => writeln!(writer, "could not parse array size: {}", e)?,
        }
    }
}

pub fn prompt_user_yes_no<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
) -> io::Result<bool> {
    loop {
        write!(writer, "{} (1=yes, 0=no): ", question)?;
        writer.flush()?;
        let Some(prompt) = read_trimmed_line(reader)? else {
            return Ok(false);
        };
        match prompt.to_ascii_lowercase().as_str() {
            "1" | "y" | "yes" => return Ok(true),
            "0" | "n" | "no" => return Ok(false),
            _ => writeln!(writer, "please answer 1 or 0")?,
        }
    }
}

/// Reads one `l r` pair. `-1 -1` and end of input both mean quit.
pub fn read_query<R: BufRead>(reader: &mut R) -> io::Result<QueryInput> {
    let Some(line) = read_trimmed_line(reader)? else {
        return Ok(QueryInput::Quit);
    };
    let mut fields = line.split_whitespace().map(str::parse::<i64>);
    let input = match (fields.next(), fields.next(), fields.next()) {
        (Some(Ok(-1)), Some(Ok(-1)), None) => QueryInput::Quit,
        (Some(Ok(l)), Some(Ok(r)), None) => QueryInput::Range(l, r),
        _ => QueryInput::Malformed,
    };
    Ok(input)
}
