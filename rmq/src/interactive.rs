use prompt::{read_query, QueryInput};
use range_max_tree::RangeMaxTree;
use std::io::{self, BufRead, Write};

/// Answers `l r` ranges read from `reader` until `-1 -1`, end of input,
/// or a line that is not two integers.
pub fn interactive_loop<R: BufRead, W: Write>(
    tree: &RangeMaxTree<i64>,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<usize> {
    let last = tree.len() - 1;
    writeln!(writer, "enter query ranges [l, r] with indices 0 to {last}")?;
    writeln!(writer, "enter -1 -1 to finish")?;
    let mut answered = 0;
    loop {
        write!(writer, "query [l, r]: ")?;
        writer.flush()?;
        let (l, r) = match read_query(reader)? {
            QueryInput::Range(l, r) => (l, r),
            QueryInput::Quit => break,
            QueryInput::Malformed => {
                log::info!("stopping interactive mode on malformed input");
                break;
            }
        };
        match (usize::try_from(l), usize::try_from(r)) {
            (Ok(l), Ok(r)) => match tree.query_max(l, r) {
                Ok(max) => {
                    writeln!(writer, "max of [{l},{r}]: {max}")?;
                    answered += 1;
                }
                Err(e) => writeln!(writer, "error: {e}")?,
            },
            _ => writeln!(writer, "error: negative index in [{l}, {r}]")?,
        }
    }
    writeln!(writer)?;
    Ok(answered)
}
