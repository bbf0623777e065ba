use std::fs::{self, File};
use std::io;
use std::io::BufWriter;
use std::path::Path;

/// Creates `path` for buffered writing, creating missing parent directories.
pub fn create_file_buf_write<P: AsRef<Path>>(path: P) -> io::Result<BufWriter<File>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
