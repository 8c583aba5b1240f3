//! File and stdin helpers shared by the commands.
//!
//! - Reading a line of interactive input
//! - Reading text files with automatic .zst decompression
//! - Collecting round logs from a file or a directory tree

use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Reads a trimmed line from `stdin`. `None` on EOF or read errors.
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use drawpoker_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Read text file with automatic .zst decompression detection.
///
/// UTF-8 BOM is stripped if present.
pub fn read_text_auto(path: &Path) -> Result<String, String> {
    let is_zst = path.extension().is_some_and(|e| e == "zst");
    let mut content = if is_zst {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::stream::decode_all(comp.as_slice()).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    if content.starts_with('\u{feff}') {
        content.remove(0);
    }
    Ok(content)
}

/// Round log files under `path`: the file itself, or every `.jsonl` / `.jsonl.zst`
/// below a directory, sorted for stable output.
pub fn collect_round_logs(path: &Path) -> Result<Vec<PathBuf>, String> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(format!("Input not found: {}", path.display()));
    }
    let mut files = Vec::new();
    let mut stack = vec![path.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let entries = std::fs::read_dir(&dir).map_err(|e| e.to_string())?;
        for entry in entries.flatten() {
            let p = entry.path();
            if p.is_dir() {
                stack.push(p);
            } else {
                let name = p.file_name().and_then(|n| n.to_str()).unwrap_or_default();
                if name.ends_with(".jsonl") || name.ends_with(".jsonl.zst") {
                    files.push(p);
                }
            }
        }
    }
    files.sort();
    Ok(files)
}
