// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Check that `path` may be (re)written.
///
/// Missing file or `force` → Ok. Otherwise the user must answer `y`/`yes`;
/// any other answer, or a closed stdin, cancels.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    confirm_overwrite(path, io::stdin().lock())
}

fn confirm_overwrite(path: &Path, mut input: impl BufRead) -> AppResult<()> {
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::from(io::Error::other(format!(
            "cancelled: '{}' not overwritten",
            path.display()
        )))),
    }
}
