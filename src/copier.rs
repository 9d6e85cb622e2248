use crate::types::{DirectoryPair, PairReport};
use colored::Colorize;
use filetime::{FileTime, set_file_times};
use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Run one pair's copy pass. Never fails: any filesystem error aborts the
/// remainder of this pair only and lands in the report, so the caller can
/// move on to the next pair.
pub fn copy_pair(pair: &DirectoryPair, create_missing: bool) -> PairReport {
    let mut report = PairReport {
        label: pair.label.clone(),
        files_copied: 0,
        bytes_copied: 0,
        error: None,
    };

    match copy_pass(pair, create_missing, &mut report) {
        Ok(()) => {
            println!("{}", format!("{} copied successfully!", pair.label).green());
        }
        Err(e) => {
            let msg = e.to_string();
            println!(
                "{}",
                format!("Error copying {}: {}", pair.label.to_lowercase(), msg).red()
            );
            report.error = Some(msg);
        }
    }

    report
}

fn copy_pass(
    pair: &DirectoryPair,
    create_missing: bool,
    report: &mut PairReport,
) -> io::Result<()> {
    let source_meta = match fs::metadata(&pair.source) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(
                "source directory missing, nothing to copy: {}",
                pair.source.display()
            );
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if !source_meta.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("not a directory: {}", pair.source.display()),
        ));
    }

    if create_missing && !pair.target.exists() {
        fs::create_dir_all(&pair.target)?;
        println!("Created directory: {}", pair.target.display());
    }

    // Immediate entries only; listing errors abort the pass.
    for entry in WalkDir::new(&pair.source).min_depth(1).max_depth(1) {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();

        // Follows symlinks. A broken symlink stats as NotFound and is
        // skipped like any other non-regular entry.
        let metadata = match fs::metadata(entry.path()) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("skipping broken or vanished entry: {name}");
                continue;
            }
            Err(e) => return Err(e),
        };

        if !metadata.is_file() {
            debug!("skipping non-file entry: {name}");
            continue;
        }

        let destination = pair.target.join(entry.file_name());
        copy_with_metadata(entry.path(), &destination, &metadata)?;
        println!("Copied: {}", name.green());

        report.files_copied += 1;
        report.bytes_copied += metadata.len();
    }

    Ok(())
}

/// Byte copy plus permission bits and access/modification timestamps,
/// overwriting any existing destination file.
fn copy_with_metadata(source: &Path, destination: &Path, metadata: &fs::Metadata) -> io::Result<()> {
    fs::copy(source, destination)?;
    fs::set_permissions(destination, metadata.permissions())?;

    let atime = FileTime::from_last_access_time(metadata);
    let mtime = FileTime::from_last_modification_time(metadata);
    set_file_times(destination, atime, mtime)?;

    Ok(())
}
