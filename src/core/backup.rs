use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::utils::path::expand_tilde;
use chrono::Local;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally compressing it
    /// (zip on Windows, tar.gz elsewhere). Returns the final path.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);
        let dest = expand_tilde(dest_file);

        if !src.exists() {
            return Err(AppError::Backup(format!("database not found: {}", src.display())));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_path = if compress {
            let target = compressed_name(&dest);
            ensure_writable(&target, force)?;
            compress_file(src, &target)?;
            target
        } else {
            ensure_writable(&dest, force)?;
            fs::copy(src, &dest)?;
            dest
        };

        debug!(path = %final_path.display(), compress, "backup written");
        Ok(final_path)
    }
}

fn compressed_name(dest: &Path) -> PathBuf {
    if cfg!(target_os = "windows") {
        dest.with_extension("zip")
    } else {
        dest.with_extension("tar.gz")
    }
}

fn compress_file(src: &Path, target: &Path) -> AppResult<()> {
    if cfg!(target_os = "windows") {
        zip_file(src, target)
    } else {
        tar_gz_file(src, target)
    }
}

fn entry_name(src: &Path) -> String {
    src.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "crewledger.sqlite".to_string())
}

fn zip_file(src: &Path, target: &Path) -> AppResult<()> {
    let file = fs::File::create(target)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name(src), options)?;
    let mut f = fs::File::open(src)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    Ok(())
}

fn tar_gz_file(src: &Path, target: &Path) -> AppResult<()> {
    let file = fs::File::create(target)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    builder.append_path_with_name(src, entry_name(src))?;
    builder.into_inner()?.finish()?;

    Ok(())
}

/// Zip the database next to itself before a schema upgrade.
pub fn pre_migration_snapshot(db_path: &str, from_version: u32) -> AppResult<PathBuf> {
    let src = Path::new(db_path);
    let name = format!(
        "{}-backup_db_pre_v{}.zip",
        Local::now().format("%Y%m%d_%H%M%S"),
        from_version + 1
    );
    let target = src.parent().unwrap_or_else(|| Path::new(".")).join(name);

    zip_file(src, &target)?;
    Ok(target)
}
