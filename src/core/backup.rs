use crate::config::Config;
use crate::core::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::ui::messages::{success, warning};
use clap::ValueEnum;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// Archive format for `backup --compress`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackupCompression {
    Zip,
    Targz,
}

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the data file to `dest_file`, optionally compressing the copy.
    ///
    /// Returns the path of the final backup file.
    pub fn backup(
        cfg: &Config,
        dest_file: &str,
        compress: Option<BackupCompression>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.data_file);
        let dest = crate::utils::path::expand_tilde(dest_file);

        // 1️⃣ Check data file exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Data file not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // ⛔ 2.5️⃣ If destination file exists → ask confirmation
        ensure_writable(&dest, force)?;

        // 3️⃣ Copy data file
        fs::copy(src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 4️⃣ Optional compression
        let final_path = match compress {
            Some(kind) => {
                let compressed = match kind {
                    BackupCompression::Zip => compress_zip(&dest)?,
                    BackupCompression::Targz => compress_targz(&dest)?,
                };

                // remove uncompressed copy
                if let Err(e) = fs::remove_file(&dest) {
                    warning(format!("Failed to remove uncompressed backup: {e}"));
                } else {
                    println!("🗑️ Removed uncompressed backup: {}", dest.display());
                }

                compressed
            }
            None => dest.clone(),
        };

        // 5️⃣ Activity log
        ttlog_quiet(
            &cfg.log_path(),
            "backup",
            &final_path.to_string_lossy(),
            if compress.is_some() {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "bird_data.csv".to_string())
}

/// Compress a backup using .zip
fn compress_zip(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name(path), options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}

/// Compress a backup as a gzip'd tarball (.tar.gz)
fn compress_targz(path: &Path) -> AppResult<PathBuf> {
    let tgz_path = path.with_extension("tar.gz");
    let file = fs::File::create(&tgz_path)?;
    let encoder = GzEncoder::new(file, Compression::default());

    let mut archive = tar::Builder::new(encoder);
    archive.append_path_with_name(path, entry_name(path))?;
    archive.into_inner()?.finish()?;

    println!("📦 Compressed: {}", tgz_path.display());

    Ok(tgz_path)
}
