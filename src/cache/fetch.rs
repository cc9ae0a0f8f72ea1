//! Verified package downloads
//!
//! A fetch streams the package into `partial/<file_name>` while hashing it,
//! checks status, size and MD5 in that order, and only then renames the file
//! into the archive directory. The partial file is opened with exclusive
//! create, so two fetches of the same file on one host never interleave.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use tracing::debug;

use crate::cache::ArchiveDir;
use crate::config::AcquisitionRecord;
use crate::error::{self, DockpinError, Result};
use crate::hash::{HashingWriter, verify_hash};
use crate::progress::DownloadProgress;

const USER_AGENT: &str = concat!("dockpin/", env!("CARGO_PKG_VERSION"));

/// Downloads lock file records into an archive directory
pub struct Fetcher {
    archive: ArchiveDir,
    client: Client,
}

impl Fetcher {
    pub fn new(archive: ArchiveDir) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| error::fetch::download_failed("<client>", e))?;
        Ok(Self { archive, client })
    }

    pub fn archive(&self) -> &ArchiveDir {
        &self.archive
    }

    /// Return a local path whose content matches the record
    ///
    /// An existing file at the canonical location is returned as-is without
    /// any network access.
    pub fn fetch(&self, record: &AcquisitionRecord) -> Result<PathBuf> {
        let target = self.archive.final_path(&record.file_name);
        if target.exists() {
            debug!(path = %target.display(), "package already cached");
            return Ok(target);
        }

        self.archive.ensure_dirs()?;
        let partial = self.archive.partial_path(&record.file_name);
        let file = open_exclusive(&partial, &record.file_name)?;

        if let Err(err) = self.download(record, file, &partial) {
            // Leave no stale partial behind, it would block the next attempt.
            if let Err(remove_err) = fs::remove_file(&partial) {
                debug!(path = %partial.display(), error = %remove_err, "failed to remove partial download");
            }
            return Err(err);
        }

        fs::rename(&partial, &target)
            .map_err(|e| error::fs::write_failed(target.display().to_string(), e))?;
        debug!(path = %target.display(), "package verified");
        Ok(target)
    }

    fn download(&self, record: &AcquisitionRecord, file: File, partial: &Path) -> Result<()> {
        let progress = DownloadProgress::start(&record.url, record.size);
        let outcome = self.stream_verified(record, file, partial, &progress);
        match outcome {
            Ok(()) => progress.finish(),
            Err(_) => progress.abandon(),
        }
        outcome
    }

    fn stream_verified(
        &self,
        record: &AcquisitionRecord,
        file: File,
        partial: &Path,
        progress: &DownloadProgress,
    ) -> Result<()> {
        let url = record.url.as_str();
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| error::fetch::download_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error::fetch::http_status(url, status));
        }

        let write_failed = |e: std::io::Error| error::fs::write_failed(partial.display().to_string(), e);
        let mut writer = HashingWriter::new(BufWriter::new(file));
        let mut buffer = [0u8; 8192];

        loop {
            let bytes_read = response
                .read(&mut buffer)
                .map_err(|e| error::fetch::download_failed(url, e))?;

            if bytes_read == 0 {
                break;
            }

            writer.write_all(&buffer[..bytes_read]).map_err(write_failed)?;
            progress.inc(bytes_read as u64);

            // The reported size is a lower bound once the body overruns.
            if writer.written() > record.size {
                return Err(error::fetch::size_mismatch(url, record.size, writer.written()));
            }
        }

        if writer.written() != record.size {
            return Err(error::fetch::size_mismatch(url, record.size, writer.written()));
        }

        let (inner, digest) = writer.finish();
        if !verify_hash(&record.md5, &digest) {
            return Err(error::fetch::checksum_mismatch(url, &record.md5, digest));
        }

        let file = inner.into_inner().map_err(|e| write_failed(e.into_error()))?;
        file.sync_all().map_err(write_failed)?;
        Ok(())
    }
}

fn open_exclusive(partial: &Path, file_name: &str) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(partial)
        .map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                DockpinError::DownloadInProgress {
                    file_name: file_name.to_string(),
                    path: partial.display().to_string(),
                }
            } else {
                error::fs::write_failed(partial.display().to_string(), e)
            }
        })
}
