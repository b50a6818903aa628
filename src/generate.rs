//! Generator entry point: model, render, then write or check.
//!
//! Both artifacts are rendered in memory and staged in temporary files
//! before either destination is replaced, so a failure never leaves one file
//! regenerated and the other stale.

use alloy_primitives::Address;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::constants::CONSOLE_ADDRESS;
use crate::errors::GenError;
use crate::model::GenerationModel;
use crate::render::{Artifact, Renderer};
use crate::vocabulary::Vocabulary;

/// Generator settings.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory receiving `args.rs` and `console.sol`
    pub out_dir: PathBuf,
    /// Compare against existing files instead of writing
    pub check: bool,
    /// Contract address baked into both artifacts
    pub address: Address,
}

impl GenerateConfig {
    /// Write mode into `out_dir` with the standard console address.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into(), check: false, address: CONSOLE_ADDRESS }
    }

    /// Builder method to switch to check mode.
    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }
}

/// What happened to one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Contents changed (or the file was new) and were written
    Written,
    /// Existing contents already matched
    Unchanged,
    /// Check mode: file differs from the rendered output
    Stale,
    /// Check mode: file does not exist
    Missing,
}

/// Per-file outcome of a run.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Outcome of a generator run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// Number of `log` overloads in the model
    pub entries: usize,
    /// Number of overloads exposed through the generic `log` function
    pub generic: usize,
    /// Number of typed single-argument overloads
    pub typed: usize,
    pub files: Vec<FileReport>,
}

/// Build the model and render both artifacts, without touching the filesystem.
pub fn render_all(address: Address) -> Result<(GenerationModel, Vec<(Artifact, String)>), GenError> {
    let model = GenerationModel::build(address, &Vocabulary::console())?;
    let renderer = Renderer::new()?;

    let rendered = Artifact::ALL
        .into_iter()
        .map(|artifact| Ok((artifact, renderer.render(artifact, &model)?)))
        .collect::<Result<Vec<_>, GenError>>()?;
    Ok((model, rendered))
}

/// Run the generator according to `config`.
///
/// In check mode nothing is written; stale or missing files produce
/// [`GenError::Stale`] after every file has been compared.
pub fn run(config: &GenerateConfig) -> Result<GenerateReport, GenError> {
    let (model, rendered) = render_all(config.address)?;
    info!(
        target: "console_gen",
        entries = model.entries().len(),
        address = %model.address(),
        "built generation model"
    );

    let files = if config.check {
        check_files(&config.out_dir, &rendered)?
    } else {
        write_files(&config.out_dir, &rendered)?
    };

    Ok(GenerateReport {
        entries: model.entries().len(),
        generic: model.entries().iter().filter(|e| e.is_log()).count(),
        typed: model.entries().iter().filter(|e| e.is_log_type()).count(),
        files,
    })
}

fn write_files(out_dir: &Path, rendered: &[(Artifact, String)]) -> Result<Vec<FileReport>, GenError> {
    fs::create_dir_all(out_dir)
        .map_err(|source| GenError::FileCreate { path: out_dir.to_path_buf(), source })?;

    // Stage every changed artifact next to its destination; nothing is
    // persisted until all of them are staged.
    let mut reports = Vec::with_capacity(rendered.len());
    let mut staged = Vec::new();
    for (artifact, contents) in rendered {
        let path = out_dir.join(artifact.file_name());
        if path.is_dir() {
            return Err(GenError::FileCreate {
                path,
                source: io::Error::other("destination is a directory"),
            });
        }
        if is_up_to_date(&path, contents)? {
            reports.push(FileReport { path, status: FileStatus::Unchanged });
            continue;
        }
        staged.push((reports.len(), stage_file(out_dir, &path, contents)?));
        reports.push(FileReport { path, status: FileStatus::Written });
    }

    for (index, file) in staged {
        let path = &reports[index].path;
        file.persist(path)
            .map_err(|e| GenError::FileWrite { path: path.clone(), source: e.error })?;
    }

    for report in &reports {
        debug!(target: "console_gen", path = %report.path.display(), status = ?report.status, "output file");
    }
    Ok(reports)
}

fn stage_file(out_dir: &Path, path: &Path, contents: &str) -> Result<NamedTempFile, GenError> {
    let mut file = NamedTempFile::new_in(out_dir)
        .map_err(|source| GenError::FileCreate { path: path.to_path_buf(), source })?;
    file.write_all(contents.as_bytes())
        .map_err(|source| GenError::FileWrite { path: path.to_path_buf(), source })?;
    Ok(file)
}

fn check_files(out_dir: &Path, rendered: &[(Artifact, String)]) -> Result<Vec<FileReport>, GenError> {
    let mut reports = Vec::with_capacity(rendered.len());
    for (artifact, contents) in rendered {
        let path = out_dir.join(artifact.file_name());
        let status = if !path.exists() {
            FileStatus::Missing
        } else if is_up_to_date(&path, contents)? {
            FileStatus::Unchanged
        } else {
            FileStatus::Stale
        };
        reports.push(FileReport { path, status });
    }

    let stale: Vec<PathBuf> = reports
        .iter()
        .filter(|r| matches!(r.status, FileStatus::Stale | FileStatus::Missing))
        .map(|r| r.path.clone())
        .collect();
    if !stale.is_empty() {
        return Err(GenError::Stale(stale));
    }
    Ok(reports)
}

/// Whether `path` already holds `contents`, ignoring CRLF line endings.
///
/// A missing file or one that is not valid UTF-8 is simply out of date; any
/// other read failure is an error.
fn is_up_to_date(path: &Path, contents: &str) -> Result<bool, GenError> {
    let old = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(source) => return Err(GenError::FileRead { path: path.to_path_buf(), source }),
    };
    Ok(String::from_utf8(old)
        .map(|old| normalize_newlines(&old) == normalize_newlines(contents))
        .unwrap_or(false))
}

fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n")
}
