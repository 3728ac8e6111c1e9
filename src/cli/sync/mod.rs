//! Sync command: fetch referenced frames and patch documents.
//!
//! Documents are processed one at a time, and frames within a document in
//! reference order. A failing frame is reported and skipped; only a
//! malformed specs block skips the rest of its document.

mod report;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::SyncArgs;
use super::common::collect_documents;
use crate::api::image::{ScreenshotTarget, save_image};
use crate::api::{ApiError, DesignSource, ExportOptions, FigmaClient};
use crate::config::SyncConfig;
use crate::figma::{
    DesignNode, FrameReference, Patch, PatchError, SpecCategories, extract_spec, group_by_file,
    parse_references, render_spec,
};
use crate::logger::{status_error, status_success, status_warning};
use crate::utils::plural_count;
use crate::{debug, log};

pub use report::SyncReport;

/// Environment variable naming the GitHub Actions output file.
const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Settings threaded into [`sync_documents`].
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub export: ExportOptions,
    /// Screenshot directory name, relative to each document.
    pub screenshot_dir: String,
    pub categories: SpecCategories,
    pub embed_image: bool,
    /// Skip image downloads and document writes.
    pub dry_run: bool,
}

impl SyncOptions {
    pub fn from_config(config: &SyncConfig, dry_run: bool) -> Self {
        Self {
            export: config.export.options(),
            screenshot_dir: config.export.screenshot_dir.clone(),
            categories: config.specs.categories(),
            embed_image: config.export.embed_image,
            dry_run,
        }
    }
}

/// Run the sync command.
pub fn run_sync(config: &SyncConfig, args: &SyncArgs) -> Result<()> {
    let token = config
        .api
        .read_token()
        .ok_or_else(|| ApiError::MissingToken(config.api.token_env.clone()))?;
    let client = FigmaClient::new(&config.api.base_url, token)?;

    let documents = collect_documents(&args.paths, &config.scan)?;
    if documents.is_empty() {
        log!("sync"; "no documents found in {}", config.scan.directory.display());
        return Ok(());
    }
    log!("sync"; "scanning {}", plural_count(documents.len(), "document"));

    let options = SyncOptions::from_config(config, args.dry_run);
    if options.dry_run {
        log!("sync"; "dry run, nothing will be written");
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;
    let report = rt.block_on(sync_documents(
        &client,
        &documents,
        &options,
        config.get_root(),
    ));

    report.print();
    log!("sync"; "{}", report);

    if args.github_output {
        match std::env::var_os(GITHUB_OUTPUT_ENV) {
            Some(path) => report.write_github_output(Path::new(&path))?,
            None => log!("warning"; "${} is not set, skipping outputs", GITHUB_OUTPUT_ENV),
        }
    }

    Ok(())
}

/// Sync every document in order, collecting the outcome.
pub async fn sync_documents<S: DesignSource>(
    source: &S,
    documents: &[PathBuf],
    options: &SyncOptions,
    root: &Path,
) -> SyncReport {
    let mut report = SyncReport::default();
    for document in documents {
        sync_document(source, document, options, root, &mut report).await;
    }
    report
}

async fn sync_document<S: DesignSource>(
    source: &S,
    document: &Path,
    options: &SyncOptions,
    root: &Path,
    report: &mut SyncReport,
) {
    let display = document
        .strip_prefix(root)
        .unwrap_or(document)
        .to_string_lossy()
        .replace('\\', "/");
    let file_name = document
        .file_name()
        .map_or_else(|| display.clone(), |n| n.to_string_lossy().into_owned());

    let original = match tokio::fs::read_to_string(document).await {
        Ok(text) => text,
        Err(err) => {
            report.add_failed(&display, "document", describe(err));
            return;
        }
    };

    let references = parse_references(&original);
    if references.is_empty() {
        debug!("sync"; "{}: no frame references", display);
        return;
    }
    report.documents_with_frames += 1;
    log!("sync"; "{} ({})", display, plural_count(references.len(), "frame"));

    let mut text = original.clone();
    for (file_id, node_ids) in group_by_file(&references) {
        let nodes = match source.fetch_nodes(&file_id, &node_ids).await {
            Ok(nodes) => nodes,
            Err(err) => {
                let reason = describe(err);
                status_error(&format!("failed to fetch file {file_id}"), &reason);
                report.add_failed(&display, file_id, reason);
                continue;
            }
        };

        for node_id in node_ids {
            let frame = FrameReference::new(file_id.as_str(), node_id.as_str());
            let Some(node) = nodes.get(&node_id) else {
                status_warning(&format!("{frame}: node not found"));
                report.add_unresolved(&display, frame);
                continue;
            };

            match sync_frame(source, &frame, node, document, &text, options).await {
                Ok(patched) => {
                    text = patched;
                    status_success(&format!("{frame}"));
                    report.add_synced(&display, &file_name, frame);
                }
                Err(FrameError::Patch(err)) => {
                    let reason = describe(err);
                    status_error(&format!("{display}: skipped"), &reason);
                    report.add_failed(&display, "document", reason);
                    return;
                }
                Err(err) => {
                    let reason = describe(err);
                    status_error(&format!("{frame}"), &reason);
                    report.add_failed(&display, frame.to_string(), reason);
                }
            }
        }
    }

    if text == original {
        debug!("sync"; "{}: unchanged", display);
        return;
    }
    if !options.dry_run
        && let Err(err) = tokio::fs::write(document, &text).await
    {
        report.add_failed(&display, "document", describe(err));
        return;
    }
    report.documents_updated.push(display);
}

/// Why one frame could not be synced.
#[derive(Debug, Error)]
enum FrameError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to write `{path}`")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Patch(#[from] PatchError),
}

/// Patch `text` for one frame, then fetch and store its screenshot.
///
/// Returns the patched text. On error `text` is left as it was.
async fn sync_frame<S: DesignSource>(
    source: &S,
    frame: &FrameReference,
    node: &DesignNode,
    document: &Path,
    text: &str,
    options: &SyncOptions,
) -> Result<String, FrameError> {
    let target = ScreenshotTarget::for_document(
        document,
        &options.screenshot_dir,
        &frame.node_id,
        &options.export,
    );

    let spec = extract_spec(node).restrict(options.categories);
    if spec.is_empty() {
        debug!("sync"; "{}: no specification to render", frame);
    }
    let markdown = render_spec(&spec);
    let patched = Patch::new(frame, &target.relative, &markdown)
        .with_embed_image(options.embed_image)
        .apply(text)?;

    if options.dry_run {
        return Ok(patched);
    }

    let url = source
        .fetch_image_url(&frame.file_id, &frame.node_id, &options.export)
        .await?;
    let bytes = source.download(&url).await?;
    save_image(&bytes, &target.path)
        .await
        .map_err(|source| FrameError::Write {
            path: target.path.clone(),
            source,
        })?;
    debug!("sync"; "saved {}", target.path.display());

    Ok(patched)
}

/// Error with its source chain on one line.
fn describe(err: impl Into<anyhow::Error>) -> String {
    format!("{:#}", err.into())
}
