//! Check command: list frame references without contacting the API.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::CheckArgs;
use super::common::collect_documents;
use crate::config::{CONFIG_FILE, SyncConfig};
use crate::figma::{FrameReference, markers::FRAME_TAG, parse_references};
use crate::log;
use crate::utils::{plural_count, plural_s};

/// A document and the frames it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFrames {
    pub path: PathBuf,
    pub frames: Vec<FrameReference>,
}

/// Run the check command.
pub fn run_check(config: &SyncConfig, args: &CheckArgs) -> Result<()> {
    let documents = collect_documents(&args.paths, &config.scan)?;
    log!("check"; "scanning {}", plural_count(documents.len(), "document"));

    let found = find_frames(&documents)?;
    let frame_count: usize = found.iter().map(|d| d.frames.len()).sum();

    for doc in &found {
        println!("{}", config.root_relative(&doc.path).display());
        for frame in &doc.frames {
            println!("  └─ {frame}");
        }
    }

    if found.is_empty() {
        log!("check"; "no frame references found");
        print_getting_started(config);
    } else {
        log!(
            "check";
            "{} in {} document{}",
            plural_count(frame_count, "frame reference"),
            found.len(),
            plural_s(found.len())
        );
    }

    if config.api.read_token().is_some() {
        log!("check"; "API token found in ${}", config.api.token_env);
    } else {
        log!("warning"; "${} is not set, `figsync sync` will fail", config.api.token_env);
    }

    Ok(())
}

/// Documents with at least one frame reference, in input order.
pub fn find_frames(documents: &[PathBuf]) -> Result<Vec<DocumentFrames>> {
    let mut found = Vec::new();
    for path in documents {
        let text = read_document(path)?;
        let frames = parse_references(&text);
        if !frames.is_empty() {
            found.push(DocumentFrames {
                path: path.clone(),
                frames,
            });
        }
    }
    Ok(found)
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn print_getting_started(config: &SyncConfig) {
    println!();
    println!("To link a document to a frame, add a comment like:");
    println!("  <!-- {FRAME_TAG} FILE_ID/NODE_ID -->");
    println!();
    println!("FILE_ID and NODE_ID come from the frame's share link:");
    println!("  https://www.figma.com/file/FILE_ID/Name?node-id=NODE_ID");
    println!();
    println!(
        "Documents matching `{}` under {} are scanned",
        config.scan.pattern,
        config.scan.directory.display()
    );
    if config.config_path.is_none() {
        println!("(create {CONFIG_FILE} to change the scan settings)");
    }
}
