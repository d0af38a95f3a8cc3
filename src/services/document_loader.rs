// Document Loader
// Reads .docx and .txt files into plain text

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("unsupported file format for {path}; use .docx or .txt")]
    UnsupportedFormat { path: PathBuf },
    #[error("error reading file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Docx,
    Text,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Load a document. Docx paragraphs are joined with single spaces; text files
/// are trimmed.
pub fn read_document(path: &Path) -> Result<String, LoadError> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let read_err = |source: Box<dyn std::error::Error + Send + Sync>| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let text = match format {
        DocumentFormat::Text => fs::read_to_string(path)
            .map_err(|e| read_err(Box::new(e)))?
            .trim()
            .to_string(),
        DocumentFormat::Docx => {
            let bytes = fs::read(path).map_err(|e| read_err(Box::new(e)))?;
            docx_text(&bytes).map_err(read_err)?
        }
    };

    info!(
        path = %path.display(),
        format = ?format,
        chars = text.chars().count(),
        "document.loaded"
    );
    Ok(text)
}

fn docx_text(bytes: &[u8]) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let docx = docx_rs::read_docx(bytes)?;
    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(&p.children)),
            _ => None,
        })
        .collect();
    Ok(paragraphs.join(" "))
}

fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}
