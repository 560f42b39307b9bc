//! The page-backed document model.
//!
//! A document is an ordered set of pages, each one a plain-text file on
//! disk — typically one file per scanned page of a book. Page order is
//! whatever the caller passed at load time and never changes during a
//! session.
//!
//! Mutating operations run read-modify-write against the files, page by
//! page in document order, persisting each page before moving to the next.
//! There is no all-or-nothing guarantee: a failure mid-run leaves earlier
//! pages transformed and later pages untouched, and the returned
//! [`BatchReport`] says which pages were skipped.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;

use crate::error::{CleanError, Result};
use crate::greek;
use crate::hyphen::{
    self, HyphenCandidate, HyphenDictionary, HyphenOptions, StarHyphenCandidate,
};
use crate::rules::{self, CleanupRule};
use crate::strip::{self, PageEdge};
use crate::wordcount::{self, WordIndex};

/// Which pages an operation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Page(usize),
    All,
}

/// One text file of the document.
#[derive(Debug, Clone)]
pub struct Page {
    path: PathBuf,
    name: String,
    text: String,
}

impl Page {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name, derived from the source file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

/// A page an operation had to skip, with the reason.
#[derive(Debug)]
pub struct PageFailure {
    pub index: usize,
    pub name: String,
    pub error: CleanError,
}

/// Per-page failures of a batch operation. Pages not listed here were
/// processed and persisted.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub failures: Vec<PageFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, index: usize, name: &str, error: CleanError) {
        warn!(page = index, name, %error, "page skipped");
        self.failures.push(PageFailure {
            index,
            name: name.to_string(),
            error,
        });
    }
}

fn io_error(path: &Path, source: std::io::Error) -> CleanError {
    if source.kind() == std::io::ErrorKind::NotFound {
        CleanError::InputNotFound {
            path: path.to_path_buf(),
        }
    } else {
        CleanError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn read_page_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| io_error(path, source))?;
    String::from_utf8(bytes).map_err(|_| CleanError::Encoding {
        path: path.to_path_buf(),
    })
}

fn write_page_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| io_error(path, source))
}

#[derive(Debug, Default)]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    /// Read every file in `paths`, in the order given. The caller decides
    /// the ordering (usually file name, ascending); it stays fixed for the
    /// session. Fails on the first unreadable or non-UTF-8 file.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut pages = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let text = read_page_file(path)?;
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            pages.push(Page {
                path: path.to_path_buf(),
                name,
                text,
            });
        }
        debug!(pages = pages.len(), "document loaded");
        Ok(Document { pages })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Replace a page's in-memory text without touching its file.
    pub fn set_page_text(&mut self, index: usize, text: String) -> Result<()> {
        let len = self.pages.len();
        let page = self
            .pages
            .get_mut(index)
            .ok_or(CleanError::PageOutOfRange { index, len })?;
        page.text = text;
        Ok(())
    }

    /// Write one page's current text back to its source file.
    pub fn save_page(&self, index: usize) -> Result<()> {
        let page = self.pages.get(index).ok_or(CleanError::PageOutOfRange {
            index,
            len: self.pages.len(),
        })?;
        write_page_file(&page.path, &page.text)
    }

    /// Write every page back, continuing past failures.
    pub fn save_all(&self) -> BatchReport {
        let mut report = BatchReport::default();
        for (index, page) in self.pages.iter().enumerate() {
            if let Err(error) = write_page_file(&page.path, &page.text) {
                report.record(index, &page.name, error);
            }
        }
        report
    }

    /// Re-read one page from its source file.
    pub fn reload_page(&mut self, index: usize) -> Result<()> {
        let len = self.pages.len();
        let page = self
            .pages
            .get_mut(index)
            .ok_or(CleanError::PageOutOfRange { index, len })?;
        page.text = read_page_file(&page.path)?;
        Ok(())
    }

    fn scope_indices(&self, scope: Scope) -> Result<Vec<usize>> {
        match scope {
            Scope::All => Ok((0..self.pages.len()).collect()),
            Scope::Page(index) if index < self.pages.len() => Ok(vec![index]),
            Scope::Page(index) => Err(CleanError::PageOutOfRange {
                index,
                len: self.pages.len(),
            }),
        }
    }

    /// Persist the page, read it back, transform, write, and keep the
    /// result in memory. The persist steps are the only effectful part of
    /// any operation built on this.
    fn rewrite_one<F>(&mut self, index: usize, transform: &mut F) -> Result<()>
    where
        F: FnMut(&str) -> String,
    {
        let path = self.pages[index].path.clone();
        write_page_file(&path, &self.pages[index].text)?;
        let text = read_page_file(&path)?;
        let out = transform(&text);
        write_page_file(&path, &out)?;
        self.pages[index].text = out;
        Ok(())
    }

    fn rewrite_pages<F>(&mut self, scope: Scope, mut transform: F) -> Result<BatchReport>
    where
        F: FnMut(&str) -> String,
    {
        let indices = self.scope_indices(scope)?;
        let mut report = BatchReport::default();
        for index in indices {
            if let Err(error) = self.rewrite_one(index, &mut transform) {
                let name = self.pages[index].name.clone();
                report.record(index, &name, error);
            }
        }
        Ok(report)
    }

    /// Run the cleanup catalog over the selected pages.
    pub fn run_cleanup(&mut self, rules: &[CleanupRule], scope: Scope) -> Result<BatchReport> {
        debug!(rules = rules.len(), "running cleanup");
        self.rewrite_pages(scope, |text| rules::apply_rules(text, rules))
    }

    /// Normalize the selected pages to Unicode NFC.
    pub fn normalize_nfc(&mut self, scope: Scope) -> Result<BatchReport> {
        self.rewrite_pages(scope, |text| text.nfc().collect())
    }

    /// Strip Greek diacritics (rough breathing kept) on the selected pages.
    pub fn remove_greek_diacritics(&mut self, scope: Scope) -> Result<BatchReport> {
        self.rewrite_pages(scope, greek::remove_diacritics)
    }

    /// Transliterate Greek passages to Latin on the selected pages.
    pub fn transliterate_greek(&mut self, scope: Scope) -> Result<BatchReport> {
        self.rewrite_pages(scope, greek::transliterate)
    }

    /// Word counts over the selected pages. The whole-document index is
    /// the merge of the per-page indexes, so counts stay additive across
    /// pages.
    pub fn word_counts(&self, scope: Scope) -> Result<WordIndex> {
        let indices = self.scope_indices(scope)?;
        let mut index = WordIndex::default();
        for i in indices {
            index.merge(&wordcount::word_counts(&self.pages[i].text));
        }
        Ok(index)
    }

    /// Character counts over the selected pages, every raw character
    /// included.
    pub fn char_counts(&self, scope: Scope) -> Result<HashMap<char, u32>> {
        let indices = self.scope_indices(scope)?;
        let mut counts: HashMap<char, u32> = HashMap::new();
        for i in indices {
            for (ch, count) in wordcount::char_counts(&self.pages[i].text) {
                *counts.entry(ch).or_insert(0) += count;
            }
        }
        Ok(counts)
    }

    /// Resolve end-of-line hyphens on the selected pages. The word counts
    /// backing the decisions always cover the whole document, whatever the
    /// scope. Returns the per-page failures and every candidate with its
    /// applied decision.
    pub fn resolve_hyphens(
        &mut self,
        options: &HyphenOptions,
        dictionary: Option<&dyn HyphenDictionary>,
        scope: Scope,
    ) -> Result<(BatchReport, Vec<HyphenCandidate>)> {
        let index = if options.use_text {
            Some(self.word_counts(Scope::All)?)
        } else {
            None
        };
        let mut candidates = Vec::new();
        let report = self.rewrite_pages(scope, |text| {
            let (out, mut page_candidates) =
                hyphen::resolve_eol_hyphens(text, index.as_ref(), dictionary, options);
            candidates.append(&mut page_candidates);
            out
        })?;
        Ok((report, candidates))
    }

    /// Starred page-boundary hyphens on the selected pages, with corpus
    /// counts from the whole document.
    pub fn star_hyphen_candidates(&self, scope: Scope) -> Result<Vec<StarHyphenCandidate>> {
        let index = self.word_counts(Scope::All)?;
        let indices = self.scope_indices(scope)?;
        let mut candidates = Vec::new();
        for i in indices {
            candidates.extend(hyphen::star_hyphen_candidates(&self.pages[i].text, &index));
        }
        Ok(candidates)
    }

    /// The candidate header or footer line of every page, `None` for pages
    /// without lines.
    pub fn edge_lines(&self, edge: PageEdge) -> Vec<Option<String>> {
        self.pages
            .iter()
            .map(|page| strip::edge_line(&page.text, edge).map(str::to_string))
            .collect()
    }

    /// Remove the selected pages' edge line. `mask` is positional: pages
    /// with a `true` entry are stripped, everything else (including pages
    /// beyond the mask's length) is left alone.
    pub fn strip_edge_lines(
        &mut self,
        edge: PageEdge,
        mask: &[bool],
        clean_adjacent: bool,
    ) -> BatchReport {
        let mut report = BatchReport::default();
        for index in 0..self.pages.len() {
            if !mask.get(index).copied().unwrap_or(false) {
                continue;
            }
            let mut transform = |text: &str| strip::strip_edge_line(text, edge, clean_adjacent);
            if let Err(error) = self.rewrite_one(index, &mut transform) {
                let name = self.pages[index].name.clone();
                report.record(index, &name, error);
            }
        }
        report
    }

    /// Overwrite every structurally empty page with `label`.
    pub fn label_empty_pages(&mut self, label: &str) -> BatchReport {
        let mut report = BatchReport::default();
        for index in 0..self.pages.len() {
            let mut transform = |text: &str| {
                if strip::is_empty_page(text) {
                    label.to_string()
                } else {
                    text.to_string()
                }
            };
            if let Err(error) = self.rewrite_one(index, &mut transform) {
                let name = self.pages[index].name.clone();
                report.record(index, &name, error);
            }
        }
        report
    }
}
