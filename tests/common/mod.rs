//! Shared test infrastructure for graph-snapshot integration tests.
//!
//! Provides a Renderer that records what it was asked to render instead of
//! running dot2tex and neato.

#![allow(dead_code)]

use std::cell::RefCell;

use graph_snapshot::{Renderer, Result, TikzSettings};
use tempfile::TempDir;

/// Renders each dot string to a recognisable fake figure.
#[derive(Default)]
pub struct RecordingRenderer {
    pub tikz_calls: RefCell<Vec<(String, TikzSettings)>>,
    pub svg_calls: RefCell<Vec<String>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tikz_count(&self) -> usize {
        self.tikz_calls.borrow().len()
    }
}

impl Renderer for RecordingRenderer {
    fn to_tikz(&self, dot: &str, settings: &TikzSettings) -> Result<String> {
        let mut calls = self.tikz_calls.borrow_mut();
        calls.push((dot.to_string(), settings.clone()));

        Ok(format!("\\begin{{tikzpicture}} % figure {}\n\\end{{tikzpicture}}\n", calls.len() - 1))
    }

    fn to_svg(&self, dot: &str) -> Result<String> {
        self.svg_calls.borrow_mut().push(dot.to_string());

        Ok("<svg/>".to_string())
    }
}

/// A fresh temporary output directory.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}
