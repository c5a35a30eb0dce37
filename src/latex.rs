//! Beamer slide and LaTeX document scaffolding around compiled snapshots.
//!
//! Both read the figures back from the compile directory: `graph0.tex`, `graph1.tex`,
//! ... up to the first missing index.  Captions are used in order; figures past the
//! end of the caption list get none.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::compile::snapshot_file_name;
use crate::error::{Error, Result};

const DOCUMENT_PREAMBLE: [&str; 5] = [
    r"\documentclass{article}",
    r"\usepackage{tikz}",
    r"\usetikzlibrary{decorations,arrows,shapes}",
    r"\usepackage{amsmath}",
    r"\usepackage{float}",
];

/// Paths of the consecutive snapshot figures found in dir.
pub fn snapshot_figures(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut content = HashSet::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        content.insert(entry.file_name().to_string_lossy().into_owned());
    }

    let figures = (0..)
        .map(|index| snapshot_file_name(index, "tex"))
        .take_while(|name| content.contains(name))
        .map(|name| dir.join(name))
        .collect();

    Ok(figures)
}

/// One beamer frame showing each snapshot on its own overlay.
///
/// When path is given the slide is also written there.
pub fn beamer_slide(
    dir: &Path,
    title: Option<&str>,
    path: Option<&Path>,
    captions: &[String],
) -> Result<String> {
    let mut lines = vec![r"\begin{frame}".to_string()];
    if let Some(title) = non_empty(title) {
        lines.push(format!(r"\frametitle{{{title}}}"));
    }

    for (i, figure) in snapshot_figures(dir)?.iter().enumerate() {
        let overlay = i + 1;
        lines.push(format!(
            r"\only<{overlay}>{{\begin{{figure}} {} \end{{figure}}}}",
            figure_body(figure, captions.get(i))
        ));
    }
    lines.push(r"\end{frame}".to_string());

    finish(lines, path)
}

/// A standalone article with one float per snapshot.
///
/// When path is given the document is also written there.
pub fn latex_document(
    dir: &Path,
    title: Option<&str>,
    path: Option<&Path>,
    captions: &[String],
) -> Result<String> {
    let mut lines: Vec<String> = DOCUMENT_PREAMBLE.iter().map(|line| line.to_string()).collect();
    lines.push(String::new());
    lines.push(r"\begin{document}".to_string());
    lines.push(String::new());
    if let Some(title) = non_empty(title) {
        lines.push(format!(r"\section{{{title}}}"));
    }

    for (i, figure) in snapshot_figures(dir)?.iter().enumerate() {
        lines.push(format!(
            r"\begin{{figure}}[H] {} \end{{figure}}",
            figure_body(figure, captions.get(i))
        ));
    }
    lines.push(String::new());
    lines.push(r"\end{document}".to_string());

    finish(lines, path)
}

/// An empty title is treated as no title.
fn non_empty(title: Option<&str>) -> Option<&str> {
    title.filter(|title| !title.is_empty())
}

/// `\input{...}` of a figure, followed by its caption if there is one.
fn figure_body(figure: &Path, caption: Option<&String>) -> String {
    let input = format!(r"\input{{{}}}", figure.display());

    match caption {
        Some(caption) => format!(r"{input} \caption{{{caption}}}"),
        None => input,
    }
}

fn finish(lines: Vec<String>, path: Option<&Path>) -> Result<String> {
    let mut code = lines.join("\n");
    code.push('\n');

    if let Some(path) = path {
        fs::write(path, &code).map_err(|e| Error::io(path, e))?;
        info!("wrote {}", path.display());
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn figures_dir(count: usize) -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for index in 0..count {
            fs::write(dir.path().join(snapshot_file_name(index, "tex")), "%").unwrap();
        }
        dir
    }

    #[test]
    fn test_snapshot_figures_stop_at_gap() {
        let dir = figures_dir(2);
        fs::write(dir.path().join("graph3.tex"), "%").unwrap();
        fs::write(dir.path().join("graph2.dot"), "%").unwrap();

        let figures = snapshot_figures(dir.path()).unwrap();

        assert_eq!(
            figures,
            vec![dir.path().join("graph0.tex"), dir.path().join("graph1.tex")]
        );
    }

    #[test]
    fn test_snapshot_figures_missing_dir() {
        let dir = figures_dir(0);
        let missing = dir.path().join("nope");

        assert!(matches!(snapshot_figures(&missing), Err(Error::Io { .. })));
    }

    #[test]
    fn test_beamer_slide() {
        let dir = figures_dir(2);
        let d = dir.path().display();

        let slide = beamer_slide(dir.path(), Some("Dijkstra"), None, &["start".to_string()]).unwrap();

        let expected = format!(
            "\\begin{{frame}}
\\frametitle{{Dijkstra}}
\\only<1>{{\\begin{{figure}} \\input{{{d}/graph0.tex}} \\caption{{start}} \\end{{figure}}}}
\\only<2>{{\\begin{{figure}} \\input{{{d}/graph1.tex}} \\end{{figure}}}}
\\end{{frame}}
"
        );
        assert_eq!(slide, expected);
    }

    #[test]
    fn test_beamer_slide_without_figures() {
        let dir = figures_dir(0);

        let slide = beamer_slide(dir.path(), None, None, &[]).unwrap();
        assert_eq!(slide, "\\begin{frame}\n\\end{frame}\n");
    }

    #[test]
    fn test_empty_title_is_left_out() {
        let dir = figures_dir(0);

        let slide = beamer_slide(dir.path(), Some(""), None, &[]).unwrap();
        assert_eq!(slide, "\\begin{frame}\n\\end{frame}\n");

        let document = latex_document(dir.path(), Some(""), None, &[]).unwrap();
        assert!(!document.contains(r"\section"));
        assert_eq!(document, latex_document(dir.path(), None, None, &[]).unwrap());
    }

    #[test]
    fn test_latex_document_written_to_path() {
        let dir = figures_dir(1);
        let d = dir.path().display();
        let path = dir.path().join("doc.tex");

        let document =
            latex_document(dir.path(), Some("Steps"), Some(&path), &["a".to_string(), "b".to_string()])
                .unwrap();

        let expected = format!(
            "\\documentclass{{article}}
\\usepackage{{tikz}}
\\usetikzlibrary{{decorations,arrows,shapes}}
\\usepackage{{amsmath}}
\\usepackage{{float}}

\\begin{{document}}

\\section{{Steps}}
\\begin{{figure}}[H] \\input{{{d}/graph0.tex}} \\caption{{a}} \\end{{figure}}

\\end{{document}}
"
        );
        assert_eq!(document, expected);
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }
}
