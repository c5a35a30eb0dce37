//! Options controlling how snapshots are compiled.

use std::fmt::Display;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Edge lengths are halved before layout: it turned out to look nice on beamer slides.
pub const EDGE_LENGTH_FACTOR: f64 = 0.5;

/// How dot2tex treats label text.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TexMode {
    /// Labels are typeset in math mode.
    #[default]
    Math,
    /// Special characters are escaped.
    Verbatim,
    /// Labels are passed through untouched.
    Raw,
}

impl TexMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TexMode::Math => "math",
            TexMode::Verbatim => "verbatim",
            TexMode::Raw => "raw",
        }
    }
}

impl FromStr for TexMode {
    type Err = Error;

    fn from_str(mode: &str) -> Result<Self> {
        match mode {
            "math" => Ok(TexMode::Math),
            "verbatim" => Ok(TexMode::Verbatim),
            "raw" => Ok(TexMode::Raw),
            _ => Err(Error::UnknownTexMode(mode.to_string())),
        }
    }
}

impl Display for TexMode {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}

/// Layout options added to the graph statement of every compiled snapshot.
///
/// Only these four graphviz attributes are accepted.
#[derive(Debug, Clone, Default, Eq, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphOptions {
    pub overlap: Option<String>,
    pub splines: Option<String>,
    pub sep: Option<String>,
    pub orientation: Option<String>,
}

impl GraphOptions {
    /// Set one option by name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let slot = match key {
            "overlap" => &mut self.overlap,
            "splines" => &mut self.splines,
            "sep" => &mut self.sep,
            "orientation" => &mut self.orientation,
            _ => return Err(Error::UnknownGraphOption(key.to_string())),
        };
        *slot = Some(value.to_string());

        Ok(())
    }

    /// Set an option from `key=value` text.
    pub fn set_assignment(&mut self, assignment: &str) -> Result<()> {
        match assignment.split_once('=') {
            Some((key, value)) => self.set(key.trim(), value.trim()),
            None => Err(Error::UnknownGraphOption(assignment.to_string())),
        }
    }

    /// The options that are set, in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("overlap", &self.overlap),
            ("splines", &self.splines),
            ("sep", &self.sep),
            ("orientation", &self.orientation),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|value| (key, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileOptions {
    /// Let TikZ place edge labels instead of graphviz.
    pub tikz_edge_labels: bool,
    /// Label every edge with its len before scaling.
    pub len_as_label: bool,
    /// Scale applied to the whole TikZ picture.
    pub scale_total: f64,
    /// Extra factor on every edge len, on top of EDGE_LENGTH_FACTOR.
    pub scale_edge_lengths: f64,
    pub texmode: TexMode,
    pub graph_options: GraphOptions,
    /// Also render an SVG next to each TikZ figure.
    pub svg_preview: bool,
}

/// Per run changes to the configured CompileOptions, as given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileOverrides {
    pub scale_total: Option<f64>,
    pub scale_edge_lengths: Option<f64>,
    /// Parsed when applied, so a bad mode is reported as UnknownTexMode.
    pub texmode: Option<String>,
    pub no_len_as_label: bool,
    pub no_tikz_edge_labels: bool,
    /// `key=value` graph options.
    pub graph_options: Vec<String>,
    pub svg_preview: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            tikz_edge_labels: true,
            len_as_label: true,
            scale_total: 1.0,
            scale_edge_lengths: 1.0,
            texmode: TexMode::Math,
            graph_options: GraphOptions::default(),
            svg_preview: false,
        }
    }
}

impl CompileOptions {
    /// Both scales must be finite and positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("scale_total", self.scale_total),
            ("scale_edge_lengths", self.scale_edge_lengths),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::Config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Factor every edge len is multiplied by.
    pub fn edge_length_factor(&self) -> f64 {
        EDGE_LENGTH_FACTOR * self.scale_edge_lengths
    }

    /// Apply command line overrides on top of these options.
    ///
    /// Values that are set replace the configured ones; the switches only ever turn a
    /// feature off (labels) or on (svg).
    pub fn apply_overrides(&mut self, overrides: &CompileOverrides) -> Result<()> {
        if let Some(scale_total) = overrides.scale_total {
            self.scale_total = scale_total;
        }
        if let Some(scale_edge_lengths) = overrides.scale_edge_lengths {
            self.scale_edge_lengths = scale_edge_lengths;
        }
        if let Some(texmode) = &overrides.texmode {
            self.texmode = texmode.parse()?;
        }
        if overrides.no_len_as_label {
            self.len_as_label = false;
        }
        if overrides.no_tikz_edge_labels {
            self.tikz_edge_labels = false;
        }
        for assignment in &overrides.graph_options {
            self.graph_options.set_assignment(assignment)?;
        }
        if overrides.svg_preview {
            self.svg_preview = true;
        }
        Ok(())
    }

    /// TikZ style of the generated picture.
    pub fn graph_style(&self) -> String {
        format!(
            "scale={}, auto, every node/.style={{transform shape}}",
            self.scale_total
        )
    }
}
