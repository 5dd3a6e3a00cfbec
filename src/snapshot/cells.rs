//! Serde views of the JointJS cells the engine reads.
//!
//! Only the fields the engine needs are modelled; everything else in a
//! cell (z-order, fonts, tooltips, ...) is ignored.

use serde::Deserialize;

/// Top-level graph document.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphJson {
    #[serde(default)]
    pub cells: Vec<Cell>,
}

/// One shape of the graph, discriminated by its `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Cell {
    #[serde(rename = "standard.HeaderedRectangle")]
    Class(ClassCell),
    #[serde(rename = "app.Link")]
    Link(LinkCell),
    /// Presentation-only shapes.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassCell {
    pub id: String,
    #[serde(default)]
    pub position: PositionJson,
    #[serde(default)]
    pub size: SizeJson,
    #[serde(default)]
    pub attrs: ClassAttrs,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PositionJson {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SizeJson {
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAttrs {
    #[serde(default)]
    pub body: StrokeAttr,
    #[serde(default)]
    pub header_text: TextAttr,
    #[serde(default)]
    pub body_text: BodyText,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StrokeAttr {
    #[serde(default)]
    pub stroke: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextAttr {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyText {
    #[serde(default)]
    pub text_wrap: TextAttr,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkCell {
    pub id: String,
    #[serde(default)]
    pub source: EndRef,
    #[serde(default)]
    pub target: EndRef,
    #[serde(default)]
    pub attrs: LinkAttrs,
    #[serde(default)]
    pub labels: Vec<LabelCell>,
}

/// A link end. `id` is absent when the end is pinned to a point.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndRef {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkAttrs {
    #[serde(default)]
    pub line: LineAttrs,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAttrs {
    #[serde(default)]
    pub source_marker: Option<MarkerAttr>,
    #[serde(default)]
    pub target_marker: Option<MarkerAttr>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarkerAttr {
    #[serde(default)]
    pub d: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelCell {
    #[serde(default)]
    pub attrs: LabelAttrs,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelAttrs {
    #[serde(default)]
    pub text: TextAttr,
}

impl LinkCell {
    pub fn source_marker(&self) -> Option<&str> {
        self.attrs.line.source_marker.as_ref()?.d.as_deref()
    }

    pub fn target_marker(&self) -> Option<&str> {
        self.attrs.line.target_marker.as_ref()?.d.as_deref()
    }

    pub fn label_texts(&self) -> Vec<&str> {
        self.labels.iter().map(|l| l.attrs.text.text.as_str()).collect()
    }
}
