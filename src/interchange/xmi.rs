//! XMI export for Enterprise Architect.
//!
//! The document is assembled as typed sections, lowered to one
//! [`XmlNode`] tree and serialized in a single pass:
//!
//! ```xml
//! <?xml version="1.0" encoding="windows-1252"?>
//! <xmi:XMI xmlns:uml=".." xmlns:xmi=".." xmlns:umldi=".." xmlns:dc="..">
//!   <xmi:Documentation exporter="Enterprise Architect" exporterVersion="6.5"/>
//!   <uml:Model xmi:type="uml:Model" name="EA_Model">
//!     <packagedElement xmi:type="uml:Package" ..>   <!-- PackagedSection -->
//!   </uml:Model>
//!   <xmi:Extension extender="Enterprise Architect" extenderID="6.5">
//!     <elements>..</elements>                       <!-- ElementsSection -->
//!     <connectors>..</connectors>                   <!-- ConnectorsSection -->
//!     <diagrams>..</diagrams>                       <!-- DiagramSection -->
//!   </xmi:Extension>
//! </xmi:XMI>
//! ```

use smol_str::SmolStr;

use super::ArtifactFormat;
use crate::base::{Bounds, ElementId};
use crate::config::{ExportConfig, XmiOptions};
use crate::error::{ExportError, Result};
use crate::model::{ClassNode, RelationshipKind};
use crate::resolve::{ResolvedEdge, ResolvedModel};

/// Namespace URIs written on the root element.
pub mod namespace {
    pub const UML: &str = "http://www.omg.org/spec/UML/20131001";
    pub const XMI: &str = "http://www.omg.org/spec/XMI/20131001";
    pub const UMLDI: &str = "http://www.omg.org/spec/UML/20131001/UMLDI";
    pub const DC: &str = "http://www.omg.org/spec/UML/20131001/UMLDC";
}

/// Exporter identification expected by Enterprise Architect.
const EXPORTER: &str = "Enterprise Architect";
const EXPORTER_VERSION: &str = "6.5";
const ENCODING: &str = "windows-1252";

/// XMI format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Xmi;

impl ArtifactFormat for Xmi {
    fn name(&self) -> &'static str {
        "XMI"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["xml", "xmi"]
    }

    fn mime_type(&self) -> &'static str {
        "application/xml"
    }

    fn write(&self, model: &ResolvedModel, config: &ExportConfig) -> Result<Vec<u8>> {
        let document = XmiDocument::build(model, &config.xmi);
        #[cfg(feature = "interchange")]
        {
            writer::write_document(&document.to_node())
        }
        #[cfg(not(feature = "interchange"))]
        {
            let _ = document;
            Err(ExportError::Unsupported(
                "XMI writing requires the 'interchange' feature".to_string(),
            ))
        }
    }

    fn validate(&self, input: &[u8]) -> Result<()> {
        let content = std::str::from_utf8(input)
            .map_err(|e| ExportError::xml(format!("Invalid UTF-8: {e}")))?;
        if !content.starts_with("<?xml") {
            return Err(ExportError::xml("Missing XML declaration"));
        }
        if !content.contains("<xmi:XMI") {
            return Err(ExportError::xml("Missing xmi:XMI root element"));
        }
        Ok(())
    }
}

// ============================================================================
// DOCUMENT TREE
// ============================================================================

/// A generic XML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    pub name: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }

    pub fn child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = XmlNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first search for elements named `name`.
    pub fn find_all<'a>(&'a self, name: &str, out: &mut Vec<&'a XmlNode>) {
        if self.name == name {
            out.push(self);
        }
        for child in &self.children {
            child.find_all(name, out);
        }
    }
}

/// A class attribute as it appears in both the model and the extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRef {
    pub id: ElementId,
    pub name: SmolStr,
}

/// `uml:Model` content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedSection {
    pub model_name: String,
    pub package_id: String,
    pub package_name: String,
    pub classes: Vec<PackagedClass>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedClass {
    pub id: ElementId,
    pub name: SmolStr,
    pub is_association_class: bool,
    pub attributes: Vec<AttributeRef>,
    /// `(relationship id, general class id)`.
    pub generalizations: Vec<(ElementId, ElementId)>,
}

/// `xmi:Extension/elements`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementsSection {
    pub elements: Vec<ExtensionElement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionElement {
    pub id: ElementId,
    pub name: SmolStr,
    pub attributes: Vec<AttributeRef>,
    pub links: Vec<ElementLink>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Association,
    Aggregation,
}

impl LinkKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Association => "Association",
            Self::Aggregation => "Aggregation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementLink {
    pub kind: LinkKind,
    pub id: ElementId,
    pub start: ElementId,
    pub end: ElementId,
}

/// `xmi:Extension/connectors`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorsSection {
    pub connectors: Vec<Connector>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    pub id: ElementId,
    pub source: ElementId,
    pub target: ElementId,
    pub source_multiplicity: SmolStr,
    pub target_multiplicity: SmolStr,
    pub kind: RelationshipKind,
    /// Intermediate class of a collapsed many-to-many.
    pub via: Option<ElementId>,
}

impl Connector {
    fn from_edge(edge: &ResolvedEdge) -> Self {
        let (lb, rb) = edge.labels();
        let via = match edge {
            ResolvedEdge::ManyToMany(m2m) => Some(m2m.via.clone()),
            ResolvedEdge::Plain(_) => None,
        };
        Self {
            id: edge.id().clone(),
            source: edge.source().clone(),
            target: edge.target().clone(),
            source_multiplicity: lb.into(),
            target_multiplicity: rb.into(),
            kind: edge.kind(),
            via,
        }
    }
}

/// `xmi:Extension/diagrams`.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramSection {
    pub id: String,
    pub local_id: u32,
    pub package_id: String,
    pub package_name: String,
    pub shapes: Vec<(ElementId, Bounds)>,
    pub connectors: Vec<ElementId>,
}

/// The whole XMI document before serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct XmiDocument {
    pub packaged: PackagedSection,
    pub elements: ElementsSection,
    pub connectors: ConnectorsSection,
    pub diagram: DiagramSection,
}

impl XmiDocument {
    /// Assemble every section from the resolved model.
    pub fn build(model: &ResolvedModel, options: &XmiOptions) -> Self {
        let connectors: Vec<Connector> = model.edges.iter().map(Connector::from_edge).collect();
        let classes: Vec<&ClassNode> = model.diagram.iter_classes().collect();

        let packaged = PackagedSection {
            model_name: options.model_name.clone(),
            package_id: options.package_id.clone(),
            package_name: options.package_name.clone(),
            classes: classes
                .iter()
                .map(|class| PackagedClass {
                    id: class.id.clone(),
                    name: class.title.clone(),
                    is_association_class: class.is_association_class,
                    attributes: attribute_refs(class),
                    generalizations: connectors
                        .iter()
                        .filter(|c| c.kind == RelationshipKind::Generalization && c.source == class.id)
                        .map(|c| (c.id.clone(), c.target.clone()))
                        .collect(),
                })
                .collect(),
        };

        let elements = ElementsSection {
            elements: classes
                .iter()
                .map(|class| ExtensionElement {
                    id: class.id.clone(),
                    name: class.title.clone(),
                    attributes: attribute_refs(class),
                    links: links_of(&class.id, &connectors),
                })
                .collect(),
        };

        let diagram = DiagramSection {
            id: options.diagram_id.clone(),
            local_id: options.diagram_local_id,
            package_id: options.package_id.clone(),
            package_name: options.package_name.clone(),
            shapes: classes
                .iter()
                .map(|class| (class.id.clone(), Bounds::from_shape(class.position, class.size)))
                .collect(),
            connectors: connectors.iter().map(|c| c.id.clone()).collect(),
        };

        tracing::debug!(
            classes = classes.len(),
            connectors = connectors.len(),
            "Assembled XMI document"
        );

        Self {
            packaged,
            elements,
            connectors: ConnectorsSection { connectors },
            diagram,
        }
    }

    /// Lower to the element tree rooted at `xmi:XMI`.
    pub fn to_node(&self) -> XmlNode {
        XmlNode::new("xmi:XMI")
            .attr("xmlns:uml", namespace::UML)
            .attr("xmlns:xmi", namespace::XMI)
            .attr("xmlns:umldi", namespace::UMLDI)
            .attr("xmlns:dc", namespace::DC)
            .child(
                XmlNode::new("xmi:Documentation")
                    .attr("exporter", EXPORTER)
                    .attr("exporterVersion", EXPORTER_VERSION),
            )
            .child(self.packaged.to_node())
            .child(
                XmlNode::new("xmi:Extension")
                    .attr("extender", EXPORTER)
                    .attr("extenderID", EXPORTER_VERSION)
                    .child(self.elements.to_node())
                    .child(self.connectors.to_node())
                    .child(self.diagram.to_node()),
            )
    }
}

fn attribute_refs(class: &ClassNode) -> Vec<AttributeRef> {
    class
        .attributes
        .iter()
        .map(|a| AttributeRef {
            id: a.id.clone(),
            name: a.name.clone(),
        })
        .collect()
}

/// Associations the class starts, aggregations that end at it.
fn links_of(class: &ElementId, connectors: &[Connector]) -> Vec<ElementLink> {
    connectors
        .iter()
        .filter_map(|c| {
            let kind = match c.kind {
                RelationshipKind::Association if &c.source == class => LinkKind::Association,
                RelationshipKind::Composition | RelationshipKind::Aggregation if &c.target == class => {
                    LinkKind::Aggregation
                }
                _ => return None,
            };
            Some(ElementLink {
                kind,
                id: c.id.clone(),
                start: c.source.clone(),
                end: c.target.clone(),
            })
        })
        .collect()
}

impl PackagedSection {
    fn to_node(&self) -> XmlNode {
        let package = XmlNode::new("packagedElement")
            .attr("xmi:type", "uml:Package")
            .attr("xmi:id", self.package_id.as_str())
            .attr("name", self.package_name.as_str())
            .children(self.classes.iter().map(|class| {
                let xmi_type = if class.is_association_class {
                    "uml:AssociationClass"
                } else {
                    "uml:Class"
                };
                XmlNode::new("packagedElement")
                    .attr("xmi:type", xmi_type)
                    .attr("xmi:id", class.id.as_str())
                    .attr("name", class.name.as_str())
                    .children(class.attributes.iter().map(|a| {
                        XmlNode::new("ownedAttribute")
                            .attr("xmi:type", "uml:Property")
                            .attr("xmi:id", a.id.as_str())
                            .attr("name", a.name.as_str())
                    }))
                    .children(class.generalizations.iter().map(|(id, general)| {
                        XmlNode::new("generalization")
                            .attr("xmi:type", "uml:Generalization")
                            .attr("xmi:id", id.as_str())
                            .attr("general", general.as_str())
                    }))
            }));

        XmlNode::new("uml:Model")
            .attr("xmi:type", "uml:Model")
            .attr("name", self.model_name.as_str())
            .child(package)
    }
}

impl ElementsSection {
    fn to_node(&self) -> XmlNode {
        XmlNode::new("elements").children(self.elements.iter().map(|e| {
            XmlNode::new("element")
                .attr("xmi:idref", e.id.as_str())
                .attr("xmi:type", "uml:Class")
                .attr("name", e.name.as_str())
                .attr("scope", "public")
                .child(XmlNode::new("attributes").children(e.attributes.iter().map(|a| {
                    XmlNode::new("attribute")
                        .attr("xmi:idref", a.id.as_str())
                        .attr("name", a.name.as_str())
                        .attr("scope", "Private")
                        .child(XmlNode::new("properties"))
                })))
                .child(XmlNode::new("links").children(e.links.iter().map(|l| {
                    XmlNode::new(l.kind.tag())
                        .attr("xmi:id", l.id.as_str())
                        .attr("start", l.start.as_str())
                        .attr("end", l.end.as_str())
                })))
        }))
    }
}

impl ConnectorsSection {
    fn to_node(&self) -> XmlNode {
        XmlNode::new("connectors").children(self.connectors.iter().map(connector_node))
    }
}

fn connector_node(c: &Connector) -> XmlNode {
    let end_type = |multiplicity: &str, aggregation: &str| {
        XmlNode::new("type")
            .attr("multiplicity", multiplicity)
            .attr("aggregation", aggregation)
            .attr("containment", "Unspecified")
    };

    let mut properties = XmlNode::new("properties").attr("ea_type", c.kind.ea_type());
    if c.via.is_some() {
        properties = properties.attr("subtype", "Class");
    }
    if c.kind == RelationshipKind::Association {
        properties = properties.attr("direction", "Unspecified");
    }

    let mut extended = XmlNode::new("extendedProperties");
    if let Some(via) = &c.via {
        extended = extended.attr("associationclass", via.as_str());
    }

    XmlNode::new("connector")
        .attr("xmi:idref", c.id.as_str())
        .child(
            XmlNode::new("source")
                .attr("xmi:idref", c.source.as_str())
                .child(end_type(c.source_multiplicity.as_str(), "none")),
        )
        .child(
            XmlNode::new("target")
                .attr("xmi:idref", c.target.as_str())
                .child(end_type(c.target_multiplicity.as_str(), c.kind.aggregation())),
        )
        .child(properties)
        .child(
            XmlNode::new("labels")
                .attr("lb", c.source_multiplicity.as_str())
                .attr("rb", c.target_multiplicity.as_str()),
        )
        .child(extended)
}

impl DiagramSection {
    fn to_node(&self) -> XmlNode {
        let elements = XmlNode::new("elements")
            .children(self.shapes.iter().map(|(id, bounds)| {
                XmlNode::new("element")
                    .attr("geometry", bounds.to_geometry())
                    .attr("subject", id.as_str())
            }))
            .children(
                self.connectors
                    .iter()
                    .map(|id| XmlNode::new("element").attr("subject", id.as_str())),
            );

        XmlNode::new("diagrams").child(
            XmlNode::new("diagram")
                .attr("xmi:id", self.id.as_str())
                .child(
                    XmlNode::new("model")
                        .attr("package", self.package_id.as_str())
                        .attr("localID", self.local_id.to_string())
                        .attr("owner", self.package_id.as_str()),
                )
                .child(
                    XmlNode::new("properties")
                        .attr("name", self.package_name.as_str())
                        .attr("type", "Logical"),
                )
                .child(XmlNode::new("extendedProperties"))
                .child(elements),
        )
    }
}

// ============================================================================
// XMI WRITER (requires interchange feature)
// ============================================================================

#[cfg(feature = "interchange")]
mod writer {
    use super::*;
    use quick_xml::Writer;
    use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
    use std::io::Cursor;

    /// Serialize the tree with an XML declaration, two-space indented.
    pub fn write_document(root: &XmlNode) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        let mut writer = Writer::new_with_indent(&mut buffer, b' ', 2);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some(ENCODING), None)))
            .map_err(|e| ExportError::xml(format!("Write error: {e}")))?;
        write_node(&mut writer, root)?;

        let mut output = buffer.into_inner();
        output.push(b'\n');
        Ok(output)
    }

    fn write_node<W: std::io::Write>(writer: &mut Writer<W>, node: &XmlNode) -> Result<()> {
        let mut start = BytesStart::new(node.name);
        for (key, value) in &node.attrs {
            start.push_attribute((*key, value.as_str()));
        }

        if node.children.is_empty() {
            writer
                .write_event(Event::Empty(start))
                .map_err(|e| ExportError::xml(format!("Write error: {e}")))?;
            return Ok(());
        }

        writer
            .write_event(Event::Start(start))
            .map_err(|e| ExportError::xml(format!("Write error: {e}")))?;
        for child in &node.children {
            write_node(writer, child)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(node.name)))
            .map_err(|e| ExportError::xml(format!("Write error: {e}")))?;
        Ok(())
    }
}
