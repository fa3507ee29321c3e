//! Turn a retrieved document into an [`oxrdf::Graph`].

use oxiri::Iri;
use oxrdf::{BlankNode, Graph, Literal, NamedNode, Subject, Term, Triple};
use rio_api::model;
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesParser, TurtleError, TurtleParser};
use rio_xml::{RdfXmlError, RdfXmlParser};
use thiserror::Error;
use url::Url;

use crate::ldp::vocab::{N_TRIPLES, RDF_XML, TEXT_TURTLE};

/// Why a document could not be read as RDF.
#[derive(Debug, Error)]
pub enum RdfParseError {
    /// Turtle or N-Triples syntax error.
    #[error(transparent)]
    Turtle(#[from] TurtleError),

    /// RDF/XML syntax error.
    #[error(transparent)]
    RdfXml(#[from] RdfXmlError),

    /// Well-formed input using a feature the graph model does not hold (RDF-star).
    #[error("unsupported RDF construct: {0}")]
    Unsupported(&'static str),
}

/// Serialization of a retrieved document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RdfFormat {
    /// `text/turtle`
    Turtle,
    /// `application/n-triples`
    NTriples,
    /// `application/rdf+xml`
    RdfXml,
}

impl RdfFormat {
    /// Pick a parser from a `Content-Type` value. Parameters are ignored;
    /// anything unrecognised, or no header at all, is read as Turtle.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let essence = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase())
            .unwrap_or_default();
        match essence.as_str() {
            N_TRIPLES | "text/plain" => RdfFormat::NTriples,
            RDF_XML | "application/xml" | "text/xml" => RdfFormat::RdfXml,
            _ => RdfFormat::Turtle,
        }
    }

    /// Canonical media type.
    pub fn media_type(self) -> &'static str {
        match self {
            RdfFormat::Turtle => TEXT_TURTLE,
            RdfFormat::NTriples => N_TRIPLES,
            RdfFormat::RdfXml => RDF_XML,
        }
    }
}

/// Parse `body` in `format`, resolving relative IRIs against `base`.
pub fn parse(body: &[u8], format: RdfFormat, base: &Url) -> Result<Graph, RdfParseError> {
    let base_iri = Iri::parse(base.to_string()).ok();
    let mut graph = Graph::new();

    match format {
        RdfFormat::Turtle => {
            TurtleParser::new(body, base_iri).parse_all(&mut |t| insert(&mut graph, &t))?;
        }
        RdfFormat::NTriples => {
            NTriplesParser::new(body).parse_all(&mut |t| insert(&mut graph, &t))?;
        }
        RdfFormat::RdfXml => {
            RdfXmlParser::new(body, base_iri).parse_all(&mut |t| insert(&mut graph, &t))?;
        }
    }

    Ok(graph)
}

fn insert(graph: &mut Graph, t: &model::Triple<'_>) -> Result<(), RdfParseError> {
    let triple = Triple::new(subject(t.subject)?, named_node(t.predicate), term(t.object)?);
    graph.insert(&triple);
    Ok(())
}

fn named_node(n: model::NamedNode<'_>) -> NamedNode {
    NamedNode::new_unchecked(n.iri)
}

fn blank_node(b: model::BlankNode<'_>) -> BlankNode {
    BlankNode::new_unchecked(b.id)
}

fn subject(s: model::Subject<'_>) -> Result<Subject, RdfParseError> {
    match s {
        model::Subject::NamedNode(n) => Ok(named_node(n).into()),
        model::Subject::BlankNode(b) => Ok(blank_node(b).into()),
        model::Subject::Triple(_) => Err(RdfParseError::Unsupported("quoted triple as subject")),
    }
}

fn term(o: model::Term<'_>) -> Result<Term, RdfParseError> {
    match o {
        model::Term::NamedNode(n) => Ok(named_node(n).into()),
        model::Term::BlankNode(b) => Ok(blank_node(b).into()),
        model::Term::Literal(l) => Ok(literal(l).into()),
        model::Term::Triple(_) => Err(RdfParseError::Unsupported("quoted triple as object")),
    }
}

fn literal(l: model::Literal<'_>) -> Literal {
    match l {
        model::Literal::Simple { value } => Literal::new_simple_literal(value),
        model::Literal::LanguageTaggedString { value, language } => {
            Literal::new_language_tagged_literal_unchecked(value, language.to_ascii_lowercase())
        }
        model::Literal::Typed { value, datatype } => {
            Literal::new_typed_literal(value, named_node(datatype))
        }
    }
}

#[cfg(test)]
mod test {
    use oxrdf::{NamedNodeRef, TermRef};

    use super::*;

    fn foaf_name() -> NamedNodeRef<'static> {
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/name")
    }

    fn base() -> Url {
        Url::parse("https://alice.example/profile/card").unwrap()
    }

    #[test]
    fn content_type_selection() {
        assert_eq!(RdfFormat::from_content_type(None), RdfFormat::Turtle);
        assert_eq!(
            RdfFormat::from_content_type(Some("text/turtle; charset=utf-8")),
            RdfFormat::Turtle
        );
        assert_eq!(
            RdfFormat::from_content_type(Some("Application/N-Triples")),
            RdfFormat::NTriples
        );
        assert_eq!(
            RdfFormat::from_content_type(Some("application/rdf+xml")),
            RdfFormat::RdfXml
        );
        assert_eq!(
            RdfFormat::from_content_type(Some("application/octet-stream")),
            RdfFormat::Turtle
        );
    }

    #[test]
    fn turtle_relative_iris_resolve_against_base() {
        let doc = br#"
            @prefix foaf: <http://xmlns.com/foaf/0.1/> .
            <#me> foaf:name "Alice"@EN ; foaf:knows _:b .
            _:b foaf:name "Bob" .
        "#;
        let graph = parse(doc, RdfFormat::Turtle, &base()).unwrap();
        assert_eq!(graph.len(), 3);

        let me = NamedNodeRef::new_unchecked("https://alice.example/profile/card#me");
        let name = graph.object_for_subject_predicate(me, foaf_name()).unwrap();
        assert_eq!(
            name,
            TermRef::Literal(oxrdf::LiteralRef::new_language_tagged_literal_unchecked(
                "Alice", "en"
            ))
        );
    }

    #[test]
    fn ntriples_document() {
        let doc = b"<https://a.example/s> <http://xmlns.com/foaf/0.1/name> \"S\" .\n";
        let graph = parse(doc, RdfFormat::NTriples, &base()).unwrap();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn rdf_xml_document() {
        let doc = br##"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:foaf="http://xmlns.com/foaf/0.1/">
  <rdf:Description rdf:about="#me">
    <foaf:name>Alice</foaf:name>
  </rdf:Description>
</rdf:RDF>"##;
        let graph = parse(doc, RdfFormat::RdfXml, &base()).unwrap();
        assert_eq!(graph.len(), 1);
        let me = NamedNodeRef::new_unchecked("https://alice.example/profile/card#me");
        assert!(graph.object_for_subject_predicate(me, foaf_name()).is_some());
    }

    #[test]
    fn syntax_errors_are_reported() {
        let err = parse(b"<a> <b> .", RdfFormat::Turtle, &base()).unwrap_err();
        assert!(matches!(err, RdfParseError::Turtle(_)));
    }

    #[test]
    fn empty_document_is_an_empty_graph() {
        let graph = parse(b"", RdfFormat::Turtle, &base()).unwrap();
        assert!(graph.is_empty());
    }
}
