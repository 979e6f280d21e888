//! Conversion of a CARIF XML tree into the [`Document`] model.
//!
//! The parser finds every `Feature` element when it is created and builds
//! one [`Poi`] per Feature on [`Parser::parse`]. Optional values that are
//! missing or ambiguous become `None`; a missing `Point`/`pos` or a
//! malformed coordinate aborts the whole parse.

use std::num::ParseFloatError;

use roxmltree::Node;

use crate::config::{
    ACTION_TAG, DESCRIPTION_TAG, FEATURE_TAG, HREF_ATTR, ID_ATTR, IMAGE_TAG, LABEL_ATTR,
    METADATA_TAG, MIME_TYPE_ATTR, NAME_TAG, POINT_TAG, POS_SEPARATOR, POS_TAG, URI_TAG,
};
use crate::error::{CarifError, Result};
use crate::types::{Document, Location, Poi, PoiAction};
use crate::xml::{
    find_descendants, find_feature_context, find_unique_descendant, get_attribute,
    get_node_value, has_tag,
};

/// CARIF parser over a borrowed XML tree.
///
/// # Examples
/// ```
/// use carif_parser::Parser;
///
/// let xml = r#"<Features>
///   <Feature id="1"><name>Cafe</name><Point><pos>16.37 48.21</pos></Point></Feature>
/// </Features>"#;
/// let tree = roxmltree::Document::parse(xml).unwrap();
///
/// let doc = Parser::new(Some(&tree)).parse().unwrap();
/// assert_eq!(doc.pois.len(), 1);
/// assert_eq!(doc.pois[0].name.as_deref(), Some("Cafe"));
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'a, 'input> {
    features: Vec<Node<'a, 'input>>,
}

impl<'a, 'input> Parser<'a, 'input> {
    /// Create a parser and locate all `Feature` elements in the tree.
    ///
    /// Never fails: an absent tree or a tree without Features yields a
    /// parser that produces an empty document.
    #[must_use]
    pub fn new(tree: Option<&'a roxmltree::Document<'input>>) -> Self {
        let features = tree
            .map(|doc| {
                doc.descendants()
                    .filter(|n| has_tag(*n, FEATURE_TAG))
                    .collect()
            })
            .unwrap_or_default();
        Self { features }
    }

    /// Number of `Feature` elements found at construction.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Parse every Feature into a [`Document`].
    ///
    /// All-or-nothing: the first failing Feature aborts the call and no
    /// partial document is returned. Each call builds a fresh document.
    pub fn parse(&self) -> Result<Document> {
        let pois = self
            .features
            .iter()
            .map(|feature| parse_feature(*feature))
            .collect::<Result<Vec<_>>>()?;

        Ok(Document { pois })
    }
}

/// Parse a single `Feature` element.
///
/// # Errors
/// * `CarifError::MissingElement` if the Feature has no `Point`, or its
///   `Point` has no single `pos`
/// * `CarifError::NumericFormat` if a coordinate is not a finite number
pub fn parse_feature(feature: Node<'_, '_>) -> Result<Poi> {
    let mut poi = Poi {
        id: get_attribute(feature, ID_ATTR).map(str::to_string),
        name: get_node_value(feature, NAME_TAG),
        description: get_node_value(feature, DESCRIPTION_TAG),
        ..Poi::default()
    };

    if let Some(metadata) = find_unique_descendant(feature, METADATA_TAG) {
        poi.image = find_unique_descendant(metadata, IMAGE_TAG)
            .and_then(|image| get_attribute(image, HREF_ATTR))
            .map(str::to_string);
        poi.actions = parse_actions(find_descendants(metadata, ACTION_TAG));
    }

    // First Point wins; unlike text fields, extra Points are not ambiguous
    let point = find_descendants(feature, POINT_TAG)
        .next()
        .ok_or_else(|| CarifError::MissingElement {
            element: POINT_TAG.to_string(),
            context: find_feature_context(feature),
        })?;
    poi.location = Some(parse_location(point)?);

    Ok(poi)
}

/// Parse `action` elements into POI actions, keeping their order.
pub fn parse_actions<'a, 'input: 'a>(
    actions: impl IntoIterator<Item = Node<'a, 'input>>,
) -> Vec<PoiAction> {
    actions.into_iter().map(parse_action).collect()
}

/// Parse a single `action` element.
pub fn parse_action(action: Node<'_, '_>) -> PoiAction {
    PoiAction {
        mime_type: get_attribute(action, MIME_TYPE_ATTR).map(str::to_string),
        label: get_attribute(action, LABEL_ATTR).map(str::to_string),
        uri: get_node_value(action, URI_TAG),
    }
}

/// Parse a `Point` element into a [`Location`].
///
/// The `pos` text is split on single spaces into `longitude latitude
/// [altitude]`. An empty or missing altitude token means no altitude; tokens
/// after the third are ignored.
///
/// # Errors
/// * `CarifError::MissingElement` if `pos` is absent or appears more than once
/// * `CarifError::NumericFormat` if longitude or latitude is missing or not
///   a finite number, or a non-empty altitude is not a finite number
pub fn parse_location(point: Node<'_, '_>) -> Result<Location> {
    let context = || find_feature_context(point);

    let pos = get_node_value(point, POS_TAG).ok_or_else(|| CarifError::MissingElement {
        element: POS_TAG.to_string(),
        context: context(),
    })?;

    let mut tokens = pos.split(POS_SEPARATOR);
    let longitude = parse_coordinate("longitude", tokens.next(), context)?;
    let latitude = parse_coordinate("latitude", tokens.next(), context)?;
    let altitude = match tokens.next() {
        Some(token) if !token.is_empty() => {
            Some(parse_coordinate("altitude", Some(token), context)?)
        }
        _ => None,
    };

    Ok(Location::new(longitude, latitude, altitude))
}

/// Parse one coordinate token; a missing token fails like an empty one.
///
/// `NaN` and infinities parse as `f64` but are not coordinates, so they are
/// rejected too.
fn parse_coordinate(
    field: &'static str,
    token: Option<&str>,
    context: impl Fn() -> String,
) -> Result<f64> {
    let value = token.unwrap_or_default();
    let invalid = |source: Option<ParseFloatError>| CarifError::NumericFormat {
        field,
        value: value.to_string(),
        context: context(),
        source,
    };

    let number = value.parse::<f64>().map_err(|e| invalid(Some(e)))?;
    if !number.is_finite() {
        return Err(invalid(None));
    }
    Ok(number)
}
