//! XML utility functions for navigating and extracting data from DOM trees.
//!
//! Lookups mirror DOM `getElementsByTagName`: they search all descendants of
//! a node (not the node itself) in document order and compare local tag names.

use roxmltree::Node;

use crate::config::{FEATURE_TAG, ID_ATTR};

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use carif_parser::xml::get_tag_name;
///
/// let xml = r#"<Feature><name>Cafe</name></Feature>"#;
/// let doc = Document::parse(xml).unwrap();
/// let name = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(name), "name");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with a specific tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find all descendant elements with the given tag name, in document order.
///
/// The starting node itself is never included.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use carif_parser::xml::find_descendants;
///
/// let xml = r#"<metadata><action/><group><action/></group></metadata>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert_eq!(find_descendants(doc.root_element(), "action").count(), 2);
/// ```
pub fn find_descendants<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .filter(move |child| has_tag(*child, tag))
}

/// Find the single descendant element with the given tag name.
///
/// # Returns
/// The element if exactly one matches; `None` for zero or several matches
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use carif_parser::xml::find_unique_descendant;
///
/// let xml = r#"<Feature><name>A</name><metadata><name>B</name></metadata></Feature>"#;
/// let doc = Document::parse(xml).unwrap();
/// let feature = doc.root_element();
///
/// assert!(find_unique_descendant(feature, "metadata").is_some());
/// assert!(find_unique_descendant(feature, "name").is_none());
/// ```
pub fn find_unique_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> Option<Node<'a, 'input>> {
    let mut matches = find_descendants(node, tag);
    let first = matches.next()?;
    match matches.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Get the full text content of a node.
///
/// Concatenates every descendant text node, like DOM `textContent`. Not
/// trimmed.
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Get the trimmed text of the unique descendant with the given tag name.
///
/// # Returns
/// Trimmed text content, or `None` if zero or more than one element matches
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use carif_parser::xml::get_node_value;
///
/// let xml = r#"<action><uri>  tel:+431234  </uri></action>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert_eq!(get_node_value(doc.root_element(), "uri"), Some("tel:+431234".to_string()));
/// assert_eq!(get_node_value(doc.root_element(), "label"), None);
/// ```
pub fn get_node_value(node: Node<'_, '_>, tag: &str) -> Option<String> {
    find_unique_descendant(node, tag).map(|n| text_content(n).trim().to_string())
}

/// Get an attribute value from a node.
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// Describe the Feature enclosing a node, for error messages.
///
/// Walks up from the node (inclusive) to the nearest `Feature` element.
///
/// # Returns
/// `Feature 'id'` when the Feature has an id, plain `Feature` otherwise
pub fn find_feature_context(node: Node<'_, '_>) -> String {
    node.ancestors()
        .find(|n| has_tag(*n, FEATURE_TAG))
        .and_then(|feature| get_attribute(feature, ID_ATTR))
        .map_or_else(|| FEATURE_TAG.to_string(), |id| format!("{FEATURE_TAG} '{id}'"))
}
