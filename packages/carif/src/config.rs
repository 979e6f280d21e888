//! Configuration constants for the CARIF parser.
//!
//! Element and attribute names follow the CARIF exchange format. Names are
//! matched case-sensitively against the local (unprefixed) tag name.

/// Element that delimits a single point of interest.
pub const FEATURE_TAG: &str = "Feature";

/// Text element holding the POI name.
pub const NAME_TAG: &str = "name";

/// Text element holding the POI description.
pub const DESCRIPTION_TAG: &str = "description";

/// Container for image and action entries.
pub const METADATA_TAG: &str = "metadata";

/// Image reference inside `metadata`.
pub const IMAGE_TAG: &str = "image";

/// Action entry inside `metadata`.
pub const ACTION_TAG: &str = "action";

/// Text element holding the action target.
pub const URI_TAG: &str = "uri";

/// Geometry element of a Feature.
pub const POINT_TAG: &str = "Point";

/// Coordinate text element inside `Point`.
pub const POS_TAG: &str = "pos";

/// Feature identifier attribute.
pub const ID_ATTR: &str = "id";

/// Image URL attribute.
pub const HREF_ATTR: &str = "href";

/// Action mime type attribute.
pub const MIME_TYPE_ATTR: &str = "mime-type";

/// Action button label attribute.
pub const LABEL_ATTR: &str = "label";

/// Separator between `pos` tokens (`lon lat [alt]`).
///
/// A single space only; consecutive spaces produce empty tokens.
pub const POS_SEPARATOR: char = ' ';

/// Default maximum input file size in bytes (16 MB).
///
/// Can be overridden via CLI --max-size flag.
pub const DEFAULT_MAX_INPUT_SIZE: u64 = 16 * 1024 * 1024;
