//! CARIF Parser - Convert CARIF point-of-interest XML into a typed document model.
//!
//! CARIF files describe points of interest (POIs) as `Feature` elements with
//! a name, description, image, a list of actions and a `Point` location. This
//! crate maps an already-parsed `roxmltree` tree onto [`Document`], [`Poi`],
//! [`Location`] and [`PoiAction`] values.
//!
//! # Example
//!
//! ```
//! use carif_parser::{ActionType, Parser};
//!
//! let xml = r#"<Features>
//!   <Feature id="stephansdom">
//!     <name>Stephansdom</name>
//!     <metadata>
//!       <action mime-type="audio/mpeg" label="Listen"><uri>http://example.com/tour.mp3</uri></action>
//!     </metadata>
//!     <Point><pos>16.3731 48.2085 171</pos></Point>
//!   </Feature>
//! </Features>"#;
//!
//! let tree = roxmltree::Document::parse(xml).unwrap();
//! let doc = Parser::new(Some(&tree)).parse().unwrap();
//!
//! let poi = &doc.pois[0];
//! let location = poi.location.unwrap();
//! assert_eq!(location.longitude, 16.3731);
//! assert_eq!(location.latitude, 48.2085);
//! assert_eq!(poi.actions[0].action_type(), Some(ActionType::PlayAudio));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Element/attribute names and limits
//! - [`types`]: Document model (Document, Poi, Location, PoiAction)
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML navigation utilities
//! - [`parser`]: Feature-to-POI conversion
//! - [`loader`]: Reading and parsing CARIF files
//! - [`export`]: JSON/YAML/summary output
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod parser;
pub mod types;
pub mod xml;

// Re-export commonly used items
pub use error::{CarifError, Result};
pub use loader::{load_carif_file, parse_carif_str};
pub use parser::Parser;
pub use types::{ActionType, Document, Location, Poi, PoiAction};
