//! I18n Module
//!
//! Extraction of translatable messages from markup trees.

pub mod config;
pub mod digest;
pub mod errors;
pub mod expander;
pub mod markers;
pub mod message;
pub mod message_bundle;
pub mod message_extractor;
pub mod partition;
pub mod stringify;

pub use config::{ConfigError, ExtractorConfig};
pub use digest::{compute_msg_id, message_id, sha1};
pub use errors::{I18nError, I18nErrorKind};
pub use expander::{expand_nodes, ExpansionResult};
pub use markers::{
    message_from_attribute, message_from_explicit_attribute, parse_i18n_meta, I18nMeta, I18N_ATTR,
    I18N_ATTR_PREFIX,
};
pub use message::{remove_duplicates, Message};
pub use message_bundle::MessageBundle;
pub use message_extractor::{ExtractionResult, MessageExtractor};
pub use partition::{partition, Part};
pub use stringify::{stringify, stringify_nodes};
