pub mod description_parser;
pub mod field_extractor;
pub mod models;
pub mod record_merger;
pub mod scalar_text;


pub use description_parser::{normalize_description, parse_description};
pub use field_extractor::{ExtractionRules, FieldExtractor};
pub use models::card_field::CardField;
pub use models::extracted_identity::ExtractedIdentity;
pub use models::merged_record::MergedRecord;
pub use models::raw_card::{CardFieldSet, RawCard};
pub use models::resolved_identity::ResolvedIdentity;
pub use models::token_priority::TokenPriority;
pub use record_merger::merge_records;

/// Display name used by the board's blank member card
pub const TEMPLATE_CARD_NAME: &str = "Template";
/// Description key holding the identity token
pub const DEFAULT_DESCRIPTION_KEY: &str = "IGN";
/// Structured field names recognized as identity sources, in priority order
pub const DEFAULT_IDENTITY_FIELD_NAMES: [&str; 2] = ["IGN", "Honorary Titles"];
