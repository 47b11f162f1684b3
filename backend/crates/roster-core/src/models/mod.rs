pub mod card_field;
pub mod extracted_identity;
pub mod merged_record;
pub mod raw_card;
pub mod resolved_identity;
pub mod token_priority;
