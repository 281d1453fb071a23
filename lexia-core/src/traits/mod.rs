mod gateway;
mod store;

pub use gateway::{TermGateway, TermProvider};
pub use store::{ConceptStore, DecaySnapshot, FeedbackUpdate, InsertOutcome};
