pub mod issue_classifier;
pub mod leaf_index;

pub use issue_classifier::{ChangeBatch, Classification, IssueClassifier, CHANGE_BATCH_SIZE};
pub use leaf_index::LeafIndex;
