pub mod prediction;
pub mod selected_file;

pub use prediction::{Digit, PredictOutcome, PredictResponse};
pub use selected_file::SelectedFile;
