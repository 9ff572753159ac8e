// Application layer - Use case interactors

pub mod extract_interactor;

// Re-export interactors
pub use extract_interactor::{ExtractInteractor, ExtractOutcome, ExtractRequest};
