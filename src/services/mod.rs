pub mod catalog;
pub mod generator;
pub mod mock;
pub mod openai;
pub mod prompt;
pub mod recommendation;

// Re-export public types
pub use catalog::FeaturedCatalog;
pub use generator::RecommendationGenerator;
pub use mock::MockGenerator;
pub use openai::OpenAiGenerator;
pub use recommendation::RecommendationService;
