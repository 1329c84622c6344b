pub mod booking;
pub mod config;
pub mod error;
pub mod input;
pub mod mcp;
pub mod model;
pub mod recommend;
pub mod sample;
pub mod scoring;
pub mod series;
pub mod table;
pub mod trend;
pub mod window;

use config::AdvisorConfig;
use error::AdviseError;
use input::RecommendInput;
use model::Recommendation;

pub fn recommend(
    input: &RecommendInput,
    config: &AdvisorConfig,
) -> Result<Recommendation, AdviseError> {
    config.validate()?;
    input.validate()?;
    Ok(recommend::build_recommendation(input, config))
}
