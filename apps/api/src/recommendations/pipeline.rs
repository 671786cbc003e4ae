//! Recommendation pipeline: turns a profile into exactly six recommendations.
//!
//! Flow: build_prompt → generate → extract → repair links (concurrently) → assemble.
//!
//! Never fails. Model errors and unparseable output degrade to the fallback set;
//! unreachable or non-search links are rebuilt from the record's title and type.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::llm_client::TextGenerator;
use crate::recommendations::extract::extract_recommendations;
use crate::recommendations::fallback::fallback_recommendations;
use crate::recommendations::links::{
    is_search_link, matches_search_template, search_link_for, LinkProber,
};
use crate::recommendations::models::{
    Profile, Recommendation, RecommendationSet, RECOMMENDATION_COUNT,
};
use crate::recommendations::prompts::build_prompt;

#[derive(Clone)]
pub struct RecommendationPipeline {
    generator: Arc<dyn TextGenerator>,
    prober: Arc<dyn LinkProber>,
}

impl RecommendationPipeline {
    pub fn new(generator: Arc<dyn TextGenerator>, prober: Arc<dyn LinkProber>) -> Self {
        Self { generator, prober }
    }

    pub async fn recommend(&self, profile: &Profile) -> RecommendationSet {
        let fallback = fallback_recommendations(profile);
        let prompt = build_prompt(profile);

        let text = match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Recommendation model call failed, using defaults: {e}");
                return RecommendationSet::from_fallback(fallback);
            }
        };

        let Some(mut parsed) = extract_recommendations(&text) else {
            warn!(
                "Could not parse recommendations from model output ({} chars), using defaults",
                text.len()
            );
            return RecommendationSet::from_fallback(fallback);
        };

        // Only the records that can make it into the set are probed.
        parsed.truncate(RECOMMENDATION_COUNT);
        let parsed_count = parsed.len();

        let validated = join_all(parsed.into_iter().map(|rec| self.repair_link(rec))).await;

        if parsed_count < RECOMMENDATION_COUNT {
            warn!(
                "Model returned {} recommendations, padding with {} defaults",
                parsed_count,
                RECOMMENDATION_COUNT - parsed_count
            );
        } else {
            info!("Model returned {} usable recommendations", parsed_count);
        }

        RecommendationSet::assemble(validated, fallback)
    }

    /// Ensures the record leaves with a search link that either probed reachable
    /// or was rebuilt from its title and type.
    async fn repair_link(&self, mut rec: Recommendation) -> Recommendation {
        if !is_search_link(&rec.link) {
            rec.link = search_link_for(&rec.title, &rec.kind);
        }
        if !self.prober.is_reachable(&rec.link).await {
            warn!(title = %rec.title, "Recommendation link unreachable, rebuilding");
            rec.link = search_link_for(&rec.title, &rec.kind);
        } else if !matches_search_template(&rec.link) {
            debug!(link = %rec.link, "Keeping reachable model link with a non-standard query");
        }
        rec
    }
}
