// End-to-end recommendation pipeline.
//
// Each call recomputes everything from the request: availability, the
// caller's composition, needs, scarcity, ranked recommendations and the
// retrospective grade. Nothing is cached between calls.

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::draft::roster::TeamComposition;
use crate::request::{DraftRequest, DraftResponse, RequestError};
use crate::valuation::catalog::{Catalog, CatalogPlayer};
use crate::valuation::grading::{DraftAnalysis, grade_draft};
use crate::valuation::needs::{PositionalNeeds, compute_needs, draft_round};
use crate::valuation::ranking::{Recommendation, rank_recommendations};
use crate::valuation::scarcity::{ScarcitySummary, compute_scarcity};

/// Derived per-request state shared by the pipeline steps.
struct DraftContext<'c> {
    available: Vec<&'c CatalogPlayer>,
    composition: TeamComposition,
    needs: PositionalNeeds,
    scarcity: ScarcitySummary,
    round: u32,
}

/// The valuation engine over one season's catalog.
pub struct DraftAssistant<'a> {
    config: &'a EngineConfig,
    catalog: &'a Catalog,
}

impl<'a> DraftAssistant<'a> {
    pub fn new(config: &'a EngineConfig, catalog: &'a Catalog) -> Self {
        DraftAssistant { config, catalog }
    }

    fn context(&self, request: &DraftRequest) -> DraftContext<'a> {
        let league_size = request.league_size(self.config);
        let available = self.catalog.available(&request.picks);
        let composition = TeamComposition::from_picks(&request.picks, &request.user_team_picks);
        let round = draft_round(request.next_pick, league_size);
        let needs = compute_needs(&composition, round, &self.config.needs);
        let scarcity = compute_scarcity(
            &available,
            request.next_pick,
            league_size,
            self.config.league.rounds,
            &self.config.scarcity,
        );
        debug!(
            round,
            available = available.len(),
            rostered = composition.total(),
            "draft context built"
        );
        DraftContext {
            available,
            composition,
            needs,
            scarcity,
            round,
        }
    }

    /// Every available player, valued and sorted best first.
    pub fn rank_all(&self, request: &DraftRequest) -> Result<Vec<Recommendation>, RequestError> {
        request.validate(self.config)?;
        let ctx = self.context(request);
        Ok(rank_recommendations(
            &ctx.available,
            &ctx.needs,
            &ctx.scarcity,
            request.next_pick,
            self.config,
        ))
    }

    /// Grade the caller's picks against ADP.
    pub fn grade(&self, request: &DraftRequest) -> Result<DraftAnalysis, RequestError> {
        request.validate(self.config)?;
        Ok(grade_draft(&request.team_picks(), self.catalog, &self.config.grading))
    }

    /// Run the full pipeline. `limit` caps the recommendation list; `None`
    /// uses the configured default.
    pub fn recommend(
        &self,
        request: &DraftRequest,
        limit: Option<usize>,
    ) -> Result<DraftResponse, RequestError> {
        request.validate(self.config)?;
        let ctx = self.context(request);

        let mut recommendations = rank_recommendations(
            &ctx.available,
            &ctx.needs,
            &ctx.scarcity,
            request.next_pick,
            self.config,
        );
        recommendations.truncate(limit.unwrap_or(self.config.data.recommendation_limit));

        let analysis = grade_draft(&request.team_picks(), self.catalog, &self.config.grading);

        info!(
            "Pick {} (round {}): {} available, top recommendation {}",
            request.next_pick,
            ctx.round,
            ctx.available.len(),
            recommendations
                .first()
                .map(|r| r.player.name.as_str())
                .unwrap_or("none")
        );

        Ok(DraftResponse {
            recommendations,
            team_composition: ctx.composition,
            scarcity_data: ctx.scarcity,
            analysis,
            next_pick: request.next_pick,
            total_picks: request.picks.len(),
            available_players: ctx.available.len(),
            round: ctx.round,
            scoring_type: request.scoring_type(self.config),
            catalog_warnings: self.catalog.warnings().to_vec(),
        })
    }
}
