use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    labeling::entities::{LabelAnalysis, ReformulationReport},
};

pub trait LabelingService: Send + Sync {
    /// Run the full label computation for a recipe: nutrition aggregation,
    /// FOP classification, the compliance rule battery and allergen
    /// detection, then persist the result as the next recipe version.
    ///
    /// A non-compliant recipe is not an error; findings are data in the
    /// returned analysis.
    fn analyze_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<LabelAnalysis, CoreError>> + Send;

    /// Per-ingredient attribution for every FOP-high nutrient, with
    /// fail-soft model-generated substitution advice on top.
    fn reformulate_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<ReformulationReport, CoreError>> + Send;
}
