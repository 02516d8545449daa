use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::{
    ai::{
        ports::LlmClient,
        schema::{extract_json, get_reformulation_schema},
    },
    allergen::detector::detect_allergens,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::{entities::IngredientNutrient, ports::IngredientRepository},
    labeling::{
        aggregator::{aggregate, per_100g_by_name},
        attribution::attribute,
        compliance::ComplianceChecker,
        entities::{
            FopLevel, LabelAnalysis, NutrientAttribution, ReformulationReport,
            ReformulationSuggestion, VersionInfo,
        },
        fop::{FOP_CHECKS, classify},
        helpers::{build_reformulation_prompt, build_version_snapshot, next_version_number},
        ports::LabelingService,
    },
    nutrient::{entities::Nutrient, ports::NutrientRepository},
    recipe::{
        entities::{Recipe, RecipeIngredient, RecipeVersion, ingredient_list_string, total_weight},
        ports::{RecipeRepository, RecipeVersionRepository},
    },
};

/// One loaded computation snapshot: the recipe, its rows, density facts
/// grouped per ingredient, and the nutrient catalog.
struct AnalysisSnapshot {
    recipe: Recipe,
    rows: Vec<RecipeIngredient>,
    facts_by_ingredient: HashMap<Uuid, Vec<IngredientNutrient>>,
    catalog: HashMap<Uuid, Nutrient>,
}

impl<R, V, I, N, H, L> Service<R, V, I, N, H, L>
where
    R: RecipeRepository,
    V: RecipeVersionRepository,
    I: IngredientRepository,
    N: NutrientRepository,
    H: HealthCheckRepository,
    L: LlmClient,
{
    async fn load_snapshot(&self, recipe_id: Uuid) -> Result<AnalysisSnapshot, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let rows = self.recipe_repository.get_ingredients(recipe_id).await?;

        let ingredient_ids: Vec<Uuid> = rows.iter().map(|r| r.ingredient.id).collect();
        let facts = self
            .ingredient_repository
            .get_facts_for_ingredients(ingredient_ids)
            .await?;
        let mut facts_by_ingredient: HashMap<Uuid, Vec<IngredientNutrient>> = HashMap::new();
        for fact in facts {
            facts_by_ingredient
                .entry(fact.ingredient_id)
                .or_default()
                .push(fact);
        }

        let catalog = self
            .nutrient_repository
            .fetch_catalog()
            .await?
            .into_iter()
            .map(|n| (n.id, n))
            .collect();

        Ok(AnalysisSnapshot {
            recipe,
            rows,
            facts_by_ingredient,
            catalog,
        })
    }
}

impl<R, V, I, N, H, L> LabelingService for Service<R, V, I, N, H, L>
where
    R: RecipeRepository,
    V: RecipeVersionRepository,
    I: IngredientRepository,
    N: NutrientRepository,
    H: HealthCheckRepository,
    L: LlmClient,
{
    async fn analyze_recipe(&self, recipe_id: Uuid) -> Result<LabelAnalysis, CoreError> {
        let snapshot = self.load_snapshot(recipe_id).await?;

        let nutrition = aggregate(
            snapshot.recipe.serving_size,
            &snapshot.rows,
            &snapshot.facts_by_ingredient,
            &snapshot.catalog,
        );
        let fop_indicators = classify(&per_100g_by_name(&nutrition));
        let compliance =
            ComplianceChecker::new(&snapshot.recipe, &snapshot.rows, &nutrition).check_all();

        let ingredient_names: Vec<&str> = snapshot
            .rows
            .iter()
            .map(|r| r.ingredient.name.as_str())
            .collect();
        let allergens = detect_allergens(&ingredient_names);

        let ingredient_list = ingredient_list_string(&snapshot.rows);
        let recipe_total_weight = total_weight(&snapshot.rows);

        let latest = self
            .version_repository
            .latest_version_number(recipe_id)
            .await?;
        let number = next_version_number(latest);
        let snapshot_json = build_version_snapshot(
            &snapshot.recipe,
            recipe_total_weight,
            &nutrition,
            &compliance,
            &fop_indicators,
            &allergens,
            &ingredient_list,
        );
        let version = self
            .version_repository
            .create(RecipeVersion::new(
                recipe_id,
                number,
                snapshot_json,
                compliance.is_compliant,
                format!("Auto-analyzed v{number}"),
            ))
            .await?;

        tracing::info!(
            recipe_id = %recipe_id,
            version = number,
            is_compliant = compliance.is_compliant,
            "analyzed recipe"
        );

        Ok(LabelAnalysis {
            recipe: snapshot.recipe,
            total_weight: recipe_total_weight,
            nutrition,
            compliance,
            fop_indicators,
            allergens,
            ingredient_list,
            version: VersionInfo {
                number: version.version_number,
                created_at: version.created_at,
            },
        })
    }

    async fn reformulate_recipe(&self, recipe_id: Uuid) -> Result<ReformulationReport, CoreError> {
        let snapshot = self.load_snapshot(recipe_id).await?;

        let nutrition = aggregate(
            snapshot.recipe.serving_size,
            &snapshot.rows,
            &snapshot.facts_by_ingredient,
            &snapshot.catalog,
        );
        let indicators = classify(&per_100g_by_name(&nutrition));

        let high: Vec<_> = indicators
            .into_iter()
            .filter(|i| i.level == FopLevel::High)
            .collect();
        if high.is_empty() {
            return Ok(ReformulationReport {
                needs_reformulation: false,
                attribution: Vec::new(),
                suggestions: Vec::new(),
                summary: "All FOP indicators are within acceptable levels.".to_string(),
                ai_powered: false,
            });
        }

        let nutrients_by_name: HashMap<&str, &Nutrient> = snapshot
            .catalog
            .values()
            .map(|n| (n.name.as_str(), n))
            .collect();

        let attribution: Vec<NutrientAttribution> = high
            .iter()
            .filter_map(|indicator| {
                let nutrient = nutrients_by_name.get(indicator.nutrient.as_str())?;
                let threshold = FOP_CHECKS
                    .iter()
                    .find(|(name, _, _)| *name == indicator.nutrient)
                    .map(|(_, t, _)| *t)
                    .unwrap_or(0.0);

                Some(attribute(
                    nutrient.id,
                    &indicator.nutrient,
                    &indicator.unit,
                    indicator.value,
                    threshold,
                    &snapshot.rows,
                    &snapshot.facts_by_ingredient,
                ))
            })
            .collect();

        // Advisory only: a provider failure degrades to the deterministic
        // attribution instead of failing the request.
        let (summary, suggestions, ai_powered) = match self
            .llm_client
            .generate_json(
                build_reformulation_prompt(&snapshot.recipe, &attribution),
                get_reformulation_schema(),
            )
            .await
        {
            Ok(raw) => match extract_json(&raw) {
                Ok(value) => {
                    let summary = value["summary"].as_str().unwrap_or_default().to_string();
                    let suggestions: Vec<ReformulationSuggestion> =
                        serde_json::from_value(value["suggestions"].clone()).unwrap_or_default();
                    (summary, suggestions, true)
                }
                Err(e) => {
                    tracing::warn!("reformulation advice was not valid JSON: {}", e);
                    (String::new(), Vec::new(), false)
                }
            },
            Err(e) => {
                tracing::warn!("reformulation advice failed: {}", e);
                (String::new(), Vec::new(), false)
            }
        };

        Ok(ReformulationReport {
            needs_reformulation: true,
            attribution,
            suggestions,
            summary,
            ai_powered,
        })
    }
}
