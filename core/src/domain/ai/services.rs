use crate::domain::{
    ai::{
        parser::parse_with_regex,
        ports::{LlmClient, RecipeAiService},
        schema::{extract_json, get_parse_schema},
        value_objects::ParsedIngredient,
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    nutrient::ports::NutrientRepository,
    recipe::ports::{RecipeRepository, RecipeVersionRepository},
};

fn build_parse_prompt(text: &str) -> String {
    format!(
        "Parse the following recipe text and extract all ingredients with their weights in grams.\n\
         Return a JSON array of objects with \"name\" and \"weight_grams\" fields.\n\
         For the name, use common English/Indian ingredient names.\n\
         Convert all measurements to grams (use standard conversions: 1 cup = 240g, 1 tbsp = 15g, 1 tsp = 5g, etc.).\n\
         For liquids (water, milk, oil, etc.), treat ml as grams (density of 1).\n\
         If no weight is specified, estimate a reasonable amount.\n\n\
         Recipe text:\n{text}\n\n\
         Return ONLY the JSON array, no other text."
    )
}

impl<R, V, I, N, H, L> RecipeAiService for Service<R, V, I, N, H, L>
where
    R: RecipeRepository,
    V: RecipeVersionRepository,
    I: IngredientRepository,
    N: NutrientRepository,
    H: HealthCheckRepository,
    L: LlmClient,
{
    async fn parse_recipe_text(&self, text: String) -> Result<Vec<ParsedIngredient>, CoreError> {
        let prompt = build_parse_prompt(&text);

        match self.llm_client.generate_json(prompt, get_parse_schema()).await {
            Ok(raw) => match extract_json(&raw).and_then(serde_json::from_value) {
                Ok(parsed) => return Ok(parsed),
                Err(e) => {
                    tracing::warn!("LLM parse response was not valid ingredient JSON: {}", e);
                }
            },
            Err(e) => {
                tracing::warn!("LLM parsing failed, falling back to regex: {}", e);
            }
        }

        Ok(parse_with_regex(&text))
    }
}
