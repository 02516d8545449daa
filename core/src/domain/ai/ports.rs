use std::future::Future;

use crate::domain::{ai::value_objects::ParsedIngredient, common::entities::app_errors::CoreError};

/// Injected language-model strategy. The domain depends only on this trait,
/// never on a concrete provider.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    /// Run a prompt expecting a JSON response matching `response_schema`.
    /// Returns the raw response text.
    fn generate_json(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

pub trait RecipeAiService: Send + Sync {
    /// Parse free recipe text into structured ingredient rows.
    ///
    /// Tries the language model first and falls back to the regex parser;
    /// never fails the request on provider errors.
    fn parse_recipe_text(
        &self,
        text: String,
    ) -> impl Future<Output = Result<Vec<ParsedIngredient>, CoreError>> + Send;
}
