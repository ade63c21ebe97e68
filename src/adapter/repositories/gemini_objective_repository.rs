//! Gemini Objective Repository Implementation
//!
//! ObjectiveRepositoryのGemini実装（学習目標の生成）

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;

use crate::adapter::gemini::client::{
    Content, GenerateContentRequest, GeminiGenerator, GenerationConfig, Part,
};
use crate::domain::repositories::objective_repository::ObjectiveRepository;

/// Gemini学習目標生成リポジトリ
pub struct GeminiObjectiveRepository {
    client: Arc<dyn GeminiGenerator>,
}

impl GeminiObjectiveRepository {
    /// 新しいリポジトリを作成
    pub fn new(client: Arc<dyn GeminiGenerator>) -> Self {
        Self { client }
    }

    fn prompt(training_name: &str) -> String {
        format!(
            "Génère une liste de 4 objectifs pédagogiques concis (bullet points) \
             pour une attestation de formation intitulée : \"{}\". \
             Réponds uniquement avec un tableau JSON de chaînes de caractères.",
            training_name
        )
    }
}

#[async_trait]
impl ObjectiveRepository for GeminiObjectiveRepository {
    async fn generate_objectives(&self, training_name: &str) -> Result<Vec<String>> {
        let request = GenerateContentRequest {
            contents: Content {
                parts: vec![Part::text(Self::prompt(training_name))],
            },
            generation_config: GenerationConfig::json(serde_json::json!({
                "type": "ARRAY",
                "items": { "type": "STRING" }
            })),
        };

        let text = self.client.generate(&request).await?;

        serde_json::from_str(&text).context("Failed to parse objectives result")
    }
}
