//! Gemini Intake Repository Implementation
//!
//! IntakeRepositoryのGemini実装（契約書ドキュメントの構造化抽出）

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine as _;
use std::sync::Arc;

use crate::adapter::gemini::client::{
    Content, GenerateContentRequest, GeminiGenerator, GenerationConfig, Part,
};
use crate::domain::repositories::intake_repository::{ConventionData, IntakeRepository};

/// 契約書抽出のプロンプト
///
/// 日付は YYYY-MM-DD 固定。SIRET番号で顧客企業と研修機関の混同を避ける
const PARSE_CONVENTION_PROMPT: &str = "Analyse ce document de convention de formation. \
Extrait le nom de l'entreprise cliente : aide-toi du numéro de SIRET présent sur le document \
pour identifier la bonne société juridique et ne pas confondre avec l'organisme de formation (DFM). \
Extrait également le sujet/nom de la formation, les dates (format YYYY-MM-DD IMPERATIF, ex: 2023-10-27), \
et la liste des participants (nom, email fictif si absent, et role/poste si présent). \
Si la formation dure plusieurs jours, retourne toutes les dates dans le tableau.";

/// Gemini契約書抽出リポジトリ
pub struct GeminiIntakeRepository {
    client: Arc<dyn GeminiGenerator>,
}

impl GeminiIntakeRepository {
    /// 新しいリポジトリを作成
    pub fn new(client: Arc<dyn GeminiGenerator>) -> Self {
        Self { client }
    }

    /// 抽出応答のJSONスキーマ
    fn response_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "companyName": { "type": "STRING" },
                "trainingName": { "type": "STRING" },
                "dates": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Liste des dates au format YYYY-MM-DD"
                },
                "participants": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": { "type": "STRING" },
                            "email": { "type": "STRING" },
                            "role": { "type": "STRING" }
                        }
                    }
                }
            },
            "required": ["companyName", "trainingName", "dates", "participants"]
        })
    }
}

#[async_trait]
impl IntakeRepository for GeminiIntakeRepository {
    async fn parse_convention(&self, document: &[u8], mime_type: &str) -> Result<ConventionData> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(document);

        let request = GenerateContentRequest {
            contents: Content {
                parts: vec![
                    Part::inline_data(mime_type, encoded),
                    Part::text(PARSE_CONVENTION_PROMPT),
                ],
            },
            generation_config: GenerationConfig::json(Self::response_schema()),
        };

        let text = self.client.generate(&request).await?;

        serde_json::from_str(&text).context("Failed to parse convention analysis result")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mockall::predicate::always;

    use crate::adapter::gemini::client::MockGeminiGenerator;

    #[tokio::test]
    async fn test_parse_convention_success() {
        let mut mock = MockGeminiGenerator::new();
        mock.expect_generate().with(always()).returning(|_| {
            Ok(r#"{
                "companyName": "TechSolutions SAS",
                "trainingName": "Introduction à l'IA Générative",
                "dates": ["2024-01-10", "2024-01-11"],
                "participants": [
                    {"name": "Alice Martin", "email": "alice@tech.com", "role": "Dev"}
                ]
            }"#
            .to_string())
        });

        let repository = GeminiIntakeRepository::new(Arc::new(mock));
        let data = repository
            .parse_convention(b"pdf-bytes", "application/pdf")
            .await
            .unwrap();

        assert_eq!(data.company_name, "TechSolutions SAS");
        assert_eq!(data.dates.len(), 2);
        assert_eq!(data.dates[0], NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(data.participants[0].role, "Dev");
    }

    #[tokio::test]
    async fn test_parse_convention_missing_participant_fields() {
        let mut mock = MockGeminiGenerator::new();
        mock.expect_generate().with(always()).returning(|_| {
            Ok(r#"{
                "companyName": "Groupe Bernard",
                "trainingName": "Automatisation avec Python",
                "dates": [],
                "participants": [{"name": "David Lee"}]
            }"#
            .to_string())
        });

        let repository = GeminiIntakeRepository::new(Arc::new(mock));
        let data = repository
            .parse_convention(b"pdf-bytes", "application/pdf")
            .await
            .unwrap();

        assert!(data.dates.is_empty());
        assert_eq!(data.participants[0].email, "");
        assert_eq!(data.participants[0].role, "");
    }

    #[tokio::test]
    async fn test_parse_convention_malformed_response() {
        let mut mock = MockGeminiGenerator::new();
        mock.expect_generate()
            .with(always())
            .returning(|_| Ok("not a json".to_string()));

        let repository = GeminiIntakeRepository::new(Arc::new(mock));
        let result = repository
            .parse_convention(b"pdf-bytes", "application/pdf")
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_parse_convention_client_error() {
        let mut mock = MockGeminiGenerator::new();
        mock.expect_generate()
            .with(always())
            .returning(|_| anyhow::bail!("Gemini API returned 503"));

        let repository = GeminiIntakeRepository::new(Arc::new(mock));
        let result = repository
            .parse_convention(b"pdf-bytes", "application/pdf")
            .await;

        assert!(result.is_err());
    }
}
