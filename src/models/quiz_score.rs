use mongodb::bson::oid::ObjectId;
use serde::{de, Deserialize, Deserializer, Serialize};

/// A score kept in the numeric form it was submitted in, so `87` is listed
/// back as `87` and `87.5` as `87.5`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum Score {
    Int(i64),
    Float(f64),
}

impl Score {
    /// Casts text the way the quiz frontend may send it (`"87"`, `" 4.5 "`).
    /// Empty text means no score.
    fn parse(raw: &str) -> Result<Option<Self>, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return Ok(Some(Score::Int(n)));
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Some(Score::Float(f))),
            _ => Err(format!("'{}' is not a number", raw)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuizScoreDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RecordScoreRequest {
    #[serde(default, deserialize_with = "number_or_numeric_text")]
    #[schema(value_type = Option<f64>)]
    pub score: Option<Score>,
}

fn number_or_numeric_text<'de, D>(deserializer: D) -> Result<Option<Score>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Input {
        Number(Score),
        Text(String),
    }

    match Option::<Input>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Input::Number(score)) => Ok(Some(score)),
        Some(Input::Text(raw)) => Score::parse(&raw).map_err(de::Error::custom),
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct ScoreRecord {
    pub id: String,
    pub score: Option<Score>,
}

impl From<QuizScoreDocument> for ScoreRecord {
    fn from(doc: QuizScoreDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            score: doc.score,
        }
    }
}
