//! Random question selection over a materialized candidate pool.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::store::Question;

/// Category id meaning "draw from every category"
pub const ANY_CATEGORY: i32 = 0;

/// Body of `POST /quizzes`
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

/// Category selected for the quiz. Clients also send the label as `type`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: i32,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl QuizCategory {
    /// Category restriction for the pool, `None` for any category
    pub fn filter(&self) -> Option<i32> {
        (self.id != ANY_CATEGORY).then_some(self.id)
    }
}

/// Pick one candidate uniformly at random, or `None` when the pool is empty.
pub fn select<R: Rng + ?Sized>(pool: Vec<Question>, rng: &mut R) -> Option<Question> {
    pool.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;
    use std::collections::HashSet;

    fn question(id: i32) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: "answer".to_string(),
            category: 1,
            difficulty: 1,
        }
    }

    #[test]
    fn test_empty_pool_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(select(Vec::new(), &mut rng).is_none());
    }

    #[test]
    fn test_single_candidate_always_chosen() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = select(vec![question(9)], &mut rng).unwrap();
            assert_eq!(picked.id, 9);
        }
    }

    #[test]
    fn test_every_candidate_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool: Vec<Question> = (1..=5).map(question).collect();

        let mut seen = HashSet::new();
        for _ in 0..500 {
            let picked = select(pool.clone(), &mut rng).unwrap();
            assert!((1..=5).contains(&picked.id));
            seen.insert(picked.id);
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_zero_category_means_any() {
        let any = QuizCategory { id: ANY_CATEGORY, kind: None };
        assert_eq!(any.filter(), None);

        let science = QuizCategory { id: 1, kind: Some("Science".to_string()) };
        assert_eq!(science.filter(), Some(1));
    }

    #[test]
    fn test_request_parsing() {
        let body = json!({
            "previous_questions": [3, 8],
            "quiz_category": {"type": "Science", "id": 1}
        });
        let request: QuizRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.previous_questions, vec![3, 8]);
        assert_eq!(request.quiz_category.filter(), Some(1));
        assert_eq!(request.quiz_category.kind.as_deref(), Some("Science"));
    }

    #[test]
    fn test_request_missing_category_is_rejected() {
        let body = json!({"previous_questions": [], "id": 5});
        assert!(serde_json::from_value::<QuizRequest>(body).is_err());
    }
}
