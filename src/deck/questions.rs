//! Question bank for the flashcard deck.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// One question and its answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

impl QuestionAnswer {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

const GENERAL_KNOWLEDGE: &[(&str, &str)] = &[
    ("What is the capital of France?", "Paris"),
    ("Who painted the Mona Lisa?", "Leonardo da Vinci"),
    ("What is the chemical symbol for water?", "H₂O"),
    ("What year did the Titanic sink?", "1912"),
    ("What is the largest planet in our solar system?", "Jupiter"),
    ("Who wrote 'Romeo and Juliet'?", "William Shakespeare"),
    ("What is the tallest mountain in the world?", "Mount Everest"),
    ("What is the smallest prime number?", "2"),
    ("What element has the chemical symbol 'Au'?", "Gold"),
    ("Which planet is known as the Red Planet?", "Mars"),
    ("What is the largest ocean on Earth?", "Pacific Ocean"),
    ("What is the hardest natural substance on Earth?", "Diamond"),
    ("Who discovered penicillin?", "Alexander Fleming"),
    ("What is the main component of the Sun?", "Hydrogen"),
    ("What is the capital of Japan?", "Tokyo"),
    ("What is the speed of light?", "299,792,458 meters per second"),
    ("Who is the founder of Microsoft?", "Bill Gates"),
    ("What year did World War II end?", "1945"),
    ("What is the largest mammal?", "Blue Whale"),
    ("What is the currency of the UK?", "Pound Sterling"),
    ("What is the freezing point of water in Fahrenheit?", "32°F"),
    ("What is the square root of 144?", "12"),
    ("Who was the first person to walk on the Moon?", "Neil Armstrong"),
    ("What is the national flower of Japan?", "Cherry Blossom"),
    ("What is the capital of Australia?", "Canberra"),
    ("What is the most abundant gas in Earth's atmosphere?", "Nitrogen"),
    ("How many bones are in the human body?", "206"),
    ("What is the world's longest river?", "Nile"),
    ("What is the boiling point of water in Celsius?", "100°C"),
    ("Who developed the theory of relativity?", "Albert Einstein"),
];

/// Pool the deck draws its cards from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    pairs: Vec<QuestionAnswer>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(pairs: Vec<QuestionAnswer>) -> Self {
        Self { pairs }
    }

    /// The 30 general-knowledge questions shipped with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            GENERAL_KNOWLEDGE
                .iter()
                .map(|(q, a)| QuestionAnswer::new(*q, *a))
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn pairs(&self) -> &[QuestionAnswer] {
        &self.pairs
    }

    /// `count` distinct pairs in random order (fewer if the bank is smaller).
    #[must_use]
    pub fn sample(&self, count: usize, rng: &mut GameRng) -> Vec<QuestionAnswer> {
        rng.sample(&self.pairs, count)
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bank() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 30);
        assert_eq!(bank.pairs()[0].answer, "Paris");
    }

    #[test]
    fn test_sample_draws_distinct_pairs() {
        let bank = QuestionBank::builtin();
        let mut rng = GameRng::new(4);

        let picked = bank.sample(12, &mut rng);
        assert_eq!(picked.len(), 12);
        for (i, qa) in picked.iter().enumerate() {
            assert!(bank.pairs().contains(qa));
            assert!(!picked[i + 1..].contains(qa));
        }
    }

    #[test]
    fn test_sample_capped_by_bank() {
        let bank = QuestionBank::new(vec![QuestionAnswer::new("1 + 1?", "2")]);
        assert_eq!(bank.sample(5, &mut GameRng::new(0)).len(), 1);
    }
}
