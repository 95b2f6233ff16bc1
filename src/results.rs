use std::fmt;

/// Grade tier derived from the final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Grade {
    /// 80% or more.
    Excellent,
    /// 50% up to 79%.
    Good,
    KeepTrying,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Grade::Excellent
        } else if percentage >= 50 {
            Grade::Good
        } else {
            Grade::KeepTrying
        }
    }

    /// Encouragement line shown on the results screen.
    pub fn message(&self) -> &'static str {
        match self {
            Grade::Excellent => "¡Excelente! Eres una expert@ en geografía.",
            Grade::Good => "¡Buen trabajo! Sigue practicando.",
            Grade::KeepTrying => "¡No te rindas! Sigue aprendiendo.",
        }
    }
}

/// Summary of a finished (or abandoned) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct GameResults {
    pub correct: usize,
    pub incorrect: usize,
    pub total_questions: usize,
}

impl GameResults {
    /// Share of correct answers over all questions, rounded to the nearest integer.
    pub fn percentage(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }

        (self.correct as f64 / self.total_questions as f64 * 100.0).round() as u32
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }
}

impl fmt::Display for GameResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} correctas, {} incorrectas, {}%",
            self.correct,
            self.incorrect,
            self.percentage()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(correct: usize, total_questions: usize) -> GameResults {
        GameResults {
            correct,
            incorrect: total_questions - correct,
            total_questions,
        }
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(results(2, 3).percentage(), 67);
        assert_eq!(results(1, 3).percentage(), 33);
        assert_eq!(results(10, 10).percentage(), 100);
    }

    #[test]
    fn percentage_is_zero_without_questions() {
        assert_eq!(results(0, 0).percentage(), 0);
        assert_eq!(results(0, 0).grade(), Grade::KeepTrying);
    }

    #[test]
    fn grade_boundaries() {
        assert_eq!(results(8, 10).grade(), Grade::Excellent);
        assert_eq!(results(7, 10).grade(), Grade::Good);
        assert_eq!(results(5, 10).grade(), Grade::Good);
        assert_eq!(results(4, 10).grade(), Grade::KeepTrying);
    }

    #[test]
    fn display_summarises_score() {
        assert_eq!(results(3, 4).to_string(), "3 correctas, 1 incorrectas, 75%");
    }

    #[test]
    fn messages_differ_per_grade() {
        assert_ne!(Grade::Excellent.message(), Grade::Good.message());
        assert_ne!(Grade::Good.message(), Grade::KeepTrying.message());
    }
}
