use std::fmt;

use crate::core::{rank_descending, Evaluation, Hand, HandCategory};

/// One line of output: a hand and what it evaluated to.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandReport {
    /// 1-based position in the list this report belongs to.
    pub position: usize,
    /// 1-based position the hand was dealt (or read) in.
    pub seat: usize,
    pub hand: Hand,
    pub category: HandCategory,
}

impl fmt::Display for HandReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand {}: {} - {}", self.position, self.hand, self.category)
    }
}

/// The hands as dealt, followed by the same hands strongest first.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub dealt: Vec<HandReport>,
    pub winning_order: Vec<HandReport>,
}

impl AnalysisReport {
    /// Evaluate every hand and order them.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand_analyzer::analyzer::{parse_hands, AnalysisReport};
    /// use poker_hand_analyzer::core::HandCategory;
    ///
    /// let hands = parse_hands("2D 2C 9H 9S 5D\nAD 2C 3H 4S 5D").unwrap();
    /// let report = AnalysisReport::from_hands(&hands);
    /// assert_eq!(HandCategory::StraightFlush, report.winning_order[0].category);
    /// assert_eq!(2, report.winning_order[0].seat);
    /// ```
    pub fn from_hands(hands: &[Hand]) -> Self {
        let dealt: Vec<HandReport> = hands
            .iter()
            .enumerate()
            .map(|(idx, &hand)| {
                let evaluation = Evaluation::new(hand);
                HandReport {
                    position: idx + 1,
                    seat: idx + 1,
                    hand,
                    category: evaluation.category,
                }
            })
            .collect();

        // Hands can repeat, so track seats by index instead of by value.
        let mut seats: Vec<Option<usize>> = (1..=hands.len()).map(Some).collect();
        let winning_order = rank_descending(hands)
            .into_iter()
            .enumerate()
            .map(|(idx, evaluation)| {
                let seat = hands
                    .iter()
                    .zip(seats.iter_mut())
                    .find(|(h, s)| **h == evaluation.hand && s.is_some())
                    .and_then(|(_, s)| s.take())
                    .unwrap_or(idx + 1);
                HandReport {
                    position: idx + 1,
                    seat,
                    hand: evaluation.hand,
                    category: evaluation.category,
                }
            })
            .collect();

        Self {
            dealt,
            winning_order,
        }
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, crate::core::PokerHandError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "*** Here are the hands...")?;
        for report in &self.dealt {
            writeln!(f, "{report}")?;
        }
        writeln!(f, "--- WINNING HAND ORDER ---")?;
        for report in &self.winning_order {
            writeln!(f, "{report}")?;
        }
        Ok(())
    }
}
