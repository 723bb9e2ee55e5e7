use crate::card::Card;
use crate::evaluator::HandCategory;
use crate::state::SeatIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 摊牌结果，可直接序列化输出
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShowdownReport {
    pub seats: Vec<SeatResult>,
    /// 赢家的座位号，平局时有多个，按座位号排列
    pub winners: Vec<SeatIndex>,
}

/// 在 ShowdownReport 中，用于描述单个座位的结果
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SeatResult {
    pub seat: SeatIndex,
    /// 发到的全部牌
    pub dealt: Vec<Card>,
    /// 组成最佳牌型的 5 张牌
    pub best_five: Vec<Card>,
    pub category: HandCategory,
}

impl ShowdownReport {
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }
}

impl fmt::Display for ShowdownReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for seat in &self.seats {
            let dealt: Vec<String> = seat.dealt.iter().map(ToString::to_string).collect();
            let best: Vec<String> = seat.best_five.iter().map(ToString::to_string).collect();
            writeln!(f, "Hand {}: {}", seat.seat + 1, dealt.join(", "))?;
            writeln!(f, "  {}: {}", seat.category, best.join(", "))?;
        }
        let winners: Vec<String> = self.winners.iter().map(|s| (s + 1).to_string()).collect();
        if self.is_tie() {
            write!(f, "Tied hands: {}", winners.join(", "))
        } else {
            write!(f, "Winner: hand {}", winners.join(", "))
        }
    }
}
