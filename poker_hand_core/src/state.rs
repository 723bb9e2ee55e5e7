use crate::card::Card;
use crate::error::{PokerError, Result};
use serde::{Deserialize, Serialize};

pub type SeatIndex = usize;

/// 牌桌配置：发几手牌，每手几张
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub num_hands: usize,
    pub hand_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig { num_hands: 2, hand_size: 5 }
    }
}

impl TableConfig {
    pub const MAX_HANDS: usize = 10;

    pub fn new(num_hands: usize, hand_size: usize) -> Result<TableConfig> {
        let config = TableConfig { num_hands, hand_size };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=Self::MAX_HANDS).contains(&self.num_hands) {
            return Err(PokerError::InvalidConfig(format!(
                "手牌数必须在1到{}之间，实际为{}",
                Self::MAX_HANDS,
                self.num_hands
            )));
        }
        if !(5..=7).contains(&self.hand_size) {
            return Err(PokerError::InvalidConfig(format!(
                "每手牌必须是5到7张，实际为{}",
                self.hand_size
            )));
        }
        if self.num_hands * self.hand_size > 52 {
            return Err(PokerError::InvalidConfig(format!(
                "{}手{}张的牌需要{}张，一副牌只有52张",
                self.num_hands,
                self.hand_size,
                self.num_hands * self.hand_size
            )));
        }
        Ok(())
    }
}

/// 一张牌桌：配置加上每个座位发到的牌
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub config: TableConfig,
    // 索引就是座位号
    pub hands: Vec<Vec<Card>>,
}

impl Table {
    pub fn seat(&self, seat: SeatIndex) -> Option<&[Card]> {
        self.hands.get(seat).map(Vec::as_slice)
    }
}
