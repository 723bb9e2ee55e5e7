use crate::card::Card;
use thiserror::Error;

/// 牌力引擎中所有可能出现的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokerError {
    #[error("无效的点数: '{0}'")]
    InvalidRank(String),

    #[error("无效的花色: '{0}'")]
    InvalidSuit(String),

    #[error("无效的牌: '{0}'")]
    InvalidCard(String),

    /// 同一张牌 (点数和花色都相同) 出现了不止一次
    #[error("重复的牌: {0}")]
    DuplicateCard(Card),

    /// 一手牌必须正好是 5 张
    #[error("手牌必须是5张，实际为{0}张")]
    InvalidHandSize(usize),

    /// 选最优5张时，牌数必须在 5 到 7 张之间
    #[error("牌数必须在5到7张之间，实际为{0}张")]
    InvalidCardCount(usize),

    #[error("只能比较两手5张的牌，实际为{first}张和{second}张")]
    InvalidComparison { first: usize, second: usize },

    #[error("牌堆剩余{remaining}张，不够发{requested}张")]
    DeckExhausted { requested: usize, remaining: usize },

    #[error("牌桌配置错误: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PokerError>;
