use crate::card::{find_duplicate, Card, Rank, Suit};
use crate::error::{PokerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A-2-3-4-5 的点数和 (Ace 记 14)
const LOW_STRAIGHT_SUM: u32 = 28;

/// 一手正好 5 张的牌
///
/// 保留构造时的牌序，所有用于判断牌型的信息都是按需计算的。
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    pub fn new(cards: &[Card]) -> Result<Hand> {
        let cards: [Card; 5] = cards
            .try_into()
            .map_err(|_| PokerError::InvalidHandSize(cards.len()))?;
        if let Some(card) = find_duplicate(&cards) {
            return Err(PokerError::DuplicateCard(card));
        }
        Ok(Hand { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// 每个点数出现的次数，只包含出现过的点数
    pub fn rank_counts(&self) -> BTreeMap<Rank, u8> {
        let mut counts = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(card.rank).or_insert(0) += 1;
        }
        counts
    }

    pub fn suits(&self) -> Vec<Suit> {
        self.cards.iter().map(|c| c.suit).collect()
    }

    pub fn is_flush(&self) -> bool {
        self.cards.windows(2).all(|w| w[0].suit == w[1].suit)
    }

    pub fn unique_rank_count(&self) -> usize {
        self.rank_counts().len()
    }

    pub fn max_rank_multiplicity(&self) -> u8 {
        self.rank_counts().values().copied().max().unwrap_or(0)
    }

    pub fn is_straight(&self) -> bool {
        self.unique_rank_count() == 5 && self.max_value() - self.min_value() == 4
            || self.is_low_straight()
    }

    /// A-2-3-4-5，A 当作 1。此时比大小的最高牌是 5 而不是 A。
    pub fn is_low_straight(&self) -> bool {
        self.unique_rank_count() == 5
            && self.cards.iter().any(|c| c.rank == Rank::Ace)
            && self.cards.iter().map(|c| u32::from(c.value())).sum::<u32>() == LOW_STRAIGHT_SUM
    }

    pub fn max_value(&self) -> u8 {
        self.cards.iter().max_by(|a, b| a.cmp_value(b)).map_or(0, Card::value)
    }

    pub fn min_value(&self) -> u8 {
        self.cards.iter().min_by(|a, b| a.cmp_value(b)).map_or(0, Card::value)
    }

    /// 点数从大到小排列，用于比较踢脚牌
    pub fn values_desc(&self) -> Vec<u8> {
        let mut values: Vec<u8> = self.cards.iter().map(Card::value).collect();
        values.sort_by(|a, b| b.cmp(a));
        values
    }

    /// 恰好出现 `count` 次的点数，从大到小
    pub(crate) fn ranks_with_count(&self, count: u8) -> Vec<Rank> {
        self.rank_counts()
            .into_iter()
            .rev()
            .filter(|&(_, c)| c == count)
            .map(|(rank, _)| rank)
            .collect()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(ToString::to_string).collect();
        write!(f, "{}", cards.join(", "))
    }
}
