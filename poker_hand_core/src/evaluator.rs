use crate::card::{find_duplicate, Card};
use crate::comparator::{compare_hands, Showdown};
use crate::error::{PokerError, Result};
use crate::hand::Hand;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

/// 牌型 (HandCategory)
/// 变体从小到大排列，派生的 `Ord` 与牌型强度一致。
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandCategory {
    /// 从强到弱
    pub const ALL: [HandCategory; 10] = [
        HandCategory::RoyalFlush,
        HandCategory::StraightFlush,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::Pair,
        HandCategory::HighCard,
    ];

    /// 皇家同花顺为 9，高牌为 0
    pub fn strength(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::Pair => "Pair",
            HandCategory::HighCard => "High Card",
        }
    }

    /// 皇家同花顺、同花顺和顺子都按顺子规则比较
    pub fn is_straight(self) -> bool {
        matches!(self, HandCategory::RoyalFlush | HandCategory::StraightFlush | HandCategory::Straight)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 一手牌及其牌型
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub hand: Hand,
    pub category: HandCategory,
}

impl Evaluation {
    pub fn new(hand: Hand) -> Evaluation {
        let category = evaluate(&hand);
        Evaluation { hand, category }
    }

    /// 与 [`compare_hands`] 同一个全序，方便排序和取最大值
    pub fn cmp_strength(&self, other: &Evaluation) -> Ordering {
        compare_hands(self, other).as_ordering()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.hand)
    }
}

// --- 牌型评估逻辑 ---

/// 判断一手 5 张牌的牌型，从强到弱依次检查，第一个满足的就是结果
pub fn evaluate(hand: &Hand) -> HandCategory {
    let is_flush = hand.is_flush();
    let is_straight = hand.is_straight();
    let multiplicity = hand.max_rank_multiplicity();
    let unique = hand.unique_rank_count();

    if is_flush && is_straight {
        return if hand.min_value() == 10 {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        };
    }

    match (multiplicity, unique) {
        (4, _) => HandCategory::FourOfAKind,
        (3, 2) => HandCategory::FullHouse,
        _ if is_flush => HandCategory::Flush,
        _ if is_straight => HandCategory::Straight,
        (3, 3) => HandCategory::ThreeOfAKind,
        (2, 3) => HandCategory::TwoPair,
        (_, 4) => HandCategory::Pair,
        _ => HandCategory::HighCard,
    }
}

/// 从 5 到 7 张牌中找出最优的 5 张牌组合
///
/// 按下标的字典序枚举所有 5 张组合，保留第一个不被后面组合击败的。
/// 多个组合同样大时返回的是"一手"最优牌，不保证是哪一手。
pub fn best_hand_of_five(cards: &[Card]) -> Result<Evaluation> {
    if !(5..=7).contains(&cards.len()) {
        return Err(PokerError::InvalidCardCount(cards.len()));
    }
    if let Some(card) = find_duplicate(cards) {
        return Err(PokerError::DuplicateCard(card));
    }

    let mut combinations = get_combinations(cards, 5).into_iter();
    let first = combinations.next().ok_or(PokerError::InvalidCardCount(cards.len()))?;
    let mut best = Evaluation::new(Hand::new(&first)?);

    for combo in combinations {
        let candidate = Evaluation::new(Hand::new(&combo)?);
        if compare_hands(&candidate, &best) == Showdown::FirstWins {
            trace!(from = %best.category, to = %candidate.category, "发现更好的组合");
            best = candidate;
        }
    }

    Ok(best)
}

/// 辅助函数：从一个切片中生成所有大小为 k 的组合
fn get_combinations<T: Clone>(data: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 {
        return vec![vec![]];
    }
    if data.len() < k {
        return vec![];
    }

    let (first, rest) = data.split_at(1);

    // 包含第一个元素的组合在前
    let mut result = get_combinations(rest, k - 1);
    for combo in &mut result {
        combo.insert(0, first[0].clone());
    }

    if data.len() > k {
        result.extend(get_combinations(rest, k));
    }

    result
}

// --- 单元测试 ---
