use crate::error::{PokerError, Result};
use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// --- 核心数据结构定义 ---

/// 花色 (Suit)
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // 红心 ♥
    Club,    // 梅花 ♣
    Diamond, // 方块 ♦
    Spade,   // 黑桃 ♠
}

/// 点数 (Rank)
/// 判别值就是牌的点数，Ace 固定为 14。
/// 只有在 A-2-3-4-5 顺子里 Ace 才当作 1，这由 `Hand::is_low_straight` 单独识别。
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

/// 单张扑克牌 (Card)
///
/// `==` 比较点数和花色，用于牌堆去重之类的场景；
/// 牌力比较只看点数，请使用 [`Card::cmp_value`]。
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Heart, Suit::Club, Suit::Diamond, Suit::Spade];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Heart => "Hearts",
            Suit::Club => "Clubs",
            Suit::Diamond => "Diamonds",
            Suit::Spade => "Spades",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Heart => "♥",
            Suit::Club => "♣",
            Suit::Diamond => "♦",
            Suit::Spade => "♠",
        }
    }
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
        Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace,
    ];

    /// 由点数 2..=14 构造
    pub fn from_value(value: u8) -> Result<Rank> {
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.value() == value)
            .ok_or_else(|| PokerError::InvalidRank(value.to_string()))
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// 2..10 显示为数字，人头牌和 A 显示英文名
    pub fn display_rank(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// 由点数和花色两个记号构造，例如 `("10", "Hearts")`、`("Ace", "♠")`
    pub fn from_tokens(rank: &str, suit: &str) -> Result<Card> {
        Ok(Card { rank: rank.parse()?, suit: suit.parse()? })
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn display_rank(&self) -> &'static str {
        self.rank.display_rank()
    }

    /// 只按点数比较，花色永远不参与牌力比较
    pub fn cmp_value(&self, other: &Card) -> Ordering {
        self.value().cmp(&other.value())
    }
}

// --- 记号解析 ---

impl FromStr for Rank {
    type Err = PokerError;

    fn from_str(token: &str) -> Result<Rank> {
        let token = token.trim();
        match token.to_ascii_lowercase().as_str() {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" | "t" => Ok(Rank::Ten),
            "j" | "jack" => Ok(Rank::Jack),
            "q" | "queen" => Ok(Rank::Queen),
            "k" | "king" => Ok(Rank::King),
            "a" | "ace" => Ok(Rank::Ace),
            _ => Err(PokerError::InvalidRank(token.to_string())),
        }
    }
}

impl FromStr for Suit {
    type Err = PokerError;

    fn from_str(token: &str) -> Result<Suit> {
        // 去掉 emoji 变体选择符，"♠️" 与 "♠" 视为同一个记号
        let cleaned: String = token.trim().chars().filter(|c| *c != '\u{FE0F}').collect();
        match cleaned.to_lowercase().as_str() {
            "h" | "heart" | "hearts" | "♥" | "♡" => Ok(Suit::Heart),
            "c" | "club" | "clubs" | "♣" | "♧" => Ok(Suit::Club),
            "d" | "diamond" | "diamonds" | "♦" | "♢" => Ok(Suit::Diamond),
            "s" | "spade" | "spades" | "♠" | "♤" => Ok(Suit::Spade),
            _ => Err(PokerError::InvalidSuit(token.trim().to_string())),
        }
    }
}

/// 支持两种写法：紧凑的 `AH`、`10s`、`Q♦`，或者 `Ace of Hearts`
impl FromStr for Card {
    type Err = PokerError;

    fn from_str(text: &str) -> Result<Card> {
        let text = text.trim();
        if let Some((rank, suit)) = text.split_once(" of ") {
            return Card::from_tokens(rank, suit);
        }

        let cleaned: String = text.chars().filter(|c| *c != '\u{FE0F}').collect();
        let mut chars = cleaned.chars();
        let suit = chars.next_back().ok_or_else(|| PokerError::InvalidCard(text.to_string()))?;
        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(PokerError::InvalidCard(text.to_string()));
        }
        Card::from_tokens(rank, suit.encode_utf8(&mut [0; 4]))
    }
}

// --- 实现辅助功能 ---

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_rank())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// 找出第一张重复出现的牌
pub(crate) fn find_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.iter().copied().find(|card| !seen.insert(*card))
}

// --- 牌堆 ---

/// 一副牌。`cards` 的最后一张是牌顶，`deal` 从牌顶发牌。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// 未洗的 52 张牌
    pub fn standard() -> Deck {
        let mut cards = Vec::with_capacity(52);
        for &rank in &Rank::ALL {
            for &suit in &Suit::ALL {
                cards.push(Card { rank, suit });
            }
        }
        Deck { cards }
    }

    pub fn shuffled() -> Deck {
        let mut deck = Deck::standard();
        deck.cards.shuffle(&mut rand::rng());
        deck
    }

    /// 相同的种子总是得到相同的牌序
    pub fn shuffled_with_seed(seed: u64) -> Deck {
        let mut deck = Deck::standard();
        deck.cards.shuffle(&mut StdRng::seed_from_u64(seed));
        debug!(seed, "使用固定种子洗牌");
        deck
    }

    /// 用事先排好的牌构造牌堆，最后一张最先发出
    pub fn from_cards(cards: Vec<Card>) -> Deck {
        Deck { cards }
    }

    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn deal_many(&mut self, count: usize) -> Result<Vec<Card>> {
        if count > self.cards.len() {
            return Err(PokerError::DeckExhausted { requested: count, remaining: self.cards.len() });
        }
        let split_at = self.cards.len() - count;
        let mut dealt = self.cards.split_off(split_at);
        dealt.reverse();
        Ok(dealt)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

// --- 单元测试 ---
