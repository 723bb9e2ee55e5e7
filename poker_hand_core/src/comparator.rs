use crate::card::{Card, Rank};
use crate::error::{PokerError, Result};
use crate::evaluator::{Evaluation, HandCategory};
use crate::hand::Hand;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 两手牌比较的结果
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Showdown {
    FirstWins,
    SecondWins,
    Tie,
}

impl Showdown {
    /// 第一手牌更大时为 `Greater`
    pub fn as_ordering(self) -> Ordering {
        match self {
            Showdown::FirstWins => Ordering::Greater,
            Showdown::SecondWins => Ordering::Less,
            Showdown::Tie => Ordering::Equal,
        }
    }

    /// 交换两手牌位置后的结果
    pub fn reverse(self) -> Showdown {
        match self {
            Showdown::FirstWins => Showdown::SecondWins,
            Showdown::SecondWins => Showdown::FirstWins,
            Showdown::Tie => Showdown::Tie,
        }
    }

    fn from_ordering(ordering: Ordering) -> Showdown {
        match ordering {
            Ordering::Greater => Showdown::FirstWins,
            Ordering::Less => Showdown::SecondWins,
            Ordering::Equal => Showdown::Tie,
        }
    }
}

impl fmt::Display for Showdown {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Showdown::FirstWins => "first hand wins",
            Showdown::SecondWins => "second hand wins",
            Showdown::Tie => "tie",
        })
    }
}

// --- 牌力比较逻辑 ---

/// 比较两手已评估的牌，依次应用以下规则，遇到分出胜负的一步即停止：
///
/// 1. 牌型强度
/// 2. 顺子类：A 小顺最小；两手都是 A 小顺直接算平局；否则比最高牌
/// 3. 两对：先比大对，再比小对
/// 4. 有对子/三条/四条：比出现次数最多的那个点数
/// 5. 两手牌的点数各自从大到小排列，逐位比较
/// 6. 平局
pub fn compare_hands(first: &Evaluation, second: &Evaluation) -> Showdown {
    let by_category = first.category.cmp(&second.category);
    if by_category != Ordering::Equal {
        return Showdown::from_ordering(by_category);
    }

    let (a, b) = (&first.hand, &second.hand);

    if first.category.is_straight() {
        return match (a.is_low_straight(), b.is_low_straight()) {
            (true, true) => Showdown::Tie,
            (true, false) => Showdown::SecondWins,
            (false, true) => Showdown::FirstWins,
            (false, false) => Showdown::from_ordering(a.max_value().cmp(&b.max_value())),
        };
    }

    if first.category == HandCategory::TwoPair {
        let (a_pairs, b_pairs) = (a.ranks_with_count(2), b.ranks_with_count(2));
        let by_pairs = a_pairs.cmp(&b_pairs);
        if by_pairs != Ordering::Equal {
            return Showdown::from_ordering(by_pairs);
        }
    }

    if a.max_rank_multiplicity() > 1 && b.max_rank_multiplicity() > 1 {
        let by_group = primary_rank(a).cmp(&primary_rank(b));
        if by_group != Ordering::Equal {
            return Showdown::from_ordering(by_group);
        }
    }

    Showdown::from_ordering(a.values_desc().cmp(&b.values_desc()))
}

/// 直接比较两组牌，两边都必须正好 5 张
pub fn compare_cards(first: &[Card], second: &[Card]) -> Result<Showdown> {
    if first.len() != 5 || second.len() != 5 {
        return Err(PokerError::InvalidComparison { first: first.len(), second: second.len() });
    }
    let first = Evaluation::new(Hand::new(first)?);
    let second = Evaluation::new(Hand::new(second)?);
    Ok(compare_hands(&first, &second))
}

/// 出现次数最多的点数，次数相同时取较大的点数
fn primary_rank(hand: &Hand) -> Option<Rank> {
    hand.ranks_with_count(hand.max_rank_multiplicity()).first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use Rank::*;
    use Suit::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    fn eval(cards: [Card; 5]) -> Evaluation {
        Evaluation::new(Hand::new(&cards).unwrap())
    }

    #[test]
    fn test_category_decides_first() {
        let pair = eval([card(Two, Spade), card(Two, Heart), card(Three, Club), card(Four, Diamond), card(Six, Spade)]);
        let high = eval([card(Ace, Spade), card(King, Heart), card(Queen, Club), card(Jack, Diamond), card(Nine, Spade)]);
        assert_eq!(compare_hands(&pair, &high), Showdown::FirstWins);
        assert_eq!(compare_hands(&high, &pair), Showdown::SecondWins);
    }

    #[test]
    fn test_low_straight_is_weakest_straight() {
        let wheel = eval([card(Ace, Spade), card(Two, Heart), card(Three, Club), card(Four, Diamond), card(Five, Spade)]);
        let six_high = eval([card(Two, Club), card(Three, Heart), card(Four, Club), card(Five, Diamond), card(Six, Spade)]);
        assert_eq!(compare_hands(&wheel, &six_high), Showdown::SecondWins);
        assert_eq!(compare_hands(&six_high, &wheel), Showdown::FirstWins);
    }

    #[test]
    fn test_two_low_straights_tie() {
        let a = eval([card(Ace, Spade), card(Two, Heart), card(Three, Club), card(Four, Diamond), card(Five, Spade)]);
        let b = eval([card(Ace, Club), card(Two, Club), card(Three, Heart), card(Four, Heart), card(Five, Diamond)]);
        assert_eq!(compare_hands(&a, &b), Showdown::Tie);
    }

    #[test]
    fn test_straights_compare_high_card() {
        let ten_high = eval([card(Six, Spade), card(Seven, Heart), card(Eight, Club), card(Nine, Diamond), card(Ten, Spade)]);
        let nine_high = eval([card(Five, Club), card(Six, Heart), card(Seven, Club), card(Eight, Diamond), card(Nine, Spade)]);
        assert_eq!(compare_hands(&ten_high, &nine_high), Showdown::FirstWins);

        let sf_king = eval([card(Nine, Heart), card(Ten, Heart), card(Jack, Heart), card(Queen, Heart), card(King, Heart)]);
        let sf_wheel = eval([card(Ace, Club), card(Two, Club), card(Three, Club), card(Four, Club), card(Five, Club)]);
        assert_eq!(compare_hands(&sf_wheel, &sf_king), Showdown::SecondWins);
    }

    #[test]
    fn test_two_pair_low_pair_then_kicker() {
        let kings_fives = eval([card(King, Spade), card(King, Heart), card(Five, Club), card(Five, Diamond), card(Two, Spade)]);
        let kings_fours = eval([card(King, Club), card(King, Diamond), card(Four, Club), card(Four, Diamond), card(Ace, Spade)]);
        assert_eq!(compare_hands(&kings_fives, &kings_fours), Showdown::FirstWins);

        let kicker_three = eval([card(King, Club), card(King, Diamond), card(Five, Heart), card(Five, Spade), card(Three, Spade)]);
        assert_eq!(compare_hands(&kings_fives, &kicker_three), Showdown::SecondWins);
    }

    #[test]
    fn test_quads_compare_group_rank_before_kicker() {
        let nines = eval([card(Nine, Spade), card(Nine, Heart), card(Nine, Club), card(Nine, Diamond), card(Two, Spade)]);
        let eights = eval([card(Eight, Spade), card(Eight, Heart), card(Eight, Club), card(Eight, Diamond), card(Ace, Spade)]);
        assert_eq!(compare_hands(&nines, &eights), Showdown::FirstWins);
    }

    #[test]
    fn test_pair_falls_back_to_kickers() {
        let a = eval([card(Five, Spade), card(Five, Heart), card(King, Club), card(Queen, Diamond), card(Jack, Spade)]);
        let b = eval([card(Five, Club), card(Five, Diamond), card(King, Heart), card(Queen, Spade), card(Ten, Spade)]);
        assert_eq!(compare_hands(&a, &b), Showdown::FirstWins);
    }

    #[test]
    fn test_flush_compares_every_card() {
        let a = eval([card(Ace, Heart), card(Jack, Heart), card(Eight, Heart), card(Five, Heart), card(Three, Heart)]);
        let b = eval([card(Ace, Club), card(Jack, Club), card(Eight, Club), card(Five, Club), card(Two, Club)]);
        assert_eq!(compare_hands(&a, &b), Showdown::FirstWins);
        assert_eq!(a.cmp_strength(&b), Ordering::Greater);
    }

    #[test]
    fn test_compare_cards_rejects_wrong_sizes() {
        let five = [card(Two, Spade), card(Four, Heart), card(Six, Club), card(Eight, Diamond), card(Ten, Spade)];
        assert_eq!(compare_cards(&five, &five), Ok(Showdown::Tie));
        assert_eq!(
            compare_cards(&five, &five[..4]),
            Err(PokerError::InvalidComparison { first: 5, second: 4 })
        );
        let seven = [
            card(Two, Club), card(Three, Club), card(Four, Club), card(Five, Club),
            card(Seven, Diamond), card(Nine, Heart), card(Jack, Heart),
        ];
        assert_eq!(
            compare_cards(&seven, &five),
            Err(PokerError::InvalidComparison { first: 7, second: 5 })
        );

        let ah = card(Ace, Heart);
        let repeated = [ah, card(Ace, Spade), card(Ace, Diamond), card(Ace, Club), ah];
        assert_eq!(compare_cards(&repeated, &five), Err(PokerError::DuplicateCard(ah)));
    }

    #[test]
    fn test_showdown_helpers() {
        assert_eq!(Showdown::FirstWins.reverse(), Showdown::SecondWins);
        assert_eq!(Showdown::Tie.reverse(), Showdown::Tie);
        assert_eq!(Showdown::SecondWins.as_ordering(), Ordering::Less);
    }
}
