use crate::card::{Card, Deck};
use crate::comparator::{compare_hands, Showdown};
use crate::error::Result;
use crate::evaluator::{best_hand_of_five, Evaluation};
use crate::message::{SeatResult, ShowdownReport};
use crate::state::{SeatIndex, Table, TableConfig};
use tracing::{debug, info};

// --- 核心流程函数 ---

impl Table {
    /// 按配置从牌堆发牌
    ///
    /// 一次发完一手再发下一手，每手牌按点数从大到小排列。
    /// 牌不够时返回 `DeckExhausted`，此时牌堆里已发出的牌不会放回。
    pub fn deal(config: TableConfig, deck: &mut Deck) -> Result<Table> {
        config.validate()?;

        let mut hands = Vec::with_capacity(config.num_hands);
        for _ in 0..config.num_hands {
            let mut hand = deck.deal_many(config.hand_size)?;
            hand.sort_by(|a, b| b.cmp_value(a));
            hands.push(hand);
        }

        debug!(hands = config.num_hands, size = config.hand_size, remaining = deck.remaining(), "发牌完成");
        Ok(Table { config, hands })
    }

    /// 处理摊牌逻辑
    ///
    /// - 为每个座位找出最优的 5 张牌。
    /// - 比较牌力，找到一个或多个赢家。
    pub fn showdown(&self) -> Result<ShowdownReport> {
        let evaluations: Vec<Evaluation> = self
            .hands
            .iter()
            .map(Vec::as_slice)
            .map(best_hand_of_five)
            .collect::<Result<_>>()?;

        let winners = find_winners(&evaluations);

        let seats = self
            .hands
            .iter()
            .zip(&evaluations)
            .enumerate()
            .map(|(seat, (dealt, eval))| SeatResult {
                seat,
                dealt: dealt.clone(),
                best_five: sorted_desc(eval.hand.cards()),
                category: eval.category,
            })
            .collect();

        info!(?winners, "摊牌结束");
        Ok(ShowdownReport { seats, winners })
    }
}

/// 与最强那手牌打平的所有座位都是赢家
fn find_winners(evaluations: &[Evaluation]) -> Vec<SeatIndex> {
    let mut best: Option<&Evaluation> = None;
    for eval in evaluations {
        if best.is_none_or(|b| compare_hands(eval, b) == Showdown::FirstWins) {
            best = Some(eval);
        }
    }

    let Some(best) = best else { return vec![] };
    evaluations
        .iter()
        .enumerate()
        .filter(|(_, eval)| compare_hands(eval, best) == Showdown::Tie)
        .map(|(seat, _)| seat)
        .collect()
}

fn sorted_desc(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort_by(|a, b| b.cmp_value(a));
    cards
}

// --- 单元测试 ---
