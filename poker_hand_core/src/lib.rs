//! # 扑克牌型评估与比较
//!
//! 这个 `core` crate 负责把 5 张牌归入十种牌型之一，
//! 按牌型强度和各牌型的比较规则判断两手牌的胜负，
//! 并能从 6 到 7 张牌中挑出最优的 5 张。
//! 发牌、摊牌报告等外围功能也放在这里，供命令行等上层应用复用。

mod card;
mod comparator;
mod error;
mod evaluator;
mod hand;
mod logic;
mod message;
mod state;

pub use card::*;

pub use comparator::*;

pub use error::*;

pub use evaluator::*;

pub use hand::*;

pub use message::*;

pub use state::*;
