use poker_hand_core::{Card, PokerError};
use thiserror::Error;

/// 用户在提示符后输入的一条命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 发牌并摊牌，缺省的参数沿用默认牌桌配置
    Deal { hands: Option<usize>, size: Option<usize> },
    /// `None` 表示恢复随机洗牌
    Seed(Option<u64>),
    Eval(Vec<Card>),
    Compare(Vec<Card>, Vec<Card>),
    Json(bool),
    Help,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("未知命令: {0}")]
    Unknown(String),

    #[error("用法: {0}")]
    Usage(&'static str),

    #[error("无效的数字: '{0}'")]
    InvalidNumber(String),

    #[error(transparent)]
    Card(#[from] PokerError),
}

pub const HELP: &str = "\
可用命令:
  deal [手数] [张数]         - 发牌并比较 (默认 2 手 5 张，张数可为 5 到 7)
  seed <数字>|off            - 使用固定种子洗牌 / 恢复随机洗牌
  eval <牌...>               - 评估 5 到 7 张牌，例如: eval AH KH 10H 2H 5H AS 10C
  compare <5张牌> vs <5张牌> - 比较两手牌
  json on|off                - 以 JSON 格式输出摊牌结果
  help                       - 显示帮助
  exit                       - 退出";

/// 解析一行输入，空行返回 `Ok(None)`
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = parts.split_first() else {
        return Ok(None);
    };

    let command = match command.to_ascii_lowercase().as_str() {
        "deal" => {
            if args.len() > 2 {
                return Err(CommandError::Usage("deal [手数] [张数]"));
            }
            Command::Deal {
                hands: args.first().map(|s| parse_number(s)).transpose()?,
                size: args.get(1).map(|s| parse_number(s)).transpose()?,
            }
        }
        "seed" => match args {
            ["off"] => Command::Seed(None),
            [seed] => Command::Seed(Some(parse_number(seed)?)),
            _ => return Err(CommandError::Usage("seed <数字>|off")),
        },
        "eval" => {
            if args.is_empty() {
                return Err(CommandError::Usage("eval <牌...>"));
            }
            Command::Eval(parse_cards(args)?)
        }
        "compare" => {
            let split = args
                .iter()
                .position(|a| a.eq_ignore_ascii_case("vs"))
                .ok_or(CommandError::Usage("compare <5张牌> vs <5张牌>"))?;
            Command::Compare(parse_cards(&args[..split])?, parse_cards(&args[split + 1..])?)
        }
        "json" => match args {
            ["on"] => Command::Json(true),
            ["off"] => Command::Json(false),
            _ => return Err(CommandError::Usage("json on|off")),
        },
        "help" => Command::Help,
        "exit" | "quit" => Command::Exit,
        _ => return Err(CommandError::Unknown(line.trim().to_string())),
    };

    Ok(Some(command))
}

fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T, CommandError> {
    text.parse().map_err(|_| CommandError::InvalidNumber(text.to_string()))
}

fn parse_cards(tokens: &[&str]) -> Result<Vec<Card>, CommandError> {
    Ok(tokens.iter().map(|t| t.parse()).collect::<Result<Vec<Card>, PokerError>>()?)
}
