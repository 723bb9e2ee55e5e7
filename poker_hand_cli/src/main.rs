mod command;

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use command::{parse_command, Command, HELP};
use poker_hand_core::{best_hand_of_five, compare_cards, Deck, Showdown, Table, TableConfig};

/// 一次命令行会话的设置，只由主循环持有
#[derive(Debug, Default)]
struct Session {
    seed: Option<u64>,
    json: bool,
}

impl Session {
    fn deck(&self) -> Deck {
        match self.seed {
            Some(seed) => Deck::shuffled_with_seed(seed),
            None => Deck::shuffled(),
        }
    }

    /// 执行一条命令，返回要打印的文本
    fn run(&mut self, command: Command) -> Result<String, Box<dyn std::error::Error>> {
        match command {
            Command::Deal { hands, size } => {
                let defaults = TableConfig::default();
                let config = TableConfig::new(
                    hands.unwrap_or(defaults.num_hands),
                    size.unwrap_or(defaults.hand_size),
                )?;
                let mut deck = self.deck();
                let report = Table::deal(config, &mut deck)?.showdown()?;
                if self.json {
                    Ok(serde_json::to_string_pretty(&report)?)
                } else {
                    Ok(report.to_string())
                }
            }
            Command::Seed(seed) => {
                self.seed = seed;
                Ok(match seed {
                    Some(seed) => format!("之后使用种子 {} 洗牌", seed),
                    None => "之后随机洗牌".to_string(),
                })
            }
            Command::Eval(cards) => {
                let best = best_hand_of_five(&cards)?;
                Ok(best.to_string())
            }
            Command::Compare(first, second) => {
                let result = compare_cards(&first, &second)?;
                Ok(match result {
                    Showdown::FirstWins => "第一手牌获胜".to_string(),
                    Showdown::SecondWins => "第二手牌获胜".to_string(),
                    Showdown::Tie => "平局".to_string(),
                })
            }
            Command::Json(on) => {
                self.json = on;
                Ok(format!("JSON 输出已{}", if on { "开启" } else { "关闭" }))
            }
            Command::Help => Ok(HELP.to_string()),
            Command::Exit => Ok(String::new()),
        }
    }
}

/// 逐行读取命令并执行，直到输入结束或收到 exit
///
/// 无法按 UTF-8 解码的一行只报告错误，会话继续。
fn run_loop<R: BufRead, W: Write>(input: R, out: &mut W, session: &mut Session) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let line = match lines.next() {
            None => break,
            Some(Ok(line)) => line,
            Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                warn!("无法解码的输入: {}", e);
                writeln!(out, "错误: {}", e)?;
                continue;
            }
            Some(Err(e)) => return Err(e),
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "收到命令");

        if command == Command::Exit {
            writeln!(out, "再见!")?;
            break;
        }

        match session.run(command) {
            Ok(output) => writeln!(out, "{}", output)?,
            Err(e) => {
                warn!("命令执行失败: {}", e);
                writeln!(out, "错误: {}", e)?;
            }
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("--- 扑克牌型比较 ---");
    println!("{}", HELP);

    let mut session = Session::default();
    run_loop(io::stdin().lock(), &mut io::stdout(), &mut session)?;

    info!("会话结束");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use poker_hand_core::{Card, ShowdownReport};

    fn cards(text: &str) -> Vec<Card> {
        text.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn test_seeded_deal_is_repeatable() {
        let mut session = Session::default();
        session.run(Command::Seed(Some(9))).unwrap();
        let first = session.run(Command::Deal { hands: None, size: Some(7) }).unwrap();
        let second = session.run(Command::Deal { hands: None, size: Some(7) }).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("Hand 2"));
    }

    #[test]
    fn test_json_output_parses() {
        let mut session = Session { seed: Some(3), json: true };
        let output = session.run(Command::Deal { hands: Some(3), size: None }).unwrap();
        let report: ShowdownReport = serde_json::from_str(&output).unwrap();
        assert_eq!(report.seats.len(), 3);
    }

    #[test]
    fn test_compare_and_eval() {
        let mut session = Session::default();
        let output = session
            .run(Command::Compare(cards("7H 7C 6D 6H 9S"), cards("8S 8D 2C 2H KC")))
            .unwrap();
        assert_eq!(output, "第二手牌获胜");

        let output = session.run(Command::Eval(cards("10H JH QH KH AH"))).unwrap();
        assert!(output.starts_with("Royal Flush"));
    }

    #[test]
    fn test_errors_are_reported() {
        let mut session = Session::default();
        assert!(session.run(Command::Deal { hands: Some(0), size: None }).is_err());
        assert!(session.run(Command::Eval(cards("AH KH"))).is_err());
        assert!(session.run(Command::Compare(cards("AH KH"), cards("2C 3C 4C 5C 7D"))).is_err());

        let error = session.run(Command::Eval(cards("AH AH AH AH AH KH QH"))).unwrap_err();
        assert!(error.to_string().contains("Ace of Hearts"));
        assert!(session.run(Command::Compare(cards("AH AS AD AC AH"), cards("2C 3D 5H 7S 9C"))).is_err());
    }

    #[test]
    fn test_loop_survives_undecodable_line() {
        let input: &[u8] = b"\xff\xfe\nhelp\nexit\nhelp\n";
        let mut out = Vec::new();
        run_loop(input, &mut out, &mut Session::default()).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("错误: "));
        assert!(out.contains(HELP));
        assert!(out.ends_with("再见!\n"));
    }

    #[test]
    fn test_loop_stops_at_end_of_input() {
        let input: &[u8] = b"seed 4\n\nbogus\n";
        let mut out = Vec::new();
        let mut session = Session::default();
        run_loop(input, &mut out, &mut session).unwrap();

        assert_eq!(session.seed, Some(4));
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("之后使用种子 4 洗牌"));
        assert!(out.ends_with("> "));
    }
}
