use std::str::FromStr;

use anyhow::{Context, anyhow, bail};

/// A line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Open(i32, i32),
    Flag(i32, i32),
    Print,
    Reveal,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  open X Y   (o) open the cell in column X, row Y, counting from 1
  flag X Y   (f) flag the cell in column X, row Y
  print      (p) show the board
  reveal         show the solution
  help       (h) show this text
  quit       (q) leave the game";

fn coords<'a>(mut words: impl Iterator<Item = &'a str>) -> anyhow::Result<(i32, i32)> {
    let mut next = |axis: &str| -> anyhow::Result<i32> {
        let word = words.next().ok_or_else(|| anyhow!("Missing {} coordinate", axis))?;
        word.parse::<i32>()
            .with_context(|| format!("Invalid {} coordinate {:?}", axis, word))
    };
    let x = next("x")?;
    let y = next("y")?;
    Ok((x, y))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("Empty command");
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "open" | "o" => {
                let (x, y) = coords(&mut words)?;
                Command::Open(x, y)
            }
            "flag" | "f" => {
                let (x, y) = coords(&mut words)?;
                Command::Flag(x, y)
            }
            "print" | "p" => Command::Print,
            "reveal" => Command::Reveal,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => bail!("Unknown command {:?}, try \"help\"", other),
        };

        if let Some(extra) = words.next() {
            bail!("Unexpected argument {:?}", extra);
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!("open 3 4".parse::<Command>().unwrap(), Command::Open(3, 4));
        assert_eq!("  F 1 -2 ".parse::<Command>().unwrap(), Command::Flag(1, -2));
    }

    #[test]
    fn parses_plain_commands() {
        assert_eq!("p".parse::<Command>().unwrap(), Command::Print);
        assert_eq!("reveal".parse::<Command>().unwrap(), Command::Reveal);
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_bad_input() {
        assert!("".parse::<Command>().is_err());
        assert!("open 1".parse::<Command>().is_err());
        assert!("open one two".parse::<Command>().is_err());
        assert!("open 1 2 3".parse::<Command>().is_err());
        assert!("dig 1 2".parse::<Command>().is_err());
    }
}
