use crate::game::{Game, GameState};
use crate::snapshot::GameUpdate;
use crate::square::Square;
use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};

/// Line-oriented front end over a single game, driven from stdin.
pub struct Console {
    game: Game,
    rng: StdRng,
}

impl Console {
    pub fn new() -> Self {
        Console {
            game: Game::new("white", "black"),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Console {
            game: Game::new("white", "black"),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut reader = stdin.lock();
        let mut line = String::new();

        while reader.read_line(&mut line)? > 0 {
            let command = line.trim();
            if command == "quit" {
                break;
            }

            match self.handle_command(command) {
                Ok(response) => print!("{}", response),
                Err(err) => println!("error: {:#}", err),
            }

            stdout.flush()?;
            line.clear();
        }
        Ok(())
    }

    pub fn handle_command(&mut self, command: &str) -> Result<String> {
        let parts: Vec<&str> = command.split_whitespace().collect();
        if parts.is_empty() {
            return Ok("".to_string());
        }

        match parts[0] {
            "new" => {
                self.game = Game::new("white", "black");
                Ok(format!("game {}\n", self.game.uuid()))
            }
            "board" => Ok(self.game.board().to_string()),
            "moves" => {
                let origin = parse_square(&parts, 1)?;
                Ok(format_squares(self.game.board().possible_moves(origin)))
            }
            "legal" => {
                let origin = parse_square(&parts, 1)?;
                Ok(format_squares(self.game.legal_moves(origin)))
            }
            "move" => {
                let origin = parse_square(&parts, 1)?;
                let destination = parse_square(&parts, 2)?;
                let captured = self.game.play(origin, destination)?;
                Ok(match captured {
                    Some(piece) => format!("{} {} captures {}\n", origin, destination, piece),
                    None => format!("{} {}\n", origin, destination),
                })
            }
            "random" => match self.game.random_move(&mut self.rng) {
                Some((origin, destination)) => {
                    self.game.play(origin, destination)?;
                    Ok(format!("{} {}\n", origin, destination))
                }
                None => Ok("none\n".to_string()),
            },
            "status" => Ok(self.handle_status()),
            "snapshot" => {
                let json = serde_json::to_string(&self.game.to_update())?;
                Ok(format!("{}\n", json))
            }
            "update" => {
                let json = command.trim_start()["update".len()..].trim();
                let update: GameUpdate =
                    serde_json::from_str(json).context("could not decode game update")?;
                self.game = Game::from_update(&update)?;
                Ok(format!("game {}\n", self.game.uuid()))
            }
            other => bail!("unknown command '{}'", other),
        }
    }

    fn handle_status(&mut self) -> String {
        let turn = self.game.turn();
        match self.game.status() {
            GameState::Ongoing => format!("{} to move\n", turn),
            GameState::Check(color) => format!("{} to move, in check\n", color),
            GameState::Checkmate(winner) => format!("checkmate, {} wins\n", winner),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_square(parts: &[&str], index: usize) -> Result<Square> {
    let key = parts
        .get(index)
        .with_context(|| format!("'{}' needs a square argument", parts[0]))?;
    Ok(key.parse()?)
}

fn format_squares(mut squares: Vec<Square>) -> String {
    squares.sort();
    let keys: Vec<String> = squares.iter().map(|s| s.key()).collect();
    format!("{}\n", keys.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Color;

    #[test]
    fn test_move_listing() {
        let mut console = Console::with_seed(3);
        assert_eq!(console.handle_command("moves E2").unwrap(), "E3 E4\n");
        assert_eq!(console.handle_command("legal b1").unwrap(), "A3 C3\n");
        assert_eq!(console.handle_command("moves E4").unwrap(), "\n");
        assert_eq!(console.handle_command("").unwrap(), "");
    }

    #[test]
    fn test_playing_moves() {
        let mut console = Console::with_seed(3);
        assert_eq!(console.handle_command("move E2 E4").unwrap(), "E2 E4\n");
        assert_eq!(console.handle_command("status").unwrap(), "black to move\n");
        console.handle_command("move D7 D5").unwrap();
        assert_eq!(
            console.handle_command("move E4 D5").unwrap(),
            "E4 D5 captures black pawn\n"
        );
        assert!(console.handle_command("move A1 A5").is_err());
        assert!(console.handle_command("move A1").is_err());
        assert!(console.handle_command("move Z1 A2").is_err());
        assert!(console.handle_command("castle").is_err());
    }

    #[test]
    fn test_random_move_is_played() {
        let mut console = Console::with_seed(11);
        let response = console.handle_command("random").unwrap();
        assert_eq!(response.trim().split(' ').count(), 2);
        assert_eq!(console.game().turn(), Color::Black);
    }

    #[test]
    fn test_snapshot_and_update() {
        let mut console = Console::with_seed(3);
        console.handle_command("move G1 F3").unwrap();
        let json = console.handle_command("snapshot").unwrap();

        let mut other = Console::with_seed(5);
        other.handle_command(&format!("update {}", json.trim())).unwrap();
        assert_eq!(other.game().board(), console.game().board());
        assert_eq!(other.game().turn(), Color::Black);
        assert_eq!(other.game().uuid(), console.game().uuid());

        let err = other
            .handle_command(r#"update {"uuid":"x","whitePlayer":"a","blackPlayer":"b","board":{"A1":{"name":"dragon","color":"white"}}}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown piece kind 'dragon'");
        assert!(other.handle_command("update {").is_err());
    }
}
