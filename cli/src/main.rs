use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nagare_core::catalog::{level, level_label, levels_by_size, Level, BOARD_SIZES};
use nagare_core::game::Board;
use nagare_core::grid::cell_key;
use nagare_core::BoardAction;

#[derive(Parser)]
#[command(name = "nagare-cli", version, about = "Headless tools for nagare boards")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the level catalog.
    Levels {
        #[arg(long)]
        size: Option<u32>,
    },
    /// Print a level's starting board.
    Show {
        #[arg(long)]
        size: u32,
        #[arg(long)]
        level: Option<String>,
    },
    /// Apply a gesture script to a level and print the result.
    Replay {
        #[arg(long)]
        size: u32,
        #[arg(long)]
        level: Option<String>,
        script: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Levels { size } => {
            let sizes: Vec<u32> = match size {
                Some(size) => vec![size],
                None => BOARD_SIZES.to_vec(),
            };
            for size in sizes {
                let levels = levels_by_size(size);
                if levels.is_empty() {
                    println!("{size}x{size}: no levels");
                    continue;
                }
                println!("{size}x{size}:");
                for entry in levels {
                    println!("  {}", level_label(entry));
                }
            }
            Ok(())
        }
        Commands::Show { size, level } => {
            let picked = resolve_level(size, level.as_deref())?;
            let board = Board::new(*picked);
            print!("{}", render_board(&board));
            print_hud(&board);
            Ok(())
        }
        Commands::Replay {
            size,
            level,
            script,
        } => {
            let picked = resolve_level(size, level.as_deref())?;
            let text = fs::read_to_string(&script)?;
            let actions = parse_script(&text)?;
            let mut board = Board::new(*picked);
            for action in actions {
                board.apply_action(action);
            }
            print!("{}", render_board(&board));
            print_hud(&board);
            Ok(())
        }
    }
}

fn resolve_level(size: u32, id: Option<&str>) -> Result<&'static Level, Box<dyn std::error::Error>> {
    if let Some(found) = level(size, id) {
        return Ok(found);
    }
    let levels = levels_by_size(size);
    if levels.is_empty() {
        eprintln!("no levels for size {size}");
        eprintln!("available sizes:");
        for size in BOARD_SIZES {
            eprintln!("  {size}");
        }
    } else {
        eprintln!("unknown level: {}", id.unwrap_or("?"));
        eprintln!("available levels:");
        for entry in levels {
            eprintln!("  {}", level_label(entry));
        }
    }
    Err("level not found".into())
}

fn render_board(board: &Board) -> String {
    let size = board.level().size;
    let snapshot = board.snapshot();
    let mut output = String::new();
    for row in 0..size {
        for col in 0..size {
            let key = cell_key(row, col);
            let glyph = if let Some(dot) = board.dot_at(&key) {
                dot.pair.id.chars().next().unwrap_or('?')
            } else if let Some(pair_id) = snapshot.occupancy.get(&key) {
                pair_id
                    .chars()
                    .next()
                    .unwrap_or('?')
                    .to_ascii_lowercase()
            } else {
                '.'
            };
            output.push(glyph);
        }
        output.push('\n');
    }
    output
}

fn print_hud(board: &Board) {
    let snapshot = board.snapshot();
    let mut completed: Vec<&str> = snapshot.completed.iter().map(String::as_str).collect();
    completed.sort_unstable();
    println!(
        "moves: {}  coverage: {}%  connected: {}/{}{}",
        snapshot.moves,
        snapshot.coverage,
        completed.len(),
        board.level().pairs.len(),
        if snapshot.complete { "  solved" } else { "" }
    );
}

fn parse_script(text: &str) -> Result<Vec<BoardAction>, Box<dyn std::error::Error>> {
    let mut actions = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let number = index + 1;
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or("");
        let action = match verb {
            "down" | "enter" => {
                let Some(key) = words.next().and_then(parse_cell) else {
                    return Err(format!("line {number}: expected R,C after {verb}").into());
                };
                if verb == "down" {
                    BoardAction::CellDown { key }
                } else {
                    BoardAction::CellEnter { key }
                }
            }
            "up" => BoardAction::GestureEnd,
            "undo" => BoardAction::Undo,
            "clear" => BoardAction::Clear,
            other => {
                return Err(format!("line {number}: unknown command {other}").into());
            }
        };
        if words.next().is_some() {
            return Err(format!("line {number}: trailing input").into());
        }
        actions.push(action);
    }
    Ok(actions)
}

fn parse_cell(word: &str) -> Option<String> {
    let (row, col) = word.split_once(',')?;
    let row: u32 = row.trim().parse().ok()?;
    let col: u32 = col.trim().parse().ok()?;
    Some(cell_key(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_gesture_script() {
        let script = "\
# connect the left column
down 0,0
enter 1,0
up
undo
clear
";
        let actions = parse_script(script).unwrap();
        assert_eq!(actions.len(), 5);
        assert!(matches!(&actions[0], BoardAction::CellDown { key } if key == "0,0"));
        assert!(matches!(&actions[1], BoardAction::CellEnter { key } if key == "1,0"));
        assert!(matches!(actions[2], BoardAction::GestureEnd));
        assert!(matches!(actions[3], BoardAction::Undo));
        assert!(matches!(actions[4], BoardAction::Clear));
    }

    #[test]
    fn rejects_unknown_commands_with_the_line_number() {
        let err = parse_script("down 0,0\nwiggle\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn rejects_malformed_cells() {
        assert!(parse_script("down zero,0\n").is_err());
        assert!(parse_script("enter 1\n").is_err());
    }

    #[test]
    fn renders_dots_paths_and_empty_cells() {
        let picked = level(5, Some("5-1")).copied().unwrap();
        let mut board = Board::new(picked);
        for action in parse_script("down 0,0\nenter 1,0\nenter 2,0\nup\n").unwrap() {
            board.apply_action(action);
        }
        let rendered = render_board(&board);
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], "AB..B");
        assert_eq!(rows[1], "a....");
        assert_eq!(rows[2], "a....");
        assert_eq!(rows[3], ".....");
        assert_eq!(rows[4], "AC..C");
    }
}
