mod command;
mod helper;
use command::Command;
use helper::ReplHelper;

use colored::Colorize;
use dado_lib::attribute::attribute_die;
use dado_lib::error::Error;
use dado_lib::solver::Solver;
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::CompletionType;
use rustyline::Config;
use rustyline::EditMode;
use rustyline::Editor;
use rustyline::Result;
use termimad::crossterm::style::Color;
use termimad::MadSkin;

const HISTORY_FILE: &str = "history";

fn print_error(error: Error) {
    let kind = if error.is_limit() {
        "too large"
    } else {
        "bad input"
    };
    eprintln!("{}", format!("repl: {kind}: {error}").bold().red());
}

fn roll(skin: &MadSkin, query: &str) {
    match Solver::new(query) {
        Ok(solver) => println!("{}", skin.term_text(&solver.solve().to_string())),
        Err(error) => print_error(error),
    }
}

/// Run one line, return false to leave the loop
fn eval_line(skin: &MadSkin, line: &str) -> bool {
    match Command::from(line) {
        Command::Empty => (),
        Command::Help => println!("{}", skin.term_text(Command::HELP)),
        Command::Quit => return false,
        Command::Attribute(level, wants_roll) => match attribute_die(level) {
            Ok(die) if wants_roll => roll(skin, &die),
            Ok(die) => println!("{}", skin.inline(&format!("*die* `{die}`"))),
            Err(error) => print_error(error),
        },
        Command::BadAttribute(rest) => {
            eprintln!(
                "{}",
                format!("repl: bad input: `{rest}` is not `<level> [roll]`")
                    .bold()
                    .red()
            );
        }
        Command::Roll(query) => roll(skin, query),
    }
    true
}

fn main() -> Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let helper = ReplHelper {
        hinter: HistoryHinter {},
        colored: "".to_owned(),
    };
    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.italic.set_fg(Color::Cyan);
    skin.inline_code.set_fg(Color::Magenta);
    let mut rline = Editor::with_config(config)?;
    rline.set_helper(Some(helper));
    if rline.load_history(HISTORY_FILE).is_err() {
        eprintln!("{}", "repl: warn: no previous history".bold().yellow());
    }
    let mut count = 1u64;
    loop {
        let prompt = format!("dado: {}> ", count);
        if let Some(helper) = rline.helper_mut() {
            helper.colored = prompt.bold().green().to_string();
        }
        match rline.readline(&prompt) {
            Ok(line) => {
                rline.add_history_entry(line.as_str())?;
                if !eval_line(&skin, &line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", "repl: signal: CTRL-C".bold().yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                eprintln!("{}", "repl: signal: CTRL-D".bold().yellow());
                break;
            }
            Err(error) => {
                eprintln!("{}", format!("repl: error: `{:?}`", error).bold().red());
                break;
            }
        }
        count += 1;
    }
    rline.append_history(HISTORY_FILE)
}
