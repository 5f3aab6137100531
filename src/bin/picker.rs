//! Range Picker Binary
//!
//! Drives one range grid from text commands, either typed at a prompt or
//! read line by line from a script.
//!
//! Options: --script <path>, --live, --mode <mode>

use clap::Parser;
use colored::Colorize;
use rangegrid::gesture::*;
use rangegrid::grid::*;
use rangegrid::present::*;

#[derive(Parser)]
#[command(author, version, about = "Select a starting hand range on a 13x13 grid", long_about = None)]
struct Args {
    /// Read commands from this file instead of prompting.
    #[arg(long)]
    script: Option<std::path::PathBuf>,
    /// Refresh the combo summary on every painted cell.
    #[arg(long, env = "RANGE_LIVE")]
    live: bool,
    /// Start with this mode stuck on.
    #[arg(long)]
    mode: Option<String>,
}

#[derive(Parser)]
#[command(no_binary_name = true)]
enum Command {
    #[command(about = "Press on a cell: down <cell> [right] [shift]", alias = "d")]
    Down {
        #[arg(required = true)]
        cell: String,
        modifiers: Vec<String>,
    },
    #[command(about = "Drag into a cell", alias = "o")]
    Over {
        #[arg(required = true)]
        cell: String,
    },
    #[command(about = "Release the pointer", alias = "u")]
    Up,
    #[command(about = "Abandon the open gesture")]
    Cancel,
    #[command(about = "Toggle a sticky mode: add, remove, shiftFill, rectErase")]
    Mode {
        #[arg(required = true)]
        mode: String,
    },
    #[command(about = "Print the grid", alias = "s")]
    Show,
    #[command(about = "Exit", alias = "exit")]
    Quit,
}

struct Picker(Controller<Recorder>);

impl Picker {
    fn new(args: &Args) -> anyhow::Result<Self> {
        let mut controller = Controller::new(Recorder::default()).live(args.live);
        if let Some(mode) = args.mode.as_deref() {
            controller.toggle(Mode::try_from(mode)?);
        }
        Ok(Self(controller))
    }

    /// Runs one command line. Returns false once the session should stop.
    fn handle(&mut self, line: &str) -> anyhow::Result<bool> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(true);
        }
        match Command::try_parse_from(line.split_whitespace())? {
            Command::Down { cell, modifiers } => {
                let at = Self::cell(&cell)?;
                let mut button = Button::Primary;
                let mut shift = false;
                for m in modifiers.iter().map(String::as_str) {
                    match m {
                        "right" => button = Button::Secondary,
                        "shift" => shift = true,
                        other => anyhow::bail!("unknown modifier: {}", other),
                    }
                }
                self.0.start(at, button, shift);
            }
            Command::Over { cell } => self.0.enter(Self::cell(&cell)?),
            Command::Up => {
                self.0.end();
                self.report();
            }
            Command::Cancel => self.0.cancel(),
            Command::Mode { mode } => match self.0.toggle(Mode::try_from(mode.as_str())?) {
                Some(mode) => log::info!("{:<32}{:<32}", "sticky mode", mode),
                None => log::info!("{:<32}", "sticky mode released"),
            },
            Command::Show => self.show(),
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// A hand label such as `AKs`, or `row,col`.
    fn cell(s: &str) -> anyhow::Result<Position> {
        match s.split_once(',') {
            Some((row, col)) => Position::try_from((row.trim().parse::<usize>()?, col.trim().parse::<usize>()?)),
            None => Ok(Position::from(Hand::try_from(s)?)),
        }
    }

    fn report(&self) {
        if let Some(summary) = self.0.presenter().summary() {
            log::info!("{:<32}{:<32}", "range", summary);
        }
    }

    fn show(&self) {
        let recorder = self.0.presenter();
        let fill = recorder.preview(Highlight::Fill);
        let erase = recorder.preview(Highlight::Erase);
        let active = recorder.active();
        for (row, hands) in self.0.grid().rows().enumerate() {
            let line = hands
                .iter()
                .enumerate()
                .map(|(col, hand)| {
                    let label = format!("{:<4}", hand.to_string());
                    match Position::try_from((row, col)) {
                        Ok(p) if erase.contains(&p) => label.black().on_red().to_string(),
                        Ok(p) if fill.contains(&p) => label.black().on_yellow().to_string(),
                        Ok(p) if active.contains(&p) => label.green().bold().to_string(),
                        _ => label.dimmed().to_string(),
                    }
                })
                .collect::<String>();
            println!("{}", line);
        }
        println!("{}", self.0.range().summary());
    }
}

fn main() -> anyhow::Result<()> {
    rangegrid::log()?;
    let args = Args::parse();
    let mut picker = Picker::new(&args)?;
    match args.script.as_ref() {
        Some(path) => {
            for (i, line) in std::fs::read_to_string(path)?.lines().enumerate() {
                match picker.handle(line) {
                    Ok(true) => continue,
                    Ok(false) => break,
                    Err(e) => log::warn!("line {}: {}", i + 1, e),
                }
            }
            picker.show();
        }
        None => loop {
            let line = dialoguer::Input::<String>::new()
                .with_prompt("range")
                .allow_empty(true)
                .interact_text()?;
            match picker.handle(&line) {
                Ok(true) => continue,
                Ok(false) => break,
                Err(e) => eprintln!("{}", e),
            }
        },
    }
    println!("{}", picker.0.range());
    Ok(())
}
