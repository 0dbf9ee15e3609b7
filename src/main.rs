use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;

use neon_life::config::SessionConfig;
use neon_life::core::world::{ActionIntent, Game};
use neon_life::data::jobs::JobId;
use neon_life::ui::view::{Frame, GaugeReading, Screen};

const HELP: &str = "Commands: gender <label> | start <name> | work <job_id> | interact <npc_id> | status | jobs | social | log | export | import <file> | help | quit";

fn main() {
    let config = match SessionConfig::from_args(env::args()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Usage: neon-life [--save-dir <dir>] [--load <file>] [--log <filter>]");
            process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    info!(save_dir = %config.save_dir.display(), "session starting");

    println!("=== NEON LIFE ===");
    let mut game = Game::new();
    let mut frame = Frame::default();
    game.refresh(&mut frame);

    if let Some(path) = &config.load_path {
        game.import_save(path, &mut frame);
        flush_transient(&mut frame);
    }
    if game.screen() == Screen::Setup {
        println!("Choose a gender (Male / Female / Non-Binary), then register with: start <name>");
    } else {
        print_status(&frame);
    }
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let input = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd.to_lowercase(), rest.trim()),
            None => (trimmed.to_lowercase(), ""),
        };

        match cmd.as_str() {
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "gender" => {
                if rest.is_empty() {
                    println!("Usage: gender <label>");
                    continue;
                }
                game.perform(ActionIntent::SetGender(rest.to_string()), &mut frame);
                print_gender_options(&frame);
            }
            "start" => {
                game.perform(
                    ActionIntent::StartGame {
                        name: rest.to_string(),
                    },
                    &mut frame,
                );
                if game.screen() == Screen::Game {
                    print_status(&frame);
                }
            }
            "work" => match rest.parse::<JobId>() {
                Ok(job_id) => game.perform(ActionIntent::Work(job_id), &mut frame),
                Err(err) => {
                    println!("{}", err);
                    print_jobs(&frame);
                }
            },
            "interact" | "hang" => {
                if rest.is_empty() {
                    println!("Usage: interact <npc_id>");
                    continue;
                }
                game.perform(
                    ActionIntent::Interact {
                        npc_id: rest.to_lowercase(),
                    },
                    &mut frame,
                );
            }
            "status" | "stats" => {
                game.refresh(&mut frame);
                print_status(&frame);
            }
            "jobs" => print_jobs(&frame),
            "social" => print_social(&frame),
            "log" => {
                for entry in game.log() {
                    println!("> {}", entry);
                }
            }
            "export" | "save" => {
                game.export_save(&config.save_dir, &mut frame);
            }
            "import" | "load" => {
                if rest.is_empty() {
                    println!("Usage: import <file>");
                    continue;
                }
                game.import_save(rest, &mut frame);
                if game.screen() == Screen::Game {
                    print_status(&frame);
                }
            }
            other => println!("Unknown command: {} (try 'help')", other),
        }

        flush_transient(&mut frame);
    }
}

fn flush_transient(frame: &mut Frame) {
    let (message, log) = frame.take_transient();
    for entry in log {
        println!("{}", entry);
    }
    if let Some(message) = message {
        println!("[!] {}", message);
    }
}

fn print_status(frame: &Frame) {
    println!(
        "{} ({}) | Credits: {} | Day {}",
        frame.name.as_deref().unwrap_or("---"),
        frame.gender.as_deref().unwrap_or(""),
        frame.money.as_deref().unwrap_or("0"),
        frame.day.unwrap_or(1)
    );
    if let Some(reading) = &frame.health {
        println!("  Health    {}", gauge_bar(reading));
    }
    if let Some(reading) = &frame.happiness {
        println!("  Happiness {}", gauge_bar(reading));
    }
    print_jobs(frame);
    print_social(frame);
}

fn gauge_bar(reading: &GaugeReading) -> String {
    let filled = usize::from(reading.width_percent) / 5;
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        ".".repeat(20 - filled),
        reading.label
    )
}

fn print_jobs(frame: &Frame) {
    println!("Jobs:");
    for row in &frame.jobs {
        println!("  {:<9} {:<15} {}  [{}]", row.id, row.name, row.detail, row.action);
    }
}

fn print_social(frame: &Frame) {
    println!("Social:");
    for row in &frame.social {
        println!(
            "  {:<5} {} [{}]  {}  [{}]",
            row.id, row.name, row.archetype, row.detail, row.action
        );
    }
}

fn print_gender_options(frame: &Frame) {
    let options: Vec<String> = frame
        .gender_options
        .iter()
        .map(|option| {
            if option.selected {
                format!("<{}>", option.label)
            } else {
                option.label.to_string()
            }
        })
        .collect();
    println!("Gender: {}", options.join(" "));
}
