//! GifSearch — keyword GIF search with paginated results and query history.
//!
//! Entry point: a console frontend that reads commands from stdin, maps
//! them 1:1 to controller intents, and renders the resulting state
//! snapshot. All logic lives in the library; this file only parses and
//! prints.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use gifsearch::app::App;
use gifsearch::managers::session_controller::SearchSessionTrait;
use gifsearch::types::search::Intent;

#[tokio::main]
async fn main() -> ExitCode {
    let mut app = match App::from_env() {
        Ok(app) => app,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Set GIPHY_URL and GIPHY_API_KEY and try again.");
            return ExitCode::FAILURE;
        }
    };

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║{:^62}║", format!("GifSearch v{}", env!("CARGO_PKG_VERSION")));
    println!("║{:^62}║", "search <words> · page <n> · pick <i> · history · clear");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let stdin = io::stdin();
    loop {
        print!("gifsearch> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                eprintln!("stdin error: {}", err);
                break;
            }
        }

        let input = line.trim();
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        match command {
            "" => {}
            "search" => {
                if rest.is_empty() {
                    println!("  Usage: search <words>");
                } else {
                    app.controller
                        .dispatch(Intent::SubmitQuery(rest.to_string()))
                        .await;
                    render_results(&app);
                }
            }
            "page" => match rest.parse::<u32>() {
                Ok(n) => {
                    app.controller.dispatch(Intent::ChangePage(n)).await;
                    render_results(&app);
                }
                Err(_) => println!("  Usage: page <number>"),
            },
            "pick" => match rest.parse::<usize>() {
                Ok(i) if i >= 1 && i <= app.controller.history().len() => {
                    let query = app.controller.history()[i - 1].clone();
                    app.controller
                        .dispatch(Intent::SelectHistoryItem(query))
                        .await;
                    render_results(&app);
                }
                _ => println!("  Usage: pick <history index>"),
            },
            "history" => render_history(&app),
            "clear" => {
                app.controller.dispatch(Intent::ClearHistory).await;
                println!("  History cleared.");
            }
            "quit" | "exit" => break,
            other => println!("  Unknown command: {}", other),
        }
    }

    ExitCode::SUCCESS
}

fn render_results(app: &App) {
    let state = app.controller.state();
    println!("───────────────────────────────────────────────────────────────");
    if state.results.is_empty() {
        println!("  No results for \"{}\".", state.query);
    } else {
        for (i, gif) in state.results.iter().enumerate() {
            let title = if gif.title.is_empty() {
                "(untitled)"
            } else {
                gif.title.as_str()
            };
            println!("  {:>3}. {} [{}px]", i + 1, title, gif.height);
            println!("       {}", gif.url);
        }
    }
    println!(
        "  page {} of {} ({} matches)",
        state.page,
        state.page_count(app.config.items_per_page),
        state.total_results
    );
    println!("───────────────────────────────────────────────────────────────");
}

fn render_history(app: &App) {
    let history = app.controller.history();
    if history.is_empty() {
        println!("  No recent searches.");
        return;
    }
    for (i, query) in history.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, query);
    }
}
