// SORTTY: Sorting algorithms racing side by side in the terminal

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, LevelFilter};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::bench;
use sortty::config::{BenchArgs, Cli, Command, RaceConfig};
use sortty::race::Race;
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Some(Command::Bench(args)) => run_bench(args),
        None => run_visualizer(RaceConfig::from_cli(&cli)),
    }
}

fn run_bench(args: &BenchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let report = bench::run(args);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_table());
    }

    if !report.all_verified {
        eprintln!("Error: at least one routine produced an incorrect result");
        std::process::exit(1);
    }
    Ok(())
}

fn run_visualizer(config: RaceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let race = Race::new(config)?;
    info!(
        "Generated {} values ({}), seed {:?}",
        race.dataset().len(),
        config.order,
        config.seed
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(race);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    for lane in app.race.lanes() {
        info!(
            "{}: {} steps, {}",
            lane.algorithm(),
            lane.steps(),
            match lane.elapsed() {
                Some(d) => format!("finished in {:.3}s", d.as_secs_f64()),
                None => "unfinished".to_string(),
            }
        );
    }

    Ok(())
}
