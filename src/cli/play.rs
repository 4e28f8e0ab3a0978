//! Interactive play session
//!
//! This is the terminal presentation layer: it renders whatever the runner
//! reports, forwards typed lines to it, and schedules the deferred advance
//! after a correct answer. It holds no game state of its own.

use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use htmlquest::runner::{FinalSummary, MissionRunner, Progress, Submission, Tone};
use htmlquest::Mission;

/// How long the success message stays on screen before the next mission loads
const ADVANCE_DELAY: Duration = Duration::from_millis(1500);

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Run one interactive session over stdin/stdout
pub async fn play_command(pack: Option<&Path>) -> Result<()> {
    let catalog = super::load_catalog(pack)?;
    let mut runner = MissionRunner::new(catalog);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        let Some(mission) = runner.active_mission().cloned() else {
            break;
        };

        render_mission(&mission, runner.progress());
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: the player walked away, nothing to save
            println!();
            println!("{DIM}Sesión interrumpida.{RESET}");
            return Ok(());
        }

        match runner.submit(&line) {
            Submission::Correct {
                badge,
                feedback,
                advance,
            } => {
                println!();
                print_feedback(&feedback.message, feedback.tone);
                println!("  Nueva medalla: {badge}");
                println!("  {}", progress_bar(runner.progress()));

                // keep the success message on screen before moving on; the
                // runner ignores anything submitted in the meantime
                tokio::time::sleep(ADVANCE_DELAY).await;
                runner.advance(advance);
            }
            Submission::Incorrect { feedback } => {
                println!();
                print_feedback(&feedback.message, feedback.tone);
            }
            Submission::Ignored(_) => {}
        }
    }

    render_final(&runner);
    Ok(())
}

fn render_mission(mission: &Mission, progress: Progress) {
    println!();
    println!("{BOLD}{}{RESET}", mission.title);
    println!("{}", mission.description);
    println!();
    println!("  {DIM}{}{RESET}", mission.broken_code);
    println!();
    println!("  {}", progress_bar(progress));
}

fn print_feedback(message: &str, tone: Tone) {
    let color = match tone {
        Tone::Success => GREEN,
        Tone::Failure => RED,
    };
    println!("{color}{message}{RESET}");
}

/// Textual progress bar, the terminal stand-in for the original's `<progress>`
fn progress_bar(progress: Progress) -> String {
    const WIDTH: usize = 20;
    let filled = (progress.fraction() * WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {}/{}",
        "█".repeat(filled),
        "░".repeat(WIDTH - filled),
        progress.completed,
        progress.total
    )
}

fn render_final(runner: &MissionRunner) {
    let summary = FinalSummary::new();
    println!();
    println!("{BOLD}{GREEN}{}{RESET}", summary.headline);
    println!("{}", summary.detail);
    println!();
    println!("Medallas obtenidas:");
    for awarded in runner.awarded_badges() {
        println!("  {}", awarded.badge);
    }
    println!();
    println!("🎉");
}
