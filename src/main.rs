use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use story_trainer::config::Config;
use story_trainer::loader::StoryLoader;
use story_trainer::session::StorySession;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let loader = StoryLoader::new();
    let document = loader.load(config.story_file_id.as_deref()).await;

    let mut session = StorySession::with_limits(
        document,
        config.question_count,
        config.distractor_count,
        StdRng::from_entropy(),
    );

    let stdin = io::stdin();
    run(&mut session, &mut stdin.lock());
}

fn run<R: BufRead>(session: &mut StorySession, input: &mut R) {
    println!("=== {} ===\n", session.document().title);

    let page_count = session.document().pages.len();
    for index in 0..page_count {
        let page = &session.document().pages[index];
        println!("--- page {} of {} [{}] ---", index + 1, page_count, page.image);
        println!("{}\n", page.content);
        if index + 1 < page_count && !wait_for_enter(input) {
            return;
        }
    }

    println!("Now that you've read the story, let's check your understanding.\n");

    let selection: Vec<String> = session.selection().to_vec();
    for (number, id) in selection.iter().enumerate() {
        let Some(display) = session.display_question(id).cloned() else {
            continue;
        };

        println!("Question {} of {}: {}", number + 1, selection.len(), display.text);
        for (slot, option) in display.display_options.iter().enumerate() {
            println!("  {}) {}", slot + 1, option.text);
        }

        let Some(slot) = read_choice(input, display.display_options.len()) else {
            return;
        };
        let chosen = &display.display_options[slot];
        session.record_answer(id, chosen.index);

        if chosen.index == display.correct_answer {
            println!("Correct!\n");
        } else {
            println!(
                "Not quite. The right answer was: {}\n",
                display.options[display.correct_answer]
            );
        }
    }

    print_summary(session);
}

fn print_summary(session: &StorySession) {
    let score = session.score();
    println!("=== {} ===", session.document().summary.title);
    println!("You answered {} of {} correctly.\n", score.correct_count, score.total);

    for (number, entry) in session.review().iter().enumerate() {
        let verdict = if entry.correct { "correct" } else { "incorrect" };
        println!("{}. {} ({})", number + 1, entry.text, verdict);
        match &entry.chosen {
            Some(chosen) => println!("   your answer: {}", chosen),
            None => println!("   your answer: (unanswered)"),
        }
        if !entry.correct {
            println!("   right answer: {}", entry.correct_text);
        }
        if !entry.other_options.is_empty() {
            println!("   other options: {}", entry.other_options.join(", "));
        }
    }

    println!("\n{}", session.feedback());
}

/// Returns false on end of input.
fn wait_for_enter<R: BufRead>(input: &mut R) -> bool {
    print!("(press Enter for the next page) ");
    io::stdout().flush().ok();
    let mut line = String::new();
    input.read_line(&mut line).unwrap_or(0) > 0
}

/// Reads a 1-based menu choice, re-prompting until it is in range.
/// Returns None on end of input.
fn read_choice<R: BufRead>(input: &mut R, option_count: usize) -> Option<usize> {
    loop {
        print!("Your answer [1-{}]: ", option_count);
        io::stdout().flush().ok();

        let mut line = String::new();
        if input.read_line(&mut line).unwrap_or(0) == 0 {
            return None;
        }
        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=option_count).contains(&choice) => return Some(choice - 1),
            _ => println!("Please enter a number between 1 and {}.", option_count),
        }
    }
}
