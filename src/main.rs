//! Politicômetro CLI
//!
//! Usage:
//!   politicometro                               # Interactive quiz (resumes saved progress)
//!   politicometro --answers "2,-1,,0,..."       # Scripted session, empty item = skip
//!   politicometro --result                      # Show the stored result
//!   politicometro --reset                       # Purge saved progress and results
//!   politicometro --result --json               # JSON output

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use politicometro::core::classifier;
use politicometro::core::{
    candidate_matches, load_result, parse_answer_list, parse_command, share_links, share_text,
    CandidateMatch, Command, DecorativeSpectrum, FileStorage, QuizSession, ShareLinks, Storage,
};
use politicometro::types::{AnswerValue, PositionLabel, ResultLookup, SessionState, StepOutput, STATEMENT_COUNT};
use politicometro::{DEFAULT_STORE_PATH, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "politicometro",
    version = VERSION,
    about = "Politicômetro BR - descubra sua posição política",
    long_about = "Politicômetro presents 30 statements, one at a time, rated on a\n\
                  5-point agreement scale. The summed score maps to one of 7\n\
                  positions from Esquerda Radical to Direita Conservadora.\n\n\
                  Progress is saved after every answer and can be resumed\n\
                  within one hour.\n\n\
                  Interactive commands:\n  \
                  1-5 or -2..+2   answer\n  \
                  n / p / s       next / previous / skip\n  \
                  ?  reset  q     help / restart / quit"
)]
struct Args {
    /// Run the interactive quiz (default when no other mode is given)
    #[arg(short, long, conflicts_with_all = ["answers", "result", "reset"])]
    interactive: bool,

    /// Answer every statement from a comma-separated list of -2..2 (empty = skip)
    #[arg(short, long, allow_hyphen_values = true)]
    answers: Option<String>,

    /// Show the stored result
    #[arg(short, long)]
    result: bool,

    /// Purge saved progress and results
    #[arg(long)]
    reset: bool,

    /// Resume saved progress without asking
    #[arg(long, conflicts_with = "fresh")]
    resume: bool,

    /// Ignore saved progress without asking
    #[arg(long)]
    fresh: bool,

    /// Storage file
    #[arg(long, env = "POLITICOMETRO_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    /// Public quiz URL to include in share text and links
    #[arg(long)]
    share_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show a status line after every step
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let mut storage = FileStorage::new(&args.store);

    if args.interactive {
        return run_interactive(storage, &args);
    }

    if args.reset {
        politicometro::core::reset(&mut storage)
            .with_context(|| format!("resetting {}", args.store.display()))?;
        println!("Teste reiniciado. Progresso e resultados apagados.");
        return Ok(());
    }

    if args.result {
        render_result(&load_result(&storage), &args)?;
        return Ok(());
    }

    if let Some(ref list) = args.answers {
        return run_scripted(list, storage, &args);
    }

    run_interactive(storage, &args)
}

/// Answer every statement from a list, then finalize
fn run_scripted(list: &str, storage: FileStorage, args: &Args) -> anyhow::Result<()> {
    let answers = parse_answer_list(list).map_err(|e| anyhow!("invalid --answers: {}", e))?;
    if answers.len() > STATEMENT_COUNT {
        bail!("invalid --answers: {} items for {} statements", answers.len(), STATEMENT_COUNT);
    }

    let mut session = QuizSession::new(storage);
    for answer in answers.iter().copied().chain(std::iter::repeat(None)).take(STATEMENT_COUNT) {
        let out = match answer {
            Some(value) => {
                session.record_answer(value);
                session.advance().map_err(|reason| anyhow!("{}", reason))?
            }
            None => session.skip(),
        };
        if args.verbose {
            print_step(&out, args);
        }
    }

    let record = session.finalize().map_err(|reason| anyhow!("{}", reason))?;
    render_result(&ResultLookup::Full(record), args)
}

/// Run the interactive quiz on stdin/stdout
fn run_interactive(storage: FileStorage, args: &Args) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut session = QuizSession::initialize(storage, Utc::now(), |answered| {
        if args.resume {
            return true;
        }
        if args.fresh {
            return false;
        }
        ask_yes_no(
            &mut lines,
            &format!("Encontramos um teste com {} respostas. Deseja continuar?", answered),
        )
    });

    print_header(args.no_color);
    if session.was_resumed() {
        println!("{}", "Continuando de onde você parou.".cyan());
        println!();
    }

    loop {
        print_question(&session);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            println!("Progresso salvo. Respondidas: {}", session.answered_count());
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let out = match parse_command(&line) {
            Command::Answer(value) => {
                let recorded = session.record_answer(value);
                if session.is_last() {
                    recorded
                } else {
                    // auto-advance after an answer, except on the last statement
                    session.advance().unwrap_or(recorded)
                }
            }
            Command::Next => match session.advance() {
                Ok(out) => out,
                Err(reason) => {
                    println!("{}", format!("⚠ {}", reason.description()).yellow());
                    continue;
                }
            },
            Command::Prev => session.retreat(),
            Command::Skip => session.skip(),
            Command::Help => {
                print_help();
                continue;
            }
            Command::Reset => {
                if ask_yes_no(
                    &mut lines,
                    "Tem certeza que deseja reiniciar o teste? Todo o progresso será perdido.",
                ) {
                    session.reset()
                } else {
                    continue;
                }
            }
            Command::Quit => {
                println!("Progresso salvo. Respondidas: {}", session.answered_count());
                return Ok(());
            }
            Command::Invalid => {
                println!("{}", "⚠ Comando não reconhecido. Digite ? para ajuda.".yellow());
                continue;
            }
        };

        if args.verbose {
            print_step(&out, args);
        }

        if out.state == SessionState::Completed {
            let record = session.finalize().map_err(|reason| anyhow!("{}", reason))?;
            println!();
            return render_result(&ResultLookup::Full(record), args);
        }
    }
}

/// Ask a yes/no question; anything but an explicit yes is a no
fn ask_yes_no<B: BufRead>(lines: &mut io::Lines<B>, question: &str) -> bool {
    print!("{} [s/N] ", question);
    if io::stdout().flush().is_err() {
        return false;
    }
    match lines.next() {
        Some(Ok(answer)) => matches!(answer.trim().to_lowercase().as_str(), "s" | "sim" | "y" | "yes"),
        _ => false,
    }
}

/// Print header
fn print_header(no_color: bool) {
    let title = format!("Politicômetro BR v{}", VERSION);
    if no_color {
        println!("========================================");
        println!("  {}", title);
        println!("========================================");
    } else {
        println!("{}", "╔══════════════════════════════════════╗".bold());
        println!("{}", format!("║  {:<36}║", title).bold());
        println!("{}", "╚══════════════════════════════════════╝".bold());
    }
    println!();
}

fn print_help() {
    println!("Escolha uma opção de acordo com seu grau de concordância com a afirmação.");
    for answer in AnswerValue::ALL {
        println!("  {} ou {:+}  {} {}", answer.button(), answer.value(), answer.emoji(), answer.label());
    }
    println!("  n = próxima   p = anterior   s = pular (neutro)");
    println!("  reset = reiniciar   q = sair (o progresso fica salvo)");
}

/// Statement text, progress bar and answer buttons
fn print_question<S: Storage>(session: &QuizSession<S>) {
    let statement = session.current_statement();
    let progress = session.progress();

    println!();
    println!(
        "{} Pergunta {} de {}  (respondidas: {})",
        progress.bar(30).dimmed(),
        progress.statement_number,
        progress.total,
        progress.answered_count
    );
    println!("{}", statement.text.bold());

    let selected = session.current_answer();
    for answer in AnswerValue::ALL {
        let line = format!("  [{}] {} {}", answer.button(), answer.emoji(), answer.label());
        if selected == Some(answer) {
            println!("{}", line.green().bold());
        } else {
            println!("{}", line);
        }
    }

    let mut nav = Vec::new();
    if !session.is_first() {
        nav.push("p = anterior");
    }
    nav.push(if session.is_last() { "n = ver resultado" } else { "n = próxima" });
    nav.push("s = pular");
    println!("{}", nav.join("  ").dimmed());
}

fn print_step(out: &StepOutput, args: &Args) {
    if args.json {
        match serde_json::to_string(out) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("could not serialize step: {}", e),
        }
    } else if args.no_color {
        println!("{}", out.to_parseable_string());
    } else {
        println!("{}", out.to_terminal_string());
    }
}

/// Everything the result view shows, for `--json`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultView<'a> {
    total_score: i32,
    answered_count: Option<usize>,
    position: PositionLabel,
    description: &'static str,
    emoji: &'static str,
    color: &'static str,
    /// Random decoration, not derived from the answers
    spectrum: DecorativeSpectrum,
    candidates: [CandidateMatch; 2],
    share_text: &'a str,
    share_links: &'a ShareLinks,
}

/// Render a stored or freshly computed result
fn render_result(lookup: &ResultLookup, args: &Args) -> anyhow::Result<()> {
    let (Some(total_score), Some(position)) = (lookup.total_score(), lookup.position()) else {
        if args.json {
            println!("{}", serde_json::json!({ "result": null }));
        } else {
            println!("😕 {}", "Nenhum resultado encontrado".bold());
            println!("Parece que você ainda não fez o teste.");
            println!("Execute `politicometro` para fazer o teste agora.");
        }
        return Ok(());
    };

    let answered_count = match lookup {
        ResultLookup::Full(record) => Some(record.answered_count),
        _ => None,
    };
    let spectrum = DecorativeSpectrum::generate(total_score, &mut rand::thread_rng());
    let text = share_text(position, total_score, args.share_url.as_deref());
    let links = share_links(&text, args.share_url.as_deref());

    if args.json {
        let view = ResultView {
            total_score,
            answered_count,
            position,
            description: classifier::describe(position),
            emoji: position.emoji(),
            color: position.color_hex(),
            spectrum,
            candidates: candidate_matches(position),
            share_text: &text,
            share_links: &links,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let badge = format!(" {} {} ", position.emoji(), position.label());
    if args.no_color {
        println!("[{}]", badge.trim());
    } else {
        println!("{}", badge.on_color(position.color()).white().bold());
    }
    println!("{}", classifier::describe(position));
    println!();
    match answered_count {
        Some(answered) => println!("Pontuação: {} ({} respostas)", total_score, answered),
        None => println!("Pontuação: {}", total_score),
    }

    println!();
    println!("{}", "Espectros (ilustrativo, exceto Esquerda/Direita)".dimmed());
    for (axis, percent) in spectrum.axes() {
        let (left, right) = axis.poles();
        let filled = (percent / 5.0).round() as usize;
        println!(
            "  {:<12} {:>3.0}% [{}{}] {:>3.0}% {:<12} {}",
            left,
            100.0 - percent,
            "=".repeat(filled.min(20)),
            " ".repeat(20 - filled.min(20)),
            percent,
            right,
            axis.marker(percent)
        );
    }

    println!();
    println!("{}", "Perfil (ilustrativo)".dimmed());
    for (label, value) in spectrum.radar() {
        println!("  {:<12} {:>3.0}", label, value);
    }

    println!();
    println!("{}", "Candidatos compatíveis".bold());
    for candidate in candidate_matches(position) {
        println!(
            "  {} {} ({}) - {}% de compatibilidade",
            candidate.emoji, candidate.name, candidate.party, candidate.match_percent
        );
    }

    println!();
    println!("{}", "Compartilhe".bold());
    println!("{}", text);
    println!("  WhatsApp: {}", links.whatsapp);
    if let Some(ref facebook) = links.facebook {
        println!("  Facebook: {}", facebook);
    }
    println!("  Twitter:  {}", links.twitter);
    Ok(())
}
