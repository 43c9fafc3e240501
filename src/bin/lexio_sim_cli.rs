//! Симулятор Lexio: боты играют сессии через тот же API, что и клиенты.
//!
//! Бот всегда выкладывает самую слабую допустимую комбинацию, а если её нет,
//! пасует.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, warn};

use lexio_engine::api::{ApiError, Command, CommandResponse};
use lexio_engine::domain::{GameRules, PlayerIndex};
use lexio_engine::engine::SessionManager;
use lexio_engine::eval::weakest_legal_play;
use lexio_engine::infra::{init_tracing, DeterministicRng, SharedSessionManager};

#[derive(Parser)]
#[command(name = "lexio_sim_cli")]
#[command(about = "Bot-driven Lexio sessions for smoke and balance testing")]
struct Args {
    /// Number of players per session (3-5)
    #[arg(short, long, default_value_t = 4)]
    players: usize,

    /// Number of sessions to simulate
    #[arg(short, long, default_value_t = 1)]
    sessions: u32,

    /// Base seed; session k uses seed + k
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Path to a JSON file with game rules (missing fields take defaults)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Stop a session after this many rounds even if nobody went bankrupt
    #[arg(long, default_value_t = 500)]
    max_rounds: u32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Default)]
struct SimStats {
    sessions_finished: u32,
    sessions_capped: u32,
    rounds: u64,
    plays: u64,
    passes: u64,
    cycle_resets: u64,
    wins_by_player: Vec<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let rules = match args.rules.as_deref() {
        Some(path) => {
            let loaded = fs::read_to_string(path)
                .map_err(|e| e.to_string())
                .and_then(|json| GameRules::from_json_str(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(rules) => rules,
                Err(e) => {
                    eprintln!("bad --rules {}: {e}", path.display());
                    return ExitCode::FAILURE;
                }
            }
        }
        None => GameRules::default(),
    };

    let mut stats = SimStats {
        wins_by_player: vec![0; args.players],
        ..SimStats::default()
    };

    for k in 0..args.sessions {
        let rng = DeterministicRng::from_seed(args.seed.wrapping_add(u64::from(k)));
        let shared = SharedSessionManager::new(SessionManager::new(rules.clone(), rng));

        if let Err(e) = run_session(&shared, &args, k + 1, &mut stats) {
            eprintln!("session {} failed: {e}", k + 1);
            return ExitCode::FAILURE;
        }
    }

    println!();
    println!("=========== SIMULATION SUMMARY ===========");
    println!("Sessions finished:   {}", stats.sessions_finished);
    println!("Sessions capped:     {}", stats.sessions_capped);
    println!("Rounds played:       {}", stats.rounds);
    println!("Plays / passes:      {} / {}", stats.plays, stats.passes);
    println!("Cycle resets:        {}", stats.cycle_resets);
    if stats.rounds > 0 {
        println!(
            "Avg rounds/session:  {:.1}",
            stats.rounds as f64 / f64::from(args.sessions.max(1))
        );
    }
    for (i, wins) in stats.wins_by_player.iter().enumerate() {
        println!("P{} round wins:       {}", i + 1, wins);
    }
    println!("==========================================");

    ExitCode::SUCCESS
}

fn run_session(
    shared: &SharedSessionManager<DeterministicRng>,
    args: &Args,
    number: u32,
    stats: &mut SimStats,
) -> Result<(), ApiError> {
    shared.execute(Command::start(args.players))?;
    info!(session = number, players = args.players, "simulation session started");

    let mut rounds_in_session = 0u32;

    loop {
        let command = next_bot_command(shared)?;
        let was_play = matches!(command, Command::PlayTiles(_));

        match shared.execute(command)? {
            CommandResponse::State(snapshot) => {
                if was_play {
                    stats.plays += 1;
                } else {
                    stats.passes += 1;
                    if snapshot.leading.is_none() {
                        stats.cycle_resets += 1;
                    }
                }
            }
            CommandResponse::Ignored => {
                warn!(session = number, "bot issued a repeated pass");
            }
            CommandResponse::RoundFinished { result, .. } => {
                stats.plays += 1;
                stats.rounds += 1;
                rounds_in_session += 1;
                record_win(stats, result.winner);
                println!(
                    "[S{number}] round {} won by P{}: {}",
                    result.round,
                    result.winner + 1,
                    result.payment_lines.join(", ")
                );

                if rounds_in_session >= args.max_rounds {
                    stats.sessions_capped += 1;
                    warn!(session = number, rounds = rounds_in_session, "round cap reached");
                    shared.execute(Command::ResetSession)?;
                    return Ok(());
                }
            }
            CommandResponse::GameOver {
                result, ranking, ..
            } => {
                stats.plays += 1;
                stats.rounds += 1;
                stats.sessions_finished += 1;
                record_win(stats, result.winner);
                println!(
                    "[S{number}] game over after round {}: {} | bankrupt: {}",
                    result.round,
                    ranking.ranking_lines.join(", "),
                    ranking.bankrupt_lines.join(", ")
                );
                shared.execute(Command::ResetSession)?;
                return Ok(());
            }
            CommandResponse::SessionStarted(_) | CommandResponse::Reset => {
                return Err(ApiError::Internal("unexpected response".into()));
            }
        }
    }
}

fn record_win(stats: &mut SimStats, winner: PlayerIndex) {
    if let Some(slot) = stats.wins_by_player.get_mut(winner) {
        *slot += 1;
    }
}

/// Ход бота для текущего игрока: самая слабая допустимая комбинация или пас.
fn next_bot_command(
    shared: &SharedSessionManager<DeterministicRng>,
) -> Result<Command, ApiError> {
    shared.with(|manager| {
        let session = manager.session().ok_or(ApiError::NoActiveSession)?;
        let deal = &session.deal;
        let player = deal.current_player;
        let hand = deal
            .hand(player)
            .ok_or_else(|| ApiError::Internal(format!("no hand for P{}", player + 1)))?;

        let command = match weakest_legal_play(hand, deal.leading.as_ref()) {
            Some(play) => {
                debug!(player, combo = %play.combination, "bot plays");
                Command::play(player, play.tiles)
            }
            None => {
                debug!(player, "bot passes");
                Command::pass(player)
            }
        };
        Ok(command)
    })
}
