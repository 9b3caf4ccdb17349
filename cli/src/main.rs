use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use engine::{
    classify, content, load_battlers, simulate, Battle, Battler, DefenseSkill, Dice, Outcome,
    Phase, SimulationConfig, SpecialAttack, DEFAULT_TURN_LIMIT, DEFENSE_SKILLS, SPECIAL_ATTACKS,
};

#[derive(Subcommand)]
enum Cmd {
    /// Run one duel and print (or save) its battle report
    Simulate {
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Roster JSON with exactly two battlers (builtin roster if omitted)
        #[arg(long)]
        roster: Option<PathBuf>,
        /// Simulation number stamped into the report header
        #[arg(long, default_value_t = 1)]
        number: u32,
        /// Safety cap on turns
        #[arg(long, default_value_t = DEFAULT_TURN_LIMIT)]
        max_turns: u32,
        /// Directory to save the report as battle{number}.txt
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Print the status line after every turn
        #[arg(long, default_value_t = false)]
        show_turns: bool,
        /// Emit the raw result as JSON instead of the text report
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Monte Carlo: run many duels and tally the outcomes
    Batch {
        /// RNG base seed (trial i uses seed+i)
        #[arg(long, default_value_t = 12345)]
        seed: u64,
        /// Number of trials
        #[arg(long, default_value_t = 1000)]
        trials: u32,
        /// Roster JSON with exactly two battlers (builtin roster if omitted)
        #[arg(long)]
        roster: Option<PathBuf>,
        /// Safety cap on turns per trial
        #[arg(long, default_value_t = DEFAULT_TURN_LIMIT)]
        max_turns: u32,
    },
    /// List the battlers in a roster
    Roster {
        /// Roster JSON (builtin roster if omitted)
        #[arg(long)]
        roster: Option<PathBuf>,
    },
    /// List the special attack and defense skill catalogs
    Catalog,
    /// Roll the attack die a few times and show each classification
    Roll {
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Number of rolls
        #[arg(long, default_value_t = 5)]
        rolls: u32,
    },
}

#[derive(Parser)]
#[command(name = "arena-cli")]
#[command(about = "Auto-battle duel simulator")]
struct Cli {
    /// Show per-turn engine tracing
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

fn load_roster(path: Option<PathBuf>) -> anyhow::Result<Vec<Battler>> {
    match path {
        Some(path) => load_battlers(&path),
        None => content::builtin_battlers(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.cmd {
        Cmd::Simulate {
            seed,
            roster,
            number,
            max_turns,
            out_dir,
            show_turns,
            json,
        } => {
            let battlers = load_roster(roster)?;
            let mut battle = Battle::with_turn_limit(battlers, max_turns)?;
            let mut dice = Dice::from_seed(seed);
            battle.start();
            while battle.phase() == Phase::InProgress {
                battle.tick(&mut dice);
                if show_turns {
                    println!("{}", battle.status_line());
                }
            }
            let result = battle
                .result()
                .context("battle ended without a result")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }
            let report = engine::render(battle.battlers(), &result, number);
            match out_dir {
                Some(dir) => {
                    let path = dir.join(format!("battle{}.txt", number));
                    fs::write(&path, &report)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("saved {}", path.display());
                }
                None => print!("{}", report),
            }
        }
        Cmd::Batch {
            seed,
            trials,
            roster,
            max_turns,
        } => {
            let battlers = load_roster(roster)?;
            let mut wins = [0u32; 2];
            let mut draws = 0u32;
            let mut inconclusive = 0u32;
            for trial in 0..trials {
                let cfg = SimulationConfig {
                    seed: seed + u64::from(trial),
                    turn_limit: max_turns,
                    simulation: trial + 1,
                };
                let sim = simulate(battlers.clone(), &cfg)?;
                match sim.outcome {
                    Outcome::Winner(index) => wins[index] += 1,
                    Outcome::Draw => draws += 1,
                    Outcome::Inconclusive => inconclusive += 1,
                }
            }
            println!(
                "{} trials: {} wins {}, {} wins {}, draws {}, inconclusive {}",
                trials, battlers[0].name, wins[0], battlers[1].name, wins[1], draws, inconclusive
            );
        }
        Cmd::Roster { roster } => {
            let battlers = load_roster(roster)?;
            for battler in &battlers {
                println!(
                    "{} (LV {})  HP {}  ATK {}  crit x{}",
                    battler.name, battler.level, battler.hp, battler.attack, battler.crit_rate
                );
            }
        }
        Cmd::Catalog => {
            println!("Special attacks:");
            for special in &SPECIAL_ATTACKS {
                println!("  {}", describe_special(special));
            }
            println!("Defense skills:");
            for skill in &DEFENSE_SKILLS {
                println!("  {}", describe_defense(skill));
            }
        }
        Cmd::Roll { seed, rolls } => {
            let mut dice = Dice::from_seed(seed);
            for _ in 0..rolls {
                let roll = dice.d10();
                println!("{} => {}", roll, classify(roll).label());
            }
        }
    }
    Ok(())
}

fn describe_special(special: &SpecialAttack) -> String {
    match special {
        SpecialAttack::BaseFraction { name, fraction } => {
            format!("{}: attack x{}", name, fraction)
        }
        SpecialAttack::RangedMultiplier { name, low, high } => {
            format!("{}: attack x{}..{}", name, low, high)
        }
        SpecialAttack::SelfDamage {
            name,
            self_fraction,
            opponent_multiplier,
        } => format!(
            "{}: attack x{} to the opponent, x{} to self",
            name, opponent_multiplier, self_fraction
        ),
        SpecialAttack::Redirect { name, effect } => format!("{}: {}", name, effect),
    }
}

fn describe_defense(skill: &DefenseSkill) -> String {
    match skill {
        DefenseSkill::DamageReduction { name, factor } => {
            format!("{}: incoming damage x{}", name, factor)
        }
        DefenseSkill::Heal { name, low, high } => format!("{}: heal {}..{}", name, low, high),
        DefenseSkill::Redirect { name, effect } => format!("{}: {}", name, effect),
    }
}
