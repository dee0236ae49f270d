use clap::Parser;
use colored::Colorize;
use duopoly::gameplay::Player;
use duopoly::gameplay::Sharing;
use duopoly::nash::Selector;
use duopoly::sim::Duel;
use duopoly::sim::Report;
use duopoly::slots::Ledger;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// number of rounds to play
    #[arg(long, default_value_t = 10)]
    rounds: usize,
    /// equilibrium selection policy: first, last, or welfare
    #[arg(long, default_value = "welfare")]
    policy: String,
    /// seed the randomized cost-weighted sharing rule
    #[arg(long)]
    seed: Option<u64>,
    /// emit the report as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    duopoly::log();
    let args = Args::parse();
    let p1 = Player::new("alice", Ledger::from([("T1", 1.), ("T2", 2.), ("T3", 3.)]));
    let p2 = Player::new("bob", Ledger::from([("T1", 2.), ("T2", 3.), ("T3", 1.)]));
    let mut duel =
        Duel::new(p1, p2)?.selector(Box::<dyn Selector>::try_from(args.policy.as_str())?);
    if let Some(seed) = args.seed {
        duel = duel.sharing(Sharing::weighted(seed));
    }
    if !args.json {
        println!("{}", duel.p1());
        println!("{}", duel.p2());
        println!("{}", duel.matrix());
    }
    if let Err(e) = duel.play(args.rounds) {
        match e.is_degenerate() {
            true => log::error!("{}", e),
            false => return Err(e.into()),
        }
    }
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&Report::from(&duel))?),
        false => {
            print!("{}", duel.history());
            println!("{}", duel.p1());
            println!("{}", duel.p2());
            let frontier = duel.frontier();
            for equilibrium in duel.equilibria() {
                match frontier.contains(&equilibrium.payoff()) {
                    true => println!("{} {}", equilibrium, "pareto".green()),
                    false => println!("{}", equilibrium),
                }
            }
            println!("{:<10} {:>8}", "ceiling", duel.ceiling());
        }
    }
    Ok(())
}
