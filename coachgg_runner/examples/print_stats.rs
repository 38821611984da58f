use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
struct Args {
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let data = coachgg_runner::load_bundle_from_path(args.path)?;
    let stats = coachgg_report::aggregate(&data.matches, &data.counters);
    println!("username={}", data.profile.username);
    println!("total_matches={}", stats.total_matches);
    println!("win_rate_pct={:.1}", stats.win_rate_pct);
    for (game, g) in stats.per_game.iter() {
        println!("game={} wins={} losses={}", game, g.wins, g.losses);
    }
    Ok(())
}
