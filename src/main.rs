use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use team_balancer::{
    api::MapApiClient,
    args::Args,
    model::{
        balance_teams, pick_map,
        roster::Roster,
        structures::{game::Game, team::Team}
    }
};
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&args.log_level))
        .init();

    let roster = roster(&args);
    info!("Balancing {} players for {:?}", roster.len(), Game::Valorant);

    // 1. Split the roster into two rating-even teams
    let split = balance_teams(&roster.to_players());
    print_team("Red", &split.red);
    print_team("Blue", &split.blue);
    println!("Rating gap: {:.0}", split.rating_gap());

    // 2. Suggest a map from the catalog's rotation pool
    let client = MapApiClient::new(&args.api_root);
    match client.fetch_maps_or_log().await {
        Some(maps) => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng()
            };

            match pick_map(&mut rng, &maps) {
                Some(map) => println!("Suggested map: {}", map.splash),
                None => warn!("Map catalog has no maps in rotation")
            }
        }
        None => warn!("Continuing without a map suggestion")
    }
}

fn roster(args: &Args) -> Roster {
    match &args.roster {
        Some(path) => Roster::from_json_file(path).expect("Expected a readable JSON roster file"),
        None => Roster::default()
    }
}

fn print_team(label: &str, team: &Team) {
    println!("{} team ({:.0}):", label, team.total_rating());
    for player in &team.players {
        println!("  {}", player.name);
    }
}
