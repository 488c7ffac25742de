use dugout_stats::fetch::StatsClient;
use dugout_vis::dashboard;
use dugout_vis::layout::DashLayout;
use dugout_vis::page::Page;

use crate::cli::GenerateArgs;
use crate::cli::PathExt;
use crate::error::CliError;

pub(crate) fn generate(args: GenerateArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;

    println!(
        "dugout fetches the {season} MLB season statistics and generates a dashboard in: `{path}`",
        season = args.season,
        path = output_path.display()
    );

    let client = StatsClient::new();
    let mut pages = Vec::new();

    for spec in dashboard::pages() {
        println!("fetching the {label} leaderboard", label = spec.nav_label);

        let table = dugout_stats::load(&client, args.season, spec.entity_kind)?;
        pages.push(Page::new(spec, table));
    }

    let dash = DashLayout::init(&output_path)?;
    dash.generate(&pages)?;

    println!(
        "The dashboard is ready: open `{index}` in a browser",
        index = dash.root_path().join("index.html").display()
    );

    Ok(())
}
