// SPDX-License-Identifier: MPL-2.0
//! Headless gallery driver: loads the collection, optionally rescans,
//! opens the requested screen and prints it.

use smart_gallery::app::{config, paths, view, Flags, Gallery, Message, Runtime, Screen};
use smart_gallery::domain::media::DayKey;
use smart_gallery::infrastructure::http::HttpMediaSource;
use std::process::ExitCode;

const HELP: &str = "\
smart-gallery

USAGE:
  smart-gallery [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Directory holding settings.toml
  --server <URL>       Media server, overrides [server] base_url
  --scan <DIR>         Ask the server to scan DIR before rendering
  --rescan             Scan the configured [scan] directory
  --album <NAME>       Show one smart album
  --date <YYYY-MM-DD>  Show one day
  --albums             Show the album overview
  --map                Show geotagged items
  --pages <N>          Load N more timeline pages
  --expand <DAY>       Expand one day bucket on the timeline
  -h, --help           Print this help
";

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let album: Option<String> = args.opt_value_from_str("--album")?;
    let date: Option<String> = args.opt_value_from_str("--date")?;
    let overview = args.contains("--albums");
    let map = args.contains("--map");

    let route = match (album, date) {
        (Some(name), _) => Some(format!("/album/{name}")),
        (None, Some(day)) => Some(format!("/date/{day}")),
        (None, None) if overview => Some("/albums".to_string()),
        (None, None) => map.then(|| "/map".to_string()),
    };

    Ok(Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        server: args.opt_value_from_str("--server")?,
        scan: args.opt_value_from_str("--scan")?,
        route,
        pages: args.opt_value_from_str("--pages")?.unwrap_or(0),
        expand: args.opt_value_from_str("--expand")?,
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }
    let rescan = args.contains("--rescan");
    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };
    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    let (mut config, _warning) = config::load();
    if let Some(server) = flags.server.clone() {
        config.server.base_url = Some(server);
    }

    let source = match HttpMediaSource::new(config.base_url(), config.timeout()) {
        Ok(source) => source,
        Err(err) => {
            log::error!("cannot build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("using media server {}", config.base_url());

    let mut runtime = Runtime::new(Gallery::from_config(&config), source);
    runtime.boot();
    runtime.settle().await;

    let directory = flags.scan.clone().or_else(|| {
        rescan
            .then(|| config.scan_directory().map(str::to_string))
            .flatten()
    });
    if let Some(directory) = directory {
        runtime.dispatch(Message::ScanRequested(directory));
        runtime.settle().await;
    }

    if let Some(route) = flags.route.as_deref() {
        runtime.dispatch(Message::Navigate(Screen::parse(route)));
        runtime.settle().await;
    }

    for _ in 0..flags.pages {
        let Some(token) = runtime.gallery().sentinel().token() else {
            break;
        };
        runtime.dispatch(Message::SentinelVisible(token));
    }

    if let Some(day) = flags.expand.as_deref().and_then(DayKey::parse) {
        runtime.dispatch(Message::ToggleDate(day));
    }

    print!("{}", view::render_text(runtime.gallery()));

    if runtime.gallery().store().is_loaded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
