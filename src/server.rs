use anyhow::Result;
use tracing::info;
use warp::Filter;

use crate::facts;
use crate::render;

/// Serves the HTML report at `/`. Facts are collected fresh on every
/// request; nothing is cached between hits.
pub async fn run_server(port: u16) -> Result<()> {
    let report = warp::get()
        .and(warp::path::end())
        .map(|| warp::reply::html(render::render_html(&facts::collect_current())));

    info!(port, "serving host report");
    warp::serve(report.with(warp::log("hostfetch")))
        .run(([0, 0, 0, 0], port))
        .await;

    Ok(())
}
