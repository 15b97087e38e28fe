// Native binary for Otcx - fetches one page of open listings and renders it.

use anyhow::{Context, Result};

use otcx::{
    config, indexer, mock,
    util_text::{format_amount, short_address},
    App, Toast,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (safe to ignore if not found)
    let _ = dotenvy::dotenv();
    env_logger::init();

    let cfg = config::load().context("Failed to load configuration")?;
    let mut app = App::new(&cfg);

    let offers = if cfg.mock {
        log::info!("[otcx] mock mode: generating {} synthetic offers", cfg.mock_count);
        mock::generate_mock_offers(cfg.mock_count)
    } else {
        match indexer::fetch_open_offers(
            app.graphql_url(),
            app.otc_contract(),
            app.page_offset(),
            app.page_size(),
            cfg.timeout_ms,
        )
        .await
        {
            Ok(offers) => offers,
            Err(e) => {
                // Degrade to an empty table; the failure is still surfaced
                log::error!("[otcx] fetch failed: {e:#}");
                app.show_toast(Toast::danger(format!("Could not load listings: {e}")));
                Vec::new()
            }
        }
    };
    app.set_offers(offers);

    render(&app);
    Ok(())
}

fn render(app: &App) {
    println!(
        "otcx | network: {} | contract: {} | endpoint: {}",
        app.network(),
        app.otc_contract(),
        app.graphql_url()
    );
    if let Some(at) = app.refreshed_at() {
        println!("snapshot taken {}", at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    println!();

    if app.offers().is_empty() {
        println!("No open listings.");
    } else {
        println!(
            "{:<14} {:<12} {:>16} {:<20} {:>16} {:<20} {:>6}",
            "ID", "MAKER", "OFFERS", "TOKEN", "WANTS", "TOKEN", "FEE%"
        );
        for offer in app.offers() {
            println!(
                "{:<14} {:<12} {:>16} {:<20} {:>16} {:<20} {:>6}",
                short_address(&offer.id),
                short_address(&offer.maker),
                format_amount(offer.offer_amount),
                offer.offer_token,
                format_amount(offer.take_amount),
                offer.take_token,
                format_amount(offer.fee),
            );
        }
        println!();
        println!(
            "{} listing(s), page offset {} (page size {})",
            app.offers().len(),
            app.page_offset(),
            app.page_size()
        );
    }

    for toast in app.active_toasts() {
        println!("[{:?}] {}", toast.kind, toast.message);
    }
}
