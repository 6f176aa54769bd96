use std::{num::NonZeroU32, sync::OnceLock, time::Duration};

use governor::{
    clock::{QuantaClock, QuantaInstant},
    middleware::NoOpMiddleware,
    state::InMemoryState,
};
use reqwest::{Client, Error as RequestError};
use tracing::{instrument, Level};
use url::Url;

static MENU_BASE: &str = "https://menu.dining.ucla.edu/Menus";

pub fn make_client() -> Client {
    Client::builder()
        .gzip(true)
        .build()
        .expect("client creation should succeed")
}

/// Fetches the menu page for one hall. Without a date the url ends in a bare
/// slash and the server resolves it to today's menu.
pub async fn menu_page(
    client: &Client,
    hall: &str,
    date: Option<chrono::NaiveDate>,
) -> Result<String, RequestError> {
    let url = match date {
        Some(date) => format!("{MENU_BASE}/{hall}/{}", date.format("%Y-%m-%d")),
        None => format!("{MENU_BASE}/{hall}/"),
    };
    let response = client.get(url).send().await?;
    response.text().await
}

static RATE_LIMIT: u32 = 20;
static DELAY_JITTER: u64 = 2;
static RATE_LIMITER: OnceLock<
    governor::RateLimiter<
        governor::state::NotKeyed,
        InMemoryState,
        QuantaClock,
        NoOpMiddleware<QuantaInstant>,
    >,
> = OnceLock::new();

/// Fetches one recipe's nutrition detail page. A menu lists tens of recipes,
/// so these requests pass through a shared rate limiter.
#[instrument(skip(client, url), fields(url = %url), level = Level::TRACE)]
pub async fn recipe_page(client: &Client, url: &Url) -> Result<String, RequestError> {
    let rate_limiter = RATE_LIMITER.get_or_init(|| {
        governor::RateLimiter::direct(governor::Quota::per_second(
            NonZeroU32::new(RATE_LIMIT).unwrap(),
        ))
    });
    let retry_jitter = governor::Jitter::new(Duration::ZERO, Duration::from_secs(DELAY_JITTER));
    rate_limiter.until_ready_with_jitter(retry_jitter).await;
    let res = client.get(url.clone()).send().await?;
    let start = std::time::Instant::now();
    let text = res.text().await?;
    log::trace!("got recipe page body in \t {:?}", start.elapsed());
    Ok(text)
}
