//! Shop listing pagination
//!
//! The directory serves letter pages `A` through `Z`; letter `A` is the
//! base URL itself. Each page lists shops as anchors inside the shop-list
//! container.

use scraper::{Html, Selector};
use tracing::{info, warn};
use url::Url;

use crate::core::{PlugiloError, Result};

/// A shop as it appears on a listing page
#[derive(Debug, Clone)]
pub struct ShopSummary {
    /// Display name from the anchor title or text
    pub title: String,
    /// Absolute detail page URL
    pub url: String,
}

/// Collect every shop across the letter pages.
///
/// A letter page that fails to fetch is logged and skipped; the remaining
/// pages are still collected.
pub async fn index_shops(client: &reqwest::Client, base_url: &str) -> Result<Vec<ShopSummary>> {
    let base = Url::parse(base_url)
        .map_err(|e| PlugiloError::scrape(format!("Invalid listing base URL {}: {}", base_url, e)))?;

    let mut shops = Vec::new();
    for letter in 'A'..='Z' {
        let page_url = if letter == 'A' {
            base_url.to_string()
        } else {
            format!("{}/{}", base_url, letter)
        };

        match fetch_listing_page(client, &base, &page_url).await {
            Ok(mut page_shops) => {
                info!(%letter, count = page_shops.len(), "Indexed listing page");
                shops.append(&mut page_shops);
            }
            Err(e) => warn!(%page_url, error = %e, "Listing page fetch failed"),
        }
    }

    info!(count = shops.len(), "Indexed shops");
    Ok(shops)
}

async fn fetch_listing_page(
    client: &reqwest::Client,
    base: &Url,
    page_url: &str,
) -> Result<Vec<ShopSummary>> {
    let html = client
        .get(page_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(extract_shop_links(base, &html))
}

/// Pull shop anchors out of a listing page
pub(crate) fn extract_shop_links(base: &Url, html: &str) -> Vec<ShopSummary> {
    let document = Html::parse_document(html);
    let link_selector =
        Selector::parse(".shop-list .shop-list-entry a.shop-list-entry__link").unwrap();

    let mut shops = Vec::new();
    for element in document.select(&link_selector) {
        let title = element
            .value()
            .attr("title")
            .map(str::to_string)
            .unwrap_or_else(|| element.text().collect::<String>())
            .trim()
            .to_string();

        if let Some(href) = element.value().attr("href") {
            if let Ok(resolved) = base.join(href) {
                shops.push(ShopSummary {
                    title,
                    url: resolved.to_string(),
                });
            }
        }
    }
    shops
}
