//! Shop detail extraction
//!
//! Fetches one shop detail page and pulls out the contact and company
//! metadata via CSS selectors. Extraction runs over the fetched HTML
//! string, so a broken page never aborts the crawl; the record simply
//! keeps its empty fields.

use futures::stream::{self, StreamExt};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use tracing::{info, warn};

use crate::core::Result;
use crate::scraper::listing::ShopSummary;

/// One exported CSV row
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShopRecord {
    pub title: String,
    pub url: String,
    pub address: String,
    pub house_number: String,
    pub zip: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub email: String,
    pub director_decision_maker: String,
    pub tax_id: String,
    pub tag_category: String,
    pub products: String,
}

/// Street, house number, zip, city, country split out of an address line
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub street: String,
    pub house_number: String,
    pub zip: String,
    pub city: String,
    pub country: String,
}

// Matches lines like "Musterstraße 1, 12345 Musterstadt, Deutschland";
// the trailing country segment is optional.
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s+(\d+\w?),\s*(\d{5})\s+(.+?)(?:,\s*(.*))?$").unwrap()
});

/// Split an address line into its parts.
///
/// Unparseable text lands in `street` unchanged with the other fields
/// empty.
pub fn parse_address(text: &str) -> AddressParts {
    if let Some(captures) = ADDRESS_RE.captures(text.trim()) {
        let group = |i: usize| {
            captures
                .get(i)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default()
        };
        return AddressParts {
            street: group(1),
            house_number: group(2),
            zip: group(3),
            city: group(4),
            country: group(5),
        };
    }

    AddressParts {
        street: text.trim().to_string(),
        ..AddressParts::default()
    }
}

/// Fetch a shop detail page and extract its record.
///
/// Fetch failures are logged and produce a record with only the listing
/// fields filled.
pub async fn fetch_shop_details(
    client: &reqwest::Client,
    shop: &ShopSummary,
    max_products: usize,
) -> ShopRecord {
    let mut record = ShopRecord {
        title: shop.title.clone(),
        url: shop.url.clone(),
        ..ShopRecord::default()
    };

    match fetch_page(client, &shop.url).await {
        Ok(html) => extract_details(&html, max_products, &mut record),
        Err(e) => warn!(url = %shop.url, error = %e, "Shop detail fetch failed"),
    }

    record
}

/// Fetch details for every shop one at a time, preserving listing order
pub async fn fetch_all_details(
    client: &reqwest::Client,
    shops: &[ShopSummary],
    max_products: usize,
) -> Vec<ShopRecord> {
    let total = shops.len();
    stream::iter(shops.iter().enumerate())
        .then(|(position, shop)| async move {
            info!(
                position = position + 1,
                total,
                title = %shop.title,
                "Fetching shop details"
            );
            fetch_shop_details(client, shop, max_products).await
        })
        .collect()
        .await
}

async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String> {
    let html = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(html)
}

/// Fill a record from a detail page's HTML
pub(crate) fn extract_details(html: &str, max_products: usize, record: &mut ShopRecord) {
    let document = Html::parse_document(html);

    let address_selector = Selector::parse(".shop-details__address").unwrap();
    if let Some(element) = document.select(&address_selector).next() {
        let parts = parse_address(&element_text(&element));
        record.address = parts.street;
        record.house_number = parts.house_number;
        record.zip = parts.zip;
        record.city = parts.city;
        record.country = parts.country;
    }

    let phone_selector = Selector::parse(r#"a[href^="tel:"]"#).unwrap();
    if let Some(element) = document.select(&phone_selector).next() {
        record.phone = element_text(&element);
    }

    let email_selector = Selector::parse(r#"a[href^="mailto:"]"#).unwrap();
    if let Some(element) = document.select(&email_selector).next() {
        record.email = element_text(&element);
    }

    let info_selector =
        Selector::parse(".shop-details__info, .shop-details__info-list li").unwrap();
    for element in document.select(&info_selector) {
        let text = element_text(&element);
        if ["Geschäftsführer", "Inhaber", "Entscheider"]
            .iter()
            .any(|k| text.contains(k))
        {
            record.director_decision_maker = text.clone();
        }
        if ["USt-IdNr", "Steuernummer", "Tax"].iter().any(|k| text.contains(k)) {
            record.tax_id = text.clone();
        }
        if ["Kategorie", "Branche"].iter().any(|k| text.contains(k)) {
            record.tag_category = text.clone();
        }
    }

    let products_selector =
        Selector::parse(".shop-details__products-list li, .shop-details__products-list a").unwrap();
    let products: Vec<String> = document
        .select(&products_selector)
        .take(max_products)
        .map(|element| element_text(&element))
        .collect();
    record.products = products.join("; ");
}

fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
