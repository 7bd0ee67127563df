//! Client for the Scryfall card-catalog REST API.

use {
    std::time::Duration,
    log::{
        error,
        warn
    },
    serde::Deserialize,
    crate::{
        Error,
        IntoResultExt as _
    }
};

/// Connection settings for the card-catalog service.
///
/// The defaults point at the production Scryfall API; tests inject a
/// `base_url` on the loopback interface instead.
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    pub accept: String
}

impl Default for ClientConfig {
    fn default() -> ClientConfig {
        ClientConfig {
            base_url: "https://api.scryfall.com/cards".into(),
            user_agent: concat!("SetFinder/", env!("CARGO_PKG_VERSION")).into(),
            accept: "application/json".into()
        }
    }
}

/// A card as returned by the exact-name lookup.
#[derive(Deserialize)]
pub struct CardRecord {
    pub name: String,
    pub oracle_id: Option<String>
}

/// One printing from the search endpoint's "unique prints" view.
#[derive(Deserialize)]
pub struct PrintingRecord {
    #[serde(rename = "set")]
    pub set_code: Option<String>,
    pub set_name: Option<String>
}

#[derive(Deserialize)]
struct SearchPage {
    #[serde(default)]
    data: Vec<PrintingRecord>
}

pub struct Client {
    config: ClientConfig,
    http: reqwest::blocking::Client
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Client, Error> {
        let http = reqwest::blocking::ClientBuilder::new()
            .timeout(Some(Duration::from_secs(60)))
            .build()?;
        Ok(Client { config, http })
    }

    /// Requests the given path (which must include the initial `/`) relative to the configured base URL.
    fn get(&self, path: &str) -> Result<reqwest::blocking::Response, Error> {
        Ok(
            self.http
                .get(&format!("{}{}", self.config.base_url, path))
                .header("User-Agent", self.config.user_agent.as_str())
                .header("Accept", self.config.accept.as_str())
                .send()?
        )
    }

    /// Looks up a card by its exact name.
    ///
    /// A 404 from the service means no such card and comes back as `Ok(None)`;
    /// any other failure is an `Err`.
    pub fn card_by_name(&self, card_name: &str) -> Result<Option<CardRecord>, Error> {
        let response = self.get(&format!("/named?exact={}", urlencoding::encode(card_name)))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            warn!("no card named {:?}", card_name);
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Error::Status(response.status()));
        }
        let body = response.text().annotate("card_by_name")?;
        Ok(Some(serde_json::from_str(&body)?))
    }

    /// Fetches every printing of the card with the given oracle id, one entry
    /// per set. Failures are logged and yield an empty list.
    pub fn printings(&self, oracle_id: &str) -> Vec<PrintingRecord> {
        match self.try_printings(oracle_id) {
            Ok(printings) => printings,
            Err(e) => {
                error!("failed to fetch printings for {}: {:?}", oracle_id, e);
                Vec::default()
            }
        }
    }

    fn try_printings(&self, oracle_id: &str) -> Result<Vec<PrintingRecord>, Error> {
        let response = self.get(&format!("/search?q=oracleid:{}&unique=prints", oracle_id))?;
        if !response.status().is_success() {
            return Err(Error::Status(response.status()));
        }
        let body = response.text().annotate("printings")?;
        let page = serde_json::from_str::<SearchPage>(&body)?;
        Ok(page.data)
    }
}
