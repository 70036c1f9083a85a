//! Share links: the minimal game description `(seed, cards, round)` carried
//! in a URL query so another device can rebuild the same shuffles.
//!
//! `?s=<seed>&c=<cards concatenated>&r=<round>`, with `r` left out for
//! round 1.

use url::form_urlencoded;
use url::Url;

use crate::cards::{join_cards, split_cards, Card};
use crate::errors::LinkError;
use crate::game::{GameSetup, GameState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub seed: String,
    pub ordered_cards: Vec<Card>,
    pub round: u32,
}

impl ShareLink {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            seed: state.seed().to_string(),
            ordered_cards: state.ordered_cards().to_vec(),
            round: state.round(),
        }
    }

    /// `base` with its query replaced by the link parameters.
    ///
    /// ```
    /// use cardroom_engine::cards::split_cards;
    /// use cardroom_engine::link::ShareLink;
    /// use url::Url;
    ///
    /// let base = Url::parse("https://cards.example/").unwrap();
    /// let link = ShareLink { seed: "ab12".into(), ordered_cards: split_cards("xyz"), round: 1 };
    /// assert_eq!(link.to_url(&base).as_str(), "https://cards.example/?s=ab12&c=xyz");
    /// ```
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        {
            let mut query = url.query_pairs_mut();
            query.clear();
            query.append_pair("s", &self.seed);
            query.append_pair("c", &join_cards(&self.ordered_cards));
            if self.round != 1 {
                query.append_pair("r", &self.round.to_string());
            }
        }
        url
    }

    /// Human-readable invitation embedding the link.
    pub fn invitation(&self, base: &Url) -> String {
        let mut text = format!(
            "Room: {}\nCards: {}\n",
            self.seed,
            join_cards(&self.ordered_cards)
        );
        if self.round > 1 {
            text.push_str(&format!("Round: {}\n", self.round));
        }
        text.push('\n');
        text.push_str(self.to_url(base).as_str());
        text
    }

    /// Accepts a full URL or a bare query string starting with `?`. A
    /// trailing `#fragment` is not part of the query.
    pub fn parse(input: &str) -> Result<Self, LinkError> {
        let input = input.trim();
        match input.strip_prefix('?') {
            Some(query) => Self::from_query(query.split('#').next().unwrap_or_default()),
            None => Self::from_url(&Url::parse(input)?),
        }
    }

    pub fn from_url(url: &Url) -> Result<Self, LinkError> {
        Self::from_query(url.query().unwrap_or_default())
    }

    /// Decodes `s`, `c` and `r`; the first occurrence of each wins.
    pub fn from_query(query: &str) -> Result<Self, LinkError> {
        let mut seed = None;
        let mut cards = None;
        let mut round = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "s" => &mut seed,
                "c" => &mut cards,
                "r" => &mut round,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        let seed = seed.ok_or(LinkError::MissingSeed)?;
        let cards = cards.ok_or(LinkError::MissingCards)?;
        Ok(Self {
            seed,
            ordered_cards: split_cards(&cards),
            round: parse_round(round.as_deref()),
        })
    }

    /// Whether receiving this link while `current` is active should start
    /// its game: a different seed or card list, or a later round. Revisiting
    /// your own link (same or earlier round) keeps the current game.
    pub fn should_replace(&self, current: &GameState) -> bool {
        self.seed != current.seed()
            || self.round > current.round()
            || join_cards(&self.ordered_cards) != join_cards(current.ordered_cards())
    }

    pub fn into_setup(self) -> GameSetup {
        GameSetup {
            seed: Some(self.seed),
            ordered_cards: Some(self.ordered_cards),
            round: Some(self.round),
            player: None,
        }
    }
}

/// Leading decimal digits after optional whitespace and `+`; anything that
/// does not yield a positive round means round 1.
fn parse_round(raw: Option<&str>) -> u32 {
    raw.and_then(|r| {
        let r = r.trim_start();
        let digits: String = r
            .strip_prefix('+')
            .unwrap_or(r)
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse::<u32>().ok()
    })
    .filter(|&r| r >= 1)
    .unwrap_or(1)
}
