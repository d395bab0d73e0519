use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Trial count sent when the user does not ask for another.
pub const DEFAULT_TRIALS: u32 = 20_000;

/// Body of `POST /api/calc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsRequest {
    pub n_players: usize,
    pub hero: Vec<Card>,
    pub board: Vec<Card>,
    /// One entry per opponent; an entry may be empty when its cards are unknown.
    pub opponents: Vec<Vec<Card>>,
    pub trials: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeroOdds {
    pub win: f64,
    pub tie: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpponentOdds {
    pub win: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tie: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub trials: u64,
}

/// Successful reply from the odds engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsResponse {
    pub hero: HeroOdds,
    #[serde(default)]
    pub opponents: Vec<OpponentOdds>,
    pub meta: Meta,
}

/// Body the engine sends alongside a non-success status.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_field_names_match_endpoint() {
        let req = OddsRequest {
            n_players: 2,
            hero: vec!["Ah".parse().unwrap(), "Ks".parse().unwrap()],
            board: vec![],
            opponents: vec![vec!["Qh".parse().unwrap(), "Qd".parse().unwrap()]],
            trials: DEFAULT_TRIALS,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(
            v,
            json!({
                "n_players": 2,
                "hero": ["Ah", "Ks"],
                "board": [],
                "opponents": [["Qh", "Qd"]],
                "trials": 20000
            })
        );
    }

    #[test]
    fn response_tolerates_opponent_ties() {
        let body = r#"{"hero":{"win":0.5,"tie":0.1},"opponents":[{"win":0.4,"tie":0.1}],"meta":{"trials":100}}"#;
        let r: OddsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(r.opponents[0].tie, Some(0.1));
        assert_eq!(r.meta.trials, 100);
    }
}
