use super::wire::{HeroOdds, OpponentOdds};

/// Text shown on a seat before any odds are known.
pub const UNKNOWN_ODDS: &str = "Win: –";

/// Fraction in [0, 1] as a percentage with two decimals, e.g. `0.65` → `"65.00"`.
pub fn percent(fraction: f64) -> String {
    format!("{:.2}", fraction * 100.0)
}

pub fn hero_text(odds: &HeroOdds) -> String {
    format!("Win {}% · Tie {}%", percent(odds.win), percent(odds.tie))
}

pub fn opponent_text(odds: &OpponentOdds) -> String {
    format!("Win {}%", percent(odds.win))
}

/// Integer with `,` between thousands groups: `20000` → `"20,000"`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_have_two_decimals() {
        assert_eq!(percent(0.65), "65.00");
        assert_eq!(percent(0.02), "2.00");
        assert_eq!(percent(1.0), "100.00");
        assert_eq!(percent(0.0), "0.00");
        assert_eq!(percent(0.12345), "12.35");
    }

    #[test]
    fn seat_texts() {
        assert_eq!(hero_text(&HeroOdds { win: 0.65, tie: 0.02 }), "Win 65.00% · Tie 2.00%");
        assert_eq!(opponent_text(&OpponentOdds { win: 0.33, tie: None }), "Win 33.00%");
    }

    #[test]
    fn thousands_groups() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(20000), "20,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }
}
