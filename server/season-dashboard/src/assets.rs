//! Static image lookups: country flags for the calendar, track maps for the
//! next race. Unknown keys fall back to a default image.

pub const DEFAULT_FLAG: &str = "default.png";
pub const DEFAULT_TRACK: &str = "default.svg";

static FLAGS: &[(&str, &str)] = &[
  ("Australia", "Australia.png"),
  ("Austria", "Austria.png"),
  ("Azerbaijan", "Azerbaijan.png"),
  ("Bahrain", "Bahrain.png"),
  ("Belgium", "Belgium.png"),
  ("Brazil", "Brazil.png"),
  ("UK", "UK.png"),
  ("Canada", "Canada.png"),
  ("China", "China.png"),
  ("Netherlands", "Dutch.png"),
  ("Finland", "Finnish.png"),
  ("France", "France.png"),
  ("Germany", "Germany.png"),
  ("Hungary", "Hungary.png"),
  ("Italy", "Italy.png"),
  ("Japan", "Japan.png"),
  ("Mexico", "Mexico.png"),
  ("Monaco", "Monaco.png"),
  ("Poland", "Polish.png"),
  ("Portugal", "Portugal.png"),
  ("Qatar", "Qatar.png"),
  ("Russia", "Russia.png"),
  ("Saudi Arabia", "Saudi Arabia.png"),
  ("Singapore", "Singapore.png"),
  ("Spain", "Spain.png"),
  ("Switzerland", "Swiss.png"),
  ("Thailand", "Thai.png"),
  ("Turkey", "Turkey.png"),
  ("UAE", "UAE.png"),
  ("USA", "USA.png"),
  ("United States", "USA.png"),
];

static TRACKS: &[(&str, &str)] = &[
  ("Yas Marina Circuit", "abudhabi.svg"),
  ("Albert Park Grand Prix Circuit", "australia.svg"),
  ("Red Bull Ring", "austria.svg"),
  ("Baku City Circuit", "azerbaijan.svg"),
  ("Bahrain International Circuit", "bahrain.svg"),
  ("Circuit Gilles Villeneuve", "canada.svg"),
  ("Shanghai International Circuit", "china.svg"),
  ("Hungaroring", "hungary.svg"),
  ("Autodromo Internazionale Enzo e Dino Ferrari", "imola.svg"),
  ("Suzuka Circuit", "japan.svg"),
  ("Las Vegas Strip Street Circuit", "las_vegas.svg"),
  ("Autodromo Hermanos Rodriguez", "mexico.svg"),
  ("Miami International Autodrome", "miami.svg"),
  ("Circuit de Monaco", "monaco.svg"),
  ("Autodromo Nazionale Monza", "monza.svg"),
  ("Circuit Zandvoort", "netherlands.svg"),
  ("Circuito de Spa-Francorchamps", "spa.svg"),
  ("Circuit de Barcelona-Catalunya", "spain.svg"),
  ("Silverstone Circuit", "silverstone.svg"),
  ("Marina Bay Street Circuit", "singapore.svg"),
  ("Losail International Circuit", "qatar.svg"),
  ("Autodromo Jose Carlos Pace", "brazil.svg"),
  ("Circuit of the Americas", "usa.svg"),
  ("Jeddah Street Circuit", "saudi_arabia.svg"),
  ("Portimao", "portugal.svg"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
  table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Flag image file for a country name as Ergast spells it.
pub fn flag_for_country(country: &str) -> &'static str {
  lookup(FLAGS, country).unwrap_or(DEFAULT_FLAG)
}

/// Track map file for a circuit name as Ergast spells it.
pub fn track_for_circuit(circuit: &str) -> &'static str {
  lookup(TRACKS, circuit).unwrap_or(DEFAULT_TRACK)
}

pub fn flag_url(country: &str) -> String {
  format!("/assets/flags/{}", flag_for_country(country))
}

pub fn track_url(circuit: &str) -> String {
  format!("/assets/tracks/{}", track_for_circuit(circuit))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_keys_resolve() {
    assert_eq!(flag_for_country("Netherlands"), "Dutch.png");
    assert_eq!(flag_for_country("United States"), "USA.png");
    assert_eq!(track_for_circuit("Circuit de Monaco"), "monaco.svg");
  }

  #[test]
  fn unknown_keys_fall_back() {
    assert_eq!(flag_for_country("Atlantis"), DEFAULT_FLAG);
    assert_eq!(track_for_circuit("Nürburgring"), DEFAULT_TRACK);
    assert_eq!(track_url("Nowhere Ring"), "/assets/tracks/default.svg");
  }

  #[test]
  fn flag_keys_are_unique() {
    for (i, (a, _)) in FLAGS.iter().enumerate() {
      assert!(FLAGS[i + 1..].iter().all(|(b, _)| a != b), "duplicate flag key {}", a);
    }
  }
}
