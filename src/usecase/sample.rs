/// Demonstration network: 19 routes between 18 airports.
pub const SAMPLE_ROUTES: [(&str, &str); 19] = [
    ("DSM", "ORD"),
    ("ORD", "BGI"),
    ("BGI", "LGA"),
    ("JFK", "LGA"),
    ("HND", "JFK"),
    ("HND", "ICN"),
    ("ICN", "JFK"),
    ("EWR", "HND"),
    ("TLV", "DEL"),
    ("DEL", "DOH"),
    ("DEL", "CDG"),
    ("CDG", "BUD"),
    ("CDG", "SIN"),
    ("SIN", "CDG"),
    ("SAN", "EYW"),
    ("EYW", "LHR"),
    ("LHR", "SFO"),
    ("SFO", "SAN"),
    ("SFO", "DSM"),
];

pub fn sample_routes() -> Vec<(String, String)> {
    SAMPLE_ROUTES
        .iter()
        .map(|&(from, to)| (from.to_string(), to.to_string()))
        .collect()
}
