//! TOML writer for routewatch.toml files
//!
//! Produces the starter configuration written by `routewatch init`.

/// Starter configuration: two users sharing part of a route
#[must_use]
pub fn sample_config(feed_path: &str) -> String {
    format!(
        r#"# routewatch configuration

[rules]
# Alert when the degree of saturation is at or above this value
severity_threshold = 1.0
# Ignore readings older than this
staleness_hours = 8

[feed]
path = "{feed_path}"
poll_interval_secs = 10

[registry]
# Used for locations without a description below
fallback = "Node{{id}} St"

[[location]]
id = 1
description = "Intersection of First & Whatsit"

[[location]]
id = 2
description = "Credability St. Bus Stop"

[[location]]
id = 3
description = "Intersection of 3rd and Main"

[[location]]
id = 4
description = "Intersection of Fourth and Forth"

[[user]]
name = "Alice"
locations = [1, 2, 3, 4, 5]

[[user]]
name = "Bob"
locations = [4, 5, 6, 7, 8, 9, 10]
"#
    )
}
