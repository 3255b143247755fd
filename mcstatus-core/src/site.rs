//! Site content: canonical URLs, sitemap listing, example servers and FAQ.

use std::time::Duration;

use serde::Serialize;

use crate::types::{Edition, LookupRequest};

/// Public site the canonical URLs point at.
pub const SITE_BASE_URL: &str = "https://mcstatus.io";

/// Static pages, in sitemap order.
const STATIC_ROUTES: &[&str] = &["/", "/about", "/docs/v1", "/docs/v2"];

/// A well-known server linked from the home page and the sitemap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExampleServer {
    pub edition: Edition,
    pub address: &'static str,
}

const EXAMPLE_SERVERS: &[ExampleServer] = &[
    ExampleServer {
        edition: Edition::Java,
        address: "play.hypixel.net",
    },
    ExampleServer {
        edition: Edition::Java,
        address: "mc.hypixel.net",
    },
    ExampleServer {
        edition: Edition::Java,
        address: "play.cubecraft.net",
    },
    ExampleServer {
        edition: Edition::Java,
        address: "play.purpleprison.net",
    },
    ExampleServer {
        edition: Edition::Java,
        address: "mc.advancius.net",
    },
    ExampleServer {
        edition: Edition::Java,
        address: "demo.mcstatus.io",
    },
    ExampleServer {
        edition: Edition::Bedrock,
        address: "play.nethergames.org",
    },
    ExampleServer {
        edition: Edition::Bedrock,
        address: "geo.hivebedrock.network",
    },
    ExampleServer {
        edition: Edition::Bedrock,
        address: "play.galaxite.net",
    },
    ExampleServer {
        edition: Edition::Bedrock,
        address: "demo.mcstatus.io",
    },
];

pub fn example_servers() -> &'static [ExampleServer] {
    EXAMPLE_SERVERS
}

/// `/status/{edition}/{address}` for a request.
pub fn status_path(request: &LookupRequest) -> String {
    format!(
        "/status/{}/{}",
        request.edition().path_segment(),
        request.address()
    )
}

/// Absolute canonical URL of a site path.
pub fn canonical_url(path: &str) -> String {
    if path.starts_with('/') {
        format!("{SITE_BASE_URL}{path}")
    } else {
        format!("{SITE_BASE_URL}/{path}")
    }
}

/// Every canonical path of the site: static pages, then example status pages.
pub fn sitemap_entries() -> Vec<String> {
    STATIC_ROUTES
        .iter()
        .map(|r| (*r).to_string())
        .chain(
            EXAMPLE_SERVERS
                .iter()
                .map(|s| format!("/status/{}/{}", s.edition.path_segment(), s.address)),
        )
        .collect()
}

/// Plain-text sitemap, one path per line.
pub fn render_sitemap() -> String {
    sitemap_entries().join("\n")
}

/// One question of the About page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub title: &'static str,
    pub text: &'static str,
}

const FAQ: &[FaqEntry] = &[
    FaqEntry {
        title: "How do I check the status of a server?",
        text: "Type or paste the address of the server into the address box. The address is in the form of host:port, but the port is optional and defaults to 25565 for Java Edition servers and 19132 for Bedrock Edition servers.",
    },
    FaqEntry {
        title: "How do I hide the status of my server?",
        text: "Status is enabled by default in the server.properties file of your server. To disable it, set the enable-status property to false. This also prevents Minecraft clients from seeing your MOTD in the in-game multiplayer menu.",
    },
    FaqEntry {
        title: "Does this service use query?",
        text: "No. Query slows down every status retrieval and provides little more than the data already sent by the status protocol.",
    },
    FaqEntry {
        title: "How do I see all players on the server?",
        text: "Minecraft limits the player names sent by the server to 12 players, picked at random. Most public servers disable this entirely or replace the names with custom information about the server.",
    },
    FaqEntry {
        title: "Why don't you show the ping to the server?",
        text: "Latency is only measured from the location of the status service, which says nothing about your own connection to the server.",
    },
    FaqEntry {
        title: "Why is there not a new-line character in some MOTDs?",
        text: "Some servers use character overflow to push text onto the second line. Minecraft uses a non-monospaced font, so where the line actually wraps can only be known inside the game.",
    },
    FaqEntry {
        title: "I made a library, how do I add it to the API docs?",
        text: "You can open a GitHub issue at https://github.com/mcstatus-io/website/issues/new with details about your library and it will get added to the website for you.",
    },
    FaqEntry {
        title: "Is this service open-source?",
        text: "Yes. The source code is available on the mcstatus-io GitHub organization for anybody to review or host themselves.",
    },
];

pub fn faq_entries() -> &'static [FaqEntry] {
    FAQ
}

/// Human-readable duration in whole units, largest first.
///
/// `252` becomes `"4 minutes, 12 seconds"`; zero is `"0 seconds"`.
pub fn humanize_seconds(secs: u64) -> String {
    const UNITS: &[(u64, &str)] = &[
        (86_400, "day"),
        (3_600, "hour"),
        (60, "minute"),
        (1, "second"),
    ];

    if secs == 0 {
        return "0 seconds".to_string();
    }

    let mut rest = secs;
    let mut parts = Vec::new();
    for (size, name) in UNITS {
        let count = rest / size;
        rest %= size;
        if count > 0 {
            let plural = if count == 1 { "" } else { "s" };
            parts.push(format!("{count} {name}{plural}"));
        }
    }
    parts.join(", ")
}

/// [`humanize_seconds`] for a [`Duration`], rounded to the nearest second.
pub fn humanize_duration(duration: Duration) -> String {
    let secs = duration.as_secs() + u64::from(duration.subsec_millis() >= 500);
    humanize_seconds(secs)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::address::validate_address;

    #[test]
    fn sitemap_starts_with_static_pages() {
        let entries = sitemap_entries();
        assert_eq!(&entries[..4], &["/", "/about", "/docs/v1", "/docs/v2"]);
        assert_eq!(entries.len(), 4 + example_servers().len());
        assert!(entries.contains(&"/status/java/play.hypixel.net".to_string()));
        assert!(entries.contains(&"/status/bedrock/geo.hivebedrock.network".to_string()));
    }

    #[test]
    fn rendered_sitemap_is_newline_separated() {
        let text = render_sitemap();
        assert!(text.starts_with("/\n/about\n"));
        assert!(!text.ends_with('\n'));
        assert_eq!(text.lines().count(), sitemap_entries().len());
    }

    #[test]
    fn example_servers_are_valid_addresses() {
        for server in example_servers() {
            assert!(validate_address(server.address).valid, "{}", server.address);
        }
    }

    #[test]
    fn status_path_and_canonical_url() {
        let request = LookupRequest::new(Edition::Bedrock, "Play.NetherGames.org").unwrap();
        let path = status_path(&request);
        assert_eq!(path, "/status/bedrock/play.nethergames.org");
        assert_eq!(
            canonical_url(&path),
            "https://mcstatus.io/status/bedrock/play.nethergames.org"
        );
        assert_eq!(canonical_url("about"), "https://mcstatus.io/about");
    }

    #[test]
    fn humanizes_durations() {
        assert_eq!(humanize_seconds(0), "0 seconds");
        assert_eq!(humanize_seconds(1), "1 second");
        assert_eq!(humanize_seconds(252), "4 minutes, 12 seconds");
        assert_eq!(humanize_seconds(3_600), "1 hour");
        assert_eq!(humanize_seconds(90_061), "1 day, 1 hour, 1 minute, 1 second");
        assert_eq!(humanize_duration(Duration::from_millis(59_600)), "1 minute");
    }

    #[test]
    fn faq_is_not_empty() {
        assert!(faq_entries()
            .iter()
            .all(|f| !f.title.is_empty() && !f.text.is_empty()));
    }

    #[test]
    fn faq_follows_about_page_order() {
        let titles: Vec<&str> = faq_entries().iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), 8);
        assert_eq!(titles[6], "I made a library, how do I add it to the API docs?");
        assert_eq!(titles[7], "Is this service open-source?");
        assert!(faq_entries()[6].text.contains("/issues/new"));
    }
}
