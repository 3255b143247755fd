//! Public types shared by the validator, the API client and the lookup state machine.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::address::parse_address;
use crate::error::StatusResult;

/// Minecraft edition, selecting both the request path and the response schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    /// Java Edition (TCP, Server List Ping).
    #[default]
    Java,
    /// Bedrock Edition (UDP, RakNet unconnected ping).
    Bedrock,
}

impl Edition {
    /// Path segment used by the status API (`java` / `bedrock`).
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Bedrock => "bedrock",
        }
    }

    /// Directory used by the protocol-version metadata source (`pc` / `bedrock`).
    pub fn protocol_data_segment(self) -> &'static str {
        match self {
            Self::Java => "pc",
            Self::Bedrock => "bedrock",
        }
    }

    /// Port the game client connects to when the address has none.
    pub fn default_port(self) -> u16 {
        match self {
            Self::Java => 25565,
            Self::Bedrock => 19132,
        }
    }

    /// Display name, e.g. for page titles.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Java => "Java Edition",
            Self::Bedrock => "Bedrock Edition",
        }
    }

    /// Edition selected by the "Bedrock server" checkbox.
    pub fn from_bedrock_flag(bedrock: bool) -> Self {
        if bedrock {
            Self::Bedrock
        } else {
            Self::Java
        }
    }

    /// The other edition.
    pub fn toggle(self) -> Self {
        match self {
            Self::Java => Self::Bedrock,
            Self::Bedrock => Self::Java,
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for Edition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" | "pc" => Ok(Self::Java),
            "bedrock" => Ok(Self::Bedrock),
            _ => Err(format!("Unsupported edition: {s}")),
        }
    }
}

/// A syntactically valid `host[:port]` specifier.
///
/// Only [`parse_address`] constructs this type, so holding one means the
/// input fully matched `label(.label)*(:port)?`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressSpec {
    pub(crate) host: String,
    pub(crate) port: Option<u32>,
}

impl AddressSpec {
    /// Host part as typed (case preserved).
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit port, if any.
    ///
    /// Up to five digits are accepted without a range check, so values above
    /// 65535 can show up here.
    pub fn port(&self) -> Option<u32> {
        self.port
    }

    /// Explicit port, or the edition's default port.
    pub fn effective_port(&self, edition: Edition) -> u32 {
        self.port.unwrap_or_else(|| u32::from(edition.default_port()))
    }

    /// Canonical lower-cased `host[:port]`.
    pub fn canonical(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl fmt::Display for AddressSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{port}", self.host),
            None => f.write_str(&self.host),
        }
    }
}

impl FromStr for AddressSpec {
    type Err = crate::error::StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

/// An accepted submission: edition plus canonical address.
///
/// Immutable once built; the only way in is through validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LookupRequest {
    edition: Edition,
    address: String,
}

impl LookupRequest {
    /// Validate `input` and build a request for `edition`.
    pub fn new(edition: Edition, input: &str) -> StatusResult<Self> {
        let spec = parse_address(input)?;
        Ok(Self::from_spec(edition, &spec))
    }

    /// Build a request from an already validated address.
    pub fn from_spec(edition: Edition, spec: &AddressSpec) -> Self {
        Self {
            edition,
            address: spec.canonical(),
        }
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    /// Canonical, lower-cased `host[:port]`.
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for LookupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.edition, self.address)
    }
}

/// Cache signal read from the status API response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatus {
    /// Whether the API answered from its own cache instead of a fresh ping.
    pub hit: bool,
    /// Remaining lifetime of the cached entry, when advertised.
    pub remaining: Option<Duration>,
}

/// Successful (HTTP 200) status API response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// Parsed JSON body, kept verbatim.
    pub payload: Value,
    /// Cache signal from the response headers.
    pub cache: CacheStatus,
}

impl StatusResponse {
    /// Typed view over the payload for rendering.
    pub fn summary(&self) -> StatusSummary {
        StatusSummary::from_payload(&self.payload)
    }
}

/// A loaded mod reported by a Forge/NeoForge server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModInfo {
    pub id: String,
    pub version: String,
}

/// Lenient typed view over a status payload.
///
/// Every field is optional: servers omit plenty of them and the API schema
/// differs per edition. Building a summary never fails.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub online: bool,
    pub host: Option<String>,
    pub port: Option<u64>,
    /// MOTD with formatting codes stripped.
    pub motd_clean: Option<String>,
    pub version_name: Option<String>,
    pub protocol: Option<i64>,
    pub players_online: Option<u64>,
    pub players_max: Option<u64>,
    /// Sampled player names (servers send at most 12, picked at random).
    pub player_names: Vec<String>,
    /// Base64 `data:` URL of the server icon.
    pub favicon: Option<String>,
    pub mod_loader: Option<String>,
    pub mods: Vec<ModInfo>,
    /// Whether the address was resolved through an SRV record.
    pub srv_record: bool,
    /// Bedrock only.
    pub gamemode: Option<String>,
    /// Bedrock only (`MCPE` / `MCEE`).
    pub edition_name: Option<String>,
}

impl StatusSummary {
    /// Extract the fields the status page shows.
    ///
    /// Understands the v2 layout (`version.name_clean`, `players.list`, `icon`,
    /// `mods`) and falls back to the v1 layout nested under `response`
    /// (`version.name`, `players.sample`, `favicon`, `mod_info`).
    pub fn from_payload(payload: &Value) -> Self {
        let body = payload.get("response").unwrap_or(payload);

        let version_name = first_str(body, &["/version/name_clean", "/version/name"]);
        let protocol = body.pointer("/version/protocol").and_then(Value::as_i64);

        let player_names = body
            .pointer("/players/list")
            .or_else(|| body.pointer("/players/sample"))
            .and_then(Value::as_array)
            .map(|players| {
                players
                    .iter()
                    .filter_map(|p| first_str(p, &["/name_clean", "/name"]))
                    .collect()
            })
            .unwrap_or_default();

        let mod_list = body
            .get("mods")
            .or_else(|| body.pointer("/mod_info/mods"))
            .and_then(Value::as_array);
        let mods = mod_list
            .map(|mods| {
                mods.iter()
                    .filter_map(|m| {
                        Some(ModInfo {
                            id: first_str(m, &["/name", "/id", "/modid"])?,
                            version: first_str(m, &["/version"]).unwrap_or_default(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let srv_record = body.get("srv_record").is_some_and(|v| match v {
            Value::Bool(b) => *b,
            Value::Null => false,
            _ => true,
        });

        Self {
            online: payload
                .get("online")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            host: first_str(payload, &["/host"]),
            port: payload.get("port").and_then(Value::as_u64),
            motd_clean: first_str(body, &["/motd/clean"]).map(|m| collapse_spaces(&m)),
            version_name,
            protocol,
            players_online: body.pointer("/players/online").and_then(Value::as_u64),
            players_max: body.pointer("/players/max").and_then(Value::as_u64),
            player_names,
            favicon: first_str(body, &["/icon", "/favicon"]),
            mod_loader: first_str(body, &["/mod_info/type", "/software"]),
            mods,
            srv_record,
            gamemode: first_str(body, &["/gamemode"]),
            edition_name: first_str(body, &["/edition"]),
        }
    }

    /// `online / max`, when both counts are known.
    pub fn players_label(&self) -> Option<String> {
        match (self.players_online, self.players_max) {
            (Some(online), Some(max)) => Some(format!("{online} / {max}")),
            _ => None,
        }
    }
}

fn first_str(value: &Value, pointers: &[&str]) -> Option<String> {
    pointers
        .iter()
        .filter_map(|p| value.pointer(p))
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Collapse runs of spaces and trim, the way MOTDs are shown in descriptions.
fn collapse_spaces(s: &str) -> String {
    s.lines()
        .map(|line| line.split(' ').filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn edition_segments() {
        assert_eq!(Edition::Java.path_segment(), "java");
        assert_eq!(Edition::Bedrock.path_segment(), "bedrock");
        assert_eq!(Edition::Java.protocol_data_segment(), "pc");
        assert_eq!(Edition::Bedrock.protocol_data_segment(), "bedrock");
        assert_eq!(Edition::from_bedrock_flag(true), Edition::Bedrock);
        assert_eq!(Edition::Java.toggle(), Edition::Bedrock);
        assert_eq!("PC".parse::<Edition>().unwrap(), Edition::Java);
        assert!("pocket".parse::<Edition>().is_err());
    }

    #[test]
    fn request_is_lower_cased_canonical() {
        let req = LookupRequest::new(Edition::Java, "Play.Hypixel.NET:25565").unwrap();
        assert_eq!(req.address(), "play.hypixel.net:25565");
        assert_eq!(req.edition(), Edition::Java);
        assert_eq!(req.to_string(), "java/play.hypixel.net:25565");
    }

    #[test]
    fn request_rejects_invalid_input() {
        let err = LookupRequest::new(Edition::Bedrock, "play..hypixel.net").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn effective_port_defaults_per_edition() {
        let spec: AddressSpec = "example.org".parse().unwrap();
        assert_eq!(spec.effective_port(Edition::Java), 25565);
        assert_eq!(spec.effective_port(Edition::Bedrock), 19132);
        let spec: AddressSpec = "example.org:99999".parse().unwrap();
        assert_eq!(spec.effective_port(Edition::Java), 99999);
    }

    #[test]
    fn summary_from_java_v2_payload() {
        let payload = json!({
            "online": true,
            "host": "demo.mcstatus.io",
            "port": 25565,
            "srv_record": { "host": "demo.mcstatus.io", "port": 25565 },
            "version": { "name_raw": "§a1.20.4", "name_clean": "1.20.4", "protocol": 765 },
            "players": {
                "online": 2, "max": 20,
                "list": [
                    { "uuid": "a", "name_raw": "§bAlex", "name_clean": "Alex" },
                    { "uuid": "b", "name_raw": "Steve", "name_clean": "Steve" }
                ]
            },
            "motd": { "raw": "§aHello", "clean": "  Hello    world  ", "html": "" },
            "icon": "data:image/png;base64,AAAA",
            "mods": [ { "name": "forge", "version": "47.2.0" } ]
        });
        let s = StatusSummary::from_payload(&payload);
        assert!(s.online);
        assert_eq!(s.host.as_deref(), Some("demo.mcstatus.io"));
        assert_eq!(s.port, Some(25565));
        assert_eq!(s.version_name.as_deref(), Some("1.20.4"));
        assert_eq!(s.protocol, Some(765));
        assert_eq!(s.players_label().as_deref(), Some("2 / 20"));
        assert_eq!(s.player_names, vec!["Alex", "Steve"]);
        assert_eq!(s.motd_clean.as_deref(), Some("Hello world"));
        assert!(s.favicon.is_some());
        assert!(s.srv_record);
        assert_eq!(
            s.mods,
            vec![ModInfo {
                id: "forge".into(),
                version: "47.2.0".into()
            }]
        );
    }

    #[test]
    fn summary_from_v1_nested_payload() {
        let payload = json!({
            "online": true,
            "host": "play.example.net",
            "port": 25565,
            "response": {
                "version": { "name": "Paper 1.8.8", "protocol": 47 },
                "players": { "online": 1, "max": 10, "sample": [ { "name": "Notch" } ] },
                "motd": { "clean": "Welcome" },
                "favicon": "data:image/png;base64,BBBB",
                "srv_record": false,
                "mod_info": { "type": "FML", "mods": [ { "id": "mcp", "version": "9.19" } ] }
            }
        });
        let s = StatusSummary::from_payload(&payload);
        assert_eq!(s.version_name.as_deref(), Some("Paper 1.8.8"));
        assert_eq!(s.player_names, vec!["Notch"]);
        assert_eq!(s.mod_loader.as_deref(), Some("FML"));
        assert_eq!(s.mods.len(), 1);
        assert!(!s.srv_record);
    }

    #[test]
    fn summary_of_offline_bedrock_payload_is_sparse() {
        let payload = json!({ "online": false, "host": "geo.hivebedrock.network", "port": 19132 });
        let s = StatusSummary::from_payload(&payload);
        assert!(!s.online);
        assert!(s.players_label().is_none());
        assert!(s.player_names.is_empty());
        assert!(s.mods.is_empty());
    }
}
