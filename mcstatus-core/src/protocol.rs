//! Protocol-version metadata (minecraft-data `protocolVersions.json`).

use serde::{Deserialize, Serialize};

/// One entry of `protocolVersions.json`.
///
/// Entries are ordered newest first, and several game versions may share a
/// protocol number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolVersion {
    /// Game version, e.g. `"1.20.4"` or `"24w03a"`.
    pub minecraft_version: String,
    /// Protocol number the server reports.
    pub version: i64,
    /// Version family, e.g. `"1.20"`.
    #[serde(default)]
    pub major_version: Option<String>,
    /// `"release"` or `"snapshot"`; absent on older entries.
    #[serde(default)]
    pub release_type: Option<String>,
    #[serde(default)]
    pub uses_netty: Option<bool>,
}

impl ProtocolVersion {
    pub fn is_release(&self) -> bool {
        self.release_type.as_deref().is_none_or(|t| t == "release")
    }
}

/// Resolve a protocol number to a display name.
///
/// Prefers release versions; when several releases share the number the
/// result is a range, oldest to newest (`"1.20.3 - 1.20.4"`).
pub fn protocol_name(versions: &[ProtocolVersion], protocol: i64) -> Option<String> {
    let matching: Vec<&ProtocolVersion> = versions
        .iter()
        .filter(|v| v.version == protocol)
        .collect();
    if matching.is_empty() {
        return None;
    }

    let releases: Vec<&&ProtocolVersion> = matching.iter().filter(|v| v.is_release()).collect();
    let names: Vec<&str> = if releases.is_empty() {
        matching.iter().map(|v| v.minecraft_version.as_str()).collect()
    } else {
        releases.iter().map(|v| v.minecraft_version.as_str()).collect()
    };

    // The file lists newest first.
    match (names.last(), names.first()) {
        (Some(oldest), Some(newest)) if oldest != newest => Some(format!("{oldest} - {newest}")),
        (_, Some(only)) => Some((*only).to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"minecraftVersion":"24w03a","version":1073741982,"dataVersion":3804,"usesNetty":true,"majorVersion":"1.20","releaseType":"snapshot"},
        {"minecraftVersion":"1.20.4","version":765,"dataVersion":3700,"usesNetty":true,"majorVersion":"1.20","releaseType":"release"},
        {"minecraftVersion":"1.20.3","version":765,"dataVersion":3698,"usesNetty":true,"majorVersion":"1.20","releaseType":"release"},
        {"minecraftVersion":"1.20.3-rc1","version":765,"usesNetty":true,"majorVersion":"1.20","releaseType":"snapshot"},
        {"minecraftVersion":"1.8.9","version":47,"usesNetty":true,"majorVersion":"1.8"}
    ]"#;

    fn sample() -> Vec<ProtocolVersion> {
        serde_json::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn parses_minecraft_data_layout() {
        let versions = sample();
        assert_eq!(versions.len(), 5);
        assert_eq!(versions[1].minecraft_version, "1.20.4");
        assert_eq!(versions[1].major_version.as_deref(), Some("1.20"));
        assert!(versions[4].release_type.is_none());
    }

    #[test]
    fn shared_protocol_becomes_release_range() {
        assert_eq!(
            protocol_name(&sample(), 765).as_deref(),
            Some("1.20.3 - 1.20.4")
        );
    }

    #[test]
    fn entries_without_release_type_count_as_release() {
        assert_eq!(protocol_name(&sample(), 47).as_deref(), Some("1.8.9"));
    }

    #[test]
    fn snapshot_only_protocol_uses_snapshot_name() {
        assert_eq!(protocol_name(&sample(), 1_073_741_982).as_deref(), Some("24w03a"));
    }

    #[test]
    fn unknown_protocol_is_none() {
        assert!(protocol_name(&sample(), 1).is_none());
    }
}
