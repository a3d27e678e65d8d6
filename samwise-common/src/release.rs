//! Release descriptors and platform classification.
//!
//! The wire format is the repository host's `releases/latest` payload; only
//! the fields the download modal needs are kept.

use serde::{Deserialize, Serialize};

/// A tagged, published set of downloadable assets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDescriptor {
    #[serde(rename = "tag_name")]
    pub tag: String,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// A single build artifact attached to a release.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    #[serde(rename = "browser_download_url")]
    pub download_url: String,
    #[serde(rename = "size")]
    pub size_bytes: u64,
}

impl Asset {
    /// Size in mebibytes with one decimal, e.g. `"84.2 MB"`.
    pub fn size_label(&self) -> String {
        format!("{:.1} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

/// Download buckets shown in the modal, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    Windows,
    MacIntel,
    MacArm,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Windows,
        Platform::MacIntel,
        Platform::MacArm,
        Platform::Linux,
    ];

    /// Lowercase label, used for CSS classes and analytics.
    pub fn as_label(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacIntel => "mac-intel",
            Platform::MacArm => "mac-arm",
            Platform::Linux => "linux",
        }
    }

    /// Button caption.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacIntel => "Mac (Intel)",
            Platform::MacArm => "Mac (Arm)",
            Platform::Linux => "Linux",
        }
    }

    /// Whether an asset file name belongs to this bucket.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Platform::Windows => name.ends_with(".exe"),
            Platform::MacIntel => name.contains("x64.dmg"),
            Platform::MacArm => name.contains("aarch64.dmg"),
            Platform::Linux => name.ends_with(".deb") || name.ends_with(".rpm"),
        }
    }
}

/// Result of [`classify`]: at most one asset per platform.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlatformAssets {
    pub windows: Option<Asset>,
    pub mac_intel: Option<Asset>,
    pub mac_arm: Option<Asset>,
    pub linux: Option<Asset>,
}

impl PlatformAssets {
    pub fn get(&self, platform: Platform) -> Option<&Asset> {
        match platform {
            Platform::Windows => self.windows.as_ref(),
            Platform::MacIntel => self.mac_intel.as_ref(),
            Platform::MacArm => self.mac_arm.as_ref(),
            Platform::Linux => self.linux.as_ref(),
        }
    }

    fn slot_mut(&mut self, platform: Platform) -> &mut Option<Asset> {
        match platform {
            Platform::Windows => &mut self.windows,
            Platform::MacIntel => &mut self.mac_intel,
            Platform::MacArm => &mut self.mac_arm,
            Platform::Linux => &mut self.linux,
        }
    }

    pub fn is_empty(&self) -> bool {
        Platform::ALL.iter().all(|p| self.get(*p).is_none())
    }
}

/// Sort assets into platform buckets by file name.
///
/// Each bucket keeps the first matching asset in list order. Each asset lands
/// in at most one bucket (the first platform in [`Platform::ALL`] order that
/// matches it); assets matching nothing are dropped.
pub fn classify(assets: &[Asset]) -> PlatformAssets {
    let mut buckets = PlatformAssets::default();
    for asset in assets {
        let Some(platform) = Platform::ALL.into_iter().find(|p| p.matches(&asset.name)) else {
            continue;
        };
        let slot = buckets.slot_mut(platform);
        if slot.is_none() {
            *slot = Some(asset.clone());
        }
    }
    buckets
}

/// Star counter as shown on the GitHub button.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoInfo {
    pub stargazers_count: u64,
}

/// Group digits with commas: `12345` → `"12,345"`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
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
    use pretty_assertions::assert_eq;

    fn asset(name: &str) -> Asset {
        Asset {
            name: name.into(),
            download_url: format!("https://dl.example/{name}"),
            size_bytes: 1024 * 1024,
        }
    }

    #[test]
    fn classifies_the_usual_release_layout() {
        let assets = vec![
            asset("Samwise_0.3.0_x64-setup.exe"),
            asset("Samwise_0.3.0_x64.dmg"),
            asset("Samwise_0.3.0_aarch64.dmg"),
            asset("samwise_0.3.0_amd64.deb"),
            asset("latest.json"),
        ];
        let buckets = classify(&assets);

        assert_eq!(buckets.windows.unwrap().name, "Samwise_0.3.0_x64-setup.exe");
        assert_eq!(buckets.mac_intel.unwrap().name, "Samwise_0.3.0_x64.dmg");
        assert_eq!(buckets.mac_arm.unwrap().name, "Samwise_0.3.0_aarch64.dmg");
        assert_eq!(buckets.linux.unwrap().name, "samwise_0.3.0_amd64.deb");
    }

    #[test]
    fn first_match_wins_per_bucket() {
        let assets = vec![asset("samwise.rpm"), asset("samwise.deb")];
        let buckets = classify(&assets);
        assert_eq!(buckets.linux.unwrap().name, "samwise.rpm");
    }

    #[test]
    fn missing_buckets_stay_empty() {
        let buckets = classify(&[asset("Samwise_aarch64.dmg"), asset("checksums.txt")]);
        assert!(buckets.windows.is_none());
        assert!(buckets.mac_intel.is_none());
        assert!(buckets.linux.is_none());
        assert!(buckets.get(Platform::MacArm).is_some());
        assert!(!buckets.is_empty());
        assert!(classify(&[]).is_empty());
    }

    #[test]
    fn every_asset_lands_in_at_most_one_bucket() {
        let assets = vec![
            asset("a.exe"),
            asset("b_x64.dmg"),
            asset("c_aarch64.dmg"),
            asset("d.deb"),
            asset("e.rpm"),
            asset("f.AppImage"),
        ];
        let buckets = classify(&assets);
        for a in &assets {
            let hits = Platform::ALL
                .iter()
                .filter(|p| buckets.get(**p) == Some(a))
                .count();
            assert!(hits <= 1, "{} in {hits} buckets", a.name);
        }
    }

    #[test]
    fn parses_repository_host_payload() {
        let json = r#"{
            "tag_name": "v0.3.0",
            "draft": false,
            "assets": [
                {"name": "Samwise_x64.dmg", "browser_download_url": "https://dl/x64.dmg", "size": 88080384, "state": "uploaded"}
            ]
        }"#;
        let release: ReleaseDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag, "v0.3.0");
        assert_eq!(release.assets[0].download_url, "https://dl/x64.dmg");
        assert_eq!(release.assets[0].size_label(), "84.0 MB");
    }

    #[test]
    fn formats_counts_with_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
