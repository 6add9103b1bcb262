use std::{collections::BTreeMap, fs::File, io::BufWriter, path::Path};

use crate::error::{VgirError, VgirResult};

/// Version of the manifest document schema, not of the IR container format.
pub const MANIFEST_VERSION: &str = "1.0.0";

/// Aggregate document describing all scene artifacts of one generation
/// batch. This is the sole interface consumed by the harness's scene
/// discovery and the downstream schema validators.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Manifest {
    pub version: String,
    pub scenes: Vec<SceneEntry>,
}

/// One generated container's identity and discovery metadata.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneEntry {
    pub scene_id: String,
    pub ir_path: String,
    pub scene_hash: String,
    pub ir_version: String,
    pub default_width: u32,
    pub default_height: u32,
    pub required_features: BTreeMap<String, bool>,
    pub description: String,
}

impl Manifest {
    pub fn new(scenes: Vec<SceneEntry>) -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            scenes,
        }
    }

    pub fn write_pretty(&self, path: &Path) -> VgirResult<()> {
        let f = File::create(path)
            .map_err(|e| VgirError::io(format!("create manifest '{}': {e}", path.display())))?;
        serde_json::to_writer_pretty(BufWriter::new(f), self)
            .map_err(|e| VgirError::serde(format!("serialize manifest JSON: {e}")))?;
        Ok(())
    }
}

/// Content hash recorded per scene: lowercase 8-digit hex CRC-32 over the
/// full container bytes. A CRC stands in for a cryptographic hash here;
/// collision tolerance is acceptable for fixture identity but not for
/// anything adversarial.
pub fn scene_hash(container: &[u8]) -> String {
    format!("{:08x}", crc32fast::hash(container))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_zero_padded_lowercase_hex() {
        assert_eq!(scene_hash(&[]), "00000000");
        let h = scene_hash(b"VGIR");
        assert_eq!(h.len(), 8);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn document_round_trips_through_serde() {
        let manifest = Manifest::new(vec![SceneEntry {
            scene_id: "fills/solid_basic".to_string(),
            ir_path: "fills/solid_basic.irbin".to_string(),
            scene_hash: "deadbeef".to_string(),
            ir_version: "1.0.0".to_string(),
            default_width: 800,
            default_height: 600,
            required_features: BTreeMap::from([("needs_nonzero".to_string(), true)]),
            description: "Basic solid fills".to_string(),
        }]);
        let json = serde_json::to_string(&manifest).unwrap();
        assert!(json.contains("\"version\":\"1.0.0\""));
        assert!(json.contains("\"required_features\":{\"needs_nonzero\":true}"));
        let back: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, manifest);
    }
}
