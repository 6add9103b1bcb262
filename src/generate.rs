use std::{fs, path::Path};

use crate::{
    error::{VgirError, VgirResult},
    format::ir_version_string,
    manifest::{Manifest, SceneEntry, scene_hash},
    scenes::{SceneDef, builtin_scenes},
};

/// Generate every built-in scene under `out_dir` and write the aggregate
/// `manifest.json` beside them. Per-scene writes happen first; the manifest
/// is emitted only after all of them succeed. I/O failures abort
/// immediately, there is no retry or partial-batch recovery.
#[tracing::instrument(skip_all, fields(out_dir = %out_dir.display()))]
pub fn generate_into(out_dir: &Path) -> VgirResult<Manifest> {
    let defs = builtin_scenes();
    let mut entries = Vec::with_capacity(defs.len());

    for def in &defs {
        entries.push(write_scene(out_dir, def)?);
    }

    let manifest = Manifest::new(entries);
    manifest.write_pretty(&out_dir.join("manifest.json"))?;
    tracing::info!(scenes = manifest.scenes.len(), "manifest written");
    Ok(manifest)
}

fn write_scene(out_dir: &Path, def: &SceneDef) -> VgirResult<SceneEntry> {
    let scene = (def.build)();
    let bytes = scene.build();
    let hash = scene_hash(&bytes);

    let full_path = out_dir.join(def.ir_path);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            VgirError::io(format!("create scene directory '{}': {e}", parent.display()))
        })?;
    }
    fs::write(&full_path, &bytes)
        .map_err(|e| VgirError::io(format!("write scene '{}': {e}", full_path.display())))?;

    tracing::info!(
        scene = def.scene_id,
        bytes = bytes.len(),
        hash = %hash,
        "scene generated"
    );

    Ok(SceneEntry {
        scene_id: def.scene_id.to_string(),
        ir_path: def.ir_path.to_string(),
        scene_hash: hash,
        ir_version: ir_version_string(),
        default_width: scene.width(),
        default_height: scene.height(),
        required_features: scene.required_features(),
        description: def.description.to_string(),
    })
}
