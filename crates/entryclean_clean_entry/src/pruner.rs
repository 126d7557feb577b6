use log::{trace, warn};

use crate::{
    config::Settings,
    constants::{LOG_PREFIX, MAP_EXTENSION, SCRIPT_EXTENSION},
    manifest::Manifest,
};

/// Removes `<entry>.js` and `<entry>.map` from the manifest, if present.
///
/// Remaining keys keep their order. The notice is emitted whenever verbose
/// is set, even if nothing was removed.
pub fn prune_manifest(settings: &Settings, manifest: Option<&mut Manifest>, entry: &str) {
    if !settings.dry_run()
        && let Some(manifest) = manifest
    {
        for ext in [SCRIPT_EXTENSION, MAP_EXTENSION] {
            let key = format!("{}.{}", entry, ext);
            if manifest.shift_remove(&key).is_some() {
                trace!("Removed manifest key: {}", key);
            }
        }
    }

    if settings.verbose() {
        warn!(
            "{}: removed {}.{} & {}.{} from manifest",
            LOG_PREFIX, entry, SCRIPT_EXTENSION, entry, MAP_EXTENSION
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::{Value, json};
    use log::Level;

    fn manifest(value: Value) -> Manifest {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_prune_removes_script_and_map() {
        let settings = Config::default().into_settings().unwrap();
        let mut m = manifest(json!({
            "a.js": "a.abc.js",
            "a.map": "a.abc.map",
            "b.js": "b.def.js",
        }));

        prune_manifest(&settings, Some(&mut m), "a");
        assert_eq!(Value::Object(m), json!({"b.js": "b.def.js"}));
    }

    #[test]
    fn test_prune_keeps_order_of_remaining_keys() {
        let settings = Config::default().into_settings().unwrap();
        let mut m = manifest(json!({
            "c.js": "c.js",
            "a.js": "a.js",
            "b.js": "b.js",
            "d.js": "d.js",
        }));

        prune_manifest(&settings, Some(&mut m), "c");
        let keys: Vec<&str> = m.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a.js", "b.js", "d.js"]);
    }

    #[test]
    fn test_prune_missing_keys_and_absent_manifest() {
        let settings = Config::default().into_settings().unwrap();
        let mut m = manifest(json!({"b.js": "b.js"}));

        prune_manifest(&settings, Some(&mut m), "a");
        assert_eq!(m.len(), 1);

        prune_manifest(&settings, None, "a");
    }

    #[test]
    fn test_prune_dry_run_untouched() {
        let settings = Config { dry_run: true, ..Default::default() }.into_settings().unwrap();
        let mut m = manifest(json!({"a.js": "a.js", "a.map": "a.map"}));

        prune_manifest(&settings, Some(&mut m), "a");
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_notice_emitted_without_manifest() {
        testing_logger::setup();
        let settings = Config { verbose: true, ..Default::default() }.into_settings().unwrap();

        prune_manifest(&settings, None, "vendor");

        testing_logger::validate(|captured| {
            let notices: Vec<&str> = captured
                .iter()
                .filter(|log| log.level == Level::Warn)
                .map(|log| log.body.as_str())
                .collect();
            assert_eq!(
                notices,
                vec!["clean-entry-plugin: removed vendor.js & vendor.map from manifest"]
            );
        });
    }
}
